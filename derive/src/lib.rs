//! Derive macro for the `pson` object/JSON mapper.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static PSON_ATTRIBUTE_NAME: &str = "pson";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;

// -----------------------------------------------------------------------------
// Macros

/// Makes a struct mappable by `pson`.
///
/// `#[derive(Mapped)]` implements `Mapped`, `MappedStruct` and `Typed`,
/// generates the static field-descriptor table, and registers the type in the
/// global registry under its name.
///
/// Only non-generic structs with named fields are supported. Every field type
/// must implement `Mapped` (all JSON-ready leaf types do, and so does any
/// other derived struct) and `Default` (the deserializer starts from a
/// zero-valued instance).
///
/// # Attributes
///
/// Type level:
///
/// - `#[pson(name = "Other")]` — overrides the registry name (default: the
///   struct identifier).
///
/// Field level:
///
/// - `#[pson(class = "TypeName")]` — nested-type hint: a JSON object arriving
///   at this field is rebuilt as the type registered under `TypeName` instead
///   of staying a raw map.
/// - `#[pson(expose)]` — opts the field in when the mapper is configured with
///   `exclude_fields_without_expose`.
/// - `#[pson(modifier = "...")]` — declares the field's modifier set for the
///   serialization exclusion policy; one of `public`, `protected`, `private`,
///   `static`, repeatable. When absent, the modifier is derived from the Rust
///   visibility (`pub` → public, inherited → private).
///
/// # Examples
///
/// ```rust, ignore
/// #[derive(Mapped, Default)]
/// struct User {
///     nom: String,
///     #[pson(modifier = "protected")]
///     jeton: String,
///     #[pson(class = "Voiture")]
///     voiture: Voiture,
/// }
/// ```
#[proc_macro_derive(Mapped, attributes(pson))]
pub fn derive_mapped(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_data::MappedStructData::parse(&input) {
        Ok(data) => impls::impl_mapped(&data).into(),
        Err(err) => err.to_compile_error().into(),
    }
}
