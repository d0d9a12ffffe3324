//! The name-keyed type registry backing deserialization.
//!
//! Deserialization starts from a type *name* — the endpoint argument or a
//! field's nested-type hint — and the registry answers "how do I build a
//! blank instance of that name". [`#[derive(Mapped)]`](crate::Mapped) submits
//! a [`RegistryEntry`] through [`inventory`], and the global registry drains
//! the submissions on first access.

mod type_meta;
mod type_registry;

pub use type_meta::{RegistryEntry, TypeMeta};
pub use type_registry::{TypeRegistry, register};
