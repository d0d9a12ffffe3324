use crate::info::StructInfo;
use crate::reflection::Mapped;

// -----------------------------------------------------------------------------
// MappedStruct

/// Field enumeration and get/set-by-name for a derived struct type.
///
/// The accessors reach every declared field regardless of its Rust
/// visibility; visibility is a categorization consumed by the exclusion
/// policy, not an access boundary.
///
/// # Examples
///
/// ```
/// use pson::{Mapped, MappedStruct};
///
/// #[derive(Mapped, Default)]
/// struct Compteur {
///     total: i64,
/// }
///
/// let counter = Compteur { total: 3 };
///
/// assert!(counter.field("total").is_some());
/// assert!(counter.field("missing").is_none());
/// assert_eq!(counter.mapped_info().type_name(), "Compteur");
/// ```
pub trait MappedStruct: Mapped {
    /// The type's static metadata table.
    fn mapped_info(&self) -> &'static StructInfo;

    /// Returns the value of the field named `name`, or `None` if the type
    /// declares no such field.
    fn field(&self, name: &str) -> Option<&dyn Mapped>;

    /// Mutable twin of [`field`](MappedStruct::field).
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Mapped>;
}

impl core::fmt::Debug for dyn MappedStruct + '_ {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct(self.mapped_info().type_name())
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Typed

/// The static side of a derived type: its metadata without an instance, and
/// the zero-valued constructor the deserializer starts from.
pub trait Typed: MappedStruct + Sized {
    /// The type's static metadata table.
    fn struct_info() -> &'static StructInfo;

    /// Allocates a zero-valued instance: every field is its type's
    /// `Default::default()`.
    ///
    /// The struct's own `Default` implementation is deliberately not called,
    /// so application construction logic never leaks into mapped state — the
    /// JSON alone determines the final field values, and fields absent from
    /// the JSON stay zero-valued.
    fn blank() -> Self;
}
