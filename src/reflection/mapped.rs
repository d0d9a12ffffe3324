use core::any::Any;

use crate::reflection::{MappedMut, MappedRef};

// -----------------------------------------------------------------------------
// Mapped

/// The foundational trait of the mapper: a value whose JSON-relevant shape can
/// be inspected and modified at runtime.
///
/// The two walkers never see concrete types; they see `&dyn Mapped` and
/// dispatch on [`mapped_ref`] / [`mapped_mut`]:
///
/// - [`MappedRef::Scalar`] — a JSON-ready leaf. Primitives, strings, options,
///   sequences, string-keyed maps and raw [`Value`](crate::Value) trees are
///   covered by library implementations.
/// - [`MappedRef::Struct`] — a derived struct, walked field by field under the
///   mapper's policies.
///
/// Use [`#[derive(Mapped)]`](derive@crate::Mapped) for struct types; manual
/// implementations are possible but rarely worth it.
///
/// # Examples
///
/// ```
/// use pson::{Mapped, MappedRef};
///
/// #[derive(Mapped, Default)]
/// struct Flag {
///     on: bool,
/// }
///
/// assert!(matches!(1_i32.mapped_ref(), MappedRef::Scalar(_)));
/// assert!(matches!(Flag::default().mapped_ref(), MappedRef::Struct(_)));
/// ```
///
/// [`mapped_ref`]: Mapped::mapped_ref
/// [`mapped_mut`]: Mapped::mapped_mut
pub trait Mapped: Any {
    /// A display name for the value's type.
    ///
    /// For derived structs this is the registry name; for library leaves it
    /// is the full Rust type name.
    fn type_name(&self) -> &'static str;

    /// Casts to `&dyn Any`.
    fn as_any(&self) -> &dyn Any;

    /// Casts to `&mut dyn Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Consumes the box and casts to `Box<dyn Any>`, keeping the concrete
    /// type for a later downcast.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Kind dispatch for reading.
    fn mapped_ref(&self) -> MappedRef<'_>;

    /// Kind dispatch for writing.
    fn mapped_mut(&mut self) -> MappedMut<'_>;

    /// Replaces `self` with `value` if the concrete types match.
    ///
    /// On a type mismatch the box is handed back untouched, so the caller can
    /// decide whether that is fatal. The deserializer treats it as a
    /// per-field skip.
    fn assign_boxed(&mut self, value: Box<dyn Any>) -> Result<(), Box<dyn Any>>;
}
