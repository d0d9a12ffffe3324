use crate::reflection::{MappedStruct, Scalar};

// -----------------------------------------------------------------------------
// MappedRef

/// An immutable view of a [`Mapped`](crate::Mapped) value, tagged by kind.
pub enum MappedRef<'a> {
    /// A JSON-ready leaf: the serializer passes it through unchanged and the
    /// deserializer assigns into it directly.
    Scalar(&'a dyn Scalar),
    /// A derived struct: walked field by field.
    Struct(&'a dyn MappedStruct),
}

// -----------------------------------------------------------------------------
// MappedMut

/// The mutable twin of [`MappedRef`].
pub enum MappedMut<'a> {
    Scalar(&'a mut dyn Scalar),
    Struct(&'a mut dyn MappedStruct),
}
