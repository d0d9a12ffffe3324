use crate::info::FieldModifier;
use crate::mapper::Pson;

// -----------------------------------------------------------------------------
// PsonBuilder

/// Builds a [`Pson`] instance with a non-default configuration.
///
/// # Examples
///
/// ```
/// use pson::Pson;
/// use pson::info::FieldModifier;
///
/// let pson = Pson::builder()
///     .serialize_nulls()
///     .exclude_fields_without_expose()
///     .exclude_fields_with_modifiers(&[FieldModifier::Private, FieldModifier::Static])
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct PsonBuilder {
    pson: Pson,
}

impl Default for PsonBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl PsonBuilder {
    /// Starts from the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self { pson: Pson::new() }
    }

    /// Serialize null-valued fields instead of dropping them.
    pub fn serialize_nulls(mut self) -> Self {
        self.pson.serialize_nulls = true;
        self
    }

    /// During deserialization, populate only fields carrying
    /// `#[pson(expose)]`.
    pub fn exclude_fields_without_expose(mut self) -> Self {
        self.pson.exclude_not_exposed = true;
        self
    }

    /// Exclude fields with any of the given modifiers from serialization,
    /// replacing the default set (`[Protected]`).
    pub fn exclude_fields_with_modifiers(mut self, modifiers: &[FieldModifier]) -> Self {
        self.pson.exclusion_modifiers = modifiers.to_vec();
        self
    }

    /// Finishes the configuration.
    #[inline]
    pub fn build(self) -> Pson {
        self.pson
    }
}
