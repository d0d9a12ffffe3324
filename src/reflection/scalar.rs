use serde_json::Value;

use crate::error::PsonError;
use crate::reflection::Mapped;

// -----------------------------------------------------------------------------
// Scalar

/// A JSON-ready leaf value.
///
/// Everything that is not a mapped struct is a scalar to the walkers:
/// primitives, strings, options, sequences, string-keyed maps, and raw
/// [`Value`] trees. Conversion in both directions goes through serde.
///
/// A field declared as [`Value`] doubles as the untyped fallback: a nested
/// JSON object arriving at a field without a nested-type hint is stored in it
/// as-is instead of being rebuilt into a typed instance.
pub trait Scalar: Mapped {
    /// Renders the leaf as a generic JSON value.
    fn to_value(&self) -> Result<Value, PsonError>;

    /// Overwrites the leaf from a generic JSON value.
    ///
    /// Fails with [`PsonError::Reflection`] when the value does not convert
    /// into the leaf's type; the deserializer downgrades that to a logged
    /// per-field skip.
    fn assign(&mut self, value: &Value) -> Result<(), PsonError>;
}
