use thiserror::Error;

// -----------------------------------------------------------------------------
// PsonError

/// Errors surfaced by the mapper's fatal paths.
///
/// Only structural, top-level problems reach the caller: an unresolvable
/// target type name, input that is not shaped the way the endpoint requires,
/// or a descriptor/accessor mismatch inside a mapped type. Per-field failures
/// while rebuilding nested values are swallowed locally (the field is skipped
/// and logged at `debug` level) so one malformed attribute does not abort an
/// otherwise-valid document.
#[derive(Debug, Error)]
pub enum PsonError {
    /// The target type name has no entry in the [`TypeRegistry`].
    ///
    /// [`TypeRegistry`]: crate::registry::TypeRegistry
    #[error("class `{name}` not found in the type registry")]
    ClassNotFound { name: String },

    /// The decoded input does not have the shape the endpoint requires,
    /// or the input text is not valid JSON at all.
    #[error("invalid json input: {reason}")]
    InvalidInput { reason: String },

    /// Field access or value conversion failed inside a mapped type.
    ///
    /// The original message is preserved verbatim in `reason`.
    #[error("reflection failure: {reason}")]
    Reflection { reason: String },

    /// The JSON encode collaborator failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl PsonError {
    pub(crate) fn class_not_found(name: impl Into<String>) -> Self {
        Self::ClassNotFound { name: name.into() }
    }

    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput { reason: reason.into() }
    }

    pub(crate) fn reflection(reason: impl Into<String>) -> Self {
        Self::Reflection { reason: reason.into() }
    }
}
