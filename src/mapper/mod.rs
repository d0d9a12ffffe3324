//! The mapper facade: configuration, builder, and the JSON text endpoints.
//!
//! The two walkers live in `ser` and `de`; everything here is policy and
//! glue around them.

mod builder;
mod de;
mod ser;

pub use builder::PsonBuilder;

use std::sync::PoisonError;

use serde_json::Value;

use crate::error::PsonError;
use crate::info::{FieldInfo, FieldModifier};
use crate::reflection::{Mapped, MappedRef};
use crate::registry::{TypeMeta, TypeRegistry};

// -----------------------------------------------------------------------------
// Pson

/// The mapper. Holds the policy bundle; carries no per-call state.
///
/// Typically used by constructing an instance — [`Pson::new`] for defaults,
/// [`Pson::builder`] for anything else — and invoking [`to_json`] or
/// [`from_json`] on it. The configuration is immutable after construction;
/// instances with different configurations never interfere.
///
/// # Examples
///
/// ```
/// use pson::{Mapped, Pson};
///
/// #[derive(Mapped, Default, Debug, PartialEq)]
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// let pson = Pson::new();
/// let point: Point = pson.from_json_as(r#"{"x":1,"y":2}"#).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
///
/// assert_eq!(pson.to_json(&point).unwrap(), r#"{"x":1,"y":2}"#);
/// ```
///
/// [`to_json`]: Pson::to_json
/// [`from_json`]: Pson::from_json
#[derive(Debug, Clone)]
pub struct Pson {
    serialize_nulls: bool,
    exclude_not_exposed: bool,
    exclusion_modifiers: Vec<FieldModifier>,
}

impl Default for Pson {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Pson {
    /// A mapper with the default configuration: nulls dropped, no expose
    /// requirement, `protected` fields excluded from serialization.
    pub fn new() -> Self {
        Self {
            serialize_nulls: false,
            exclude_not_exposed: false,
            exclusion_modifiers: vec![FieldModifier::Protected],
        }
    }

    /// Starts a non-default configuration.
    #[inline]
    pub fn builder() -> PsonBuilder {
        PsonBuilder::new()
    }

    /// Whether null-valued fields are emitted.
    #[inline]
    pub fn serialize_nulls(&self) -> bool {
        self.serialize_nulls
    }

    /// Whether deserialization populates only `#[pson(expose)]` fields.
    #[inline]
    pub fn exclude_not_exposed(&self) -> bool {
        self.exclude_not_exposed
    }

    /// The modifier set excluded from serialization.
    #[inline]
    pub fn exclusion_modifiers(&self) -> &[FieldModifier] {
        &self.exclusion_modifiers
    }

    /// Extracts the JSON text of one member of a JSON object given as text.
    ///
    /// Returns `Ok(None)` when `source` does not decode, does not decode to
    /// an object, or has no member `key` — never an error, matching the
    /// forgiving contract of the typed twin [`get_json_from`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use pson::Pson;
    /// let pson = Pson::new();
    /// let sub = pson.get_json(r#"{"x":{"y":5}}"#, "x").unwrap();
    /// assert_eq!(sub.as_deref(), Some(r#"{"y":5}"#));
    ///
    /// assert!(pson.get_json(r#"{"x":5}"#, "z").unwrap().is_none());
    /// assert!(pson.get_json("[1,2]", "x").unwrap().is_none());
    /// ```
    ///
    /// [`get_json_from`]: Pson::get_json_from
    pub fn get_json(&self, source: &str, key: &str) -> Result<Option<String>, PsonError> {
        let Ok(decoded) = serde_json::from_str::<Value>(source) else {
            return Ok(None);
        };
        let Value::Object(tree) = decoded else {
            return Ok(None);
        };
        match tree.get(key) {
            Some(sub) => {
                let rendered = self.to_value(sub)?;
                Ok(Some(serde_json::to_string(&rendered)?))
            }
            None => Ok(None),
        }
    }

    /// Extracts the JSON text of one field or member of a live value.
    ///
    /// Struct sources resolve `key` through the generated accessor — any
    /// declared field is reachable regardless of visibility, and the
    /// exclusion policy does not apply to the lookup itself. Scalar sources
    /// must render as objects; anything else yields `Ok(None)`.
    pub fn get_json_from(&self, source: &dyn Mapped, key: &str) -> Result<Option<String>, PsonError> {
        match source.mapped_ref() {
            MappedRef::Struct(mapped) => match mapped.field(key) {
                Some(field) => {
                    let rendered = self.to_value(field)?;
                    Ok(Some(serde_json::to_string(&rendered)?))
                }
                None => Ok(None),
            },
            MappedRef::Scalar(scalar) => {
                let Value::Object(tree) = scalar.to_value()? else {
                    return Ok(None);
                };
                match tree.get(key) {
                    Some(sub) => {
                        let rendered = self.to_value(sub)?;
                        Ok(Some(serde_json::to_string(&rendered)?))
                    }
                    None => Ok(None),
                }
            }
        }
    }

    pub(crate) fn field_excluded(&self, field: &FieldInfo) -> bool {
        field
            .modifiers()
            .iter()
            .any(|modifier| self.exclusion_modifiers.contains(modifier))
    }

    pub(crate) fn resolve(&self, class_name: &str) -> Result<TypeMeta, PsonError> {
        let registry = TypeRegistry::global()
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        registry
            .get(class_name)
            .copied()
            .ok_or_else(|| PsonError::class_not_found(class_name))
    }
}
