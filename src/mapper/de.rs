use log::debug;
use serde_json::{Map, Value};

use crate::error::PsonError;
use crate::mapper::Pson;
use crate::reflection::{MappedMut, MappedStruct, Typed};

// -----------------------------------------------------------------------------
// Deserialization walk

impl Pson {
    /// Converts JSON text to an instance of the type registered as
    /// `class_name`.
    ///
    /// The class name is resolved before the input is decoded, so an unknown
    /// name surfaces as [`PsonError::ClassNotFound`] even for undecodable
    /// text. The decoded top-level value must be an object.
    ///
    /// # Examples
    ///
    /// ```
    /// use pson::{Mapped, Pson};
    ///
    /// #[derive(Mapped, Default)]
    /// struct Modele {
    ///     nom: String,
    /// }
    ///
    /// let instance = Pson::new()
    ///     .from_json(r#"{"nom":"A4"}"#, "Modele")
    ///     .unwrap();
    /// let modele = instance.into_any().downcast::<Modele>().unwrap();
    /// assert_eq!(modele.nom, "A4");
    /// ```
    pub fn from_json(
        &self,
        json: &str,
        class_name: &str,
    ) -> Result<Box<dyn MappedStruct>, PsonError> {
        self.resolve(class_name)?;
        let decoded: Value =
            serde_json::from_str(json).map_err(|err| PsonError::invalid_input(err.to_string()))?;
        let Value::Object(tree) = decoded else {
            return Err(PsonError::invalid_input(
                "top-level json value is not an object",
            ));
        };
        self.from_tree(&tree, class_name)
    }

    /// Typed convenience over [`from_json`](Pson::from_json): the target type
    /// supplies its own registry name and the result is downcast for the
    /// caller.
    pub fn from_json_as<T: Typed>(&self, json: &str) -> Result<T, PsonError> {
        let instance = self.from_json(json, T::struct_info().type_name())?;
        downcast::<T>(instance)
    }

    /// Converts a JSON array of objects to instances of the type registered
    /// as `class_name`.
    ///
    /// Fails with [`PsonError::InvalidInput`] unless the top-level value is
    /// an array and every element is an object.
    pub fn from_json_array(
        &self,
        json: &str,
        class_name: &str,
    ) -> Result<Vec<Box<dyn MappedStruct>>, PsonError> {
        self.resolve(class_name)?;
        let decoded: Value =
            serde_json::from_str(json).map_err(|err| PsonError::invalid_input(err.to_string()))?;
        let Value::Array(items) = decoded else {
            return Err(PsonError::invalid_input(
                "json provided is not an array of objects",
            ));
        };

        let mut result = Vec::with_capacity(items.len());
        for item in &items {
            let Value::Object(tree) = item else {
                return Err(PsonError::invalid_input(
                    "json provided is not an array of objects",
                ));
            };
            result.push(self.from_tree(tree, class_name)?);
        }
        Ok(result)
    }

    /// Typed twin of [`from_json_array`](Pson::from_json_array).
    pub fn from_json_array_as<T: Typed>(&self, json: &str) -> Result<Vec<T>, PsonError> {
        let instances = self.from_json_array(json, T::struct_info().type_name())?;
        instances.into_iter().map(downcast::<T>).collect()
    }

    /// Converts an already-decoded generic value to an instance of the type
    /// registered as `class_name`. The value must be an object.
    pub fn from_value(
        &self,
        value: &Value,
        class_name: &str,
    ) -> Result<Box<dyn MappedStruct>, PsonError> {
        self.resolve(class_name)?;
        let Value::Object(tree) = value else {
            return Err(PsonError::invalid_input(
                "json value is not an object",
            ));
        };
        self.from_tree(tree, class_name)
    }

    // The recursive reconstruction walk. Per-field problems are downgraded to
    // logged skips; only an unresolvable class name escapes as an error.
    fn from_tree(
        &self,
        tree: &Map<String, Value>,
        class_name: &str,
    ) -> Result<Box<dyn MappedStruct>, PsonError> {
        let meta = self.resolve(class_name)?;
        let mut instance = meta.blank_boxed();

        for (attr, incoming) in tree {
            // Unknown keys are dropped, never fabricated as fields.
            let Some(field) = meta.info().field(attr) else {
                continue;
            };

            if self.exclude_not_exposed() && !field.exposed() {
                continue;
            }

            // A nested-type hint is honored only for object-shaped values.
            if let (Value::Object(nested), Some(class)) = (incoming, field.class_hint()) {
                match self.from_tree(nested, class) {
                    Ok(built) => {
                        let Some(slot) = instance.field_mut(attr) else {
                            continue;
                        };
                        if slot.assign_boxed(built.into_any()).is_err() {
                            debug!("field `{attr}` does not accept an instance of `{class}`, skipped");
                        }
                    }
                    Err(err) => {
                        debug!("skipping field `{attr}`: {err}");
                    }
                }
                continue;
            }

            // Scalar, array, or un-hinted object: assign the raw value.
            let Some(slot) = instance.field_mut(attr) else {
                continue;
            };
            match slot.mapped_mut() {
                MappedMut::Scalar(scalar) => {
                    if let Err(err) = scalar.assign(incoming) {
                        debug!("value for field `{attr}` rejected, skipped: {err}");
                    }
                }
                MappedMut::Struct(_) => {
                    debug!("field `{attr}` is struct-typed but carries no class hint, skipped");
                }
            }
        }

        Ok(instance)
    }
}

fn downcast<T: Typed>(instance: Box<dyn MappedStruct>) -> Result<T, PsonError> {
    let type_name = instance.type_name();
    instance
        .into_any()
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| {
            PsonError::reflection(format!(
                "registry entry `{type_name}` does not build the requested type",
            ))
        })
}

#[cfg(test)]
mod tests {
    use crate::{Mapped, Pson, PsonError, Value};

    #[derive(Mapped, Default, Debug, PartialEq)]
    struct DeRoue {
        diametre: i64,
    }

    #[derive(Mapped, Default, Debug)]
    struct DeChassis {
        reference: String,
        #[pson(class = "DeRoue")]
        roue: DeRoue,
        #[pson(class = "Inconnu")]
        options: DeRoue,
        brut: Value,
    }

    #[test]
    fn unknown_keys_are_dropped() {
        let chassis: DeChassis = Pson::new()
            .from_json_as(r#"{"reference":"C1","inconnu":42,"autre":{"x":1}}"#)
            .unwrap();
        assert_eq!(chassis.reference, "C1");
    }

    #[test]
    fn nested_hint_rebuilds_typed_instance() {
        let chassis: DeChassis = Pson::new()
            .from_json_as(r#"{"roue":{"diametre":17}}"#)
            .unwrap();
        assert_eq!(chassis.roue, DeRoue { diametre: 17 });
    }

    #[test]
    fn unresolvable_hint_skips_only_that_field() {
        let chassis: DeChassis = Pson::new()
            .from_json_as(r#"{"options":{"diametre":1},"reference":"C2"}"#)
            .unwrap();
        // `Inconnu` is not registered: the field keeps its blank value.
        assert_eq!(chassis.options, DeRoue::default());
        assert_eq!(chassis.reference, "C2");
    }

    #[test]
    fn unhinted_object_lands_as_raw_value() {
        let chassis: DeChassis = Pson::new()
            .from_json_as(r#"{"brut":{"couleur":"rouge"}}"#)
            .unwrap();
        assert_eq!(chassis.brut["couleur"], "rouge");
    }

    #[test]
    fn scalar_into_hinted_field_ignores_the_hint() {
        // A hint only applies to object-shaped values; a scalar aimed at a
        // struct field cannot be assigned and is skipped.
        let chassis: DeChassis = Pson::new()
            .from_json_as(r#"{"roue":5,"reference":"C3"}"#)
            .unwrap();
        assert_eq!(chassis.roue, DeRoue::default());
        assert_eq!(chassis.reference, "C3");
    }

    #[test]
    fn mismatched_scalar_skips_field() {
        let chassis: DeChassis = Pson::new()
            .from_json_as(r#"{"reference":[1,2],"brut":3}"#)
            .unwrap();
        assert_eq!(chassis.reference, "");
        assert_eq!(chassis.brut, Value::from(3));
    }

    #[test]
    fn absent_fields_stay_blank() {
        let chassis: DeChassis = Pson::new().from_json_as("{}").unwrap();
        assert_eq!(chassis.reference, "");
        assert_eq!(chassis.roue, DeRoue::default());
        assert_eq!(chassis.brut, Value::Null);
    }

    #[test]
    fn expose_policy_gates_population() {
        #[derive(Mapped, Default)]
        struct DeVisible {
            #[pson(expose)]
            montre: i32,
            cache: i32,
        }

        let pson = Pson::builder().exclude_fields_without_expose().build();
        let visible: DeVisible = pson.from_json_as(r#"{"montre":1,"cache":2}"#).unwrap();
        assert_eq!(visible.montre, 1);
        assert_eq!(visible.cache, 0);
    }

    #[test]
    fn modifier_exclusion_does_not_apply_here() {
        // Exclusion by modifier is serialization-only; deserialization
        // populates protected fields unless the expose policy says otherwise.
        #[derive(Mapped, Default)]
        struct DeProtege {
            #[pson(modifier = "protected")]
            interne: i32,
        }

        let protege: DeProtege = Pson::new().from_json_as(r#"{"interne":9}"#).unwrap();
        assert_eq!(protege.interne, 9);
    }

    #[test]
    fn top_level_must_be_object() {
        let err = Pson::new().from_json("[1,2]", "DeRoue").unwrap_err();
        assert!(matches!(err, PsonError::InvalidInput { .. }));

        let err = Pson::new().from_json("not json", "DeRoue").unwrap_err();
        assert!(matches!(err, PsonError::InvalidInput { .. }));
    }

    #[test]
    fn unknown_class_wins_over_bad_input() {
        let err = Pson::new().from_json("not json", "Jamais").unwrap_err();
        assert!(matches!(err, PsonError::ClassNotFound { .. }));
    }
}
