use serde_json::{Map, Value};

use crate::error::PsonError;
use crate::mapper::Pson;
use crate::reflection::{Mapped, MappedRef, MappedStruct};

// -----------------------------------------------------------------------------
// Serialization walk

impl Pson {
    /// Converts a value to JSON text.
    ///
    /// # Examples
    ///
    /// ```
    /// use pson::{Mapped, Pson};
    ///
    /// #[derive(Mapped, Default)]
    /// struct Prix {
    ///     montant: i64,
    ///     devise: String,
    /// }
    ///
    /// let prix = Prix { montant: 20000, devise: "EUR".into() };
    /// let json = Pson::new().to_json(&prix).unwrap();
    /// assert_eq!(json, r#"{"montant":20000,"devise":"EUR"}"#);
    /// ```
    pub fn to_json(&self, value: &dyn Mapped) -> Result<String, PsonError> {
        let tree = self.to_value(value)?;
        Ok(serde_json::to_string(&tree)?)
    }

    /// Converts a value to a generic JSON tree, applying the exclusion and
    /// null policies.
    ///
    /// Scalar leaves pass through unchanged apart from the null rule inside
    /// untyped objects; struct values are walked field by field in
    /// declaration order. Recursion depth equals nesting depth — no limit is
    /// enforced.
    pub fn to_value(&self, value: &dyn Mapped) -> Result<Value, PsonError> {
        match value.mapped_ref() {
            MappedRef::Scalar(scalar) => {
                let raw = scalar.to_value()?;
                Ok(self.scrub_nulls(raw))
            }
            MappedRef::Struct(mapped) => self.struct_to_value(mapped),
        }
    }

    fn struct_to_value(&self, value: &dyn MappedStruct) -> Result<Value, PsonError> {
        let info = value.mapped_info();
        let mut tree = Map::with_capacity(info.field_len());

        for field in info.fields() {
            // Modifier exclusion wins over everything, even non-null values.
            if self.field_excluded(field) {
                continue;
            }

            let name = field.name();
            let Some(slot) = value.field(name) else {
                return Err(PsonError::reflection(format!(
                    "type `{}` declares field `{name}` but exposes no accessor for it",
                    info.type_name(),
                )));
            };

            let rendered = self.to_value(slot)?;
            if rendered.is_null() && !self.serialize_nulls() {
                continue;
            }
            tree.insert(name.to_owned(), rendered);
        }

        Ok(Value::Object(tree))
    }

    // Untyped objects get the same null policy as typed structs. Only
    // object-valued members are descended into; arrays pass through as-is.
    fn scrub_nulls(&self, value: Value) -> Value {
        if self.serialize_nulls() {
            return value;
        }
        match value {
            Value::Object(tree) => Value::Object(
                tree.into_iter()
                    .filter(|(_, member)| !member.is_null())
                    .map(|(key, member)| (key, self.scrub_nulls(member)))
                    .collect(),
            ),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::info::FieldModifier;
    use crate::{Mapped, Pson, Value};

    #[derive(Mapped, Default)]
    struct SerCompte {
        pub titulaire: String,
        solde: Option<i64>,
        #[pson(modifier = "protected")]
        code_interne: String,
        #[pson(modifier = "static")]
        version: u32,
    }

    fn fixture() -> SerCompte {
        SerCompte {
            titulaire: "mike".into(),
            solde: None,
            code_interne: "secret".into(),
            version: 2,
        }
    }

    #[test]
    fn protected_fields_never_serialize() {
        let json = Pson::new().to_json(&fixture()).unwrap();
        assert_eq!(json, r#"{"titulaire":"mike","version":2}"#);
    }

    #[test]
    fn exclusion_set_is_configurable() {
        let pson = Pson::builder()
            .exclude_fields_with_modifiers(&[FieldModifier::Static, FieldModifier::Public])
            .build();
        // With protected no longer excluded, the private field serializes too.
        let json = pson.to_json(&fixture()).unwrap();
        assert_eq!(json, r#"{"code_interne":"secret"}"#);
    }

    #[test]
    fn null_fields_dropped_by_default() {
        let tree = Pson::new().to_value(&fixture()).unwrap();
        assert!(tree.get("solde").is_none());
    }

    #[test]
    fn null_fields_kept_when_configured() {
        let pson = Pson::builder().serialize_nulls().build();
        let tree = pson.to_value(&fixture()).unwrap();
        assert_eq!(tree.get("solde"), Some(&Value::Null));
    }

    #[test]
    fn untyped_object_members_follow_null_policy() {
        let raw: Value = json!({"a": null, "b": {"c": null, "d": 1}, "e": [null, 2]});

        let scrubbed = Pson::new().to_value(&raw).unwrap();
        assert_eq!(scrubbed, json!({"b": {"d": 1}, "e": [null, 2]}));

        let kept = Pson::builder().serialize_nulls().build().to_value(&raw).unwrap();
        assert_eq!(kept, raw);
    }

    #[test]
    fn output_preserves_declaration_order() {
        #[derive(Mapped, Default)]
        struct SerOrdre {
            zebre: i32,
            alpha: i32,
            milieu: i32,
        }

        let json = Pson::new()
            .to_json(&SerOrdre { zebre: 1, alpha: 2, milieu: 3 })
            .unwrap();
        assert_eq!(json, r#"{"zebre":1,"alpha":2,"milieu":3}"#);
    }

    #[test]
    fn nested_struct_fields_recurse() {
        #[derive(Mapped, Default)]
        struct SerMoteur {
            cylindres: u8,
            #[pson(modifier = "protected")]
            numero_serie: String,
        }

        #[derive(Mapped, Default)]
        struct SerVehicule {
            nom: String,
            #[pson(class = "SerMoteur")]
            moteur: SerMoteur,
        }

        let vehicule = SerVehicule {
            nom: "A4".into(),
            moteur: SerMoteur {
                cylindres: 4,
                numero_serie: "XYZ".into(),
            },
        };

        // The exclusion policy applies on every level of the walk.
        let json = Pson::new().to_json(&vehicule).unwrap();
        assert_eq!(json, r#"{"nom":"A4","moteur":{"cylindres":4}}"#);
    }
}
