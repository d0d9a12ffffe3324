use crate::info::FieldInfo;

// -----------------------------------------------------------------------------
// StructInfo

/// The static metadata table of one mapped type: its registry name and the
/// descriptors of its declared fields, in declaration order.
///
/// Generated by [`#[derive(Mapped)]`](crate::Mapped) as a `static`, so a
/// `&'static StructInfo` is available from both the [`Typed`] associated
/// function and the object-safe [`MappedStruct::mapped_info`].
///
/// [`Typed`]: crate::Typed
/// [`MappedStruct::mapped_info`]: crate::MappedStruct::mapped_info
#[derive(Debug)]
pub struct StructInfo {
    type_name: &'static str,
    fields: &'static [FieldInfo],
}

impl StructInfo {
    /// Creates the table. `fields` must be in declaration order; serialization
    /// output follows it.
    #[inline]
    pub const fn new(type_name: &'static str, fields: &'static [FieldInfo]) -> Self {
        Self { type_name, fields }
    }

    /// The name this type is registered under, used to resolve nested-type
    /// hints and the name-keyed deserialization endpoints.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// All field descriptors, in declaration order.
    #[inline]
    pub const fn fields(&self) -> &'static [FieldInfo] {
        self.fields
    }

    /// Number of declared fields.
    #[inline]
    pub const fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Resolves the descriptor of the field named `name`.
    ///
    /// Returns `None` for unknown names; the deserializer treats that as
    /// "drop the key", never as an error.
    pub fn field(&self, name: &str) -> Option<&'static FieldInfo> {
        self.fields.iter().find(|field| field.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::FieldModifier;

    static FIELDS: [FieldInfo; 2] = [
        FieldInfo::new("first", &[FieldModifier::Public]),
        FieldInfo::new("second", &[FieldModifier::Private]).with_class("Other"),
    ];
    static INFO: StructInfo = StructInfo::new("Pair", &FIELDS);

    #[test]
    fn field_lookup() {
        assert_eq!(INFO.type_name(), "Pair");
        assert_eq!(INFO.field_len(), 2);
        assert!(INFO.field("first").is_some());
        assert!(INFO.field("missing").is_none());
        assert_eq!(INFO.field("second").unwrap().class_hint(), Some("Other"));
    }

    #[test]
    fn declaration_order() {
        let names: Vec<_> = INFO.fields().iter().map(FieldInfo::name).collect();
        assert_eq!(names, ["first", "second"]);
    }
}
