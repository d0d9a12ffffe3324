use core::any::Any;
use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::PsonError;
use crate::reflection::{Mapped, MappedMut, MappedRef, Scalar};

// -----------------------------------------------------------------------------
// Generic container leaves

// Containers are leaves too: a sequence holds serde-convertible items, never
// nested mapped instances.
macro_rules! impl_scalar_container {
    ($(($param:ident, $ty:ty)),* $(,)?) => {$(
        impl<$param> Mapped for $ty
        where
            $param: Serialize + DeserializeOwned + 'static,
        {
            #[inline]
            fn type_name(&self) -> &'static str {
                ::core::any::type_name::<Self>()
            }

            #[inline]
            fn as_any(&self) -> &dyn Any {
                self
            }

            #[inline]
            fn as_any_mut(&mut self) -> &mut dyn Any {
                self
            }

            #[inline]
            fn into_any(self: Box<Self>) -> Box<dyn Any> {
                self
            }

            #[inline]
            fn mapped_ref(&self) -> MappedRef<'_> {
                MappedRef::Scalar(self)
            }

            #[inline]
            fn mapped_mut(&mut self) -> MappedMut<'_> {
                MappedMut::Scalar(self)
            }

            fn assign_boxed(&mut self, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
                *self = *value.downcast::<Self>()?;
                Ok(())
            }
        }

        impl<$param> Scalar for $ty
        where
            $param: Serialize + DeserializeOwned + 'static,
        {
            fn to_value(&self) -> Result<Value, PsonError> {
                Ok(serde_json::to_value(self)?)
            }

            fn assign(&mut self, value: &Value) -> Result<(), PsonError> {
                *self = serde_json::from_value(value.clone())
                    .map_err(|err| PsonError::reflection(err.to_string()))?;
                Ok(())
            }
        }
    )*};
}

impl_scalar_container! {
    (T, Option<T>),
    (T, Vec<T>),
    (T, HashMap<String, T>),
    (T, BTreeMap<String, T>),
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn option_none_renders_null() {
        let empty: Option<i32> = None;
        assert_eq!(empty.to_value().unwrap(), Value::Null);
    }

    #[test]
    fn vec_assign() {
        let mut items: Vec<u32> = Vec::new();
        items.assign(&json!([1, 2, 3])).unwrap();
        assert_eq!(items, [1, 2, 3]);
    }

    #[test]
    fn map_assign() {
        let mut table: HashMap<String, i64> = HashMap::new();
        table.assign(&json!({"a": 1})).unwrap();
        assert_eq!(table.get("a"), Some(&1));
    }
}
