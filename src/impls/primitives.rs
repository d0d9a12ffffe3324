use core::any::Any;

use serde_json::{Map, Value};

use crate::error::PsonError;
use crate::reflection::{Mapped, MappedMut, MappedRef, Scalar};

// -----------------------------------------------------------------------------
// Plain leaf types

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl Mapped for $ty {
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

        impl Scalar for $ty {
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

impl_scalar! {
    (), bool, char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    String,
    Value, Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn leaf_kind() {
        assert!(matches!(true.mapped_ref(), MappedRef::Scalar(_)));
        assert!(matches!(String::new().mapped_ref(), MappedRef::Scalar(_)));
    }

    #[test]
    fn leaf_round_trip() {
        let mut target = String::new();
        target.assign(&json!("hello")).unwrap();
        assert_eq!(target, "hello");
        assert_eq!(target.to_value().unwrap(), json!("hello"));
    }

    #[test]
    fn assign_rejects_mismatched_value() {
        let mut target = 0_u32;
        assert!(target.assign(&json!("not a number")).is_err());
        assert_eq!(target, 0);
    }

    #[test]
    fn assign_boxed_keeps_value_on_mismatch() {
        let mut target = 0_i64;
        let rejected = target.assign_boxed(Box::new("wrong")).unwrap_err();
        assert!(rejected.downcast::<&str>().is_ok());

        target.assign_boxed(Box::new(7_i64)).unwrap();
        assert_eq!(target, 7);
    }

    #[test]
    fn raw_value_leaf_passes_through() {
        let mut target = Value::Null;
        let tree = json!({"y": 5});
        target.assign(&tree).unwrap();
        assert_eq!(target, tree);
    }
}
