//! The field-access capability every mapped value exposes.
//!
//! - [`Mapped`]: the object-safe core, with kind dispatch through
//!   [`MappedRef`] / [`MappedMut`].
//! - [`Scalar`]: JSON-ready leaves (primitives, strings, options, sequences,
//!   string-keyed maps, raw [`Value`](crate::Value) trees).
//! - [`MappedStruct`]: field enumeration and get/set-by-name for derived
//!   struct types.
//! - [`Typed`]: the static side of a derived type — its metadata table and
//!   the zero-valued `blank` constructor.

mod kind;
mod mapped;
mod scalar;
mod struct_ops;

pub use kind::{MappedMut, MappedRef};
pub use mapped::Mapped;
pub use scalar::Scalar;
pub use struct_ops::{MappedStruct, Typed};
