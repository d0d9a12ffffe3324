//! Static per-type metadata: the field descriptor tables consulted by both
//! walkers.
//!
//! Tables are generated once per type by [`#[derive(Mapped)]`](crate::Mapped)
//! and live for `'static`, so descriptor resolution is deterministic,
//! side-effect free, and needs no runtime cache.

mod field_info;
mod struct_info;

pub use field_info::{FieldInfo, FieldModifier};
pub use struct_info::StructInfo;
