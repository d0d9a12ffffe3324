//! Library [`Scalar`](crate::Scalar) implementations for JSON-ready leaf
//! types. Conversion in both directions goes through serde.

mod containers;
mod primitives;
