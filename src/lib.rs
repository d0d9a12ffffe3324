#![doc = include_str!("../README.md")]

// The derive macro emits `pson::` paths; this alias makes them resolve
// inside the crate's own tests and doc tests as well.
extern crate self as pson;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod impls;
mod mapper;
mod reflection;

pub mod info;
pub mod registry;

pub mod __macro_exports;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use error::PsonError;
pub use mapper::{Pson, PsonBuilder};
pub use reflection::{Mapped, MappedMut, MappedRef, MappedStruct, Scalar, Typed};

/// The generic JSON value tree both walkers consume and produce.
///
/// Object members keep their insertion order (`serde_json` is built with
/// `preserve_order`), so serialized output follows field declaration order.
pub use serde_json::Value;

pub use pson_derive::Mapped;
