//! Re-exports for the code generated by [`#[derive(Mapped)]`](crate::Mapped).
//!
//! Not part of the public API; do not use directly.

pub use inventory;
