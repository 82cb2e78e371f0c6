//! Domain primitives shared by the store and the HTTP layer.
//!
//! This crate performs no I/O.

pub mod error;
pub mod types;
pub mod validation;
