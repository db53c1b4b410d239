//! Domain types and rules shared by the store and the HTTP layer.
//!
//! Nothing in this crate performs I/O.

pub mod article;
pub mod error;
pub mod types;
pub mod validation;
