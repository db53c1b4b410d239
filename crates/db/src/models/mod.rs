//! Domain model structs.
//!
//! Row structs derive `FromRow` + `Serialize`. Write inputs are the
//! validated allow-list types from `newsdesk_core`, re-exported next to the
//! row they produce.

pub mod article;
