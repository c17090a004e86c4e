//! Domain-free kernel shared by the db and api crates.
//!
//! Holds the primitive type aliases, the domain error type, and the pure
//! payload-validation engine. Nothing in here touches the database.

pub mod error;
pub mod types;
pub mod validation;
