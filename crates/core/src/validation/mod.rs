//! Payload validation engine.
//!
//! Provides static per-entity rule declarations and a pure evaluator that
//! checks a raw JSON object against them, with no database dependencies.
//! The evaluator always reports the complete violation list, never a
//! partial one.

pub mod evaluator;
pub mod rules;

pub use evaluator::evaluate_rules;
pub use rules::{Check, FieldRule, FieldViolation, ValidationResult};
