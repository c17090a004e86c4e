//! Validation rule and result types.

use serde::Serialize;
use serde_json::Value;

/// A single declarative constraint on one payload field.
///
/// Rule sets are `'static` slices declared next to each entity model and
/// handed to [`super::evaluate_rules`] before any write reaches storage.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub check: Check,
}

/// The constraint kinds the evaluator understands.
///
/// Every check except `Required` only applies when the field is present
/// and non-null, so optional fields are expressed by simply not declaring
/// a `Required` rule for them.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// Field must be present, non-null, and (for strings) non-empty.
    Required,
    /// String length must be at least this many bytes.
    MinLength(usize),
    /// String length must be at most this many bytes.
    MaxLength(usize),
    /// Value must be a JSON integer.
    Integer,
    /// Value must be a string parseable as a UUID.
    Uuid,
    /// Value must be a string shaped like an email address.
    Email,
    /// Value must be a string drawn from this set.
    OneOf(&'static [&'static str]),
}

impl Check {
    /// Stable identifier used in violation payloads.
    pub fn name(&self) -> &'static str {
        match self {
            Check::Required => "required",
            Check::MinLength(_) => "min_length",
            Check::MaxLength(_) => "max_length",
            Check::Integer => "integer",
            Check::Uuid => "uuid",
            Check::Email => "email",
            Check::OneOf(_) => "one_of",
        }
    }
}

/// Aggregated result of evaluating all rules against one payload.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violations: Vec<FieldViolation>,
}

/// A single field-level rule violation.
#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}
