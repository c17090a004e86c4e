//! Rule evaluator — pure logic, no database access.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use super::rules::{Check, FieldRule, FieldViolation, ValidationResult};

/// Evaluate all rules against a single JSON payload object.
///
/// Returns every violation found, so callers can surface the full list in
/// one response instead of failing field by field.
pub fn evaluate_rules(
    rules: &[FieldRule],
    data: &serde_json::Map<String, Value>,
) -> ValidationResult {
    let mut violations = Vec::new();

    for rule in rules {
        if let Some(violation) = evaluate_single_rule(rule, data.get(rule.field)) {
            violations.push(violation);
        }
    }

    ValidationResult {
        is_valid: violations.is_empty(),
        violations,
    }
}

fn evaluate_single_rule(rule: &FieldRule, value: Option<&Value>) -> Option<FieldViolation> {
    match rule.check {
        Check::Required => evaluate_required(rule, value),
        Check::MinLength(min) => evaluate_min_length(rule, value, min),
        Check::MaxLength(max) => evaluate_max_length(rule, value, max),
        Check::Integer => evaluate_integer(rule, value),
        Check::Uuid => evaluate_uuid(rule, value),
        Check::Email => evaluate_email(rule, value),
        Check::OneOf(allowed) => evaluate_one_of(rule, value, allowed),
    }
}

fn violation(rule: &FieldRule, message: String, value: Option<&Value>) -> FieldViolation {
    FieldViolation {
        field: rule.field.to_string(),
        rule: rule.check.name(),
        message,
        value: value.cloned(),
    }
}

fn evaluate_required(rule: &FieldRule, value: Option<&Value>) -> Option<FieldViolation> {
    match value {
        None | Some(Value::Null) => Some(violation(rule, "is required".into(), value)),
        Some(Value::String(s)) if s.is_empty() => {
            Some(violation(rule, "is required".into(), value))
        }
        _ => None,
    }
}

/// Returns the field as a string if present; non-string present values are
/// left for the type-shaped checks to flag.
fn as_present_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(|v| v.as_str())
}

fn evaluate_min_length(
    rule: &FieldRule,
    value: Option<&Value>,
    min: usize,
) -> Option<FieldViolation> {
    let s = as_present_str(value)?;
    if s.len() < min {
        Some(violation(
            rule,
            format!("must be at least {min} characters"),
            value,
        ))
    } else {
        None
    }
}

fn evaluate_max_length(
    rule: &FieldRule,
    value: Option<&Value>,
    max: usize,
) -> Option<FieldViolation> {
    let s = as_present_str(value)?;
    if s.len() > max {
        Some(violation(
            rule,
            format!("must be at most {max} characters"),
            value,
        ))
    } else {
        None
    }
}

fn evaluate_integer(rule: &FieldRule, value: Option<&Value>) -> Option<FieldViolation> {
    let val = match value {
        Some(v) if !v.is_null() => v,
        _ => return None,
    };
    if val.as_i64().is_some() {
        None
    } else {
        Some(violation(rule, "must be an integer".into(), Some(val)))
    }
}

fn evaluate_uuid(rule: &FieldRule, value: Option<&Value>) -> Option<FieldViolation> {
    let val = match value {
        Some(v) if !v.is_null() => v,
        _ => return None,
    };
    match val.as_str() {
        Some(s) if uuid::Uuid::parse_str(s).is_ok() => None,
        _ => Some(violation(rule, "must be a valid UUID".into(), Some(val))),
    }
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"))
}

fn evaluate_email(rule: &FieldRule, value: Option<&Value>) -> Option<FieldViolation> {
    let val = match value {
        Some(v) if !v.is_null() => v,
        _ => return None,
    };
    match val.as_str() {
        Some(s) if email_regex().is_match(s) => None,
        _ => Some(violation(
            rule,
            "must be a valid email address".into(),
            Some(val),
        )),
    }
}

fn evaluate_one_of(
    rule: &FieldRule,
    value: Option<&Value>,
    allowed: &'static [&'static str],
) -> Option<FieldViolation> {
    let val = match value {
        Some(v) if !v.is_null() => v,
        _ => return None,
    };
    match val.as_str() {
        Some(s) if allowed.contains(&s) => None,
        _ => Some(violation(
            rule,
            format!("must be one of: {}", allowed.join(", ")),
            Some(val),
        )),
    }
}
