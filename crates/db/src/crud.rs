//! Generic CRUD engine.
//!
//! [`Crud`] provides the five base operations for any [`Entity`]: insert,
//! find-by-key, list, update and delete. Payloads are validated against
//! the entity's rule set before any statement is issued; absence on lookup
//! is `Ok(None)`, never an error. Key matching builds an equality
//! conjunction over all key columns in declaration order, so composite
//! keys go through the same path as simple ones.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;
use sqlx::PgPool;

use mainteq_core::validation::{evaluate_rules, FieldRule, FieldViolation};

use crate::entity::{Entity, KeyBind};

/// Error surface of the engine and everything layered on it.
#[derive(Debug, thiserror::Error)]
pub enum CrudError {
    /// The payload failed the entity's declared rules. Carries the full
    /// violation list, never a partial one.
    #[error("Validation failed for {entity}")]
    Validation {
        entity: &'static str,
        violations: Vec<FieldViolation>,
    },

    /// The storage layer failed (constraint violation, connectivity,
    /// timeout).
    #[error(transparent)]
    Storage(#[from] sqlx::Error),
}

/// Validate a raw JSON body against a rule set and deserialize it.
///
/// Used by [`Crud`] with the entity's own rules, and by extensions that
/// accept a request shape different from the entity payload.
pub fn parse_body<T: DeserializeOwned>(
    entity: &'static str,
    rules: &[FieldRule],
    body: &Value,
) -> Result<T, CrudError> {
    let object = body.as_object().ok_or_else(|| CrudError::Validation {
        entity,
        violations: vec![FieldViolation {
            field: "payload".into(),
            rule: "object",
            message: "payload must be a JSON object".into(),
            value: Some(body.clone()),
        }],
    })?;

    let result = evaluate_rules(rules, object);
    if !result.is_valid {
        return Err(CrudError::Validation {
            entity,
            violations: result.violations,
        });
    }

    // Rules passed, so deserialization failures here are shape problems
    // the rules do not model (e.g. a non-integer where serde expects i64).
    serde_json::from_value(body.clone()).map_err(|err| CrudError::Validation {
        entity,
        violations: vec![FieldViolation {
            field: "payload".into(),
            rule: "shape",
            message: err.to_string(),
            value: None,
        }],
    })
}

/// Build an equality conjunction over the key columns, starting at the
/// given placeholder index. One column yields `col = $n`; several yield
/// `col1 = $n AND col2 = $n+1 ...` in declaration order.
fn key_predicate(columns: &[&str], first_placeholder: usize) -> String {
    columns
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{col} = ${}", first_placeholder + i))
        .collect::<Vec<_>>()
        .join(" AND ")
}

/// Generic CRUD operations over one entity's descriptor and rule set.
pub struct Crud<E: Entity>(PhantomData<E>);

impl<E: Entity> Crud<E> {
    /// Validate a raw JSON body against the entity's rules and turn it
    /// into the typed payload.
    pub fn parse_payload(body: &Value) -> Result<E::Payload, CrudError> {
        parse_body(E::DISPLAY_NAME, E::rules(), body)
    }

    /// Validate and insert, returning the created row with all
    /// storage-assigned defaults populated.
    pub async fn insert(pool: &PgPool, body: &Value) -> Result<E, CrudError> {
        let payload = Self::parse_payload(body)?;
        Self::insert_payload(pool, &payload).await
    }

    /// Insert a payload that has already been validated.
    pub async fn insert_payload(pool: &PgPool, payload: &E::Payload) -> Result<E, CrudError> {
        let placeholders = (1..=E::PAYLOAD_COLUMNS.len())
            .map(|i| format!("${i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let query = format!(
            "INSERT INTO {table} ({columns}) VALUES ({placeholders}) RETURNING {returning}",
            table = E::TABLE,
            columns = E::PAYLOAD_COLUMNS.join(", "),
            returning = E::COLUMNS,
        );
        tracing::debug!(entity = E::DISPLAY_NAME, "insert");
        let row = E::bind_payload(sqlx::query_as::<_, E>(&query), payload)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Look up one row by primary key. Absence is `Ok(None)`.
    pub async fn find_by_key(pool: &PgPool, key: &E::Key) -> Result<Option<E>, CrudError> {
        let query = format!(
            "SELECT {columns} FROM {table} WHERE {predicate}",
            columns = E::COLUMNS,
            table = E::TABLE,
            predicate = key_predicate(E::KEY_COLUMNS, 1),
        );
        tracing::debug!(entity = E::DISPLAY_NAME, key = %key.display(), "find_by_key");
        let row = key
            .bind(sqlx::query_as::<_, E>(&query))
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Every row, storage-default order. No pagination.
    pub async fn list(pool: &PgPool) -> Result<Vec<E>, CrudError> {
        let query = format!("SELECT {} FROM {}", E::COLUMNS, E::TABLE);
        tracing::debug!(entity = E::DISPLAY_NAME, "list");
        let rows = sqlx::query_as::<_, E>(&query).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Validate the full payload (same rules as insert) and replace the
    /// matched row's fields. `Ok(None)` when no row matched.
    pub async fn update(
        pool: &PgPool,
        key: &E::Key,
        body: &Value,
    ) -> Result<Option<E>, CrudError> {
        let payload = Self::parse_payload(body)?;
        let mut assignments = E::PAYLOAD_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, col)| format!("{col} = ${}", i + 1))
            .collect::<Vec<_>>();
        if E::TRACKS_UPDATED_AT {
            assignments.push("updated_at = now()".into());
        }
        let query = format!(
            "UPDATE {table} SET {set} WHERE {predicate} RETURNING {returning}",
            table = E::TABLE,
            set = assignments.join(", "),
            predicate = key_predicate(E::KEY_COLUMNS, E::PAYLOAD_COLUMNS.len() + 1),
            returning = E::COLUMNS,
        );
        tracing::debug!(entity = E::DISPLAY_NAME, key = %key.display(), "update");
        let row = key
            .bind(E::bind_payload(sqlx::query_as::<_, E>(&query), &payload))
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Remove the matched row and return its prior state. `Ok(None)` when
    /// no row matched.
    pub async fn delete(pool: &PgPool, key: &E::Key) -> Result<Option<E>, CrudError> {
        let query = format!(
            "DELETE FROM {table} WHERE {predicate} RETURNING {returning}",
            table = E::TABLE,
            predicate = key_predicate(E::KEY_COLUMNS, 1),
            returning = E::COLUMNS,
        );
        tracing::debug!(entity = E::DISPLAY_NAME, key = %key.display(), "delete");
        let row = key
            .bind(sqlx::query_as::<_, E>(&query))
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::models::user::{User, UserRole};

    use super::*;

    #[test]
    fn key_predicate_single_column() {
        assert_eq!(key_predicate(&["uuid"], 1), "uuid = $1");
    }

    #[test]
    fn key_predicate_composite_preserves_declaration_order() {
        assert_eq!(
            key_predicate(&["equipment_uuid", "location_technical_code"], 3),
            "equipment_uuid = $3 AND location_technical_code = $4"
        );
    }

    #[test]
    fn key_predicate_handles_any_arity() {
        assert_eq!(
            key_predicate(&["a", "b", "c"], 1),
            "a = $1 AND b = $2 AND c = $3"
        );
    }

    #[test]
    fn parse_payload_accepts_valid_user() {
        let body = json!({"name": "Ana", "email": "ana@example.com"});
        let payload = Crud::<User>::parse_payload(&body).unwrap();
        assert_eq!(payload.name, "Ana");
        assert_eq!(payload.role, UserRole::User); // serde default
    }

    #[test]
    fn parse_payload_rejects_bad_email_with_violation_list() {
        let body = json!({"name": "Ana", "email": "not-an-email"});
        let err = Crud::<User>::parse_payload(&body).unwrap_err();
        match err {
            CrudError::Validation { entity, violations } => {
                assert_eq!(entity, "User");
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "email");
                assert_eq!(violations[0].rule, "email");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn parse_payload_reports_all_violations_at_once() {
        let body = json!({"email": "nope", "role": "superuser"});
        let err = Crud::<User>::parse_payload(&body).unwrap_err();
        match err {
            CrudError::Validation { violations, .. } => {
                assert_eq!(violations.len(), 3); // name missing, bad email, bad role
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn parse_payload_rejects_non_object() {
        let err = Crud::<User>::parse_payload(&json!(["not", "an", "object"])).unwrap_err();
        assert!(matches!(err, CrudError::Validation { .. }));
    }
}
