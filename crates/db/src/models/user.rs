//! User entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use mainteq_core::types::Timestamp;
use mainteq_core::validation::{Check, FieldRule};

use crate::entity::{Entity, PgQueryAs};

/// System-wide user roles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    User,
    Technician,
    Coordinator,
    Admin,
}

impl UserRole {
    /// Wire names, in declaration order.
    pub const NAMES: &'static [&'static str] = &["user", "technician", "coordinator", "admin"];
}

/// A user row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub uuid: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// Payload accepted when creating or replacing a user. The identity is
/// storage-generated.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    /// Defaults to `user` if omitted.
    #[serde(default)]
    pub role: UserRole,
}

const RULES: &[FieldRule] = &[
    FieldRule { field: "name", check: Check::Required },
    FieldRule { field: "email", check: Check::Required },
    FieldRule { field: "email", check: Check::Email },
    FieldRule { field: "role", check: Check::OneOf(UserRole::NAMES) },
];

impl Entity for User {
    type Payload = UserInput;
    type Key = Uuid;

    const TABLE: &'static str = "users";
    const DISPLAY_NAME: &'static str = "User";
    const COLUMNS: &'static str = "uuid, name, email, role, created_at, updated_at";
    const PAYLOAD_COLUMNS: &'static [&'static str] = &["name", "email", "role"];
    const KEY_COLUMNS: &'static [&'static str] = &["uuid"];
    const TRACKS_UPDATED_AT: bool = true;

    fn rules() -> &'static [FieldRule] {
        RULES
    }

    fn bind_payload<'q>(query: PgQueryAs<'q, Self>, payload: &'q UserInput) -> PgQueryAs<'q, Self> {
        query
            .bind(&payload.name)
            .bind(&payload.email)
            .bind(payload.role)
    }
}
