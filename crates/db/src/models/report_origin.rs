//! Report origin entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use mainteq_core::types::{DbId, Timestamp};
use mainteq_core::validation::{Check, FieldRule};

use crate::entity::{Entity, PgQueryAs};

/// Where a report came from. `internal` marks reports raised inside this
/// system rather than relayed from an outside channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "report_origin_source", rename_all = "snake_case")]
pub enum ReportOriginSource {
    Email,
    ManagementSystem,
    Chat,
    Internal,
}

impl ReportOriginSource {
    /// Wire names, in declaration order.
    pub const NAMES: &'static [&'static str] =
        &["email", "management_system", "chat", "internal"];
}

/// A report origin row from the `report_origins` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReportOrigin {
    pub id: DbId,
    pub email_remitent: Option<String>,
    pub created_by: Option<Uuid>,
    pub source: ReportOriginSource,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// Payload accepted when creating or replacing a report origin.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportOriginInput {
    pub email_remitent: Option<String>,
    pub created_by: Option<Uuid>,
    pub source: ReportOriginSource,
    pub description: Option<String>,
}

const RULES: &[FieldRule] = &[
    FieldRule { field: "email_remitent", check: Check::Email },
    FieldRule { field: "created_by", check: Check::Uuid },
    FieldRule { field: "source", check: Check::Required },
    FieldRule { field: "source", check: Check::OneOf(ReportOriginSource::NAMES) },
];

impl Entity for ReportOrigin {
    type Payload = ReportOriginInput;
    type Key = DbId;

    const TABLE: &'static str = "report_origins";
    const DISPLAY_NAME: &'static str = "ReportOrigin";
    const COLUMNS: &'static str =
        "id, email_remitent, created_by, source, description, created_at, updated_at";
    const PAYLOAD_COLUMNS: &'static [&'static str] =
        &["email_remitent", "created_by", "source", "description"];
    const KEY_COLUMNS: &'static [&'static str] = &["id"];
    const TRACKS_UPDATED_AT: bool = true;

    fn rules() -> &'static [FieldRule] {
        RULES
    }

    fn bind_payload<'q>(
        query: PgQueryAs<'q, Self>,
        payload: &'q ReportOriginInput,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(&payload.email_remitent)
            .bind(payload.created_by)
            .bind(payload.source)
            .bind(&payload.description)
    }
}
