//! Report update entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use mainteq_core::types::{DbId, Timestamp};
use mainteq_core::validation::{Check, FieldRule};

use crate::entity::{Entity, PgQueryAs};

/// A report update row from the `report_updates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReportUpdate {
    pub id: DbId,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// Payload accepted when creating or replacing a report update.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportUpdateInput {
    pub description: String,
}

const RULES: &[FieldRule] = &[FieldRule { field: "description", check: Check::Required }];

impl Entity for ReportUpdate {
    type Payload = ReportUpdateInput;
    type Key = DbId;

    const TABLE: &'static str = "report_updates";
    const DISPLAY_NAME: &'static str = "ReportUpdate";
    const COLUMNS: &'static str = "id, description, created_at, updated_at";
    const PAYLOAD_COLUMNS: &'static [&'static str] = &["description"];
    const KEY_COLUMNS: &'static [&'static str] = &["id"];
    const TRACKS_UPDATED_AT: bool = true;

    fn rules() -> &'static [FieldRule] {
        RULES
    }

    fn bind_payload<'q>(
        query: PgQueryAs<'q, Self>,
        payload: &'q ReportUpdateInput,
    ) -> PgQueryAs<'q, Self> {
        query.bind(&payload.description)
    }
}
