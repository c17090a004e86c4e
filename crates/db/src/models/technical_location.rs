//! Technical location entity model.
//!
//! Locations form a tree keyed by `technical_code`. The root is the only
//! row with a NULL parent; every other row's parent must exist, and
//! deleting a location takes its whole subtree with it (storage cascade).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use mainteq_core::types::DbId;
use mainteq_core::validation::{Check, FieldRule};

use crate::entity::{Entity, PgQueryAs};

/// A location row from the `technical_locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TechnicalLocation {
    pub technical_code: String,
    pub name: String,
    pub type_id: DbId,
    pub parent_technical_code: Option<String>,
}

/// Payload accepted when replacing a location via the generic engine.
/// Creation goes through the derived-code path instead (see
/// [`crate::repositories::TechnicalLocationRepo`]).
#[derive(Debug, Clone, Deserialize)]
pub struct TechnicalLocationInput {
    pub technical_code: String,
    pub name: String,
    pub type_id: DbId,
    pub parent_technical_code: Option<String>,
}

const RULES: &[FieldRule] = &[
    FieldRule { field: "technical_code", check: Check::Required },
    FieldRule { field: "name", check: Check::Required },
    FieldRule { field: "type_id", check: Check::Required },
    FieldRule { field: "type_id", check: Check::Integer },
    FieldRule { field: "parent_technical_code", check: Check::MinLength(1) },
];

/// Request shape for derived-code creation: the caller supplies the parent
/// code and a suffix, never the full code.
#[derive(Debug, Clone, Deserialize)]
pub struct NewLocation {
    pub parent_technical_code: String,
    pub code: String,
    pub name: String,
    pub type_id: DbId,
}

pub const NEW_LOCATION_RULES: &[FieldRule] = &[
    FieldRule { field: "parent_technical_code", check: Check::Required },
    FieldRule { field: "code", check: Check::Required },
    FieldRule { field: "name", check: Check::Required },
    FieldRule { field: "type_id", check: Check::Required },
    FieldRule { field: "type_id", check: Check::Integer },
];

impl Entity for TechnicalLocation {
    type Payload = TechnicalLocationInput;
    type Key = String;

    const TABLE: &'static str = "technical_locations";
    const DISPLAY_NAME: &'static str = "TechnicalLocation";
    const COLUMNS: &'static str = "technical_code, name, type_id, parent_technical_code";
    const PAYLOAD_COLUMNS: &'static [&'static str] =
        &["technical_code", "name", "type_id", "parent_technical_code"];
    const KEY_COLUMNS: &'static [&'static str] = &["technical_code"];

    fn rules() -> &'static [FieldRule] {
        RULES
    }

    fn bind_payload<'q>(
        query: PgQueryAs<'q, Self>,
        payload: &'q TechnicalLocationInput,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(&payload.technical_code)
            .bind(&payload.name)
            .bind(payload.type_id)
            .bind(&payload.parent_technical_code)
    }
}
