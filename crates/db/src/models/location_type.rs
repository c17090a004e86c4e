//! Technical location type entity model.
//!
//! Location types carry naming and coding templates used by operators when
//! laying out the location tree; both templates are unique.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use mainteq_core::types::DbId;
use mainteq_core::validation::{Check, FieldRule};

use crate::entity::{Entity, PgQueryAs};

/// A location type row from the `technical_location_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LocationType {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub name_template: String,
    pub code_template: String,
}

/// Payload accepted when creating or replacing a location type.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationTypeInput {
    pub name: String,
    pub description: Option<String>,
    pub name_template: String,
    pub code_template: String,
}

const RULES: &[FieldRule] = &[
    FieldRule { field: "name", check: Check::Required },
    FieldRule { field: "name", check: Check::MinLength(3) },
    FieldRule { field: "name", check: Check::MaxLength(50) },
    FieldRule { field: "name_template", check: Check::Required },
    FieldRule { field: "name_template", check: Check::MinLength(3) },
    FieldRule { field: "name_template", check: Check::MaxLength(50) },
    FieldRule { field: "code_template", check: Check::Required },
    FieldRule { field: "code_template", check: Check::MinLength(3) },
    FieldRule { field: "code_template", check: Check::MaxLength(50) },
];

impl Entity for LocationType {
    type Payload = LocationTypeInput;
    type Key = DbId;

    const TABLE: &'static str = "technical_location_types";
    const DISPLAY_NAME: &'static str = "LocationType";
    const COLUMNS: &'static str = "id, name, description, name_template, code_template";
    const PAYLOAD_COLUMNS: &'static [&'static str] =
        &["name", "description", "name_template", "code_template"];
    const KEY_COLUMNS: &'static [&'static str] = &["id"];

    fn rules() -> &'static [FieldRule] {
        RULES
    }

    fn bind_payload<'q>(
        query: PgQueryAs<'q, Self>,
        payload: &'q LocationTypeInput,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(&payload.name)
            .bind(&payload.description)
            .bind(&payload.name_template)
            .bind(&payload.code_template)
    }
}
