//! Brand entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use mainteq_core::types::DbId;
use mainteq_core::validation::{Check, FieldRule};

use crate::entity::{Entity, PgQueryAs};

/// A brand row from the `brands` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Brand {
    pub id: DbId,
    pub name: String,
}

/// Payload accepted when creating or replacing a brand.
#[derive(Debug, Clone, Deserialize)]
pub struct BrandInput {
    pub name: String,
}

const RULES: &[FieldRule] = &[FieldRule { field: "name", check: Check::Required }];

impl Entity for Brand {
    type Payload = BrandInput;
    type Key = DbId;

    const TABLE: &'static str = "brands";
    const DISPLAY_NAME: &'static str = "Brand";
    const COLUMNS: &'static str = "id, name";
    const PAYLOAD_COLUMNS: &'static [&'static str] = &["name"];
    const KEY_COLUMNS: &'static [&'static str] = &["id"];

    fn rules() -> &'static [FieldRule] {
        RULES
    }

    fn bind_payload<'q>(
        query: PgQueryAs<'q, Self>,
        payload: &'q BrandInput,
    ) -> PgQueryAs<'q, Self> {
        query.bind(&payload.name)
    }
}
