//! Equipment/location assignment join entity.
//!
//! The composite primary key `(equipment_uuid, location_technical_code)`
//! is the only identity the row has; the generic engine looks it up with
//! a two-column equality conjunction.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use mainteq_core::types::Timestamp;
use mainteq_core::validation::{Check, FieldRule};

use crate::entity::{Entity, PgQueryAs};

/// A join row from the `equipment_operational_locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OperationalLocation {
    pub equipment_uuid: Uuid,
    pub location_technical_code: String,
    pub created_at: Timestamp,
}

/// Payload accepted when creating or replacing an assignment row.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationalLocationInput {
    pub equipment_uuid: Uuid,
    pub location_technical_code: String,
}

const RULES: &[FieldRule] = &[
    FieldRule { field: "equipment_uuid", check: Check::Required },
    FieldRule { field: "equipment_uuid", check: Check::Uuid },
    FieldRule { field: "location_technical_code", check: Check::Required },
];

impl Entity for OperationalLocation {
    type Payload = OperationalLocationInput;
    type Key = (Uuid, String);

    const TABLE: &'static str = "equipment_operational_locations";
    const DISPLAY_NAME: &'static str = "OperationalLocation";
    const COLUMNS: &'static str = "equipment_uuid, location_technical_code, created_at";
    const PAYLOAD_COLUMNS: &'static [&'static str] =
        &["equipment_uuid", "location_technical_code"];
    const KEY_COLUMNS: &'static [&'static str] =
        &["equipment_uuid", "location_technical_code"];

    fn rules() -> &'static [FieldRule] {
        RULES
    }

    fn bind_payload<'q>(
        query: PgQueryAs<'q, Self>,
        payload: &'q OperationalLocationInput,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(payload.equipment_uuid)
            .bind(&payload.location_technical_code)
    }
}
