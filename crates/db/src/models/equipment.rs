//! Equipment entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use mainteq_core::types::{DbId, Timestamp};
use mainteq_core::validation::{Check, FieldRule};

use crate::entity::{Entity, PgQueryAs};

/// Lifecycle states of a piece of equipment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "equipment_state", rename_all = "snake_case")]
pub enum EquipmentState {
    Installed,
    InMaintenance,
    MaintenancePending,
    InRepair,
    RepairPending,
    #[default]
    InStock,
    Decommissioned,
    TransferPending,
}

impl EquipmentState {
    /// Wire names, in declaration order.
    pub const NAMES: &'static [&'static str] = &[
        "installed",
        "in_maintenance",
        "maintenance_pending",
        "in_repair",
        "repair_pending",
        "in_stock",
        "decommissioned",
        "transfer_pending",
    ];
}

/// An equipment row from the `equipment` table.
///
/// `technical_location` is the single-valued current placement;
/// `transfer_location` is the pending destination while a transfer is in
/// flight. The many-valued operational history lives in the join table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Equipment {
    pub uuid: Uuid,
    pub technical_code: String,
    pub name: String,
    pub serial_number: String,
    pub description: Option<String>,
    pub state: EquipmentState,
    pub depends_on: Option<Uuid>,
    pub brand_id: DbId,
    pub technical_location: Option<String>,
    pub transfer_location: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// Payload accepted when creating or replacing equipment. The identity is
/// storage-generated.
#[derive(Debug, Clone, Deserialize)]
pub struct EquipmentInput {
    pub technical_code: String,
    pub name: String,
    pub serial_number: String,
    pub description: Option<String>,
    /// Defaults to `in_stock` if omitted.
    #[serde(default)]
    pub state: EquipmentState,
    pub depends_on: Option<Uuid>,
    pub brand_id: DbId,
    pub technical_location: Option<String>,
    pub transfer_location: Option<String>,
}

const RULES: &[FieldRule] = &[
    FieldRule { field: "technical_code", check: Check::Required },
    FieldRule { field: "name", check: Check::Required },
    FieldRule { field: "serial_number", check: Check::Required },
    FieldRule { field: "state", check: Check::OneOf(EquipmentState::NAMES) },
    FieldRule { field: "depends_on", check: Check::Uuid },
    FieldRule { field: "brand_id", check: Check::Required },
    FieldRule { field: "brand_id", check: Check::Integer },
    FieldRule { field: "technical_location", check: Check::MinLength(1) },
    FieldRule { field: "transfer_location", check: Check::MinLength(1) },
];

impl Entity for Equipment {
    type Payload = EquipmentInput;
    type Key = Uuid;

    const TABLE: &'static str = "equipment";
    const DISPLAY_NAME: &'static str = "Equipment";
    const COLUMNS: &'static str = "uuid, technical_code, name, serial_number, description, \
         state, depends_on, brand_id, technical_location, transfer_location, \
         created_at, updated_at";
    const PAYLOAD_COLUMNS: &'static [&'static str] = &[
        "technical_code",
        "name",
        "serial_number",
        "description",
        "state",
        "depends_on",
        "brand_id",
        "technical_location",
        "transfer_location",
    ];
    const KEY_COLUMNS: &'static [&'static str] = &["uuid"];
    const TRACKS_UPDATED_AT: bool = true;

    fn rules() -> &'static [FieldRule] {
        RULES
    }

    fn bind_payload<'q>(
        query: PgQueryAs<'q, Self>,
        payload: &'q EquipmentInput,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(&payload.technical_code)
            .bind(&payload.name)
            .bind(&payload.serial_number)
            .bind(&payload.description)
            .bind(payload.state)
            .bind(payload.depends_on)
            .bind(payload.brand_id)
            .bind(&payload.technical_location)
            .bind(&payload.transfer_location)
    }
}
