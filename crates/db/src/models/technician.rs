//! Technician entity model.
//!
//! A technician row shares its identity with a user row; deleting the user
//! cascades to the technician.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use mainteq_core::types::{DbId, Timestamp};
use mainteq_core::validation::{Check, FieldRule};

use crate::entity::{Entity, PgQueryAs};

/// Technician trade specialities. Shared with technical teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "technician_speciality", rename_all = "snake_case")]
pub enum TechnicianSpeciality {
    Electricity,
    Refrigeration,
    Lighting,
    Painting,
    Protocol,
    It,
}

impl TechnicianSpeciality {
    /// Wire names, in declaration order.
    pub const NAMES: &'static [&'static str] = &[
        "electricity",
        "refrigeration",
        "lighting",
        "painting",
        "protocol",
        "it",
    ];
}

/// A technician row from the `technicians` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Technician {
    pub uuid: Uuid,
    pub personal_id: String,
    pub contact: String,
    pub speciality: TechnicianSpeciality,
    pub technical_team_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// Payload accepted when creating or replacing a technician. The `uuid`
/// must be an existing user's identity.
#[derive(Debug, Clone, Deserialize)]
pub struct TechnicianInput {
    pub uuid: Uuid,
    pub personal_id: String,
    pub contact: String,
    pub speciality: TechnicianSpeciality,
    pub technical_team_id: Option<DbId>,
}

const RULES: &[FieldRule] = &[
    FieldRule { field: "uuid", check: Check::Required },
    FieldRule { field: "uuid", check: Check::Uuid },
    FieldRule { field: "personal_id", check: Check::Required },
    FieldRule { field: "contact", check: Check::Required },
    FieldRule { field: "speciality", check: Check::Required },
    FieldRule { field: "speciality", check: Check::OneOf(TechnicianSpeciality::NAMES) },
    FieldRule { field: "technical_team_id", check: Check::Integer },
];

impl Entity for Technician {
    type Payload = TechnicianInput;
    type Key = Uuid;

    const TABLE: &'static str = "technicians";
    const DISPLAY_NAME: &'static str = "Technician";
    const COLUMNS: &'static str =
        "uuid, personal_id, contact, speciality, technical_team_id, created_at, updated_at";
    const PAYLOAD_COLUMNS: &'static [&'static str] =
        &["uuid", "personal_id", "contact", "speciality", "technical_team_id"];
    const KEY_COLUMNS: &'static [&'static str] = &["uuid"];
    const TRACKS_UPDATED_AT: bool = true;

    fn rules() -> &'static [FieldRule] {
        RULES
    }

    fn bind_payload<'q>(
        query: PgQueryAs<'q, Self>,
        payload: &'q TechnicianInput,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(payload.uuid)
            .bind(&payload.personal_id)
            .bind(&payload.contact)
            .bind(payload.speciality)
            .bind(payload.technical_team_id)
    }
}
