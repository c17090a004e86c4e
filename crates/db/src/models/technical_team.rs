//! Technical team entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use mainteq_core::types::{DbId, Timestamp};
use mainteq_core::validation::{Check, FieldRule};

use crate::entity::{Entity, PgQueryAs};
use crate::models::technician::TechnicianSpeciality;

/// A technical team row from the `technical_teams` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TechnicalTeam {
    pub id: DbId,
    pub name: String,
    pub speciality: Option<TechnicianSpeciality>,
    pub leader_id: Option<Uuid>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// Payload accepted when creating or replacing a technical team.
#[derive(Debug, Clone, Deserialize)]
pub struct TechnicalTeamInput {
    pub name: String,
    pub speciality: Option<TechnicianSpeciality>,
    /// Must reference an existing technician when set.
    pub leader_id: Option<Uuid>,
}

const RULES: &[FieldRule] = &[
    FieldRule { field: "name", check: Check::Required },
    FieldRule { field: "speciality", check: Check::OneOf(TechnicianSpeciality::NAMES) },
    FieldRule { field: "leader_id", check: Check::Uuid },
];

impl Entity for TechnicalTeam {
    type Payload = TechnicalTeamInput;
    type Key = DbId;

    const TABLE: &'static str = "technical_teams";
    const DISPLAY_NAME: &'static str = "TechnicalTeam";
    const COLUMNS: &'static str = "id, name, speciality, leader_id, created_at, updated_at";
    const PAYLOAD_COLUMNS: &'static [&'static str] = &["name", "speciality", "leader_id"];
    const KEY_COLUMNS: &'static [&'static str] = &["id"];
    const TRACKS_UPDATED_AT: bool = true;

    fn rules() -> &'static [FieldRule] {
        RULES
    }

    fn bind_payload<'q>(
        query: PgQueryAs<'q, Self>,
        payload: &'q TechnicalTeamInput,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(&payload.name)
            .bind(payload.speciality)
            .bind(payload.leader_id)
    }
}
