//! Report entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use mainteq_core::types::{DbId, Timestamp};
use mainteq_core::validation::{Check, FieldRule};

use crate::entity::{Entity, PgQueryAs};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "report_priority", rename_all = "snake_case")]
pub enum ReportPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl ReportPriority {
    pub const NAMES: &'static [&'static str] = &["high", "medium", "low"];
}

/// Preventive reports schedule upkeep; active ones track a live fault.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "report_type", rename_all = "snake_case")]
pub enum ReportType {
    #[default]
    Preventive,
    Active,
}

impl ReportType {
    pub const NAMES: &'static [&'static str] = &["preventive", "active"];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "report_state", rename_all = "snake_case")]
pub enum ReportState {
    #[default]
    Pending,
    Programmed,
    InProgress,
    Solved,
    Cancelled,
}

impl ReportState {
    pub const NAMES: &'static [&'static str] =
        &["pending", "programmed", "in_progress", "solved", "cancelled"];
}

/// A report row from the `reports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Report {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub priority: ReportPriority,
    pub state: ReportState,
    pub report_type: ReportType,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// Payload accepted when creating or replacing a report.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportInput {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub priority: ReportPriority,
    #[serde(default)]
    pub state: ReportState,
    #[serde(default)]
    pub report_type: ReportType,
    pub notes: Option<String>,
}

const RULES: &[FieldRule] = &[
    FieldRule { field: "title", check: Check::Required },
    FieldRule { field: "description", check: Check::Required },
    FieldRule { field: "priority", check: Check::OneOf(ReportPriority::NAMES) },
    FieldRule { field: "state", check: Check::OneOf(ReportState::NAMES) },
    FieldRule { field: "report_type", check: Check::OneOf(ReportType::NAMES) },
];

impl Entity for Report {
    type Payload = ReportInput;
    type Key = DbId;

    const TABLE: &'static str = "reports";
    const DISPLAY_NAME: &'static str = "Report";
    const COLUMNS: &'static str =
        "id, title, description, priority, state, report_type, notes, created_at, updated_at";
    const PAYLOAD_COLUMNS: &'static [&'static str] =
        &["title", "description", "priority", "state", "report_type", "notes"];
    const KEY_COLUMNS: &'static [&'static str] = &["id"];
    const TRACKS_UPDATED_AT: bool = true;

    fn rules() -> &'static [FieldRule] {
        RULES
    }

    fn bind_payload<'q>(
        query: PgQueryAs<'q, Self>,
        payload: &'q ReportInput,
    ) -> PgQueryAs<'q, Self> {
        query
            .bind(&payload.title)
            .bind(&payload.description)
            .bind(payload.priority)
            .bind(payload.state)
            .bind(payload.report_type)
            .bind(&payload.notes)
    }
}
