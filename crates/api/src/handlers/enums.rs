//! Enumerated-type listing handlers.
//!
//! The Rust enums and the Postgres enum types are kept in lockstep by the
//! migrations, so these answer from the static variant lists without a
//! database round-trip.

use axum::Json;

use mainteq_db::models::equipment::EquipmentState;
use mainteq_db::models::report::{ReportPriority, ReportState, ReportType};
use mainteq_db::models::report_origin::ReportOriginSource;
use mainteq_db::models::technician::TechnicianSpeciality;
use mainteq_db::models::user::UserRole;

/// GET /api/v1/enums/roles
pub async fn roles() -> Json<&'static [&'static str]> {
    Json(UserRole::NAMES)
}

/// GET /api/v1/enums/technician-specialities
pub async fn technician_specialities() -> Json<&'static [&'static str]> {
    Json(TechnicianSpeciality::NAMES)
}

/// GET /api/v1/enums/equipment-states
pub async fn equipment_states() -> Json<&'static [&'static str]> {
    Json(EquipmentState::NAMES)
}

/// GET /api/v1/enums/report-origin-sources
pub async fn report_origin_sources() -> Json<&'static [&'static str]> {
    Json(ReportOriginSource::NAMES)
}

/// GET /api/v1/enums/report-priorities
pub async fn report_priorities() -> Json<&'static [&'static str]> {
    Json(ReportPriority::NAMES)
}

/// GET /api/v1/enums/report-types
pub async fn report_types() -> Json<&'static [&'static str]> {
    Json(ReportType::NAMES)
}

/// GET /api/v1/enums/report-states
pub async fn report_states() -> Json<&'static [&'static str]> {
    Json(ReportState::NAMES)
}
