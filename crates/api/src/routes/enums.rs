//! Route definitions for the `/enums` listings.

use axum::routing::get;
use axum::Router;

use crate::handlers::enums;
use crate::state::AppState;

/// Routes mounted at `/enums`. One GET per enumerated type.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/roles", get(enums::roles))
        .route("/technician-specialities", get(enums::technician_specialities))
        .route("/equipment-states", get(enums::equipment_states))
        .route("/report-origin-sources", get(enums::report_origin_sources))
        .route("/report-priorities", get(enums::report_priorities))
        .route("/report-types", get(enums::report_types))
        .route("/report-states", get(enums::report_states))
}
