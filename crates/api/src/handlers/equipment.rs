//! Handlers for the equipment location-assignment endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use mainteq_core::error::CoreError;
use mainteq_db::models::operational_location::OperationalLocation;
use mainteq_db::repositories::{AssignmentOutcome, EquipmentRepo};

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// PUT /api/v1/equipment/assign/technical-location/{equipment_uuid}/{location_code}
///
/// Overwrites the equipment's current technical location. Repeating the
/// call with the same arguments is a no-op beyond the first.
pub async fn assign_technical_location(
    State(state): State<AppState>,
    Path((equipment_uuid, location_code)): Path<(Uuid, String)>,
) -> AppResult<Json<MessageResponse>> {
    let updated =
        EquipmentRepo::assign_technical_location(&state.pool, equipment_uuid, &location_code)
            .await?;
    if !updated {
        return Err(equipment_not_found(equipment_uuid));
    }
    Ok(Json(MessageResponse {
        message: "Equipment assigned to technical location",
    }))
}

/// POST /api/v1/equipment/assign/operational-location/{equipment_uuid}/{location_code}
///
/// Adds the pair to the join table; an already-assigned pair is a 409 and
/// writes nothing.
pub async fn assign_operational_location(
    State(state): State<AppState>,
    Path((equipment_uuid, location_code)): Path<(Uuid, String)>,
) -> AppResult<(StatusCode, Json<OperationalLocation>)> {
    let outcome =
        EquipmentRepo::assign_operational_location(&state.pool, equipment_uuid, &location_code)
            .await?;
    match outcome {
        AssignmentOutcome::Created(row) => Ok((StatusCode::CREATED, Json(row))),
        AssignmentOutcome::AlreadyAssigned => Err(AppError::Core(CoreError::Conflict(
            "Equipment is already assigned to this operational location".into(),
        ))),
    }
}

/// PUT /api/v1/equipment/transfer/{equipment_uuid}/{location_code}
pub async fn set_transfer(
    State(state): State<AppState>,
    Path((equipment_uuid, location_code)): Path<(Uuid, String)>,
) -> AppResult<Json<MessageResponse>> {
    let updated = EquipmentRepo::set_transfer(&state.pool, equipment_uuid, &location_code).await?;
    if !updated {
        return Err(equipment_not_found(equipment_uuid));
    }
    Ok(Json(MessageResponse {
        message: "Transfer location updated",
    }))
}

/// GET /api/v1/equipment/{uuid}/operational-locations
pub async fn operational_locations(
    State(state): State<AppState>,
    Path(equipment_uuid): Path<Uuid>,
) -> AppResult<Json<Vec<String>>> {
    let codes = EquipmentRepo::operational_locations(&state.pool, equipment_uuid).await?;
    Ok(Json(codes))
}

fn equipment_not_found(equipment_uuid: Uuid) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Equipment",
        key: equipment_uuid.to_string(),
    })
}
