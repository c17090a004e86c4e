//! Route definitions for the `/equipment` resource.

use axum::routing::{get, post, put};
use axum::Router;

use mainteq_db::models::equipment::Equipment;

use crate::crud_routes;
use crate::handlers::equipment;
use crate::state::AppState;

/// Routes mounted at `/equipment`.
///
/// ```text
/// GET    /                                                   -> list
/// POST   /                                                   -> create
/// GET    /{uuid}                                             -> get_by_key
/// PUT    /{uuid}                                             -> update
/// DELETE /{uuid}                                             -> delete
///
/// PUT    /assign/technical-location/{uuid}/{location_code}   -> overwrite current location
/// POST   /assign/operational-location/{uuid}/{location_code} -> join, 409 on duplicate
/// PUT    /transfer/{uuid}/{location_code}                    -> overwrite transfer target
/// GET    /{uuid}/operational-locations                       -> joined location codes
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(crud_routes::list::<Equipment>).post(crud_routes::insert::<Equipment>),
        )
        .route(
            "/{uuid}",
            get(crud_routes::get_by_key::<Equipment>)
                .put(crud_routes::update::<Equipment>)
                .delete(crud_routes::delete::<Equipment>),
        )
        .route(
            "/assign/technical-location/{equipment_uuid}/{location_code}",
            put(equipment::assign_technical_location),
        )
        .route(
            "/assign/operational-location/{equipment_uuid}/{location_code}",
            post(equipment::assign_operational_location),
        )
        .route(
            "/transfer/{equipment_uuid}/{location_code}",
            put(equipment::set_transfer),
        )
        .route(
            "/{uuid}/operational-locations",
            get(equipment::operational_locations),
        )
}
