//! Route definitions for the `/technical-locations` resource.
//!
//! Creation replaces the generic insert with derived-code construction;
//! the remaining CRUD operations come straight from the engine.

use axum::routing::get;
use axum::Router;

use mainteq_db::models::technical_location::TechnicalLocation;

use crate::crud_routes;
use crate::handlers::technical_location;
use crate::state::AppState;

/// Routes mounted at `/technical-locations`.
///
/// ```text
/// GET    /                            -> list
/// POST   /                            -> create (derived code)
/// GET    /{technical_code}            -> get_by_key
/// PUT    /{technical_code}            -> update
/// DELETE /{technical_code}            -> delete
/// GET    /{technical_code}/children   -> children
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(crud_routes::list::<TechnicalLocation>).post(technical_location::create),
        )
        .route(
            "/{technical_code}",
            get(crud_routes::get_by_key::<TechnicalLocation>)
                .put(crud_routes::update::<TechnicalLocation>)
                .delete(crud_routes::delete::<TechnicalLocation>),
        )
        .route(
            "/{technical_code}/children",
            get(technical_location::children),
        )
}
