pub mod enums;
pub mod equipment;
pub mod health;
pub mod technical_location;

use axum::Router;

use mainteq_db::models::brand::Brand;
use mainteq_db::models::location_type::LocationType;
use mainteq_db::models::operational_location::OperationalLocation;
use mainteq_db::models::report::Report;
use mainteq_db::models::report_origin::ReportOrigin;
use mainteq_db::models::report_update::ReportUpdate;
use mainteq_db::models::technical_team::TechnicalTeam;
use mainteq_db::models::technician::Technician;
use mainteq_db::models::user::User;

use crate::crud_routes::resource_router;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Every resource gets the standard pair (collection + item); locations
/// and equipment add their extension routes.
///
/// ```text
/// /users                                     list, create
/// /users/{uuid}                              get, update, delete
/// /technicians, /technical-teams,
/// /technical-location-types, /brands,
/// /report-origins, /reports,
/// /report-updates                            same pattern
///
/// /technical-locations                       list, create (derived code)
/// /technical-locations/{code}                get, update, delete
/// /technical-locations/{code}/children       direct children
///
/// /equipment                                 list, create
/// /equipment/{uuid}                          get, update, delete
/// /equipment/{uuid}/operational-locations    joined location codes
/// /equipment/assign/technical-location/...   overwrite current location
/// /equipment/assign/operational-location/... join (409 on duplicate)
/// /equipment/transfer/...                    overwrite transfer target
///
/// /equipment-operational-locations           list, create
/// /equipment-operational-locations/{u}/{c}   get, update, delete (composite key)
///
/// /enums/...                                 allowed values per enum type
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", resource_router::<User>("/{uuid}"))
        .nest("/technicians", resource_router::<Technician>("/{uuid}"))
        .nest("/technical-teams", resource_router::<TechnicalTeam>("/{id}"))
        .nest("/technical-locations", technical_location::router())
        .nest(
            "/technical-location-types",
            resource_router::<LocationType>("/{id}"),
        )
        .nest("/brands", resource_router::<Brand>("/{id}"))
        .nest("/equipment", equipment::router())
        .nest(
            "/equipment-operational-locations",
            resource_router::<OperationalLocation>("/{equipment_uuid}/{location_technical_code}"),
        )
        .nest("/report-origins", resource_router::<ReportOrigin>("/{id}"))
        .nest("/reports", resource_router::<Report>("/{id}"))
        .nest("/report-updates", resource_router::<ReportUpdate>("/{id}"))
        .nest("/enums", enums::router())
}
