//! HTTP-level integration tests for the equipment assignment endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post, post_json, put};
use sqlx::PgPool;

/// Seed a brand, a location type, two locations and one piece of
/// equipment. Returns the equipment uuid.
async fn seed_fixture(pool: &PgPool) -> String {
    let brand = body_json(
        post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/brands",
            serde_json::json!({"name": "Acme"}),
        )
        .await,
    )
    .await;
    let location_type = body_json(
        post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/technical-location-types",
            serde_json::json!({
                "name": "Building",
                "name_template": "Building {n}",
                "code_template": "BLD-{n}",
            }),
        )
        .await,
    )
    .await;
    let type_id = location_type["id"].as_i64().unwrap();

    sqlx::query(
        "INSERT INTO technical_locations (technical_code, name, type_id) VALUES ($1, $2, $3)",
    )
    .bind("SEDE")
    .bind("Headquarters")
    .bind(type_id)
    .execute(pool)
    .await
    .unwrap();
    post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/technical-locations",
        serde_json::json!({
            "parent_technical_code": "SEDE",
            "code": "A1",
            "name": "Room A1",
            "type_id": type_id,
        }),
    )
    .await;

    let equipment = body_json(
        post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/equipment",
            serde_json::json!({
                "technical_code": "EQ-1",
                "name": "Air handler",
                "serial_number": "SN-100",
                "brand_id": brand["id"].as_i64().unwrap(),
            }),
        )
        .await,
    )
    .await;
    equipment["uuid"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Technical-location assignment (idempotent overwrite)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn assign_technical_location_twice_is_idempotent(pool: PgPool) {
    let uuid = seed_fixture(&pool).await;
    let path = format!("/api/v1/equipment/assign/technical-location/{uuid}/SEDE-A1");

    let first = put(common::build_test_app(pool.clone()), &path).await;
    assert_eq!(first.status(), StatusCode::OK);
    let second = put(common::build_test_app(pool.clone()), &path).await;
    assert_eq!(second.status(), StatusCode::OK);

    let equipment = body_json(
        get(
            common::build_test_app(pool),
            &format!("/api/v1/equipment/{uuid}"),
        )
        .await,
    )
    .await;
    assert_eq!(equipment["technical_location"], "SEDE-A1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn assign_technical_location_to_missing_equipment_returns_404(pool: PgPool) {
    seed_fixture(&pool).await;

    let response = put(
        common::build_test_app(pool),
        "/api/v1/equipment/assign/technical-location/7c9e6679-7425-40de-944b-e07fc1f90ae7/SEDE-A1",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Operational-location assignment (conflict on duplicates)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_operational_assignment_returns_409(pool: PgPool) {
    let uuid = seed_fixture(&pool).await;
    let path = format!("/api/v1/equipment/assign/operational-location/{uuid}/SEDE-A1");

    let first = post(common::build_test_app(pool.clone()), &path).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let created = body_json(first).await;
    assert_eq!(created["location_technical_code"], "SEDE-A1");

    let second = post(common::build_test_app(pool.clone()), &path).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let json = body_json(second).await;
    assert_eq!(json["code"], "CONFLICT");

    // Exactly one join row survives.
    let codes = body_json(
        get(
            common::build_test_app(pool),
            &format!("/api/v1/equipment/{uuid}/operational-locations"),
        )
        .await,
    )
    .await;
    assert_eq!(codes, serde_json::json!(["SEDE-A1"]));
}

// ---------------------------------------------------------------------------
// Transfer location
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_transfer_updates_the_transfer_field(pool: PgPool) {
    let uuid = seed_fixture(&pool).await;

    let response = put(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/equipment/transfer/{uuid}/SEDE-A1"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let equipment = body_json(
        get(
            common::build_test_app(pool),
            &format!("/api/v1/equipment/{uuid}"),
        )
        .await,
    )
    .await;
    assert_eq!(equipment["transfer_location"], "SEDE-A1");
    assert!(equipment["technical_location"].is_null());
}
