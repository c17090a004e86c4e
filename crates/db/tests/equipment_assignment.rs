//! Integration tests for the equipment location-assignment extension.
//!
//! - Idempotent overwrite of the single-valued location fields
//! - Atomic duplicate protection on the many-to-many join
//! - Listing of joined location codes

use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use mainteq_db::crud::Crud;
use mainteq_db::models::brand::Brand;
use mainteq_db::models::equipment::Equipment;
use mainteq_db::models::location_type::LocationType;
use mainteq_db::repositories::{AssignmentOutcome, EquipmentRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Seed a brand, a location type, a root location plus one child, and one
/// piece of equipment. Returns the equipment.
async fn seed_fixture(pool: &PgPool) -> Equipment {
    let brand = Crud::<Brand>::insert(pool, &json!({ "name": "Acme" }))
        .await
        .unwrap();
    let location_type = Crud::<LocationType>::insert(
        pool,
        &json!({
            "name": "Building",
            "name_template": "Building {n}",
            "code_template": "BLD-{n}",
        }),
    )
    .await
    .unwrap();
    Crud::<mainteq_db::models::technical_location::TechnicalLocation>::insert(
        pool,
        &json!({
            "technical_code": "SEDE",
            "name": "Headquarters",
            "type_id": location_type.id,
        }),
    )
    .await
    .unwrap();
    Crud::<mainteq_db::models::technical_location::TechnicalLocation>::insert(
        pool,
        &json!({
            "technical_code": "SEDE-A1",
            "name": "Room A1",
            "type_id": location_type.id,
            "parent_technical_code": "SEDE",
        }),
    )
    .await
    .unwrap();

    Crud::<Equipment>::insert(
        pool,
        &json!({
            "technical_code": "EQ-1",
            "name": "Air handler",
            "serial_number": "SN-100",
            "brand_id": brand.id,
        }),
    )
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Test: idempotent overwrite of single-valued fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn assign_technical_location_is_an_idempotent_overwrite(pool: PgPool) {
    let equipment = seed_fixture(&pool).await;

    let first = EquipmentRepo::assign_technical_location(&pool, equipment.uuid, "SEDE-A1")
        .await
        .unwrap();
    let second = EquipmentRepo::assign_technical_location(&pool, equipment.uuid, "SEDE-A1")
        .await
        .unwrap();
    assert!(first);
    assert!(second);

    let reloaded = Crud::<Equipment>::find_by_key(&pool, &equipment.uuid)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.technical_location.as_deref(), Some("SEDE-A1"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn assign_technical_location_reports_missing_equipment(pool: PgPool) {
    seed_fixture(&pool).await;

    let updated = EquipmentRepo::assign_technical_location(&pool, Uuid::new_v4(), "SEDE-A1")
        .await
        .unwrap();
    assert!(!updated);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_transfer_overwrites_the_transfer_field(pool: PgPool) {
    let equipment = seed_fixture(&pool).await;

    let updated = EquipmentRepo::set_transfer(&pool, equipment.uuid, "SEDE-A1")
        .await
        .unwrap();
    assert!(updated);

    let reloaded = Crud::<Equipment>::find_by_key(&pool, &equipment.uuid)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.transfer_location.as_deref(), Some("SEDE-A1"));
    assert!(reloaded.technical_location.is_none()); // separate field
}

// ---------------------------------------------------------------------------
// Test: duplicate-protected join insertion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_operational_assignment_is_a_conflict(pool: PgPool) {
    let equipment = seed_fixture(&pool).await;

    let first = EquipmentRepo::assign_operational_location(&pool, equipment.uuid, "SEDE-A1")
        .await
        .unwrap();
    match first {
        AssignmentOutcome::Created(row) => {
            assert_eq!(row.equipment_uuid, equipment.uuid);
            assert_eq!(row.location_technical_code, "SEDE-A1");
        }
        AssignmentOutcome::AlreadyAssigned => panic!("first assignment must create a row"),
    }

    let second = EquipmentRepo::assign_operational_location(&pool, equipment.uuid, "SEDE-A1")
        .await
        .unwrap();
    assert!(matches!(second, AssignmentOutcome::AlreadyAssigned));

    // Exactly one join row survives.
    let codes = EquipmentRepo::operational_locations(&pool, equipment.uuid)
        .await
        .unwrap();
    assert_eq!(codes, vec!["SEDE-A1".to_string()]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn operational_locations_lists_all_joined_codes(pool: PgPool) {
    let equipment = seed_fixture(&pool).await;

    EquipmentRepo::assign_operational_location(&pool, equipment.uuid, "SEDE")
        .await
        .unwrap();
    EquipmentRepo::assign_operational_location(&pool, equipment.uuid, "SEDE-A1")
        .await
        .unwrap();

    let mut codes = EquipmentRepo::operational_locations(&pool, equipment.uuid)
        .await
        .unwrap();
    codes.sort_unstable();
    assert_eq!(codes, vec!["SEDE".to_string(), "SEDE-A1".to_string()]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn operational_locations_of_unassigned_equipment_is_empty(pool: PgPool) {
    let equipment = seed_fixture(&pool).await;

    let codes = EquipmentRepo::operational_locations(&pool, equipment.uuid)
        .await
        .unwrap();
    assert!(codes.is_empty());
}
