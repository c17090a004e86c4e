//! Location-assignment operations for equipment.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entity::Entity;
use crate::models::operational_location::OperationalLocation;

/// Result of an operational-location assignment attempt.
#[derive(Debug)]
pub enum AssignmentOutcome {
    /// A new join row was created.
    Created(OperationalLocation),
    /// The pair was already assigned; nothing was written.
    AlreadyAssigned,
}

/// Assignment operations the generic engine cannot express.
pub struct EquipmentRepo;

impl EquipmentRepo {
    /// Overwrite the equipment's current technical location. Idempotent.
    ///
    /// Returns `false` when no equipment row matched; the referenced
    /// location is left to the foreign key to enforce.
    pub async fn assign_technical_location(
        pool: &PgPool,
        equipment_uuid: Uuid,
        location_code: &str,
    ) -> Result<bool, sqlx::Error> {
        tracing::debug!(
            entity = "Equipment",
            key = %equipment_uuid,
            location = location_code,
            "assign_technical_location"
        );
        let result = sqlx::query(
            "UPDATE equipment SET technical_location = $2, updated_at = now() WHERE uuid = $1",
        )
        .bind(equipment_uuid)
        .bind(location_code)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Overwrite the equipment's pending transfer destination. Idempotent.
    pub async fn set_transfer(
        pool: &PgPool,
        equipment_uuid: Uuid,
        location_code: &str,
    ) -> Result<bool, sqlx::Error> {
        tracing::debug!(
            entity = "Equipment",
            key = %equipment_uuid,
            location = location_code,
            "set_transfer"
        );
        let result = sqlx::query(
            "UPDATE equipment SET transfer_location = $2, updated_at = now() WHERE uuid = $1",
        )
        .bind(equipment_uuid)
        .bind(location_code)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Add a row to the equipment/location join table.
    ///
    /// The insert and the duplicate check are a single statement: the
    /// composite primary key absorbs the conflict and an absent returned
    /// row means the pair was already assigned. There is no window in
    /// which a concurrent caller could create a duplicate.
    pub async fn assign_operational_location(
        pool: &PgPool,
        equipment_uuid: Uuid,
        location_code: &str,
    ) -> Result<AssignmentOutcome, sqlx::Error> {
        tracing::debug!(
            entity = OperationalLocation::DISPLAY_NAME,
            key = %equipment_uuid,
            location = location_code,
            "assign_operational_location"
        );
        let query = format!(
            "INSERT INTO {table} (equipment_uuid, location_technical_code) \
             VALUES ($1, $2) \
             ON CONFLICT (equipment_uuid, location_technical_code) DO NOTHING \
             RETURNING {columns}",
            table = OperationalLocation::TABLE,
            columns = OperationalLocation::COLUMNS,
        );
        let row = sqlx::query_as::<_, OperationalLocation>(&query)
            .bind(equipment_uuid)
            .bind(location_code)
            .fetch_optional(pool)
            .await?;
        Ok(match row {
            Some(created) => AssignmentOutcome::Created(created),
            None => AssignmentOutcome::AlreadyAssigned,
        })
    }

    /// The location codes currently joined to the given equipment.
    pub async fn operational_locations(
        pool: &PgPool,
        equipment_uuid: Uuid,
    ) -> Result<Vec<String>, sqlx::Error> {
        tracing::debug!(
            entity = OperationalLocation::DISPLAY_NAME,
            key = %equipment_uuid,
            "operational_locations"
        );
        sqlx::query_scalar::<_, String>(
            "SELECT location_technical_code FROM equipment_operational_locations \
             WHERE equipment_uuid = $1",
        )
        .bind(equipment_uuid)
        .fetch_all(pool)
        .await
    }
}
