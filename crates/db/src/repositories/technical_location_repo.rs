//! Hierarchy operations for the `technical_locations` tree.

use serde_json::Value;
use sqlx::PgPool;

use crate::crud::{parse_body, Crud, CrudError};
use crate::entity::Entity;
use crate::models::technical_location::{
    NewLocation, TechnicalLocation, TechnicalLocationInput, NEW_LOCATION_RULES,
};

/// Tree-aware operations the generic engine cannot express.
pub struct TechnicalLocationRepo;

impl TechnicalLocationRepo {
    /// Create a location whose code is derived from its parent:
    /// `{parent}-{code}`.
    ///
    /// The body must carry `parent_technical_code`, `code`, `name` and
    /// `type_id`; a missing parent or suffix is a validation error. No
    /// collision handling beyond the primary-key constraint on the
    /// derived code.
    pub async fn create_derived(
        pool: &PgPool,
        body: &Value,
    ) -> Result<TechnicalLocation, CrudError> {
        let request: NewLocation =
            parse_body(TechnicalLocation::DISPLAY_NAME, NEW_LOCATION_RULES, body)?;

        let technical_code = format!(
            "{}-{}",
            request.parent_technical_code, request.code
        );
        tracing::debug!(
            entity = TechnicalLocation::DISPLAY_NAME,
            parent = %request.parent_technical_code,
            code = %technical_code,
            "create_derived"
        );

        let input = TechnicalLocationInput {
            technical_code,
            name: request.name,
            type_id: request.type_id,
            parent_technical_code: Some(request.parent_technical_code),
        };
        Crud::<TechnicalLocation>::insert_payload(pool, &input).await
    }

    /// All direct children of the given code.
    ///
    /// A row whose own code equals the queried code is excluded, so a
    /// legacy self-parented root can never appear as its own child.
    /// Returns an empty vec when there are none.
    pub async fn children(
        pool: &PgPool,
        technical_code: &str,
    ) -> Result<Vec<TechnicalLocation>, sqlx::Error> {
        let query = format!(
            "SELECT {columns} FROM {table} \
             WHERE parent_technical_code = $1 AND technical_code <> $1",
            columns = TechnicalLocation::COLUMNS,
            table = TechnicalLocation::TABLE,
        );
        tracing::debug!(
            entity = TechnicalLocation::DISPLAY_NAME,
            key = technical_code,
            "children"
        );
        sqlx::query_as::<_, TechnicalLocation>(&query)
            .bind(technical_code)
            .fetch_all(pool)
            .await
    }
}
