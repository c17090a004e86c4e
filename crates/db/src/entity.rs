//! Entity schema registry.
//!
//! Each persisted entity implements [`Entity`] once, describing its table,
//! column lists, primary key, payload binding and validation rules. The
//! generic engine in [`crate::crud`] interprets the descriptor. There is
//! no runtime reflection, and adding an entity never touches the engine.

use serde::de::DeserializeOwned;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};
use uuid::Uuid;

use mainteq_core::types::DbId;
use mainteq_core::validation::FieldRule;

/// A `query_as` under construction, typed for Postgres.
pub type PgQueryAs<'q, T> = QueryAs<'q, Postgres, T, PgArguments>;

/// Storage mapping for one entity.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Unpin + Send + Sync + 'static {
    /// Payload accepted by insert and update, produced by validating the
    /// raw JSON body against [`Entity::rules`].
    type Payload: DeserializeOwned + Send + Sync;

    /// Primary key: a scalar for simple keys, a tuple for composite ones.
    type Key: KeyBind + DeserializeOwned + 'static;

    /// Table name in storage.
    const TABLE: &'static str;

    /// Entity name used in log context and error messages.
    const DISPLAY_NAME: &'static str;

    /// Full column list returned by every statement.
    const COLUMNS: &'static str;

    /// Columns written from the payload, in bind order.
    const PAYLOAD_COLUMNS: &'static [&'static str];

    /// Primary-key columns, in declaration order.
    const KEY_COLUMNS: &'static [&'static str];

    /// Whether the table carries an `updated_at` column the engine must
    /// maintain on update.
    const TRACKS_UPDATED_AT: bool = false;

    /// Validation rules applied to the raw JSON payload before any write.
    fn rules() -> &'static [FieldRule];

    /// Bind payload fields in [`Entity::PAYLOAD_COLUMNS`] order.
    fn bind_payload<'q>(
        query: PgQueryAs<'q, Self>,
        payload: &'q Self::Payload,
    ) -> PgQueryAs<'q, Self>;
}

/// Positional binding of a primary-key value.
///
/// Scalars cover single-column keys; tuples compose scalars into composite
/// keys of any arity, bound in declaration order. This is what lets the
/// engine's equality conjunction generalize beyond pairs.
pub trait KeyBind: Send + Sync {
    fn bind<'q, T>(&'q self, query: PgQueryAs<'q, T>) -> PgQueryAs<'q, T>;

    /// Human-readable rendering for log context and error messages.
    fn display(&self) -> String;
}

impl KeyBind for Uuid {
    fn bind<'q, T>(&'q self, query: PgQueryAs<'q, T>) -> PgQueryAs<'q, T> {
        query.bind(*self)
    }

    fn display(&self) -> String {
        self.to_string()
    }
}

impl KeyBind for DbId {
    fn bind<'q, T>(&'q self, query: PgQueryAs<'q, T>) -> PgQueryAs<'q, T> {
        query.bind(*self)
    }

    fn display(&self) -> String {
        self.to_string()
    }
}

impl KeyBind for String {
    fn bind<'q, T>(&'q self, query: PgQueryAs<'q, T>) -> PgQueryAs<'q, T> {
        query.bind(self.as_str())
    }

    fn display(&self) -> String {
        self.clone()
    }
}

impl<A: KeyBind, B: KeyBind> KeyBind for (A, B) {
    fn bind<'q, T>(&'q self, query: PgQueryAs<'q, T>) -> PgQueryAs<'q, T> {
        let query = self.0.bind(query);
        self.1.bind(query)
    }

    fn display(&self) -> String {
        format!("{}/{}", self.0.display(), self.1.display())
    }
}

impl<A: KeyBind, B: KeyBind, C: KeyBind> KeyBind for (A, B, C) {
    fn bind<'q, T>(&'q self, query: PgQueryAs<'q, T>) -> PgQueryAs<'q, T> {
        let query = self.0.bind(query);
        let query = self.1.bind(query);
        self.2.bind(query)
    }

    fn display(&self) -> String {
        format!(
            "{}/{}/{}",
            self.0.display(),
            self.1.display(),
            self.2.display()
        )
    }
}
