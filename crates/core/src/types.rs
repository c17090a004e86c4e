//! Primitive aliases shared across the workspace.

/// BIGSERIAL primary keys come back as this.
pub type DbId = i64;

/// Timestamps are UTC end to end.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
