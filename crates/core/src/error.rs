/// Domain-level errors shared across crates.
///
/// Payload-validation failures carry structured per-field violations and
/// live in the db layer's error type instead; these are the outcomes that
/// need no extra structure.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with key {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Conflict: {0}")]
    Conflict(String),
}
