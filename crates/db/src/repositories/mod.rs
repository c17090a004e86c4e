//! Extension repositories layered on the generic engine.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument, covering the operations the
//! engine cannot express generically.

pub mod equipment_repo;
pub mod technical_location_repo;

pub use equipment_repo::{AssignmentOutcome, EquipmentRepo};
pub use technical_location_repo::TechnicalLocationRepo;
