//! Domain layer: entities and the ordered store
//!
//! This layer is independent of external concerns (no I/O, no CLI).

pub mod course;
pub mod error;
pub mod store;

pub use course::{normalize_identifier, Course, DELIMITER};
pub use error::{DomainError, DomainResult};
pub use store::CourseStore;
