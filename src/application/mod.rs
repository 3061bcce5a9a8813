//! Application layer: catalog orchestration on top of the domain store

pub mod catalog;
pub mod error;

pub use catalog::{CatalogService, LoadReport};
pub use error::{ApplicationError, ApplicationResult};
