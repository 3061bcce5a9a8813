//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the record format.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("malformed record at line {line_no}: expected at least 2 fields: {line:?}")]
    MalformedRecord { line_no: usize, line: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
