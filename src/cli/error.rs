//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("course {0} not found")]
    CourseNotFound(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Application(e) => match e {
                ApplicationError::SourceUnreadable { .. } => crate::exitcode::NOINPUT,
                ApplicationError::Domain(_) => crate::exitcode::DATAERR,
            },
            CliError::CourseNotFound(_) => crate::exitcode::DATAERR,
            CliError::Io(_) => crate::exitcode::SOFTWARE,
        }
    }
}
