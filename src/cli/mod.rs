//! CLI layer: argument parsing, command dispatch, and the advising menu

pub mod args;
pub mod commands;
pub mod error;
pub mod menu;
pub mod output;

pub use args::{Cli, Commands};
pub use error::{CliError, CliResult};
pub use menu::Session;
