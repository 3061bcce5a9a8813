//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Course catalog loader with sorted listing and advising lookup
#[derive(Parser, Debug)]
#[command(name = "coursecat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging. Multiple flags (-d -d) increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the advising menu (default)
    Interactive {
        /// Catalog file offered as the default when loading
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Load a catalog and print the sorted course list
    List {
        /// Catalog file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Load a catalog and print one course with its prerequisites
    Show {
        /// Catalog file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Course code, case-insensitive (e.g., csci300)
        identifier: String,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
