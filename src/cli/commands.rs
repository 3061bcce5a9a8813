//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::{Command, CommandFactory};
use clap_complete::{generate, Generator};
use tracing::{debug, instrument};

use crate::application::CatalogService;
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::menu::Session;
use crate::cli::output;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Interactive { file }) => interactive(file.clone()),
        Some(Commands::List { file }) => list(file),
        Some(Commands::Show { file, identifier }) => show(file, identifier),
        Some(Commands::Completion { shell }) => {
            print_completions(*shell, &mut Cli::command());
            Ok(())
        }
        None => interactive(None),
    }
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

#[instrument]
fn interactive(file: Option<PathBuf>) -> CliResult<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    Session::new(file).run(stdin.lock(), &mut stdout)
}

#[instrument]
fn list(file: &Path) -> CliResult<()> {
    let mut catalog = CatalogService::new();
    let report = catalog.load(file)?;
    debug!("loaded {} courses", report.loaded);
    if report.skipped > 0 {
        output::warning(&format!("skipped {} malformed lines", report.skipped));
    }
    for course in catalog.list_sorted() {
        output::info(&output::course_line(course));
    }
    Ok(())
}

#[instrument]
fn show(file: &Path, identifier: &str) -> CliResult<()> {
    let mut catalog = CatalogService::new();
    let report = catalog.load(file)?;
    debug!("loaded {} courses", report.loaded);
    if report.skipped > 0 {
        output::warning(&format!("skipped {} malformed lines", report.skipped));
    }
    let course = catalog
        .lookup(identifier)
        .ok_or_else(|| CliError::CourseNotFound(crate::domain::normalize_identifier(identifier)))?;
    output::info(&output::course_line(course));
    output::info(&format!(
        "Prerequisites: {}",
        output::prerequisites_line(course)
    ));
    Ok(())
}
