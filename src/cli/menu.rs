//! Interactive advising menu
//!
//! Session state (whether a load has succeeded, last load count) lives
//! here, not in the store: a store holding zero courses after a successful
//! load is "loaded empty", which is different from "never loaded".

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::application::CatalogService;
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::domain::normalize_identifier;

/// Advising menu session wrapping a catalog.
#[derive(Debug, Default)]
pub struct Session {
    catalog: CatalogService,
    data_loaded: bool,
    loaded_count: usize,
    default_file: Option<PathBuf>,
}

impl Session {
    pub fn new(default_file: Option<PathBuf>) -> Self {
        Self {
            catalog: CatalogService::new(),
            data_loaded: false,
            loaded_count: 0,
            default_file,
        }
    }

    /// Run the menu loop until Exit (9) or end of input.
    #[instrument(level = "debug", skip_all)]
    pub fn run(&mut self, mut input: impl BufRead, out: &mut impl Write) -> CliResult<()> {
        writeln!(out, "Welcome to the course planner.")?;
        writeln!(out)?;

        loop {
            writeln!(out, "  1. Load Data Structure.")?;
            writeln!(out, "  2. Print Course List.")?;
            writeln!(out, "  3. Print Course.")?;
            writeln!(out, "  9. Exit")?;
            writeln!(out)?;
            write!(out, "What would you like to do? ")?;
            out.flush()?;

            let Some(choice_line) = read_line(&mut input)? else {
                break;
            };
            let choice: u32 = choice_line.trim().parse().unwrap_or(0);
            writeln!(out)?;

            match choice {
                1 => self.load_data(&mut input, out)?,
                2 => self.print_course_list(out)?,
                3 => self.print_course(&mut input, out)?,
                9 => {
                    writeln!(out, "Thank you for using the course planner!")?;
                    break;
                }
                _ => {
                    writeln!(out, "{} is not a valid option.", choice_line.trim())?;
                    writeln!(out)?;
                }
            }
        }
        Ok(())
    }

    fn load_data(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> CliResult<()> {
        let default_hint = self
            .default_file
            .as_deref()
            .map(|p| format!(" [{}]", p.display()))
            .unwrap_or_default();
        write!(
            out,
            "Enter the name of the data file (or full path){}: ",
            default_hint
        )?;
        out.flush()?;

        let Some(raw) = read_line(input)? else {
            return Ok(());
        };
        let entered = raw.trim();
        let path: PathBuf = if entered.is_empty() {
            match &self.default_file {
                Some(default) => default.clone(),
                None => {
                    writeln!(out, "No file given.")?;
                    writeln!(out)?;
                    return Ok(());
                }
            }
        } else {
            PathBuf::from(entered)
        };

        match self.catalog.load(&path) {
            Ok(report) => {
                self.data_loaded = true;
                self.loaded_count = report.loaded;
                writeln!(out, "Loaded {} courses.", report.loaded)?;
                if report.skipped > 0 {
                    writeln!(out, "Skipped {} malformed lines.", report.skipped)?;
                }
            }
            Err(e) => {
                self.data_loaded = false;
                self.loaded_count = 0;
                debug!("load failed: {e}");
                output::error(&e);
                writeln!(
                    out,
                    "Failed to load courses. Please check the file and try again."
                )?;
            }
        }
        writeln!(out)?;
        Ok(())
    }

    fn print_course_list(&self, out: &mut impl Write) -> CliResult<()> {
        if !self.require_loaded(out)? {
            return Ok(());
        }
        writeln!(out, "Here is a sample schedule:")?;
        for course in self.catalog.list_sorted() {
            writeln!(out, "{}", output::course_line(course))?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn print_course(&self, input: &mut impl BufRead, out: &mut impl Write) -> CliResult<()> {
        if !self.require_loaded(out)? {
            return Ok(());
        }
        write!(out, "What course do you want to know about? ")?;
        out.flush()?;

        let Some(raw) = read_line(input)? else {
            return Ok(());
        };
        let key = normalize_identifier(&raw);
        writeln!(out)?;

        match self.catalog.lookup(&key) {
            Some(course) => {
                writeln!(out, "{}", output::course_line(course))?;
                writeln!(out, "Prerequisites: {}", output::prerequisites_line(course))?;
            }
            None => {
                writeln!(out, "Course {} not found.", key)?;
            }
        }
        writeln!(out)?;
        Ok(())
    }

    fn require_loaded(&self, out: &mut impl Write) -> CliResult<bool> {
        if !self.data_loaded {
            writeln!(out, "Please load the data structure first (option 1).")?;
            writeln!(out)?;
            return Ok(false);
        }
        Ok(true)
    }

    pub fn data_loaded(&self) -> bool {
        self.data_loaded
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded_count
    }

    pub fn default_file(&self) -> Option<&Path> {
        self.default_file.as_deref()
    }
}

/// Read one line, `None` on end of input.
fn read_line(input: &mut impl BufRead) -> std::io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}
