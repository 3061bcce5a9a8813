//! Catalog service
//!
//! Owns the ordered course store and handles reset-and-bulk-load from a
//! delimited text source.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{normalize_identifier, Course, CourseStore, DomainError};

/// Outcome of a successful bulk load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Records parsed and inserted
    pub loaded: usize,
    /// Malformed lines skipped with a warning
    pub skipped: usize,
}

/// Service owning the course store and its load/query operations.
#[derive(Debug, Default)]
pub struct CatalogService {
    store: CourseStore,
}

impl CatalogService {
    pub fn new() -> Self {
        Self {
            store: CourseStore::new(),
        }
    }

    /// Reset-and-bulk-load: clear the store, then insert every record that
    /// parses from `path`.
    ///
    /// Malformed lines are warned about and skipped; only an unreadable
    /// source fails the load as a whole. The store is cleared before the
    /// source is opened, so a failed load never leaves stale records behind
    /// and reloading can never silently merge with previous contents.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&mut self, path: &Path) -> ApplicationResult<LoadReport> {
        self.store.clear();

        let file = File::open(path).map_err(|e| ApplicationError::SourceUnreadable {
            path: path.to_path_buf(),
            source: e,
        })?;
        let reader = BufReader::new(file);

        let mut report = LoadReport {
            loaded: 0,
            skipped: 0,
        };

        for (idx, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                // A read failure mid-stream aborts the load; records already
                // inserted must not survive as partial state.
                Err(e) => {
                    self.store.clear();
                    return Err(ApplicationError::SourceUnreadable {
                        path: path.to_path_buf(),
                        source: e,
                    });
                }
            };

            match Course::parse_line(&line, idx + 1) {
                Ok(Some(course)) => {
                    if self.store.search(&course.identifier).is_some() {
                        // Retained as its own node (earliest-inserted wins on
                        // lookup); flagged so duplicate codes don't go unnoticed.
                        warn!(
                            "duplicate course identifier {:?} at line {}",
                            course.identifier,
                            idx + 1
                        );
                    }
                    self.store.insert(course);
                    report.loaded += 1;
                }
                Ok(None) => {} // blank line
                Err(DomainError::MalformedRecord { line_no, line }) => {
                    warn!("skipping malformed line {line_no}: {line:?}");
                    report.skipped += 1;
                }
            }
        }

        debug!(
            "loaded {} courses from {} ({} skipped)",
            report.loaded,
            path.display(),
            report.skipped
        );
        Ok(report)
    }

    /// Exact lookup by course code. The query is normalized the same way
    /// identifiers are at parse time, so "csci300 " finds "CSCI300".
    #[instrument(level = "debug", skip(self))]
    pub fn lookup(&self, identifier: &str) -> Option<&Course> {
        self.store.search(&normalize_identifier(identifier))
    }

    /// All courses in ascending identifier order.
    pub fn list_sorted(&self) -> Vec<&Course> {
        self.store.list_sorted()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
