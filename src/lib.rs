//! coursecat: course catalog loader with sorted listing and advising lookup
//!
//! Courses live in an arena-backed binary search tree keyed by course code.
//! A catalog source is a comma-delimited text file, one course per line:
//!
//! ```text
//! CSCI300,Introduction to Algorithms,CSCI200,MATH201
//! ```
//!
//! Layering follows domain (entities + store, no I/O), application
//! (load orchestration), cli (args, menu, output).

pub mod application;
pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{CatalogService, LoadReport};
pub use domain::{Course, CourseStore};
