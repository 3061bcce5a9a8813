//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;
use itertools::Itertools;

use crate::domain::Course;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print plain output (no color, for data lines)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// One-line listing form: "CSCI100, Introduction to Computer Science"
pub fn course_line(course: &Course) -> String {
    format!("{}, {}", course.identifier, course.title)
}

/// Prerequisite rendering: "CSCI200, MATH201", or "None" for an empty list.
pub fn prerequisites_line(course: &Course) -> String {
    if course.prerequisites.is_empty() {
        "None".to_string()
    } else {
        course.prerequisites.iter().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(prerequisites: Vec<&str>) -> Course {
        Course {
            identifier: "CSCI300".to_string(),
            title: "Introduction to Algorithms".to_string(),
            prerequisites: prerequisites.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn given_course_when_rendering_line_then_identifier_comma_title() {
        assert_eq!(
            course_line(&sample(vec![])),
            "CSCI300, Introduction to Algorithms"
        );
    }

    #[test]
    fn given_prerequisites_when_rendering_then_comma_joined() {
        assert_eq!(
            prerequisites_line(&sample(vec!["CSCI200", "MATH201"])),
            "CSCI200, MATH201"
        );
    }

    #[test]
    fn given_no_prerequisites_when_rendering_then_none() {
        assert_eq!(prerequisites_line(&sample(vec![])), "None");
    }
}
