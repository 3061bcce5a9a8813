//! Course entity and record parsing

use crate::domain::error::{DomainError, DomainResult};

/// Field delimiter for catalog source lines.
pub const DELIMITER: char = ',';

/// A course record from the catalog source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Unique course code, uppercased (e.g., "CSCI200")
    pub identifier: String,
    /// Course title, trimmed, case preserved
    pub title: String,
    /// Prerequisite course codes, uppercased, input order preserved
    pub prerequisites: Vec<String>,
}

impl Course {
    /// Parse one delimited catalog line.
    ///
    /// Returns:
    /// - `Ok(Some(course))` for a valid line
    /// - `Ok(None)` for a blank line (skipped, not an error)
    /// - `Err(MalformedRecord)` for a line with fewer than 2 fields
    ///
    /// Fields are split on commas and trimmed. The identifier and all
    /// prerequisite codes are uppercased so inputs like "csci400" match;
    /// the title keeps its case. Prerequisite fields that are empty after
    /// trimming are dropped. No existence check is done on prerequisites.
    ///
    /// # Arguments
    /// * `line` - Raw source line
    /// * `line_no` - 1-based line number, for error reporting only
    pub fn parse_line(line: &str, line_no: usize) -> DomainResult<Option<Self>> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
        if fields.len() < 2 {
            return Err(DomainError::MalformedRecord {
                line_no,
                line: line.to_string(),
            });
        }

        let prerequisites = fields[2..]
            .iter()
            .filter(|f| !f.is_empty())
            .map(|f| normalize_identifier(f))
            .collect();

        Ok(Some(Self {
            identifier: normalize_identifier(fields[0]),
            title: fields[1].to_string(),
            prerequisites,
        }))
    }
}

/// Normalize a course code: trim and uppercase.
pub fn normalize_identifier(raw: &str) -> String {
    raw.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_line_without_prerequisites_when_parsing_then_prerequisites_empty() {
        let course = Course::parse_line("CSCI100,Introduction to Computer Science", 1)
            .unwrap()
            .unwrap();

        assert_eq!(course.identifier, "CSCI100");
        assert_eq!(course.title, "Introduction to Computer Science");
        assert!(course.prerequisites.is_empty());
    }

    #[test]
    fn given_lowercase_codes_when_parsing_then_codes_uppercased_title_untouched() {
        let course = Course::parse_line("csci200, Data Structures, csci100", 7)
            .unwrap()
            .unwrap();

        assert_eq!(course.identifier, "CSCI200");
        assert_eq!(course.title, "Data Structures");
        assert_eq!(course.prerequisites, vec!["CSCI100"]);
    }

    #[test]
    fn given_blank_line_when_parsing_then_no_record_and_no_error() {
        assert_eq!(Course::parse_line("", 3).unwrap(), None);
        assert_eq!(Course::parse_line("   \t ", 4).unwrap(), None);
    }

    #[test]
    fn given_single_field_when_parsing_then_malformed_record() {
        let err = Course::parse_line("CSCI100", 2).unwrap_err();
        match err {
            DomainError::MalformedRecord { line_no, line } => {
                assert_eq!(line_no, 2);
                assert_eq!(line, "CSCI100");
            }
        }
    }

    #[test]
    fn given_empty_prerequisite_fields_when_parsing_then_dropped() {
        let course = Course::parse_line("CSCI300,Algorithms,CSCI200,, MATH201 ,", 1)
            .unwrap()
            .unwrap();

        assert_eq!(course.prerequisites, vec!["CSCI200", "MATH201"]);
    }

    #[test]
    fn given_duplicate_prerequisites_when_parsing_then_preserved_verbatim() {
        let course = Course::parse_line("CSCI300,Algorithms,CSCI200,CSCI200", 1)
            .unwrap()
            .unwrap();

        assert_eq!(course.prerequisites, vec!["CSCI200", "CSCI200"]);
    }
}
