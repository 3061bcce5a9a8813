//! Tests for the interactive advising menu

use std::io::Cursor;
use std::path::PathBuf;

use tempfile::TempDir;

use coursecat::cli::Session;

const SAMPLE: &str = "\
CSCI100,Introduction to Computer Science
CSCI101,Introduction to Programming in C++
CSCI200,Data Structures,CSCI101
CSCI300,Introduction to Algorithms,CSCI200,MATH201
MATH201,Discrete Mathematics
";

fn write_catalog(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("courses.csv");
    std::fs::write(&path, content).expect("write catalog file");
    path
}

fn run_menu(session: &mut Session, input: &str) -> String {
    let mut out = Vec::new();
    session
        .run(Cursor::new(input.as_bytes()), &mut out)
        .expect("menu run");
    String::from_utf8(out).expect("utf8 output")
}

#[test]
fn given_no_load_when_listing_then_refused() {
    // Arrange
    let mut session = Session::new(None);

    // Act
    let output = run_menu(&mut session, "2\n9\n");

    // Assert
    assert!(output.contains("Please load the data structure first (option 1)."));
    assert!(!session.data_loaded());
}

#[test]
fn given_sample_catalog_when_loading_listing_and_looking_up_then_full_flow_works() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_catalog(&temp, SAMPLE);
    let mut session = Session::new(None);

    // Act: load, list, show one course (lowercase), exit
    let script = format!("1\n{}\n2\n3\ncsci300\n9\n", path.display());
    let output = run_menu(&mut session, &script);

    // Assert
    assert!(output.contains("Loaded 5 courses."));
    assert!(output.contains("Here is a sample schedule:"));
    let listing_order = [
        "CSCI100, Introduction to Computer Science",
        "CSCI101, Introduction to Programming in C++",
        "CSCI200, Data Structures",
        "CSCI300, Introduction to Algorithms",
        "MATH201, Discrete Mathematics",
    ];
    let mut last = 0;
    for line in listing_order {
        let pos = output.find(line).unwrap_or_else(|| panic!("missing {line:?}"));
        assert!(pos > last, "listing out of order at {line:?}");
        last = pos;
    }
    assert!(output.contains("Prerequisites: CSCI200, MATH201"));
    assert!(output.contains("Thank you for using the course planner!"));
    assert!(session.data_loaded());
    assert_eq!(session.loaded_count(), 5);
}

#[test]
fn given_missing_file_when_loading_then_failure_reported_and_not_loaded() {
    // Arrange
    let mut session = Session::new(None);

    // Act
    let output = run_menu(&mut session, "1\n/nonexistent/courses.csv\n9\n");

    // Assert
    assert!(output.contains("Failed to load courses."));
    assert!(!session.data_loaded());
    assert_eq!(session.loaded_count(), 0);
}

#[test]
fn given_unknown_course_when_showing_then_not_found_message() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_catalog(&temp, SAMPLE);
    let mut session = Session::new(None);

    // Act
    let script = format!("1\n{}\n3\nmath999\n9\n", path.display());
    let output = run_menu(&mut session, &script);

    // Assert: query echoed uppercased
    assert!(output.contains("Course MATH999 not found."));
}

#[test]
fn given_invalid_choice_when_selecting_then_reprompted() {
    // Arrange
    let mut session = Session::new(None);

    // Act
    let output = run_menu(&mut session, "7\n9\n");

    // Assert
    assert!(output.contains("7 is not a valid option."));
    assert!(output.contains("Thank you for using the course planner!"));
}

#[test]
fn given_default_file_when_load_input_blank_then_default_used() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_catalog(&temp, SAMPLE);
    let mut session = Session::new(Some(path));

    // Act
    let output = run_menu(&mut session, "1\n\n9\n");

    // Assert
    assert!(output.contains("Loaded 5 courses."));
    assert!(session.data_loaded());
}

#[test]
fn given_end_of_input_when_running_then_loop_exits_cleanly() {
    let mut session = Session::new(None);
    let output = run_menu(&mut session, "");
    assert!(output.contains("Welcome to the course planner."));
}
