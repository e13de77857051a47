//! Tests for error types

use plategrowth::Error;

#[test]
fn test_precondition_error() {
    let error = Error::Precondition("baseline before cutoff".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("precondition violated"));
    assert!(error_str.contains("baseline before cutoff"));
}

#[test]
fn test_input_shape_error() {
    let error = Error::InputShape {
        context: "log series vs hours".to_string(),
        expected: 100,
        actual: 99,
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("input shape mismatch"));
    assert!(error_str.contains("expected 100"));
    assert!(error_str.contains("got 99"));
}

#[test]
fn test_unknown_well_error() {
    let error = Error::UnknownWell("H13".to_string());
    assert_eq!(format!("{error}"), "unknown well label: H13");
}

#[test]
fn test_well_error_wraps_source() {
    let source = Error::Precondition("cutoff unresolved".to_string());
    let error = Error::for_well("B4", source);
    let error_str = format!("{error}");
    assert!(error_str.contains("well B4"));
    assert!(error_str.contains("cutoff unresolved"));
    assert!(matches!(error, Error::Well { label, .. } if label == "B4"));
}

#[test]
fn test_parse_error() {
    let error = Error::Parse("non-numeric value \"OVRFLW\"".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("parse error"));
    assert!(error_str.contains("OVRFLW"));
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let error: Error = io.into();
    assert!(matches!(error, Error::Io(_)));
    assert!(format!("{error}").contains("no such file"));
}
