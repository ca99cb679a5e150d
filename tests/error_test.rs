//! Tests for error types

use std::path::PathBuf;

use trialbench::Error;

#[test]
fn test_report_init_error_names_path() {
    let error = Error::ReportInit {
        path: PathBuf::from("/no/such/dir/report.txt"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("cannot create report"));
    assert!(error_str.contains("/no/such/dir/report.txt"));
    assert!(error_str.contains("missing"));
}

#[test]
fn test_workload_error_is_verbatim() {
    let error = Error::workload("boom");
    assert_eq!(format!("{error}"), "boom");
}

#[test]
fn test_panicked_error_is_verbatim() {
    let error = Error::Panicked("index out of bounds".to_string());
    assert_eq!(format!("{error}"), "index out of bounds");
}

#[test]
fn test_serialization_error_conversion() {
    let json_error = serde_json::from_str::<u32>("not json").unwrap_err();
    let error: Error = json_error.into();
    assert!(format!("{error}").contains("serialization error"));
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let error: Error = io_error.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("IO error"));
    assert!(error_str.contains("pipe closed"));
}

#[test]
fn test_error_source_chain() {
    use std::error::Error as _;

    let error = Error::ReportInit {
        path: PathBuf::from("r.txt"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(error.source().is_some());
}
