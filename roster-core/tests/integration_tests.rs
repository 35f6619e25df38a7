//! Integration tests for roster-core
//!
//! Exercise the public API end to end: loading user files from a temp
//! directory, summarizing them, and recording events in the log database.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use std::path::PathBuf;

use tempfile::TempDir;

use roster_core::config::{Config, OutputFormat};
use roster_core::services::RosterService;
use roster_core::{
    calculate_average, process_users, EntryPoint, Error, LogEvent, LoggingService,
    OperationResult, RosterContext, User, UserStatistics,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

fn mixed_users() -> Vec<User> {
    vec![
        User::new("Alice", "alice@example.com").with_age(34),
        User::new("Bob", "bob@example.com").with_age(18),
        User::new("Charlie", "charlie@example.com").with_age(17),
        User::new("Dana", "dana.example.com"),
        User::new("Eve", ""),
    ]
}

// ============================================================================
// Statistics
// ============================================================================

#[test]
fn test_process_users_invariants() {
    let users = mixed_users();
    for n in 0..=users.len() {
        let stats = process_users(&users[..n]);
        assert_eq!(stats.total, n);
        assert!(stats.adults <= stats.total);
        assert!(stats.with_email <= stats.total);
    }
}

#[test]
fn test_process_users_mixed() {
    let stats = process_users(&mixed_users());
    assert_eq!(
        stats,
        UserStatistics {
            total: 5,
            adults: 2,
            with_email: 3,
        }
    );
}

#[test]
fn test_empty_average_message() {
    match calculate_average(&[]) {
        Err(Error::InvalidArgument(msg)) => {
            assert_eq!(msg, "Cannot calculate average of empty list")
        }
        other => panic!("expected invalid argument, got {:?}", other),
    }

    let result: roster_core::Result<f64> = calculate_average(&[]);
    let envelope: OperationResult<f64> = result.into();
    assert!(!envelope.success);
}

// ============================================================================
// Loading + context
// ============================================================================

#[test]
fn test_report_for_json_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "users.json",
        &serde_json::to_string(&mixed_users()).unwrap(),
    );

    let ctx = RosterContext::new(dir.path()).unwrap();
    let report = ctx.report_for_file(&path).unwrap();

    assert_eq!(report.statistics.total, 5);
    assert_eq!(report.statistics.adults, 2);
    let avg = report.average_age.unwrap();
    assert!((avg - 23.0).abs() < 1e-9);
}

#[test]
fn test_csv_and_json_agree() {
    let dir = TempDir::new().unwrap();
    let csv_path = write_file(
        &dir,
        "users.csv",
        "name,email,age\n\
         Alice,alice@example.com,34\n\
         Bob,bob@example.com,18\n\
         Charlie,charlie@example.com,17\n\
         Dana,dana.example.com,\n\
         Eve,,\n",
    );
    let json_path = write_file(
        &dir,
        "users.json",
        &serde_json::to_string(&mixed_users()).unwrap(),
    );

    let service = RosterService::new();
    let from_csv = service.load_file(&csv_path).unwrap();
    let from_json = service.load_file(&json_path).unwrap();

    assert_eq!(from_csv, from_json);
}

#[test]
fn test_missing_file_errors() {
    let dir = TempDir::new().unwrap();
    let ctx = RosterContext::new(dir.path()).unwrap();
    assert!(ctx.report_for_file(&dir.path().join("nope.json")).is_err());
}

#[test]
fn test_context_reads_config() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.output_format = OutputFormat::Json;
    config.save(dir.path()).unwrap();

    let ctx = RosterContext::new(dir.path()).unwrap();
    assert_eq!(ctx.config.output_format, OutputFormat::Json);
}

// ============================================================================
// Event log
// ============================================================================

#[test]
fn test_failure_event_omits_user_data() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "users.json",
        r#"[{"name": "Dana", "email": "dana@example.com", "age": "dana@example.com"}]"#,
    );

    let ctx = RosterContext::new(dir.path()).unwrap();
    let err = ctx.report_for_file(&path).unwrap_err();
    // The full chain carries the offending value
    assert!(format!("{:#}", err).contains("dana@example.com"));

    let logger = LoggingService::new(dir.path(), EntryPoint::Cli, "0.1.0").unwrap();
    logger.log(LogEvent::command_failed("stats", &err)).unwrap();

    let entries = logger.get_errors(10).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(logger.count_errors().unwrap(), 1);

    let dumped = serde_json::to_string(&entries).unwrap();
    assert!(dumped.contains("Failed to parse user file"));
    assert!(!dumped.contains("dana@example.com"));
}
