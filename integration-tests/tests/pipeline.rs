use integration_tests::harness::{LogDir, capture_events};
use pretty_assertions::assert_eq;
use reqstat_core::conf::ReportConfig;
use reqstat_core::engine::{EngineState, Registry, ReportEngine};
use reqstat_core::stats::Handler;
use reqstat_core::{ErrorKind, ReportError};
use serde_json::json;
use tracing::Level;

fn builtin_engine() -> ReportEngine {
    Registry::builtin()
        .build_engine(&ReportConfig::default(), "average")
        .unwrap_or_else(|e| panic!("failed to build engine: {e}"))
}

#[test]
fn two_files_merge_into_ranked_report() {
    // Arrange
    let logs = LogDir::new();
    let a = logs.write_records(
        "a.log",
        &[
            json!({"url": "/a", "response_time": 100}),
            json!({"url": "/a", "response_time": 200}),
            json!({"url": "/b", "response_time": 50}),
        ],
    );
    let b = logs.write_records("b.log", &[json!({"url": "/a", "response_time": 300})]);
    let mut engine = builtin_engine();

    // Act
    let report = engine.build_report(&[a, b], None).unwrap();

    // Assert
    let rows: Vec<_> = report
        .entries()
        .iter()
        .map(|e| (e.idx, e.handler.as_ref().map(Handler::as_str), e.total, e.avg_response_time))
        .collect();
    assert_eq!(rows, vec![(0, Some("/a"), 3, 200.0), (1, Some("/b"), 1, 50.0)]);
}

#[test]
fn ties_resolve_identically_for_one_or_many_files() {
    // Arrange
    let logs = LogDir::new();
    let rows = [
        json!({"url": "/first", "response_time": 1}),
        json!({"url": "/second", "response_time": 2}),
        json!({"url": "/third", "response_time": 3}),
    ];
    let single = logs.write_records("single.log", &rows);
    let parts = [
        logs.write_records("p1.log", &rows[..1]),
        logs.write_records("p2.log", &rows[1..2]),
        logs.write_records("p3.log", &rows[2..]),
    ];

    // Act
    let one = builtin_engine().build_report(&[single], None).unwrap();
    let many = builtin_engine().build_report(&parts, None).unwrap();

    // Assert
    assert_eq!(one, many);
    let order: Vec<_> = one
        .entries()
        .iter()
        .map(|e| e.handler.as_ref().map(Handler::as_str))
        .collect();
    assert_eq!(order, vec![Some("/first"), Some("/second"), Some("/third")]);
}

#[test]
fn date_filter_keeps_only_matching_day() {
    // Arrange
    let logs = LogDir::new();
    let path = logs.write_records(
        "day.log",
        &[
            json!({"@timestamp": "2023-01-01T12:00:00", "url": "/kept", "response_time": 10}),
            json!({"@timestamp": "2023-01-02T00:00:00", "url": "/dropped", "response_time": 10}),
        ],
    );
    let mut engine = builtin_engine();

    // Act
    let report = engine.build_report(&[path], Some("2023-01-01")).unwrap();

    // Assert
    assert_eq!(report.len(), 1);
    assert!(report.get(Some(&Handler::from("/kept"))).is_some());
    assert!(report.get(Some(&Handler::from("/dropped"))).is_none());
}

#[test]
fn malformed_line_is_skipped_with_warning() {
    // Arrange
    let logs = LogDir::new();
    let path = logs.write_raw(
        "mixed.log",
        concat!(
            "{\"url\": \"/a\", \"response_time\": 10}\n",
            "{\"url\": \"/a\", \"response_time\": \n",
            "{\"url\": \"/a\", \"response_time\": 30}\n",
        ),
    );
    let mut engine = builtin_engine();

    // Act
    let (report, events) = capture_events(|| engine.build_report(&[&path], None));

    // Assert
    let report = report.unwrap();
    let a = report.get(Some(&Handler::from("/a"))).unwrap();
    assert_eq!(a.total, 2);
    assert_eq!(a.avg_response_time, 20.0);

    let warnings: Vec<_> = events
        .iter()
        .filter(|e| e.level == Level::WARN)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].message(), Some("skipping malformed log line"));
    assert_eq!(warnings[0].field("line"), Some("2"));
}

#[test]
fn render_writes_table_for_merged_report() {
    // Arrange
    let logs = LogDir::new();
    let path = logs.write_records(
        "render.log",
        &[
            json!({"url": "/api/users", "response_time": 100}),
            json!({"url": "/api/users", "response_time": 150}),
            json!({"url": "/api/products", "response_time": 200}),
        ],
    );
    let mut engine = builtin_engine();
    let mut out = Vec::new();

    // Act
    engine.run_with_output(&[path], None, &mut out).unwrap();

    // Assert
    let table = String::from_utf8(out).unwrap();
    let users = table.lines().find(|l| l.contains("/api/users")).unwrap();
    assert!(users.contains("125"));
    let products = table.lines().find(|l| l.contains("/api/products")).unwrap();
    assert!(products.contains("200"));
    assert!(table.find("/api/users").unwrap() < table.find("/api/products").unwrap());
    assert_eq!(engine.state(), &EngineState::Done);
}

#[test]
fn missing_file_aborts_run_and_logs_error() {
    // Arrange
    let logs = LogDir::new();
    let good = logs.write_records("good.log", &[json!({"url": "/a", "response_time": 1})]);
    let missing = logs.path("missing.log");
    let mut engine = builtin_engine();
    let mut out = Vec::new();

    // Act
    let (result, events) =
        capture_events(|| engine.run_with_output(&[good, missing], None, &mut out));

    // Assert
    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(out.is_empty());
    assert!(
        events
            .iter()
            .any(|e| e.level == Level::ERROR && e.message() == Some("report run failed"))
    );
}

#[test]
fn file_with_no_records_for_date_fails_run() {
    // Arrange
    let logs = LogDir::new();
    let a = logs.write_records(
        "a.log",
        &[json!({"@timestamp": "2023-01-01T00:00:00", "url": "/a", "response_time": 1})],
    );
    let b = logs.write_records(
        "b.log",
        &[json!({"@timestamp": "2023-01-05T00:00:00", "url": "/a", "response_time": 1})],
    );
    let mut engine = builtin_engine();

    // Act
    let err = engine.build_report(&[a, b.clone()], Some("2023-01-01")).unwrap_err();

    // Assert
    match err {
        ReportError::NoMatchingRecords { path } => assert_eq!(path, b),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn record_without_response_time_fails_run() {
    let logs = LogDir::new();
    let path = logs.write_records("bad.log", &[json!({"url": "/a"})]);

    let err = builtin_engine().build_report(&[path], None).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}
