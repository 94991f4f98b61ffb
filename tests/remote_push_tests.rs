//! Remote push tests against mocked Loki endpoints
//!
//! These tests verify:
//! - Retry count and linear backoff timing
//! - The pushed payload shape and label precedence
//! - Fan-out from the logger to file and remote sinks together

mod common;

use common::PushEndpoint;
use rust_loki_logger::prelude::*;
use rust_loki_logger::writers::{LokiPayload, LokiWriter, RetryPolicy};
use std::collections::BTreeMap;
use std::fs;
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn labels(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn sample_entry() -> LogEntry {
    LogEntry::new(
        LogLevel::Error,
        "payment failed",
        vec![new_field("order_id", 7), new_field("retry", true)],
        &labels(&[("env", "prod")]),
    )
}

#[test]
fn test_two_failures_then_success_with_default_backoff() {
    let endpoint = PushEndpoint::with_statuses(&[500, 503, 204]);
    let writer = LokiWriter::new(endpoint.url(), BTreeMap::new()).expect("client");

    let started = Instant::now();
    writer.write(&sample_entry()).expect("third attempt succeeds");
    let elapsed = started.elapsed();

    endpoint.assert_all_served();
    let pushes = endpoint.pushes();
    assert_eq!(pushes.len(), 3, "exactly three POST attempts");

    let first_gap = pushes[1].received_at - pushes[0].received_at;
    let second_gap = pushes[2].received_at - pushes[1].received_at;
    assert!(first_gap >= Duration::from_millis(950), "first gap {:?}", first_gap);
    assert!(first_gap < Duration::from_millis(1900), "first gap {:?}", first_gap);
    assert!(second_gap >= Duration::from_millis(1950), "second gap {:?}", second_gap);
    assert!(second_gap < Duration::from_millis(2900), "second gap {:?}", second_gap);
    assert!(elapsed >= Duration::from_secs(3));
}

#[test]
fn test_always_failing_endpoint_reports_last_error() {
    let endpoint = PushEndpoint::with_statuses(&[500, 502, 503]);
    let writer = LokiWriter::new(endpoint.url(), BTreeMap::new())
        .expect("client")
        .with_retry_policy(RetryPolicy::new(3, Duration::from_millis(20)));

    let err = writer.write(&sample_entry()).unwrap_err();

    endpoint.assert_all_served();
    assert_eq!(endpoint.pushes().len(), 3);
    match err {
        LoggerError::PushFailed {
            attempts, source, ..
        } => {
            assert_eq!(attempts, 3);
            assert!(
                matches!(*source, LoggerError::HttpStatus { status: 503 }),
                "last error should be the third response, got {}",
                source
            );
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_payload_round_trip() {
    let endpoint = PushEndpoint::with_statuses(&[204]);
    let writer = LokiWriter::new(
        endpoint.url(),
        labels(&[("service", "testservice"), ("env", "test"), ("host", "localhost")]),
    )
    .expect("client");

    let entry = sample_entry().with_timestamp(1_700_000_000);
    writer.write(&entry).expect("push succeeds");

    endpoint.assert_all_served();
    let pushes = endpoint.pushes();
    assert_eq!(pushes.len(), 1);

    let payload: LokiPayload = serde_json::from_str(&pushes[0].body).expect("valid payload");
    assert_eq!(payload.streams.len(), 1);

    let stream = &payload.streams[0];
    assert_eq!(
        stream.stream,
        labels(&[
            ("service", "testservice"),
            ("env", "prod"),
            ("host", "localhost"),
            ("level", "error"),
        ])
    );
    assert_eq!(stream.values.len(), 1);

    let [ts, line] = &stream.values[0];
    assert_eq!(ts, "1700000000000000000");
    let body: serde_json::Value = serde_json::from_str(line).expect("line is JSON");
    assert_eq!(body["Message"], "payment failed");
    assert_eq!(body["Fields"]["order_id"], 7);
    assert_eq!(body["Time"], 1_700_000_000);
}

#[test]
fn test_logger_fans_out_to_file_and_remote() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("fanout.log");
    let endpoint = PushEndpoint::with_statuses(&[204, 204]);

    let logger = Logger::new(
        LoggerConfig::new()
            .with_level("info")
            .with_file_path(log_file.to_string_lossy())
            .with_remote_url(endpoint.url())
            .with_label("service", "testservice"),
    );
    assert_eq!(logger.writer_count(), 2);

    logger.debug("filtered");
    logger.info_with_fields("user login", [new_field("user", "alice")]);
    logger.error_with_fields("db down", [new_field("database", "mysql")]);

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content.lines().count(), 2);

    endpoint.assert_all_served();
    let pushes = endpoint.pushes();
    assert_eq!(pushes.len(), 2);
    let levels: Vec<String> = pushes
        .iter()
        .map(|r| {
            let payload: LokiPayload = serde_json::from_str(&r.body).expect("valid payload");
            payload.streams[0].stream["level"].clone()
        })
        .collect();
    assert_eq!(levels, vec!["info", "error"]);
    assert_eq!(logger.dropped_count(), 0);
}

#[test]
fn test_unreachable_remote_does_not_stop_file_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("degraded.log");

    let memory = common::MemoryWriter::default();
    let logger = Logger::builder()
        .config(LoggerConfig::new().with_file_path(log_file.to_string_lossy()))
        .writer(
            LokiWriter::new("http://127.0.0.1:1/loki/api/v1/push", BTreeMap::new())
                .expect("client")
                .with_retry_policy(RetryPolicy::new(3, Duration::from_millis(5))),
        )
        .writer(memory.clone())
        .build();

    logger.warn("remote is down");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content.lines().count(), 1);
    assert_eq!(memory.entries().len(), 1);
    assert_eq!(logger.dropped_count(), 1);
    assert_eq!(logger.metrics().write_failures(), 1);
}
