//! Shared helpers for integration tests

#![allow(dead_code)]

use parking_lot::Mutex;
use rust_loki_logger::{LogEntry, LogWriter, Result};
use std::sync::Arc;
use std::time::Instant;

/// Writer that keeps every entry it receives
#[derive(Clone, Default)]
pub struct MemoryWriter {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemoryWriter {
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }
}

impl LogWriter for MemoryWriter {
    fn write(&self, entry: &LogEntry) -> Result<()> {
        self.entries.lock().push(entry.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// One push received by a [`PushEndpoint`]
#[derive(Debug, Clone)]
pub struct RecordedPush {
    pub received_at: Instant,
    pub body: String,
}

/// Loki push endpoint answering successive requests with the given statuses
///
/// Each status is its own mock expecting exactly one hit, so the endpoint
/// serves them in order. Only JSON posts to the push path match.
pub struct PushEndpoint {
    server: mockito::ServerGuard,
    mocks: Vec<mockito::Mock>,
    pushes: Arc<Mutex<Vec<RecordedPush>>>,
}

impl PushEndpoint {
    pub const PATH: &'static str = "/loki/api/v1/push";

    pub fn with_statuses(statuses: &[usize]) -> Self {
        let mut server = mockito::Server::new();
        let pushes = Arc::new(Mutex::new(Vec::new()));

        let mocks = statuses
            .iter()
            .map(|&status| {
                let recorded = Arc::clone(&pushes);
                server
                    .mock("POST", Self::PATH)
                    .match_header("content-type", "application/json")
                    .with_status(status)
                    .with_body_from_request(move |request| {
                        let body = request
                            .body()
                            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                            .unwrap_or_default();
                        recorded.lock().push(RecordedPush {
                            received_at: Instant::now(),
                            body,
                        });
                        Vec::new()
                    })
                    .expect(1)
                    .create()
            })
            .collect();

        Self {
            server,
            mocks,
            pushes,
        }
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.server.url(), Self::PATH)
    }

    pub fn pushes(&self) -> Vec<RecordedPush> {
        self.pushes.lock().clone()
    }

    /// Every scripted status was served exactly once
    pub fn assert_all_served(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
