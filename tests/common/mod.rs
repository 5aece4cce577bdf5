//! Common test utilities for integration tests
//!
//! In-memory implementations of the propagation ports plus small
//! environment/record builders shared across test files.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use credbridge::domain::errors::{ConfigWriteError, PlatformError};
use credbridge::domain::models::{AwsConfigKey, CredentialRecord, EnvSnapshot};
use credbridge::domain::ports::{ConfigWriter, CredentialCatalog, StatusReporter};

/// Catalog returning a fixed listing (or a fixed failure) and counting calls.
pub struct FakeCatalog {
    records: Vec<CredentialRecord>,
    fail: bool,
    calls: AtomicUsize,
    tokens: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn with_records(records: Vec<CredentialRecord>) -> Self {
        Self {
            records,
            fail: false,
            calls: AtomicUsize::new(0),
            tokens: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::with_records(Vec::new())
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn tokens(&self) -> Vec<String> {
        self.tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl CredentialCatalog for FakeCatalog {
    async fn list_credentials(&self, token: &str) -> Result<Vec<CredentialRecord>, PlatformError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.tokens.lock().unwrap().push(token.to_string());
        if self.fail {
            return Err(PlatformError::Status {
                status: 401,
                body: "invalid api key".to_string(),
            });
        }
        Ok(self.records.clone())
    }
}

/// Ordered log shared between a writer and a reporter.
pub type EventLog = Arc<Mutex<Vec<String>>>;

/// Writer that records every `set` call, optionally failing all of them.
#[derive(Default)]
pub struct RecordingWriter {
    calls: Mutex<Vec<(AwsConfigKey, String)>>,
    fail: bool,
    events: Option<EventLog>,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Also append `set <key>` to `events` on every call.
    pub fn with_events(mut self, events: EventLog) -> Self {
        self.events = Some(events);
        self
    }

    pub fn calls(&self) -> Vec<(AwsConfigKey, String)> {
        self.calls.lock().unwrap().clone()
    }

    /// Value a real store would hold for `key` after all calls.
    pub fn last_value(&self, key: AwsConfigKey) -> Option<String> {
        self.calls()
            .into_iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }
}

#[async_trait]
impl ConfigWriter for RecordingWriter {
    async fn set(&self, key: AwsConfigKey, value: &str) -> Result<(), ConfigWriteError> {
        self.calls.lock().unwrap().push((key, value.to_string()));
        if let Some(events) = &self.events {
            events.lock().unwrap().push(format!("set {key}"));
        }
        if self.fail {
            return Err(ConfigWriteError::Exited {
                program: "aws".to_string(),
                key,
                code: "exit status: 255".to_string(),
            });
        }
        Ok(())
    }
}

/// Reporter that appends `status: <line>` to a shared log.
pub struct RecordingReporter {
    events: EventLog,
}

impl RecordingReporter {
    pub fn new(events: EventLog) -> Self {
        Self { events }
    }
}

impl StatusReporter for RecordingReporter {
    fn report(&self, line: &str) {
        self.events.lock().unwrap().push(format!("status: {line}"));
    }
}

pub fn event_log() -> EventLog {
    EventLog::default()
}

pub fn events(log: &EventLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

pub fn env(pairs: &[(&str, &str)]) -> EnvSnapshot {
    pairs.iter().copied().collect()
}

pub fn aws_record(name: &str) -> CredentialRecord {
    CredentialRecord::new(name, "Amazon Web Services S3")
}

/// Initializes tracing subscriber for test output.
pub fn setup_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
