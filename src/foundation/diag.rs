use std::sync::Mutex;

/// Severity of a diagnostic record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    /// Developer-facing detail.
    Debug,
    /// Normal operational information.
    Info,
    /// Something unexpected but recoverable; defaults were substituted.
    Warn,
    /// An operation failed.
    Error,
}

/// One structured diagnostic entry: severity, fixed source tag, message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticRecord {
    /// Severity of the entry.
    pub severity: Severity,
    /// Fixed identifier of the emitting component.
    pub source: String,
    /// Human-readable message.
    pub message: String,
}

/// Sink for structured diagnostics emitted by the core.
///
/// The core emits structured records rather than printing text so that
/// callers (and tests) can assert on them. Production code uses
/// [`TracingSink`]; tests use [`RecordingSink`].
pub trait DiagnosticSink: Send + Sync {
    /// Record one diagnostic entry.
    fn record(&self, severity: Severity, source: &str, message: &str);
}

/// Default sink forwarding records to the `tracing` ecosystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, severity: Severity, source: &str, message: &str) {
        match severity {
            Severity::Debug => tracing::debug!(source, "{message}"),
            Severity::Info => tracing::info!(source, "{message}"),
            Severity::Warn => tracing::warn!(source, "{message}"),
            Severity::Error => tracing::error!(source, "{message}"),
        }
    }
}

/// Test double that stores every record for later assertion.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<DiagnosticRecord>>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records captured so far, in emission order.
    pub fn records(&self) -> Vec<DiagnosticRecord> {
        self.entries.lock().expect("diagnostic sink poisoned").clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, severity: Severity, source: &str, message: &str) {
        self.entries
            .lock()
            .expect("diagnostic sink poisoned")
            .push(DiagnosticRecord {
                severity,
                source: source.to_owned(),
                message: message.to_owned(),
            });
    }
}
