//! Application telemetry events and sinks.
//!
//! Intellico is a local-first demo tool, but it still benefits from
//! lightweight telemetry to support debugging, such as recording when a
//! folder was submitted and what the displayed summary was.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by Intellico.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// Records that a folder path was submitted to the backend.
    FolderSubmitted {
        /// The folder path sent in the request body.
        folder_path: String,
    },
    /// Records the summary counts displayed after a successful run.
    RunDisplayed {
        /// Number of passing tests shown.
        passed_count: u32,
        /// Number of failing tests shown.
        failed_count: u32,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// This is intended for local debugging and is not transmitted anywhere.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}
