//! Error types exposed by the workflow and backend layers.

use thiserror::Error;

/// Errors surfaced while validating input or communicating with the backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowError {
    /// A test run was requested without a folder selection.
    #[error("select or enter a folder path before running tests")]
    EmptyFolderPath,

    /// The backend endpoint URL could not be parsed.
    #[error("backend endpoint URL is invalid: {0}")]
    InvalidEndpoint(String),

    /// The backend answered with a non-success status.
    #[error("backend rejected the run (status {status}): {message}")]
    Backend {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Response body detail describing the failure.
        message: String,
    },

    /// Networking failed while calling the backend.
    #[error("network error talking to the backend: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl WorkflowError {
    /// Returns true when the error reports a failed run attempt rather than
    /// bad local input, i.e. the backend or the transport failed after the
    /// request was issued.
    #[must_use]
    pub const fn is_run_failure(&self) -> bool {
        matches!(self, Self::Backend { .. } | Self::Network { .. })
    }
}
