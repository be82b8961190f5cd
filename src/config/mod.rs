//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.intellico.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `INTELLICO_FOLDER_PATH`,
//!    `INTELLICO_ENDPOINT`, and friends
//! 4. **Command-line arguments** – `--folder-path`/`-f`, `--endpoint`/`-e`
//!
//! # Configuration File
//!
//! Place `.intellico.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! folder_path = "demo-project"
//! endpoint = "http://127.0.0.1:8000/save-folder"
//! request_timeout_seconds = 20
//! tui = true
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::backend::{BackendEndpoint, WorkflowError};

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Submit the configured folder once and print the run summary.
    Submit,
    /// Interactive TUI for the select-and-run workflow.
    WorkflowTui,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `INTELLICO_FOLDER_PATH` or `--folder-path`: Folder to submit
/// - `INTELLICO_ENDPOINT` or `--endpoint`: Save-folder endpoint URL
/// - `INTELLICO_REQUEST_TIMEOUT_SECONDS` or `--request-timeout-seconds`:
///   HTTP timeout for the submit call
///
/// # Example
///
/// ```no_run
/// use intellico::IntellicoConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = IntellicoConfig::load().expect("failed to load configuration");
/// let endpoint = config.resolve_endpoint().expect("endpoint must be valid");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "INTELLICO",
    discovery(
        dotfile_name = ".intellico.toml",
        config_file_name = "intellico.toml",
        app_name = "intellico"
    )
)]
pub struct IntellicoConfig {
    /// Folder path to submit for a test run.
    ///
    /// Can be provided via:
    /// - CLI: `--folder-path <PATH>`, `-f <PATH>`, or as the positional
    ///   argument
    /// - Environment: `INTELLICO_FOLDER_PATH`
    /// - Config file: `folder_path = "..."`
    #[ortho_config(cli_short = 'f')]
    pub folder_path: Option<String>,

    /// Save-folder endpoint URL of the test backend.
    ///
    /// Defaults to the local demo backend address when unset.
    ///
    /// Can be provided via:
    /// - CLI: `--endpoint <URL>` or `-e <URL>`
    /// - Environment: `INTELLICO_ENDPOINT`
    /// - Config file: `endpoint = "..."`
    #[ortho_config(cli_short = 'e')]
    pub endpoint: Option<String>,

    /// HTTP timeout for the submit call, in seconds.
    ///
    /// Can be provided via:
    /// - CLI: `--request-timeout-seconds <SECS>`
    /// - Environment: `INTELLICO_REQUEST_TIMEOUT_SECONDS`
    /// - Config file: `request_timeout_seconds = 20`
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// Emits structured telemetry events to stderr as JSON lines.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry`
    /// - Config file: `telemetry = true`
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment.
    #[ortho_config()]
    pub telemetry: bool,

    /// Enables the interactive TUI workflow.
    ///
    /// Can be provided via:
    /// - CLI: `--tui` / `-T`
    /// - Config file: `tui = true`
    #[ortho_config(cli_short = 'T')]
    pub tui: bool,
}

const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 20;

impl Default for IntellicoConfig {
    fn default() -> Self {
        Self {
            folder_path: None,
            endpoint: None,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            telemetry: false,
            tui: false,
        }
    }
}

impl IntellicoConfig {
    /// Resolves the backend endpoint, falling back to the local demo
    /// address.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::InvalidEndpoint`] when a configured value
    /// fails to parse.
    pub fn resolve_endpoint(&self) -> Result<BackendEndpoint, WorkflowError> {
        self.endpoint.as_deref().map_or_else(
            || Ok(BackendEndpoint::default_local()),
            BackendEndpoint::parse,
        )
    }

    /// Returns the configured folder path or the validation error.
    ///
    /// A configured-but-empty value fails the same way an absent one does;
    /// the empty string is the "unset" sentinel throughout the workflow.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::EmptyFolderPath`] when no folder is
    /// configured.
    pub fn require_folder_path(&self) -> Result<&str, WorkflowError> {
        match self.folder_path.as_deref() {
            Some(path) if !path.is_empty() => Ok(path),
            _ => Err(WorkflowError::EmptyFolderPath),
        }
    }

    /// Returns the HTTP timeout as a [`Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Determines the operation mode based on provided configuration.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.tui {
            OperationMode::WorkflowTui
        } else {
            OperationMode::Submit
        }
    }

    /// Merges a positional folder-path argument into the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Configuration`] when `--folder-path` was
    /// also supplied; the two sources are ambiguous.
    pub fn apply_positional_folder(&mut self, value: String) -> Result<(), WorkflowError> {
        if self.folder_path.is_some() {
            return Err(WorkflowError::Configuration {
                message: "folder path given both positionally and via --folder-path".to_owned(),
            });
        }

        self.folder_path = Some(value);
        Ok(())
    }
}
