//! Intellico library crate providing the folder-selection-and-test-run
//! workflow.
//!
//! The library wraps the save-folder backend call behind a pluggable
//! gateway, models the workflow as a small state machine with pure
//! transitions, and renders it through a terminal UI driven purely by that
//! state. Errors are mapped into user-facing variants that the CLI and TUI
//! surface as advisories.

pub mod backend;
pub mod config;
pub mod telemetry;
pub mod tui;
pub mod workflow;

pub use backend::{
    BackendEndpoint, HttpSubmitFolderGateway, SubmitAck, SubmitFolderGateway, TestDetail,
    TestRunResult, TestStatus, WorkflowError,
};
pub use config::{IntellicoConfig, OperationMode};
pub use workflow::{PickerOutcome, TestRunner, WorkflowPhase, WorkflowState};
