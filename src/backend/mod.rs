//! Backend submission boundary for the test workflow.
//!
//! This module wraps the save-folder HTTP call behind a trait so the
//! workflow controller can be exercised with stubbed collaborators. Errors
//! are mapped into user-facing variants so callers can surface precise
//! failures without exposing transport internals.

pub mod endpoint;
pub mod error;
pub mod gateway;
pub mod models;

pub use endpoint::{BackendEndpoint, DEFAULT_SAVE_FOLDER_ENDPOINT};
pub use error::WorkflowError;
pub use gateway::{HttpSubmitFolderGateway, SubmitFolderGateway};
pub use models::{SubmitAck, TestDetail, TestRunResult, TestStatus};

#[cfg(test)]
pub use gateway::MockSubmitFolderGateway;
