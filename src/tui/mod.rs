//! Terminal User Interface for the folder-selection-and-test-run workflow.
//!
//! This module provides an interactive TUI for picking a folder, submitting
//! it to the test backend, and displaying the result summary using the
//! bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::WorkflowApp`]
//! - **View**: Rendering logic in the model's `view()` and the components
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`input`]: Key-to-message mapping for input handling
//! - [`components`]: Reusable UI components
//!
//! # Initial Data and Submit Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, module-level storage carries the startup data. Call
//! [`set_initial_workflow`] before starting the program so a folder path
//! supplied on the command line pre-fills the input, and
//! [`set_submit_context`] so run requests know which endpoint to post to.

use std::sync::OnceLock;
use std::time::Duration;

use crate::backend::{
    BackendEndpoint, HttpSubmitFolderGateway, SubmitAck, SubmitFolderGateway, WorkflowError,
};
use crate::workflow::WorkflowState;

pub mod app;
pub mod components;
pub mod input;
pub mod messages;

pub use app::WorkflowApp;

/// Global storage for the initial workflow state.
///
/// This is set before the TUI program starts and read by
/// `WorkflowApp::init()`.
static INITIAL_WORKFLOW: OnceLock<WorkflowState> = OnceLock::new();

/// Global storage for the submit context (endpoint and timeout).
///
/// This is set before the TUI program starts so run requests can build the
/// HTTP gateway.
static SUBMIT_CONTEXT: OnceLock<SubmitContext> = OnceLock::new();

/// Context required to submit a folder to the backend.
struct SubmitContext {
    endpoint: BackendEndpoint,
    timeout: Duration,
}

/// Sets the initial workflow state for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. The state
/// will be read by `WorkflowApp::init()` when the program starts.
///
/// # Returns
///
/// `true` if the state was set, `false` if it was already set.
pub fn set_initial_workflow(state: WorkflowState) -> bool {
    INITIAL_WORKFLOW.set(state).is_ok()
}

/// Sets the submit context for the TUI application.
///
/// This must be called before starting the bubbletea-rs program so run
/// requests can reach the backend. Without it, run requests fail with a
/// configuration advisory.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_submit_context(endpoint: BackendEndpoint, timeout: Duration) -> bool {
    SUBMIT_CONTEXT.set(SubmitContext { endpoint, timeout }).is_ok()
}

/// Gets a clone of the initial workflow state from storage.
///
/// Called internally by `WorkflowApp::init()`. Returns the stored state or
/// an empty one if not set.
pub(crate) fn get_initial_workflow() -> WorkflowState {
    INITIAL_WORKFLOW.get().cloned().unwrap_or_default()
}

/// Submits the selected folder through the configured HTTP gateway.
///
/// Uses the context set by [`set_submit_context`]. Returns an error if the
/// context was not set or if the request fails.
pub(crate) async fn submit_selected_folder(folder_path: String) -> Result<SubmitAck, WorkflowError> {
    let context = SUBMIT_CONTEXT
        .get()
        .ok_or_else(|| WorkflowError::Configuration {
            message: "submit context not configured".to_owned(),
        })?;

    let gateway = HttpSubmitFolderGateway::new(context.endpoint.clone(), context.timeout)?;
    gateway.submit_folder(&folder_path).await
}
