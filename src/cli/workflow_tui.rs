//! TUI mode for the select-and-run workflow.
//!
//! This module provides the entry point for the interactive terminal user
//! interface that lets the user pick a folder, run tests, and view the
//! result summary.

use std::io::{self, Write};

use bubbletea_rs::Program;

use intellico::tui::{WorkflowApp, set_initial_workflow, set_submit_context};
use intellico::{IntellicoConfig, WorkflowError, WorkflowState};

/// Runs the TUI mode for the workflow.
///
/// # Errors
///
/// Returns an error if:
/// - The configured endpoint is invalid
/// - The TUI fails to initialise
pub async fn run(config: &IntellicoConfig) -> Result<(), WorkflowError> {
    let endpoint = config.resolve_endpoint()?;

    let mut workflow = WorkflowState::new();
    if let Some(path) = config.folder_path.as_deref() {
        workflow.select_folder(path);
    }

    // Store the startup state for Model::init() to retrieve. If already set
    // (e.g. re-running the TUI in the same process), this is a no-op and the
    // existing data remains.
    let _ = set_initial_workflow(workflow);

    // Same semantics for the submit context: first caller wins.
    let _ = set_submit_context(endpoint, config.request_timeout());

    run_tui().await.map_err(|error| WorkflowError::Io {
        message: format!("TUI error: {error}"),
    })?;

    Ok(())
}

/// Runs the bubbletea-rs program with the `WorkflowApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // WorkflowApp::init() will retrieve data from module-level storage.
    let program = Program::<WorkflowApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::WorkflowApp;

    #[test]
    fn workflow_app_can_be_created_empty() {
        let app = WorkflowApp::empty();
        assert_eq!(app.folder_path(), "");
        assert!(!app.is_loading());
    }
}
