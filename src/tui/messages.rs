//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the
//! application's update function. Messages represent user actions, async
//! command results, and system events.

use crate::backend::{SubmitAck, WorkflowError};

/// Messages for the workflow TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Folder editing
    /// Append a typed character to the folder input.
    FolderInput(char),
    /// Delete the last character of the folder input.
    FolderBackspace,
    /// Derive the selection from a directory scan (picker emulation).
    BrowseRequested,

    // Run lifecycle
    /// Submit the selected folder for a test run.
    RunRequested,
    /// The submit call succeeded with the given acknowledgment.
    RunComplete(SubmitAck),
    /// The submit call failed.
    RunFailed(String),

    // Application lifecycle
    /// Reset the selection and discard displayed results.
    ClearRequested,
    /// Quit the application.
    Quit,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Creates a run-failure message from a [`WorkflowError`].
    #[must_use]
    pub fn from_error(error: &WorkflowError) -> Self {
        Self::RunFailed(error.to_string())
    }

    /// Returns true for folder editing messages.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::FolderInput(_) | Self::FolderBackspace | Self::BrowseRequested
        )
    }

    /// Returns true for run lifecycle messages.
    #[must_use]
    pub const fn is_run(&self) -> bool {
        matches!(
            self,
            Self::RunRequested | Self::RunComplete(_) | Self::RunFailed(_)
        )
    }
}
