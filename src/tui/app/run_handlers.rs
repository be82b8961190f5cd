//! Run submission handlers for the workflow TUI.
//!
//! This module contains the message handlers for the run lifecycle: the
//! validation guard, the async submit command, and the completion and
//! failure transitions.

use std::any::Any;

use bubbletea_rs::Cmd;

use crate::backend::{SubmitAck, TestRunResult, WorkflowError};

use super::WorkflowApp;
use crate::tui::messages::AppMsg;

impl WorkflowApp {
    /// Dispatches run lifecycle messages to their handlers.
    pub(super) fn handle_run_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::RunRequested => self.handle_run_requested(),
            AppMsg::RunComplete(ack) => self.handle_run_complete(ack),
            AppMsg::RunFailed(error_msg) => self.handle_run_failed(error_msg),
            _ => {
                debug_assert!(false, "non-run message routed to handle_run_msg");
                None
            }
        }
    }

    /// Validates the selection and, when a folder is set, issues the submit
    /// command.
    ///
    /// An empty selection surfaces the validation advisory without touching
    /// the network. Repeated requests while one is in flight are not
    /// prevented; whichever response lands last wins.
    pub(super) fn handle_run_requested(&mut self) -> Option<Cmd> {
        if !self.workflow.has_folder() {
            self.advisory = Some(WorkflowError::EmptyFolderPath.to_string());
            return None;
        }

        self.loading = true;
        self.advisory = None;

        let folder_path = self.workflow.folder_path.clone();
        Some(Box::pin(async move {
            match crate::tui::submit_selected_folder(folder_path).await {
                Ok(ack) => Some(Box::new(AppMsg::RunComplete(ack)) as Box<dyn Any + Send>),
                Err(error) => {
                    Some(Box::new(AppMsg::from_error(&error)) as Box<dyn Any + Send>)
                }
            }
        }))
    }

    /// Applies the fixed placeholder result set after a successful submit.
    ///
    /// The acknowledgment content is logged and otherwise discarded; the
    /// displayed results never derive from it.
    pub(super) fn handle_run_complete(&mut self, ack: &SubmitAck) -> Option<Cmd> {
        tracing::info!(ack_message = ack.message.as_deref(), "run acknowledged");

        self.workflow.apply_run_success(TestRunResult::placeholder());
        self.loading = false;
        self.advisory = None;
        None
    }

    /// Surfaces the run failure while leaving any displayed results intact.
    pub(super) fn handle_run_failed(&mut self, error_msg: &str) -> Option<Cmd> {
        self.loading = false;
        self.advisory = Some(error_msg.to_owned());
        None
    }
}
