//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! workflow TUI. It wraps the pure [`WorkflowState`] with view concerns
//! (loading flag, advisory line, terminal dimensions) and delegates run
//! submission to async commands.
//!
//! # Module Structure
//!
//! - `rendering`: View rendering methods for terminal output
//! - `run_handlers`: Run submission and completion handling

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use camino::Utf8Path;

use crate::workflow::{PickerOutcome, WorkflowState, scan_folder_entries};

use super::components::ResultsPanelComponent;
use super::input::map_key_to_message;
use super::messages::AppMsg;

mod rendering;
mod run_handlers;

/// Main application model for the workflow TUI.
#[derive(Debug)]
pub struct WorkflowApp {
    /// Folder selection and displayed results.
    pub(crate) workflow: WorkflowState,
    /// Whether a submit request is currently in flight.
    pub(crate) loading: bool,
    /// Current advisory line (validation or run failure), if any.
    pub(crate) advisory: Option<String>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Results panel component.
    results_panel: ResultsPanelComponent,
}

impl WorkflowApp {
    /// Creates a new application around the given workflow state.
    #[must_use]
    pub const fn new(workflow: WorkflowState) -> Self {
        Self {
            workflow,
            loading: false,
            advisory: None,
            width: 80,
            height: 24,
            results_panel: ResultsPanelComponent::new(),
        }
    }

    /// Creates an application with an empty selection and no results.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(WorkflowState::new())
    }

    /// Returns the current folder input text.
    #[must_use]
    pub fn folder_path(&self) -> &str {
        &self.workflow.folder_path
    }

    /// Returns true while a submit request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the current advisory line, if any.
    #[must_use]
    pub fn advisory(&self) -> Option<&str> {
        self.advisory.as_deref()
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all
    /// application messages and returns any resulting commands. It delegates
    /// to specialised handlers for each message category.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_edit() {
            return self.handle_edit_msg(msg);
        }
        if msg.is_run() {
            return self.handle_run_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches folder editing messages to their handlers.
    fn handle_edit_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::FolderInput(character) => self.handle_folder_input(*character),
            AppMsg::FolderBackspace => self.handle_folder_backspace(),
            AppMsg::BrowseRequested => self.handle_browse_requested(),
            _ => {
                debug_assert!(false, "non-edit message routed to handle_edit_msg");
                None
            }
        }
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::ClearRequested => self.handle_clear(),
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            _ => {
                debug_assert!(false, "non-lifecycle message routed to handle_lifecycle_msg");
                None
            }
        }
    }

    // Folder editing handlers

    fn handle_folder_input(&mut self, character: char) -> Option<Cmd> {
        let mut path = self.workflow.folder_path.clone();
        path.push(character);
        self.workflow.select_folder(path);
        None
    }

    fn handle_folder_backspace(&mut self) -> Option<Cmd> {
        let mut path = self.workflow.folder_path.clone();
        path.pop();
        self.workflow.select_folder(path);
        None
    }

    /// Emulates the folder picker by scanning a directory for relative file
    /// paths and feeding them to the picker operation.
    ///
    /// The typed path chooses the directory to scan; with nothing typed the
    /// current directory is scanned instead.
    fn handle_browse_requested(&mut self) -> Option<Cmd> {
        let base = if self.workflow.folder_path.is_empty() {
            ".".to_owned()
        } else {
            self.workflow.folder_path.clone()
        };

        match scan_folder_entries(Utf8Path::new(&base)) {
            Ok(entries) => match self.workflow.select_folder_from_picker(&entries) {
                PickerOutcome::Selected(_) => {
                    self.advisory = None;
                }
                PickerOutcome::Unchanged => {
                    self.advisory =
                        Some("folder contains no files; selection unchanged".to_owned());
                }
            },
            Err(error) => {
                self.advisory = Some(error.to_string());
            }
        }

        None
    }

    // Lifecycle handlers

    fn handle_clear(&mut self) -> Option<Cmd> {
        self.workflow.clear();
        self.advisory = None;
        None
    }

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        None
    }
}

impl Model for WorkflowApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve the startup selection from module-level storage.
        let workflow = super::get_initial_workflow();
        (Self::new(workflow), None)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        // Try to downcast to our message type
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if let Some(mapped) = map_key_to_message(key_msg) {
                return self.handle_message(&mapped);
            }
        }

        // Handle window size messages
        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_header());
        output.push_str(&self.render_folder_input());
        output.push('\n');
        output.push_str(&self.render_body());
        output.push('\n');
        output.push_str(&self.render_status_bar());

        super::components::text_truncate::truncate_to_height(&mut output, self.height as usize);
        output
    }
}
