//! Mock UI for tests.

use std::sync::{Arc, Mutex};

use super::{OutputMode, SpinnerHandle, UserInterface};

/// A mock UI that records all output for assertions.
#[derive(Default)]
pub struct MockUI {
    /// Result lines that would have gone to stdout.
    pub messages: Vec<String>,
    /// Warnings that would have gone to stderr.
    pub warnings: Vec<String>,
    /// Errors that would have gone to stderr.
    pub errors: Vec<String>,
    /// Hints that would have gone to stderr.
    pub hints: Vec<String>,
    /// Spinner messages, shared with handed-out [`MockSpinner`]s.
    pub spinner_messages: Arc<Mutex<Vec<String>>>,
    mode: OutputMode,
}

impl MockUI {
    /// Create a new mock UI in normal mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock UI with an explicit output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn hint(&mut self, msg: &str) {
        if self.mode.is_verbose() {
            self.hints.push(msg.to_string());
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinner_messages
            .lock()
            .unwrap()
            .push(message.to_string());
        Box::new(MockSpinner {
            messages: Arc::clone(&self.spinner_messages),
        })
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// A mock spinner that records message updates.
pub struct MockSpinner {
    messages: Arc<Mutex<Vec<String>>>,
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.messages.lock().unwrap().push(msg.to_string());
    }

    fn finish_and_clear(&mut self) {}
}
