//! Coordinator error types.

use thiserror::Error;

/// Errors that can occur when driving the activity coordinator.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ActivityError {
    /// An activity is already running; the coordinator never pre-empts.
    #[error("an activity is already running; stop it before starting another")]
    AlreadyRunning,
}

impl ActivityError {
    /// Returns a user-facing suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::AlreadyRunning => "stop the current activity first",
        }
    }
}
