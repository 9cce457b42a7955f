//! Notification hook error types.

use thiserror::Error;

use super::HandlerId;

/// Errors that can occur when managing hook subscriptions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HookError {
    /// The handler is not registered on this hook.
    #[error("handler {0} is not registered on this hook")]
    HandlerNotFound(HandlerId),
}
