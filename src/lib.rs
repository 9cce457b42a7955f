//! Pomidorka - the support tool for pomodoro technique.
//!
//! This library provides:
//! - A countdown primitive for single work/break periods
//! - An activity coordinator owning at most one live countdown
//! - A multicast notification hook used for all event propagation
//! - One-second tick sources (manual and tokio-interval backed)
//! - Fire-and-forget end-of-activity action execution
//! - CLI parsing and terminal display for the interactive timer

pub mod action;
pub mod activity;
pub mod app;
pub mod cli;
pub mod hook;
pub mod tick;
pub mod types;

// Re-export commonly used types for convenience
pub use action::{resolve_placeholders, ActionRunner, MockActionRunner, ShellActionRunner};
pub use activity::{Activity, ActivityError, ActivityManager};
pub use hook::{EventHook, HandlerId, HookError};
pub use tick::{IntervalTick, ManualTick, TickSource};
pub use types::{ActivityKind, Settings};
