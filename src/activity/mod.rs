//! Countdown primitive for a single work or break period.
//!
//! An [`Activity`] owns one countdown:
//! - `start` resets the remaining time and arms tick delivery
//! - each delivered tick decrements by exactly one second
//! - reaching zero is terminal and fires `finished` exactly once
//! - `stop` forces the zero-crossing through the same completion path

use crate::hook::EventHook;
use crate::types::ActivityKind;

mod error;
mod manager;

pub use error::ActivityError;
pub use manager::ActivityManager;

// ============================================================================
// Activity
// ============================================================================

/// A single countdown representing one work or break period.
///
/// The countdown does not own a clock; whoever drives it calls [`tick`]
/// once per elapsed second. Callers pass a positive `max_duration`; the
/// countdown does not validate it.
///
/// [`tick`]: Activity::tick
#[derive(Debug)]
pub struct Activity {
    kind: ActivityKind,
    max_duration: u32,
    remaining: u32,
    running: bool,
    /// Fires with the new remaining time on every change
    pub time_changed: EventHook<u32>,
    /// Fires exactly once when the countdown reaches zero
    pub finished: EventHook<()>,
}

impl Activity {
    /// Creates a countdown for the given kind and duration in seconds.
    pub fn new(kind: ActivityKind, max_duration: u32) -> Self {
        Self {
            kind,
            max_duration,
            remaining: max_duration,
            running: false,
            time_changed: EventHook::new(),
            finished: EventHook::new(),
        }
    }

    /// Starts the countdown.
    ///
    /// Resets the remaining time to the full duration and immediately emits
    /// `time_changed` with it; the reset goes through the same code path as
    /// a decrement.
    pub fn start(&mut self) {
        self.running = true;
        self.set_remaining(self.max_duration);
    }

    /// Terminates the countdown before its period has elapsed.
    ///
    /// Forces the remaining time to zero, which synchronously triggers the
    /// same completion path as natural expiry: there is no separate
    /// cancellation signal. A countdown that is not running is left alone,
    /// so completion can never fire twice.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.set_remaining(0);
    }

    /// Delivers one elapsed second.
    ///
    /// Inert unless the countdown is running. Emits `time_changed` with the
    /// decremented value, and on the zero-crossing stops accepting ticks and
    /// emits `finished`. Returns true if the countdown completed on this
    /// tick.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.set_remaining(self.remaining.saturating_sub(1))
    }

    /// Detaches all listeners from both hooks.
    ///
    /// Idempotent and safe with none registered. A finished or stopped
    /// countdown that has been detached can no longer leak notifications.
    pub fn remove_hook_handlers(&mut self) {
        self.time_changed.clear();
        self.finished.clear();
    }

    /// Single code path for reset, decrement, and forced stop.
    ///
    /// `time_changed` always fires before a possible `finished` on the same
    /// zero-crossing. Returns true if the countdown reached zero.
    fn set_remaining(&mut self, value: u32) -> bool {
        self.remaining = value;
        self.time_changed.fire(&value);
        if value == 0 {
            self.running = false;
            self.finished.fire(&());
            true
        } else {
            false
        }
    }

    /// Returns the kind of period this countdown represents.
    pub fn kind(&self) -> ActivityKind {
        self.kind
    }

    /// Returns the full duration in seconds.
    pub fn max_duration(&self) -> u32 {
        self.max_duration
    }

    /// Returns the remaining time in seconds.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Returns true while the countdown accepts ticks.
    pub fn is_running(&self) -> bool {
        self.running
    }
}

// ============================================================================
// Tests
// ============================================================================
