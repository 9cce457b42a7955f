//! Activity coordinator.
//!
//! The [`ActivityManager`] owns at most one live countdown at a time. It
//! exposes commands to start work and break periods, forwards elapsed
//! seconds to the live countdown, and re-broadcasts its lifecycle to
//! external subscribers so the presentation layer never has to hold a
//! reference to the countdown itself.

use crate::hook::EventHook;
use crate::types::{ActivityKind, Settings};

use super::{Activity, ActivityError};

// ============================================================================
// ActivityManager
// ============================================================================

/// Tracks the status of user activities for one application session.
///
/// Coordinator-level state machine: `Idle -> Running(kind) -> Idle`. There
/// is no queuing; starting while an activity is running is rejected with
/// [`ActivityError::AlreadyRunning`] rather than pre-empting.
#[derive(Debug)]
pub struct ActivityManager {
    settings: Settings,
    current: Option<Activity>,
    /// Fires right after any start command, carrying the new countdown
    pub activity_started: EventHook<Activity>,
    /// Fires when a work countdown reaches its terminal state
    pub work_activity_ended: EventHook<()>,
    /// Fires when a break countdown (short or long) reaches its terminal state
    pub break_activity_ended: EventHook<()>,
    /// Re-broadcast of the live countdown's remaining time, once per tick
    pub activity_time_changed: EventHook<u32>,
}

impl ActivityManager {
    /// Creates a coordinator with no running activity.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            current: None,
            activity_started: EventHook::new(),
            work_activity_ended: EventHook::new(),
            break_activity_ended: EventHook::new(),
            activity_time_changed: EventHook::new(),
        }
    }

    /// Starts a work period sized from the settings.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityError::AlreadyRunning`] if an activity is live.
    pub fn start_work_activity(&mut self) -> Result<&Activity, ActivityError> {
        let period = self.settings.work_period;
        self.start_activity(ActivityKind::Work, period)
    }

    /// Starts a short break sized from the settings.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityError::AlreadyRunning`] if an activity is live.
    pub fn start_short_break_activity(&mut self) -> Result<&Activity, ActivityError> {
        let period = self.settings.short_rest_period;
        self.start_activity(ActivityKind::ShortBreak, period)
    }

    /// Starts a long break sized from the settings.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityError::AlreadyRunning`] if an activity is live.
    pub fn start_long_break_activity(&mut self) -> Result<&Activity, ActivityError> {
        let period = self.settings.long_rest_period;
        self.start_activity(ActivityKind::LongBreak, period)
    }

    /// Stops the running activity, if any.
    ///
    /// Forces the countdown terminal through its own `stop` path, so the
    /// forced zero is re-broadcast and the matching ended event fires.
    /// A no-op when idle.
    pub fn stop_current_activity(&mut self) {
        let Some(activity) = self.current.as_mut() else {
            return;
        };
        activity.stop();
        let remaining = activity.remaining();
        self.activity_time_changed.fire(&remaining);
        self.finish_current();
    }

    /// Delivers one elapsed second to the live countdown.
    ///
    /// A no-op when idle. `activity_time_changed` fires before a possible
    /// ended event on the same zero-crossing.
    pub fn handle_tick(&mut self) {
        let Some(activity) = self.current.as_mut() else {
            return;
        };
        let completed = activity.tick();
        let remaining = activity.remaining();
        self.activity_time_changed.fire(&remaining);
        if completed {
            self.finish_current();
        }
    }

    /// Returns the live countdown, if any.
    pub fn current_activity(&self) -> Option<&Activity> {
        self.current.as_ref()
    }

    /// Returns the live countdown mutably, for subscribing to its hooks.
    pub fn current_activity_mut(&mut self) -> Option<&mut Activity> {
        self.current.as_mut()
    }

    /// Returns true when no activity is running.
    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the settings this coordinator was constructed with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Creates, starts, and stores a countdown, then announces it.
    ///
    /// The countdown's own reset notification fires during `start`; the
    /// coordinator re-broadcasts only per-tick changes, so subscribers see
    /// exactly one `activity_time_changed` per delivered tick.
    fn start_activity(
        &mut self,
        kind: ActivityKind,
        period: u32,
    ) -> Result<&Activity, ActivityError> {
        if self.current.is_some() {
            return Err(ActivityError::AlreadyRunning);
        }
        let mut activity = Activity::new(kind, period);
        activity.start();
        let started = self.current.insert(activity);
        self.activity_started.fire(started);
        Ok(started)
    }

    /// Termination bookkeeping shared by timeout and explicit stop.
    ///
    /// Detaches all listeners from the finished countdown and drops it
    /// before the ended event returns control, so a stale countdown can
    /// never fire again and listeners cannot accumulate across cycles.
    fn finish_current(&mut self) {
        let Some(mut activity) = self.current.take() else {
            return;
        };
        activity.remove_hook_handlers();
        if activity.kind().is_break() {
            self.break_activity_ended.fire(&());
        } else {
            self.work_activity_ended.fire(&());
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
