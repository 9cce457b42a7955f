//! One-second tick sources.
//!
//! The countdown core never owns a clock; it is driven through
//! [`TickSource`], a capability with `start`/`stop` control and an
//! `elapsed` notification hook:
//! - [`ManualTick`] delivers ticks on demand (tests, embedding)
//! - [`IntervalTick`] adapts a 1-second tokio interval loop

use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::hook::EventHook;

// ============================================================================
// TickSource
// ============================================================================

/// A source of one-elapsed-second notifications.
///
/// Implementations must fire `elapsed` exactly once per second while
/// started and must not fire it after `stop` is invoked.
pub trait TickSource {
    /// Starts emitting elapsed notifications.
    fn start(&mut self);

    /// Stops emitting elapsed notifications.
    fn stop(&mut self);

    /// The hook fired once per elapsed second.
    fn elapsed(&mut self) -> &mut EventHook<()>;
}

// ============================================================================
// ManualTick
// ============================================================================

/// A tick source driven explicitly by the caller.
#[derive(Debug, Default)]
pub struct ManualTick {
    running: bool,
    elapsed: EventHook<()>,
}

impl ManualTick {
    /// Creates a stopped manual tick source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers the given number of elapsed seconds.
    ///
    /// Seconds are only delivered while the source is started.
    pub fn advance(&mut self, seconds: u32) {
        for _ in 0..seconds {
            if !self.running {
                break;
            }
            self.elapsed.fire(&());
        }
    }

    /// Returns true while the source is started.
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl TickSource for ManualTick {
    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn elapsed(&mut self) -> &mut EventHook<()> {
        &mut self.elapsed
    }
}

// ============================================================================
// IntervalTick
// ============================================================================

/// Tick source backed by a tokio 1-second interval.
///
/// The loop keeps running while stopped and simply skips firing, so a
/// restarted source picks the next whole-second boundary instead of
/// replaying missed time.
#[derive(Debug, Default)]
pub struct IntervalTick {
    running: bool,
    elapsed: EventHook<()>,
}

impl IntervalTick {
    /// Creates a stopped interval tick source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the interval loop.
    ///
    /// Never returns; run it on its own task and abort it on shutdown.
    pub async fn run(&mut self) {
        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            if !self.running {
                continue;
            }

            self.elapsed.fire(&());
        }
    }
}

impl TickSource for IntervalTick {
    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn elapsed(&mut self) -> &mut EventHook<()> {
        &mut self.elapsed
    }
}

// ============================================================================
// Tests
// ============================================================================
