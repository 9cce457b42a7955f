//! Interactive application loop.
//!
//! Wires the activity coordinator to its collaborators (terminal display,
//! end-of-activity action runner, one-second tick source) and maps stdin
//! commands onto the coordinator's operations. The whole application runs
//! on one thread; the tick loop is a local task on the same runtime.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::action::{ActionRunner, ShellActionRunner};
use crate::activity::ActivityManager;
use crate::cli::Display;
use crate::tick::{IntervalTick, TickSource};
use crate::types::Settings;

// ============================================================================
// Wiring
// ============================================================================

/// Subscribes the terminal display to the coordinator's events.
pub fn wire_presentation(manager: &mut ActivityManager) {
    manager.activity_started.subscribe(|activity| {
        tracing::info!(
            kind = activity.kind().as_str(),
            seconds = activity.remaining(),
            "activity started"
        );
        Display::show_activity_started(activity.kind(), activity.remaining());
    });
    manager
        .activity_time_changed
        .subscribe(|seconds| Display::show_remaining(*seconds));
    manager.work_activity_ended.subscribe(|_| {
        tracing::info!("work activity ended");
        Display::show_work_ended();
    });
    manager.break_activity_ended.subscribe(|_| {
        tracing::info!("break activity ended");
        Display::show_break_ended();
    });
}

/// Subscribes an action runner to both ended events.
///
/// The runner fires on every completion, whether the period timed out or
/// was stopped early; its failures never reach the coordinator.
pub fn wire_action_runner<R>(manager: &mut ActivityManager, runner: Rc<RefCell<R>>, action: String)
where
    R: ActionRunner + 'static,
{
    let work_runner = runner.clone();
    let work_action = action.clone();
    manager
        .work_activity_ended
        .subscribe(move |_| work_runner.borrow_mut().run(&work_action));
    manager
        .break_activity_ended
        .subscribe(move |_| runner.borrow_mut().run(&action));
}

// ============================================================================
// Application Loop
// ============================================================================

/// Runs the interactive timer until `q` or end of input.
///
/// Must run inside a [`tokio::task::LocalSet`]: the tick loop is spawned
/// with `spawn_local` because the wiring holds `Rc` handles.
pub async fn run(settings: Settings, run_actions: bool) -> Result<()> {
    let manager = Rc::new(RefCell::new(ActivityManager::new(settings.clone())));

    wire_presentation(&mut manager.borrow_mut());
    if run_actions {
        let runner = Rc::new(RefCell::new(ShellActionRunner::from_exe_location()));
        wire_action_runner(
            &mut manager.borrow_mut(),
            runner,
            settings.end_activity_action.clone(),
        );
    }

    let mut ticker = IntervalTick::new();
    {
        let tick_manager = manager.clone();
        ticker
            .elapsed()
            .subscribe(move |_| tick_manager.borrow_mut().handle_tick());
    }
    ticker.start();
    let tick_task = tokio::task::spawn_local(async move { ticker.run().await });

    Display::show_welcome();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if !dispatch(&manager, line.trim()) {
            break;
        }
    }

    tick_task.abort();
    tracing::debug!("application loop finished");
    Ok(())
}

/// Maps one input line onto a coordinator command.
///
/// Returns false when the application should quit.
fn dispatch(manager: &Rc<RefCell<ActivityManager>>, input: &str) -> bool {
    match input {
        "w" => report(manager.borrow_mut().start_work_activity().map(|_| ())),
        "s" => report(manager.borrow_mut().start_short_break_activity().map(|_| ())),
        "l" => report(manager.borrow_mut().start_long_break_activity().map(|_| ())),
        "x" => manager.borrow_mut().stop_current_activity(),
        "q" => return false,
        "" => {}
        other => Display::show_unknown_command(other),
    }
    true
}

/// Shows a command failure without aborting the loop.
fn report<E: std::fmt::Display>(result: Result<(), E>) {
    if let Err(error) = result {
        Display::show_error(&error.to_string());
    }
}

// ============================================================================
// Tests
// ============================================================================
