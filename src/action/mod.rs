//! End-of-activity actions.
//!
//! When a work or break period ends, the application fires an opaque shell
//! command (typically an alarm sound). Execution is fire-and-forget by
//! contract: the core never observes failures, so [`ActionRunner::run`]
//! returns nothing and problems are only logged.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

// ============================================================================
// Placeholder Resolution
// ============================================================================

/// Replaces every `{base}` occurrence with the application base directory.
pub fn resolve_placeholders(template: &str, base: &Path) -> String {
    template.replace("{base}", &base.display().to_string())
}

// ============================================================================
// ActionRunner
// ============================================================================

/// Executes an end-of-activity action command.
pub trait ActionRunner {
    /// Runs the command template. Must not block on the command finishing.
    fn run(&mut self, command: &str);
}

// ============================================================================
// ShellActionRunner
// ============================================================================

/// Runs actions through `sh -c`, detached from the timer.
#[derive(Debug, Clone)]
pub struct ShellActionRunner {
    base: PathBuf,
}

impl ShellActionRunner {
    /// Creates a runner resolving `{base}` against the given directory.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Creates a runner with the executable's directory as the base,
    /// falling back to the working directory.
    pub fn from_exe_location() -> Self {
        let base = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base)
    }

    /// Returns the base directory used for `{base}` resolution.
    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl ActionRunner for ShellActionRunner {
    fn run(&mut self, command: &str) {
        let resolved = resolve_placeholders(command, &self.base);
        tracing::debug!(command = %resolved, "spawning end-of-activity action");

        let spawned = Command::new("sh")
            .arg("-c")
            .arg(&resolved)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        if let Err(error) = spawned {
            tracing::warn!(command = %resolved, %error, "end-of-activity action failed to spawn");
        }
    }
}

// ============================================================================
// MockActionRunner
// ============================================================================

/// Records action invocations instead of executing them (for tests).
#[derive(Debug, Default)]
pub struct MockActionRunner {
    commands: Vec<String>,
}

impl MockActionRunner {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded commands in invocation order.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }
}

impl ActionRunner for MockActionRunner {
    fn run(&mut self, command: &str) {
        self.commands.push(command.to_string());
    }
}

// ============================================================================
// Tests
// ============================================================================
