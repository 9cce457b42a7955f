//! Terminal output for the interactive timer.
//!
//! This is the terminal counterpart of the original tray window: a
//! remaining-time line, transition prompts, and error messages.

use std::io::Write;

use crate::types::ActivityKind;

// ============================================================================
// Display
// ============================================================================

/// Display utilities for terminal output.
pub struct Display;

impl Display {
    /// Shows the command help printed at startup.
    pub fn show_welcome() {
        println!("pomidorka - pomodoro timer");
        println!("  w  start a work period");
        println!("  s  start a short break");
        println!("  l  start a long break");
        println!("  x  stop the running activity");
        println!("  q  quit");
        println!();
        println!("Start an activity");
    }

    /// Shows that an activity was started.
    pub fn show_activity_started(kind: ActivityKind, seconds: u32) {
        let label = match kind {
            ActivityKind::Work => "work period",
            ActivityKind::ShortBreak => "short break",
            ActivityKind::LongBreak => "long break",
        };
        let (minutes, secs) = Self::format_time(seconds);
        println!("* started {} ({:02}:{:02})", label, minutes, secs);
    }

    /// Redraws the remaining-time line in place.
    pub fn show_remaining(seconds: u32) {
        let (minutes, secs) = Self::format_time(seconds);
        print!("\r  {:02}:{:02}", minutes, secs);
        let _ = std::io::stdout().flush();
    }

    /// Shows the prompt after a work period ends.
    pub fn show_work_ended() {
        println!();
        println!("Take a break");
    }

    /// Shows the prompt after a break ends.
    pub fn show_break_ended() {
        println!();
        println!("Start an activity");
    }

    /// Shows a warning for an unrecognized command.
    pub fn show_unknown_command(input: &str) {
        println!("unknown command '{}' (w/s/l/x/q)", input);
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("error: {}", message);
    }

    /// Formats remaining seconds as (minutes, seconds).
    fn format_time(total_seconds: u32) -> (u32, u32) {
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        (minutes, seconds)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod format_time_tests {
        use super::*;

        #[test]
        fn test_format_time_zero() {
            assert_eq!(Display::format_time(0), (0, 0));
        }

        #[test]
        fn test_format_time_seconds_only() {
            assert_eq!(Display::format_time(45), (0, 45));
        }

        #[test]
        fn test_format_time_exact_minute() {
            assert_eq!(Display::format_time(300), (5, 0));
        }

        #[test]
        fn test_format_time_work_period() {
            assert_eq!(Display::format_time(1500), (25, 0));
        }

        #[test]
        fn test_format_time_mixed() {
            assert_eq!(Display::format_time(1234), (20, 34));
        }
    }
}
