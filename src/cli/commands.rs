//! Command-line definitions for Pomidorka.
//!
//! Uses clap derive macro for argument parsing. Duration ranges are
//! enforced here, at the configuration boundary, so the countdown core can
//! treat positive durations as a precondition.

use clap::Parser;

use crate::types::Settings;

// ============================================================================
// CLI Structure
// ============================================================================

/// Pomidorka - the support tool for pomodoro technique
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pomidorka",
    version,
    about = "A terminal-resident pomodoro technique timer",
    long_about = "A terminal-resident pomodoro technique timer.\n\
                  Work and break periods tick down once per second; when a\n\
                  period ends, an end-of-activity action (an alarm command)\n\
                  is spawned fire-and-forget."
)]
pub struct Cli {
    /// Work period in seconds (1-86400)
    #[arg(
        short,
        long,
        default_value = "1500",
        value_parser = clap::value_parser!(u32).range(1..=86_400)
    )]
    pub work: u32,

    /// Short rest period in seconds (1-86400)
    #[arg(
        short,
        long,
        default_value = "300",
        value_parser = clap::value_parser!(u32).range(1..=86_400)
    )]
    pub short_rest: u32,

    /// Long rest period in seconds (1-86400)
    #[arg(
        short,
        long,
        default_value = "1500",
        value_parser = clap::value_parser!(u32).range(1..=86_400)
    )]
    pub long_rest: u32,

    /// Command run when an activity ends; {base} expands to the
    /// application base directory
    #[arg(long, default_value = "mplayer {base}/assets/alarm.mp3")]
    pub action: String,

    /// Do not run any command when an activity ends
    #[arg(long)]
    pub no_action: bool,

    /// Show verbose information during run
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Maps the parsed arguments onto timer settings.
    pub fn settings(&self) -> Settings {
        Settings::default()
            .with_work_period(self.work)
            .with_short_rest_period(self.short_rest)
            .with_long_rest_period(self.long_rest)
            .with_end_activity_action(self.action.clone())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["pomidorka"]).unwrap();

        assert_eq!(cli.work, 1500);
        assert_eq!(cli.short_rest, 300);
        assert_eq!(cli.long_rest, 1500);
        assert_eq!(cli.action, "mplayer {base}/assets/alarm.mp3");
        assert!(!cli.no_action);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::try_parse_from([
            "pomidorka",
            "--work",
            "600",
            "--short-rest",
            "120",
            "--long-rest",
            "900",
            "--action",
            "afplay ding.wav",
            "--no-action",
            "--verbose",
        ])
        .unwrap();

        assert_eq!(cli.work, 600);
        assert_eq!(cli.short_rest, 120);
        assert_eq!(cli.long_rest, 900);
        assert_eq!(cli.action, "afplay ding.wav");
        assert!(cli.no_action);
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::try_parse_from(["pomidorka", "-w", "60", "-s", "10", "-l", "30", "-v"])
            .unwrap();

        assert_eq!(cli.work, 60);
        assert_eq!(cli.short_rest, 10);
        assert_eq!(cli.long_rest, 30);
        assert!(cli.verbose);
    }

    #[test]
    fn test_work_period_zero_is_rejected() {
        assert!(Cli::try_parse_from(["pomidorka", "--work", "0"]).is_err());
    }

    #[test]
    fn test_work_period_above_range_is_rejected() {
        assert!(Cli::try_parse_from(["pomidorka", "--work", "86401"]).is_err());
    }

    #[test]
    fn test_settings_mapping() {
        let cli = Cli::try_parse_from(["pomidorka", "-w", "60", "-s", "10"]).unwrap();
        let settings = cli.settings();

        assert_eq!(settings.work_period, 60);
        assert_eq!(settings.short_rest_period, 10);
        assert_eq!(settings.long_rest_period, 1500);
        assert!(settings.validate().is_ok());
    }
}
