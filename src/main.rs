//! Pomidorka - a terminal-resident pomodoro technique timer.
//!
//! Work and break periods tick down once per second; every transition is
//! announced on the terminal and an end-of-activity action (an alarm
//! command) is spawned fire-and-forget when a period ends.

use anyhow::Result;
use clap::Parser;

use pomidorka::app;
use pomidorka::cli::{Cli, Display};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if let Err(e) = execute(cli).await {
        Display::show_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug level.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Validates the configuration and runs the interactive loop.
async fn execute(cli: Cli) -> Result<()> {
    let settings = cli.settings();
    settings
        .validate()
        .map_err(|message| anyhow::anyhow!(message))?;

    // The tick loop is spawned with spawn_local, so the application runs
    // inside a LocalSet on the current-thread runtime.
    let local = tokio::task::LocalSet::new();
    local.run_until(app::run(settings, !cli.no_action)).await
}
