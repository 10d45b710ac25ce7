//! findtui - main entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use findtui_cli::cli::{Cli, GlobalArgs, LogLevel, dispatch_command};

/// Environment variable for the log level.
const LOG_LEVEL_ENV: &str = "FINDTUI_LOG_LEVEL";

/// Picks the log level: `-v`, then `--log-level`, then `FINDTUI_LOG_LEVEL`.
fn log_level(args: &GlobalArgs) -> LogLevel {
    if args.verbose {
        LogLevel::Debug
    } else if let Some(level) = args.log_level {
        level
    } else if let Ok(env_level) = std::env::var(LOG_LEVEL_ENV) {
        LogLevel::from_str_loose(&env_level).unwrap_or_default()
    } else {
        LogLevel::default()
    }
}

fn init_logging(args: &GlobalArgs) {
    let level = log_level(args);
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level.as_filter_str())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.global);
    dispatch_command(cli)
}
