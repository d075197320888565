//! HyprMotion - Animation and bezier curve parser for Hyprland configs
//!
//! Binary entry point: sets up logging and settings, then runs the
//! requested command.

use clap::Parser;
use hyprmotion::{
    cli::{HyprMotionCli, HyprMotionCliExecutor},
    config::Settings,
    logging::{init_logging, LogConfig},
    HyprMotionError, Result,
};
use tracing::{debug, error};

fn run(cli: HyprMotionCli) -> Result<()> {
    let settings = Settings::load(cli.settings.as_deref())
        .map_err(|e| HyprMotionError::ConfigurationError(format!("Failed to load settings: {}", e)))?;
    debug!("Using settings: {:?}", settings);

    let executor = HyprMotionCliExecutor::new(settings, cli.json);
    executor.execute(cli.command)
}

fn main() -> Result<()> {
    let cli = HyprMotionCli::parse();

    let log_config = if cli.verbose {
        LogConfig::development()
    } else {
        LogConfig::default()
    }
    .with_env_overrides();

    init_logging(&log_config)
        .map_err(|e| HyprMotionError::ConfigurationError(format!("Failed to initialize logging: {}", e)))?;

    if let Err(e) = run(cli) {
        error!("Command failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
