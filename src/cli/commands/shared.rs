//! Shared components for CLI commands
//!
//! Logging setup and the layered configuration flow: defaults, then the
//! config file, then command-line overrides.

use std::path::PathBuf;
use tracing::{debug, info};

use crate::Result;
use crate::cli::args::LoadArgs;
use crate::config::LoaderConfig;
use crate::constants::LOG_TARGET;

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn setup_logging(args: &LoadArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .ok();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using the layered approach (defaults -> file -> args)
pub fn load_configuration(args: &LoadArgs) -> Result<LoaderConfig> {
    let config_file: Option<PathBuf> = match &args.config_file {
        Some(path) => Some(path.clone()),
        None => LoaderConfig::default_config_path().filter(|path| path.exists()),
    };

    let mut config = match &config_file {
        Some(path) => {
            info!("Using config file: {}", path.display());
            LoaderConfig::from_file(path)?
        }
        None => {
            info!("No config file found, using defaults");
            LoaderConfig::default()
        }
    };

    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut LoaderConfig, args: &LoadArgs) {
    if let Some(path) = &args.meteorite_csv {
        config.meteorite_csv = Some(path.clone());
    }
    if let Some(path) = &args.fireball_csv {
        config.fireball_csv = Some(path.clone());
    }
    if let Some(secs) = args.timeout_secs {
        config.live.attempt_timeout_secs = secs;
    }
    if args.offline {
        config.live.enabled = false;
    }
}
