//! Command-line argument definitions for the astro marker loader
//!
//! This module defines the CLI interface using the clap derive API.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::{Error, Result};

/// CLI arguments for the astro marker loader
///
/// Normalizes meteorite and fireball tables and live orbital feeds into
/// geospatial markers for a globe visualization.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "astro-markers",
    version,
    about = "Load meteorite, fireball and orbital markers for a globe visualization",
    long_about = "Reads the meteorite landings and fireball reports tables, queries live ISS, \
                  Tiangong and crew feeds with ordered fallbacks, and emits one batch per marker \
                  slot. Sources that fail never abort a load: tables degrade to empty batches \
                  and live feeds fall back to simulated values."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Load every marker source once and print the results
    Load(LoadArgs),
}

/// Arguments for the load command
#[derive(Debug, Clone, Parser)]
pub struct LoadArgs {
    /// Meteorite landings table (comma-separated, header first)
    #[arg(short = 'm', long = "meteorites", value_name = "PATH")]
    pub meteorite_csv: Option<PathBuf>,

    /// Fireball and bolide reports table (comma-separated, header first)
    #[arg(short = 'f', long = "fireballs", value_name = "PATH")]
    pub fireball_csv: Option<PathBuf>,

    /// JSON configuration file
    ///
    /// Defaults to astro-markers/config.json in the user configuration
    /// directory when that file exists.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Skip all live endpoints and use simulated orbits
    #[arg(long = "offline")]
    pub offline: bool,

    /// Time budget for a single live source attempt, in seconds
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// How to print dispatched markers
    #[arg(long = "format", value_enum, default_value = "summary")]
    pub output_format: OutputFormat,

    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format for dispatched markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per slot plus a load summary
    Summary,
    /// One JSON document per slot, then the load summary as JSON
    Json,
}

impl Args {
    /// Get the command to execute
    pub fn get_command(self) -> Option<Commands> {
        self.command
    }
}

impl LoadArgs {
    /// Validate argument combinations clap cannot express
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == Some(0) {
            return Err(Error::configuration("--timeout must be at least 1 second"));
        }

        for path in [&self.meteorite_csv, &self.fireball_csv, &self.config_file]
            .into_iter()
            .flatten()
        {
            if !path.exists() {
                return Err(Error::file_not_found(path.display().to_string()));
            }
        }

        Ok(())
    }

    /// Get the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
