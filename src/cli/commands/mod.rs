//! Command implementations for the astro marker CLI
//!
//! Each command is implemented in its own module; shared setup such as
//! logging and layered configuration lives in [`shared`].

pub mod load;
pub mod shared;

use tokio_util::sync::CancellationToken;

use crate::cli::args::{Args, Commands};
use crate::{Error, LoadSummary, Result};

/// Main command runner
///
/// Dispatches to the subcommand handler selected on the command line.
pub async fn run(args: Args, cancellation_token: CancellationToken) -> Result<LoadSummary> {
    match args.get_command() {
        Some(Commands::Load(load_args)) => load::run_load(load_args, cancellation_token).await,
        None => Err(Error::configuration("No command given")),
    }
}
