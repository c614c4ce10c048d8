//! The `load` command
//!
//! Runs one marker load, printing each dispatched payload as it reaches its
//! slot and a summary at the end.

use std::io::Write;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::shared::{load_configuration, setup_logging};
use crate::app::services::resilient_fetcher::FetchOrigin;
use crate::cli::args::{LoadArgs, OutputFormat};
use crate::{Error, LoadSummary, MarkerLoader, MarkerPayload, MarkerSink, Result, SinkSlot};

/// Load command runner
///
/// 1. Set up logging and layered configuration
/// 2. Register a printing handler for every slot
/// 3. Run the load, aborting if the token is cancelled
/// 4. Report the summary
pub async fn run_load(args: LoadArgs, cancellation_token: CancellationToken) -> Result<LoadSummary> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    let loader = MarkerLoader::with_reqwest(config)?;
    let mut sink = printing_sink(args.output_format);

    let summary = tokio::select! {
        summary = loader.load(&mut sink) => summary,
        _ = cancellation_token.cancelled() => {
            return Err(Error::processing_interrupted("Load cancelled"));
        }
    };

    print_summary(&summary, args.output_format)?;
    info!("Load finished in {}ms", summary.elapsed_ms);

    Ok(summary)
}

/// Sink printing every payload to stdout in the chosen format
pub fn printing_sink(format: OutputFormat) -> MarkerSink {
    let mut sink = MarkerSink::new();
    for slot in SinkSlot::ALL {
        sink.register(slot, move |payload| print_payload(&payload, format));
    }
    sink
}

fn print_payload(payload: &MarkerPayload, format: OutputFormat) {
    let line = match format {
        OutputFormat::Summary => format!("{:<18} {}", payload.slot(), payload.summary()),
        OutputFormat::Json => match serde_json::to_string(payload) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize {} payload: {}", payload.slot(), e);
                return;
            }
        },
    };
    println!("{}", line);
}

fn print_summary(summary: &LoadSummary, format: OutputFormat) -> Result<()> {
    let mut out = std::io::stdout().lock();

    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut out, summary)?;
            writeln!(out)?;
        }
        OutputFormat::Summary => {
            writeln!(out)?;
            let datasets = [
                ("Fireballs", &summary.fireballs),
                ("Meteorites", &summary.meteorites),
            ];
            for (name, stats) in datasets {
                writeln!(
                    out,
                    "{:<11} {} of {} records ({:.1}%), {} missing coordinates, {} unparseable",
                    name,
                    stats.markers_produced,
                    stats.total_records,
                    stats.success_rate(),
                    stats.missing_coordinates,
                    stats.unparseable_coordinates
                )?;
            }
            for feed in &summary.feeds {
                let origin = match &feed.origin {
                    FetchOrigin::Live { source } => format!("live from {}", source),
                    FetchOrigin::Synthetic => "synthetic".to_string(),
                };
                writeln!(
                    out,
                    "{:<18} {} ({} failed attempts)",
                    feed.feed, origin, feed.failed_attempts
                )?;
            }
            writeln!(out, "Elapsed: {}ms", summary.elapsed_ms)?;
        }
    }

    Ok(())
}
