//! Top-level marker loading
//!
//! One load reads both tabular datasets and queries the three live feeds, then
//! hands exactly one payload to each sink slot. The tabular and live streams
//! run concurrently; nothing a source does can make the load fail.

use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::app::models::{
    CrewRoster, FireballMarker, MeteoriteMarker, OrbitalPositionMarker, RawRecord, TrackedObject,
};
use crate::app::services::live_feeds::{HttpClient, LiveFeeds, ReqwestClient};
use crate::app::services::marker_sink::{MarkerPayload, MarkerSink, SinkSlot};
use crate::app::services::record_normalizer::{
    NormalizeResult, NormalizeStats, normalize_fireballs, normalize_meteorites,
};
use crate::app::services::resilient_fetcher::{FetchOrigin, Fetched};
use crate::app::services::tabular_parser::parse_tabular;
use crate::config::LoaderConfig;
use crate::{Error, Result};

/// How one live feed was served
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedOutcome {
    pub feed: String,

    #[serde(flatten)]
    pub origin: FetchOrigin,

    pub failed_attempts: usize,
}

impl FeedOutcome {
    fn new<T>(slot: SinkSlot, fetched: &Fetched<T>) -> Self {
        Self {
            feed: slot.to_string(),
            origin: fetched.origin.clone(),
            failed_attempts: fetched.failed_attempts,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self.origin, FetchOrigin::Live { .. })
    }
}

/// Outcome of one [`MarkerLoader::load`]
#[derive(Debug, Clone, Serialize)]
pub struct LoadSummary {
    pub fireballs: NormalizeStats,

    pub meteorites: NormalizeStats,

    /// ISS, Tiangong and crew, in dispatch order
    pub feeds: Vec<FeedOutcome>,

    pub elapsed_ms: u64,
}

impl LoadSummary {
    /// Feeds that fell back to synthetic values
    pub fn synthetic_feeds(&self) -> impl Iterator<Item = &FeedOutcome> {
        self.feeds.iter().filter(|outcome| !outcome.is_live())
    }
}

/// Loads every marker source and dispatches the results to a sink
#[derive(Debug)]
pub struct MarkerLoader<C> {
    config: LoaderConfig,
    feeds: LiveFeeds<C>,
}

impl MarkerLoader<ReqwestClient> {
    /// Loader using a reqwest client bounded by the configured attempt timeout
    pub fn with_reqwest(config: LoaderConfig) -> Result<Self> {
        let client = ReqwestClient::with_timeout(config.live.attempt_timeout())?;
        Ok(Self::new(config, client))
    }
}

impl<C: HttpClient> MarkerLoader<C> {
    pub fn new(config: LoaderConfig, client: C) -> Self {
        let feeds = LiveFeeds::new(client, config.live.clone());
        Self { config, feeds }
    }

    /// Load all sources and dispatch one payload per slot
    ///
    /// Dispatch order is fireballs, meteorites, ISS position, Tiangong
    /// position, crew roster.
    pub async fn load(&self, sink: &mut MarkerSink) -> LoadSummary {
        let started = Instant::now();
        info!("Loading astro markers");

        let ((fireballs, meteorites), (iss, tiangong, crew)) =
            tokio::join!(self.load_tabular(), self.load_live());

        let summary = LoadSummary {
            fireballs: fireballs.stats.clone(),
            meteorites: meteorites.stats.clone(),
            feeds: vec![
                FeedOutcome::new(SinkSlot::OrbitalPosition(TrackedObject::Iss), &iss),
                FeedOutcome::new(SinkSlot::OrbitalPosition(TrackedObject::Tiangong), &tiangong),
                FeedOutcome::new(SinkSlot::CrewRoster, &crew),
            ],
            elapsed_ms: started.elapsed().as_millis() as u64,
        };

        sink.dispatch(MarkerPayload::Fireballs(fireballs.markers));
        sink.dispatch(MarkerPayload::Meteorites(meteorites.markers));
        sink.dispatch(MarkerPayload::OrbitalPosition(iss.into_value()));
        sink.dispatch(MarkerPayload::OrbitalPosition(tiangong.into_value()));
        sink.dispatch(MarkerPayload::CrewRoster(crew.into_value()));

        info!(
            "Loaded {} fireballs, {} meteorites, {}/{} live feeds in {}ms",
            summary.fireballs.markers_produced,
            summary.meteorites.markers_produced,
            summary.feeds.len() - summary.synthetic_feeds().count(),
            summary.feeds.len(),
            summary.elapsed_ms
        );

        summary
    }

    async fn load_tabular(
        &self,
    ) -> (
        NormalizeResult<FireballMarker>,
        NormalizeResult<MeteoriteMarker>,
    ) {
        let sample = self.config.debug_sample_size;

        let fireball_text = read_dataset("fireball", self.config.fireball_csv.as_deref()).await;
        let meteorite_text = read_dataset("meteorite", self.config.meteorite_csv.as_deref()).await;

        let (fireball_records, meteorite_records) =
            parse_datasets(&fireball_text, &meteorite_text);

        (
            normalize_fireballs(fireball_records, sample),
            normalize_meteorites(&meteorite_records, sample),
        )
    }

    async fn load_live(
        &self,
    ) -> (
        Fetched<OrbitalPositionMarker>,
        Fetched<OrbitalPositionMarker>,
        Fetched<CrewRoster>,
    ) {
        let iss = self.feeds.orbital_position(TrackedObject::Iss).await;
        let tiangong = self.feeds.orbital_position(TrackedObject::Tiangong).await;
        let crew = self.feeds.crew_roster().await;
        (iss, tiangong, crew)
    }
}

/// Parse both dataset texts into raw records
pub fn parse_datasets(fireball_text: &str, meteorite_text: &str) -> (Vec<RawRecord>, Vec<RawRecord>) {
    let fireballs = parse_tabular(fireball_text);
    let meteorites = parse_tabular(meteorite_text);
    debug!(
        "Parsed {} fireball and {} meteorite records",
        fireballs.len(),
        meteorites.len()
    );
    (fireballs, meteorites)
}

/// Read a dataset file, yielding empty text when it is unset or unreadable
async fn read_dataset(dataset: &str, path: Option<&Path>) -> String {
    let Some(path) = path else {
        debug!("No {} dataset configured", dataset);
        return String::new();
    };

    match read_text(path).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Skipping {} dataset: {}", dataset, e);
            String::new()
        }
    }
}

/// Read a file as text; invalid UTF-8 sequences become U+FFFD
async fn read_text(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::io(format!("Failed to read {}", path.display()), e)
        }
    })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
