//! Configuration management and validation.
//!
//! Provides the loader configuration: where the tabular datasets live, which
//! live endpoints each feed tries, and how long a single attempt may take.
//! Every field has a default, so a partial JSON file is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::app::models::{CrewMember, TrackedObject};
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_ATTEMPT_TIMEOUT_SECS, DEFAULT_CREW_ENDPOINTS,
    DEFAULT_DEBUG_SAMPLE_SIZE, DEFAULT_ISS_ENDPOINTS,
};
use crate::{Error, Result};

/// Endpoints of one orbital position feed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitalFeedConfig {
    /// Tried in order; empty means the simulated orbit is used directly
    pub endpoints: Vec<String>,
}

impl OrbitalFeedConfig {
    pub fn new<I, S>(endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            endpoints: endpoints.into_iter().map(Into::into).collect(),
        }
    }
}

/// Crew roster feed settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrewFeedConfig {
    pub endpoints: Vec<String>,

    /// Roster reported when every endpoint fails
    pub fallback_roster: Vec<CrewMember>,
}

impl Default for CrewFeedConfig {
    fn default() -> Self {
        Self {
            endpoints: DEFAULT_CREW_ENDPOINTS.iter().map(|s| s.to_string()).collect(),
            fallback_roster: Vec::new(),
        }
    }
}

/// Live feed settings shared by the position and crew feeds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveFeedConfig {
    /// When false no endpoint is contacted and every feed is synthetic
    pub enabled: bool,

    /// Time budget for a single source attempt
    pub attempt_timeout_secs: u64,

    pub iss: OrbitalFeedConfig,

    /// No live endpoints by default; its public sources are too unreliable
    pub tiangong: OrbitalFeedConfig,

    pub crew: CrewFeedConfig,
}

impl Default for LiveFeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            attempt_timeout_secs: DEFAULT_ATTEMPT_TIMEOUT_SECS,
            iss: OrbitalFeedConfig::new(DEFAULT_ISS_ENDPOINTS.iter().copied()),
            tiangong: OrbitalFeedConfig::default(),
            crew: CrewFeedConfig::default(),
        }
    }
}

impl LiveFeedConfig {
    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_secs(self.attempt_timeout_secs)
    }

    /// Position feed settings for a tracked object
    pub fn feed(&self, object: TrackedObject) -> &OrbitalFeedConfig {
        match object {
            TrackedObject::Iss => &self.iss,
            TrackedObject::Tiangong => &self.tiangong,
        }
    }
}

/// Global configuration for marker loading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Meteorite landings table; no meteorite markers when unset
    pub meteorite_csv: Option<PathBuf>,

    /// Fireball and bolide reports table; no fireball markers when unset
    pub fireball_csv: Option<PathBuf>,

    /// Leading records logged at debug level per dataset
    pub debug_sample_size: usize,

    pub live: LiveFeedConfig,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            meteorite_csv: None,
            fireball_csv: None,
            debug_sample_size: DEFAULT_DEBUG_SAMPLE_SIZE,
            live: LiveFeedConfig::default(),
        }
    }
}

impl LoaderConfig {
    /// Create new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a JSON configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config {}", path.display()), e))?;
        let config: LoaderConfig = serde_json::from_str(&text).map_err(|e| {
            Error::configuration(format!("Invalid config {}: {}", path.display(), e))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Location of the per-user configuration file, if the platform has one
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Check settings that would make every attempt fail instantly
    pub fn validate(&self) -> Result<()> {
        if self.live.attempt_timeout_secs == 0 {
            return Err(Error::configuration(
                "attempt_timeout_secs must be at least 1",
            ));
        }

        let endpoint_lists = [
            ("iss", &self.live.iss.endpoints),
            ("tiangong", &self.live.tiangong.endpoints),
            ("crew", &self.live.crew.endpoints),
        ];
        for (feed, endpoints) in endpoint_lists {
            if let Some(bad) = endpoints
                .iter()
                .find(|url| !(url.starts_with("http://") || url.starts_with("https://")))
            {
                return Err(Error::configuration(format!(
                    "{} endpoint is not an http(s) URL: {}",
                    feed, bad
                )));
            }
        }

        Ok(())
    }

    pub fn with_meteorite_csv(mut self, path: impl Into<PathBuf>) -> Self {
        self.meteorite_csv = Some(path.into());
        self
    }

    pub fn with_fireball_csv(mut self, path: impl Into<PathBuf>) -> Self {
        self.fireball_csv = Some(path.into());
        self
    }

    pub fn with_debug_sample_size(mut self, sample_size: usize) -> Self {
        self.debug_sample_size = sample_size;
        self
    }

    pub fn with_attempt_timeout_secs(mut self, secs: u64) -> Self {
        self.live.attempt_timeout_secs = secs;
        self
    }

    /// Skip every live endpoint and use synthetic values
    pub fn offline(mut self) -> Self {
        self.live.enabled = false;
        self
    }

    pub fn with_feed_endpoints<I, S>(mut self, object: TrackedObject, endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let feed = OrbitalFeedConfig::new(endpoints);
        match object {
            TrackedObject::Iss => self.live.iss = feed,
            TrackedObject::Tiangong => self.live.tiangong = feed,
        }
        self
    }

    pub fn with_crew_endpoints<I, S>(mut self, endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.live.crew.endpoints = endpoints.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_fallback_roster(mut self, roster: Vec<CrewMember>) -> Self {
        self.live.crew.fallback_roster = roster;
        self
    }
}
