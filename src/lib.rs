//! Astro Markers Library
//!
//! A Rust library for turning loosely structured astronomical datasets into
//! uniform geospatial markers ready for a globe visualization.
//!
//! This library provides tools for:
//! - Parsing comma-delimited meteorite and fireball tables into raw records
//! - Resolving field names across inconsistent dataset revisions
//! - Converting hemisphere-letter coordinates into signed decimal degrees
//! - Fetching live orbital positions and crew rosters with ordered fallbacks
//! - Handing every normalized batch to a single typed marker sink

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod coordinate_resolver;
        pub mod field_resolver;
        pub mod live_feeds;
        pub mod loader;
        pub mod marker_sink;
        pub mod record_normalizer;
        pub mod resilient_fetcher;
        pub mod tabular_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    CrewRoster, FireballMarker, MeteoriteMarker, OrbitalPositionMarker, RawRecord, TrackedObject,
};
pub use app::services::loader::{LoadSummary, MarkerLoader};
pub use app::services::marker_sink::{MarkerPayload, MarkerSink, SinkSlot};
pub use config::LoaderConfig;

/// Result type alias for marker loading operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for marker loading operations
///
/// None of these escape [`MarkerLoader::load`]; they are the currency between a
/// single source strategy and the fetcher, and between file or configuration
/// loading and their callers.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed or returned a non-success status
    #[error("HTTP error from {url}: {message}")]
    Http { url: String, message: String },

    /// Response body could not be decoded
    #[error("Failed to decode response from {source_name}: {message}")]
    Decode {
        source_name: String,
        message: String,
    },

    /// Response decoded but lacks a required field or holds unusable values
    #[error("Invalid response from {source_name}: {message}")]
    InvalidResponse {
        source_name: String,
        message: String,
    },

    /// A source attempt exceeded its time budget
    #[error("Source {source_name} timed out after {timeout_ms}ms")]
    Timeout { source_name: String, timeout_ms: u128 },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an HTTP error
    pub fn http(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Http {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a response decoding error
    pub fn decode(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create an invalid response error
    pub fn invalid_response(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create a timeout error
    pub fn timeout(source_name: impl Into<String>, timeout: std::time::Duration) -> Self {
        Self::Timeout {
            source_name: source_name.into(),
            timeout_ms: timeout.as_millis(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// Whether this error came from talking to a live source
    pub fn is_source_failure(&self) -> bool {
        matches!(
            self,
            Self::Http { .. }
                | Self::Decode { .. }
                | Self::InvalidResponse { .. }
                | Self::Timeout { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode {
            source_name: "unknown".to_string(),
            message: error.to_string(),
        }
    }
}
