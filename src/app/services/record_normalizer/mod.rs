//! Record normalization into geospatial markers
//!
//! This module maps raw tabular records from the two supported datasets into
//! typed markers ready for a globe display.
//!
//! # Architecture
//!
//! - [`meteorite`] - Meteorite landings: verbatim field names, signed decimal coordinates
//! - [`fireball`] - Fireball reports: aliased field names, hemisphere-letter coordinates
//! - [`stats`] - Normalization statistics and result structures
//!
//! Neither transform fails as a whole. A record that cannot become a marker is
//! counted in [`NormalizeStats`] and left out of the batch.
//!
//! # Example Usage
//!
//! ```rust
//! use astro_markers::app::services::record_normalizer::normalize_fireballs;
//! use astro_markers::app::services::tabular_parser::parse_tabular;
//!
//! let records = parse_tabular("Latitude (Deg),Longitude (Deg),Altitude (km)\n22.0S,29.2E,31.5");
//! let result = normalize_fireballs(records, 3);
//!
//! assert_eq!(result.markers.len(), 1);
//! assert_eq!(result.markers[0].lat, -22.0);
//! assert_eq!(result.markers[0].altitude, "31.5");
//! ```

pub mod fireball;
pub mod meteorite;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use fireball::normalize_fireballs;
pub use meteorite::normalize_meteorites;
pub use stats::{NormalizeResult, NormalizeStats};
