//! Data models for astro marker loading
//!
//! This module contains the raw tabular record type and the normalized marker
//! structures handed to visualization consumers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Raw Tabular Record
// =============================================================================

/// One data row of a delimited source file, keyed by header
///
/// Column order follows the header row. Values are always trimmed strings;
/// no type coercion happens at this level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: IndexMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, overwriting any earlier value stored under the same header
    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(header.into(), value.into());
    }

    /// Exact-key lookup
    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields.get(header).map(String::as_str)
    }

    /// Iterate fields in header order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = RawRecord::new();
        for (header, value) in iter {
            record.insert(header, value);
        }
        record
    }
}

// =============================================================================
// Geospatial Markers
// =============================================================================

/// Kind tag carried by tabular markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Meteorite,
    Fireball,
}

/// A recorded meteorite landing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeteoriteMarker {
    #[serde(rename = "type")]
    pub kind: MarkerKind,

    /// Signed decimal degrees
    pub lat: f64,

    /// Signed decimal degrees
    pub lng: f64,

    pub name: String,

    /// Mass including its unit as found in the source, e.g. "21"
    pub mass: String,

    pub year: String,

    pub classification: String,
}

/// A fireball or bolide event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FireballMarker {
    #[serde(rename = "type")]
    pub kind: MarkerKind,

    /// Clamped to [-90, 90]
    pub lat: f64,

    /// Clamped to [-180, 180]
    pub lng: f64,

    /// Altitude text as found in the source, "0" when absent
    ///
    /// Not guaranteed to be numeric; use [`FireballMarker::altitude_km`].
    pub altitude: String,

    /// Total radiated energy in joules, as text
    pub energy: String,

    /// Peak brightness timestamp, as text
    pub date: String,

    /// Entry velocity in km/s, as text
    pub velocity: String,

    /// The source row, kept for hover and detail display
    #[serde(rename = "rawData")]
    pub raw: RawRecord,
}

impl FireballMarker {
    /// Altitude parsed leniently from its leading number, 0.0 when not numeric
    pub fn altitude_km(&self) -> f64 {
        leading_number(&self.altitude).unwrap_or(0.0)
    }
}

/// Longest leading slice of `text` that parses as a float
pub(crate) fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim();
    let boundaries = text
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .collect::<Vec<_>>();

    boundaries
        .into_iter()
        .rev()
        .find_map(|end| text[..end].parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

// =============================================================================
// Live Orbital Data
// =============================================================================

/// Orbital objects with a live position feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TrackedObject {
    #[serde(rename = "ISS")]
    Iss,
    Tiangong,
}

impl TrackedObject {
    pub const ALL: [TrackedObject; 2] = [TrackedObject::Iss, TrackedObject::Tiangong];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackedObject::Iss => "ISS",
            TrackedObject::Tiangong => "Tiangong",
        }
    }
}

impl fmt::Display for TrackedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current position of a tracked orbital object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitalPositionMarker {
    pub object: TrackedObject,

    pub lat: f64,

    pub lng: f64,

    pub altitude_km: f64,

    /// Seconds since the Unix epoch
    pub timestamp: i64,

    /// True only when the position was computed rather than fetched
    pub simulated: bool,
}

/// One person aboard a spacecraft, as reported by the crew feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub name: String,
    pub craft: String,
}

impl CrewMember {
    pub fn new(name: impl Into<String>, craft: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            craft: craft.into(),
        }
    }
}

/// People currently in space, grouped by spacecraft
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrewRoster {
    pub count: usize,

    /// Spacecraft name to crew names, both in first-seen order
    pub crafts: IndexMap<String, Vec<String>>,
}

impl CrewRoster {
    /// Names aboard one craft
    pub fn crew_of(&self, craft: &str) -> Option<&[String]> {
        self.crafts.get(craft).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0 && self.crafts.is_empty()
    }
}
