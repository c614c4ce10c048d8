//! JSON response shapes of the live feeds
//!
//! Position feeds come in two shapes:
//!
//! ```text
//! {"latitude": 12.3, "longitude": -45.6, "altitude": 418.2, "timestamp": 1718000000}
//! {"iss_position": {"latitude": "12.3", "longitude": "-45.6"}, "timestamp": 1718000000}
//! ```
//!
//! Numbers may be sent as JSON numbers or as numeric strings.

use serde::Deserialize;

use crate::app::models::{CrewMember, CrewRoster, OrbitalPositionMarker, TrackedObject};
use crate::app::services::live_feeds::crew::group_crew;
use crate::app::services::live_feeds::orbit::OrbitParameters;
use crate::{Error, Result};

/// A JSON number that some feeds send as a string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum FlexibleNumber {
    Number(f64),
    Text(String),
}

impl FlexibleNumber {
    fn value(&self) -> Option<f64> {
        let value = match self {
            FlexibleNumber::Number(n) => Some(*n),
            FlexibleNumber::Text(s) => s.trim().parse::<f64>().ok(),
        };
        value.filter(|v| v.is_finite())
    }
}

#[derive(Debug, Deserialize)]
struct NestedPosition {
    latitude: FlexibleNumber,
    longitude: FlexibleNumber,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PositionResponse {
    Nested {
        iss_position: NestedPosition,
        timestamp: Option<FlexibleNumber>,
    },
    Flat {
        latitude: FlexibleNumber,
        longitude: FlexibleNumber,
        altitude: Option<FlexibleNumber>,
        timestamp: Option<FlexibleNumber>,
    },
}

/// Decode a position response into a live marker
///
/// A missing altitude falls back to the object's nominal altitude and a
/// missing timestamp to `now`. Unusable coordinates are a structural failure.
pub fn decode_position(
    source: &str,
    body: &[u8],
    object: TrackedObject,
    now: i64,
) -> Result<OrbitalPositionMarker> {
    let response: PositionResponse =
        serde_json::from_slice(body).map_err(|e| Error::decode(source, e.to_string()))?;

    let (latitude, longitude, altitude, timestamp) = match response {
        PositionResponse::Nested {
            iss_position,
            timestamp,
        } => (iss_position.latitude, iss_position.longitude, None, timestamp),
        PositionResponse::Flat {
            latitude,
            longitude,
            altitude,
            timestamp,
        } => (latitude, longitude, altitude, timestamp),
    };

    let lat = latitude
        .value()
        .ok_or_else(|| Error::invalid_response(source, "latitude is not a number"))?;
    let lng = longitude
        .value()
        .ok_or_else(|| Error::invalid_response(source, "longitude is not a number"))?;

    let altitude_km = altitude
        .and_then(|a| a.value())
        .unwrap_or_else(|| OrbitParameters::for_object(object).nominal_altitude_km);
    let timestamp = timestamp
        .and_then(|t| t.value())
        .map(|t| t as i64)
        .unwrap_or(now);

    Ok(OrbitalPositionMarker {
        object,
        lat,
        lng,
        altitude_km,
        timestamp,
        simulated: false,
    })
}

#[derive(Debug, Deserialize)]
struct CrewResponse {
    number: Option<usize>,
    people: Vec<CrewMember>,
}

/// Decode a crew response and group it by spacecraft
pub fn decode_crew(source: &str, body: &[u8]) -> Result<CrewRoster> {
    let response: CrewResponse =
        serde_json::from_slice(body).map_err(|e| Error::decode(source, e.to_string()))?;

    Ok(group_crew(response.number, response.people))
}
