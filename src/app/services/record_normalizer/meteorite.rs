//! Meteorite landing normalization
//!
//! The meteorite table encodes coordinates as signed decimal degrees under
//! fixed column names, so no alias or hemisphere handling is needed.

use tracing::{debug, info};

use super::stats::{NormalizeResult, NormalizeStats};
use crate::app::models::{MarkerKind, MeteoriteMarker, RawRecord, leading_number};
use crate::constants::meteorite_fields as fields;

/// Map meteorite records with coordinates into markers
///
/// Records with an empty `reclat` or `reclong` are filtered out. Coordinates
/// are read from their leading number, so trailing text such as a unit or a
/// hemisphere letter is ignored. Records without a leading number are
/// rejected and counted.
pub fn normalize_meteorites(
    records: &[RawRecord],
    debug_sample_size: usize,
) -> NormalizeResult<MeteoriteMarker> {
    let mut stats = NormalizeStats::new(records.len());
    let mut markers = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        if index < debug_sample_size {
            debug!("Meteorite record {}: {:?}", index, record);
        }

        let (Some(lat_text), Some(lng_text)) = (
            non_empty(record, fields::LATITUDE),
            non_empty(record, fields::LONGITUDE),
        ) else {
            stats.missing_coordinates += 1;
            continue;
        };

        match (leading_number(lat_text), leading_number(lng_text)) {
            (Some(lat), Some(lng)) => {
                markers.push(meteorite_marker(record, lat, lng));
            }
            _ => {
                stats.add_unparseable(format!(
                    "Meteorite record {}: invalid coordinates ({}, {})",
                    index, lat_text, lng_text
                ));
            }
        }
    }

    stats.markers_produced = markers.len();
    info!(
        "Normalized meteorites: {} -> {} markers ({} without coordinates, {} unparseable)",
        stats.total_records,
        stats.markers_produced,
        stats.missing_coordinates,
        stats.unparseable_coordinates
    );

    NormalizeResult { markers, stats }
}

fn meteorite_marker(record: &RawRecord, lat: f64, lng: f64) -> MeteoriteMarker {
    let text = |header: &str| record.get(header).unwrap_or_default().to_string();

    MeteoriteMarker {
        kind: MarkerKind::Meteorite,
        lat,
        lng,
        name: text(fields::NAME),
        mass: text(fields::MASS),
        year: text(fields::YEAR),
        classification: text(fields::CLASSIFICATION),
    }
}

fn non_empty<'a>(record: &'a RawRecord, header: &str) -> Option<&'a str> {
    record.get(header).filter(|v| !v.is_empty())
}
