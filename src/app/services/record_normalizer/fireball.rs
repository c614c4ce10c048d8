//! Fireball and bolide report normalization
//!
//! Fireball tables have been published with several header spellings and mix
//! signed decimal with hemisphere-letter coordinates. Every field goes through
//! the alias resolver and coordinates through the coordinate resolver.

use tracing::{debug, info};

use super::stats::{NormalizeResult, NormalizeStats};
use crate::app::models::{FireballMarker, MarkerKind, RawRecord};
use crate::app::services::coordinate_resolver::resolve_clamped_pair;
use crate::app::services::field_resolver::{resolve_any, resolve_or};
use crate::constants::fireball_fields as fields;

/// Map fireball records with coordinates into markers
///
/// Records without both a latitude and a longitude field are filtered out.
/// Records whose coordinate text does not parse are rejected rather than
/// clamped. Each marker keeps its source record.
pub fn normalize_fireballs(
    records: Vec<RawRecord>,
    debug_sample_size: usize,
) -> NormalizeResult<FireballMarker> {
    let mut stats = NormalizeStats::new(records.len());
    let mut markers = Vec::with_capacity(records.len());

    if let Some(first) = records.first() {
        debug!(
            "First fireball headers: {:?}",
            first.headers().collect::<Vec<_>>()
        );
    }

    for (index, record) in records.into_iter().enumerate() {
        let (Some(lat_text), Some(lng_text)) = (
            resolve_any(&record, fields::LATITUDE),
            resolve_any(&record, fields::LONGITUDE),
        ) else {
            stats.missing_coordinates += 1;
            continue;
        };

        let Some((lat, lng)) = resolve_clamped_pair(lat_text, lng_text) else {
            stats.add_unparseable(format!(
                "Fireball record {}: unparseable coordinates ({}, {})",
                index, lat_text, lng_text
            ));
            continue;
        };

        if index < debug_sample_size {
            debug!(
                "Fireball record {} coordinates: {:?} -> {}, {:?} -> {}",
                index, lat_text, lat, lng_text, lng
            );
        }

        let marker = FireballMarker {
            kind: MarkerKind::Fireball,
            lat,
            lng,
            altitude: resolve_or(&record, fields::ALTITUDE, fields::DEFAULT_ALTITUDE).to_string(),
            energy: resolve_or(&record, fields::ENERGY, "").to_string(),
            date: resolve_or(&record, fields::PEAK_BRIGHTNESS_DATE, "").to_string(),
            velocity: resolve_or(&record, fields::VELOCITY, "").to_string(),
            raw: record,
        };
        markers.push(marker);
    }

    stats.markers_produced = markers.len();
    info!(
        "Normalized fireballs: {} -> {} markers ({} without coordinates, {} unparseable)",
        stats.total_records,
        stats.markers_produced,
        stats.missing_coordinates,
        stats.unparseable_coordinates
    );

    NormalizeResult { markers, stats }
}
