//! Tests for meteorite normalization

use super::*;
use crate::app::models::MarkerKind;
use crate::app::services::record_normalizer::normalize_meteorites;

#[test]
fn test_meteorites_with_coordinates_become_markers() {
    let records = parse_fixture(&create_meteorite_csv());
    let result = normalize_meteorites(&records, 0);

    assert_eq!(result.stats.total_records, 8);
    assert_eq!(result.marker_count(), 5);
    assert_eq!(result.stats.missing_coordinates, 2);
    assert_eq!(result.stats.unparseable_coordinates, 1);
    assert_eq!(result.stats.records_skipped(), 3);
}

#[test]
fn test_meteorite_fields_are_mapped_verbatim() {
    let records = parse_fixture(&create_meteorite_csv());
    let result = normalize_meteorites(&records, 0);

    let aachen = &result.markers[0];
    assert_eq!(aachen.kind, MarkerKind::Meteorite);
    assert_eq!(aachen.lat, 50.775);
    assert_eq!(aachen.lng, 6.08333);
    assert_eq!(aachen.name, "Aachen");
    assert_eq!(aachen.mass, "21");
    assert_eq!(aachen.year, "1880");
    assert_eq!(aachen.classification, "L5");
}

#[test]
fn test_meteorite_signed_decimals_are_preserved() {
    let records = parse_fixture(&create_meteorite_csv());
    let result = normalize_meteorites(&records, 0);

    let achiras = result
        .markers
        .iter()
        .find(|m| m.name == "Achiras")
        .expect("Achiras has coordinates");
    assert_eq!(achiras.lat, -33.16667);
    assert_eq!(achiras.lng, -64.95);
}

#[test]
fn test_meteorite_optional_fields_default_to_empty() {
    let records = vec![create_record(&[("reclat", "10"), ("reclong", "20")])];
    let result = normalize_meteorites(&records, 0);

    let marker = &result.markers[0];
    assert_eq!((marker.lat, marker.lng), (10.0, 20.0));
    assert_eq!(marker.name, "");
    assert_eq!(marker.mass, "");
    assert_eq!(marker.year, "");
    assert_eq!(marker.classification, "");
}

#[test]
fn test_meteorite_coordinates_use_leading_number() {
    let records = vec![
        create_record(&[("reclat", "22.0S"), ("reclong", "29.2E")]),
        create_record(&[("reclat", "50.775°"), ("reclong", "6.08333 deg")]),
        create_record(&[("reclat", "-33.5x"), ("reclong", "-64.95")]),
    ];
    let result = normalize_meteorites(&records, 0);

    let coords: Vec<(f64, f64)> = result.markers.iter().map(|m| (m.lat, m.lng)).collect();
    assert_eq!(
        coords,
        vec![(22.0, 29.2), (50.775, 6.08333), (-33.5, -64.95)]
    );
    assert_eq!(result.stats.unparseable_coordinates, 0);
}

#[test]
fn test_meteorite_without_leading_number_is_rejected() {
    let records = vec![
        create_record(&[("reclat", "S22.0"), ("reclong", "29.2")]),
        create_record(&[("reclat", "10.0"), ("reclong", "unknown")]),
    ];
    let result = normalize_meteorites(&records, 0);

    assert!(result.markers.is_empty());
    assert_eq!(result.stats.unparseable_coordinates, 2);
}

#[test]
fn test_meteorite_empty_input() {
    let result = normalize_meteorites(&[], 3);

    assert!(result.markers.is_empty());
    assert_eq!(result.stats.success_rate(), 100.0);
}
