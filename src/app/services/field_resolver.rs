//! Field lookup tolerant of header casing and whitespace drift
//!
//! Dataset revisions spell the same column differently ("Latitude (Deg)" vs
//! "latitude (deg)"). Callers pass each accepted wording explicitly; the
//! resolver only smooths over case and surrounding whitespace.

use crate::app::models::RawRecord;

/// Resolve a logical field name against a record
///
/// Tries the exact name, its lowercase form, its trimmed form and its
/// lowercase trimmed form, then falls back to comparing every header
/// case-insensitively. Empty values count as absent.
pub fn resolve<'a>(record: &'a RawRecord, logical_name: &str) -> Option<&'a str> {
    let lower = logical_name.to_lowercase();
    let trimmed = logical_name.trim();
    let lower_trimmed = lower.trim();

    [logical_name, lower.as_str(), trimmed, lower_trimmed]
        .into_iter()
        .find_map(|key| non_empty(record.get(key)))
        .or_else(|| {
            record
                .iter()
                .find(|(header, value)| {
                    !value.is_empty() && header.trim().to_lowercase() == lower_trimmed
                })
                .map(|(_, value)| value)
        })
}

/// Resolve the first alias in priority order that yields a value
pub fn resolve_any<'a>(record: &'a RawRecord, candidates: &[&str]) -> Option<&'a str> {
    candidates
        .iter()
        .find_map(|candidate| resolve(record, candidate))
}

/// Resolve through aliases, falling back to a default when none match
pub fn resolve_or<'a>(record: &'a RawRecord, candidates: &[&str], default: &'a str) -> &'a str {
    resolve_any(record, candidates).unwrap_or(default)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[(&str, &str)]) -> RawRecord {
        fields.iter().copied().collect()
    }

    #[test]
    fn test_exact_match() {
        let r = record(&[("Altitude (km)", "31.5")]);
        assert_eq!(resolve(&r, "Altitude (km)"), Some("31.5"));
    }

    #[test]
    fn test_lowercase_candidate_matches_lowercase_header() {
        let r = record(&[("altitude (km)", "22")]);
        assert_eq!(resolve(&r, "Altitude (km)"), Some("22"));
    }

    #[test]
    fn test_trimmed_candidate() {
        let r = record(&[("Velocity (km/s)", "18.1")]);
        assert_eq!(resolve(&r, "  Velocity (km/s) "), Some("18.1"));
    }

    #[test]
    fn test_case_insensitive_fallback_against_headers() {
        let r = record(&[("Latitude (Deg)", "10")]);
        assert_eq!(resolve(&r, "latitude (deg)"), Some("10"));
    }

    #[test]
    fn test_empty_value_is_absent() {
        let r = record(&[("Altitude (km)", ""), ("altitude", "")]);
        assert_eq!(resolve(&r, "Altitude (km)"), None);
        assert_eq!(resolve(&r, "altitude"), None);
    }

    #[test]
    fn test_empty_exact_value_falls_through_to_variant() {
        let r = record(&[("Altitude", ""), ("altitude", "40")]);
        assert_eq!(resolve(&r, "Altitude"), Some("40"));
    }

    #[test]
    fn test_no_fuzzy_matching_beyond_case_and_whitespace() {
        let r = record(&[("Altitude (km)", "31.5")]);
        assert_eq!(resolve(&r, "Altitude"), None);
    }

    #[test]
    fn test_resolve_any_respects_priority() {
        let r = record(&[("Altitude", "12"), ("Altitude (km)", "31.5")]);
        assert_eq!(
            resolve_any(&r, &["Altitude (km)", "Altitude"]),
            Some("31.5")
        );
        assert_eq!(resolve_any(&r, &["Altitude", "Altitude (km)"]), Some("12"));
    }

    #[test]
    fn test_resolve_or_default() {
        let r = record(&[("Other", "x")]);
        assert_eq!(resolve_or(&r, &["Altitude (km)", "Altitude"], "0"), "0");
    }
}
