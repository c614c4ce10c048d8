//! Directional coordinate parsing
//!
//! Fireball reports mix two conventions across dataset vintages: signed decimal
//! degrees ("-22.0") and hemisphere-letter notation ("22.0S"). Both resolve to
//! signed decimal degrees here.

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

use crate::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};

/// Leading run of digits, decimal points and minus signs
static NUMERIC_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9.\-]+").expect("numeric prefix pattern is valid"));

/// Hemisphere implied by letters found in a coordinate token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    /// `S` or `W` present
    Negative,
    /// `N` or `E` present, and no `S` or `W`
    Positive,
    /// No hemisphere letter
    Unspecified,
}

impl Hemisphere {
    /// Scan a normalized (uppercase) token anywhere for hemisphere letters
    ///
    /// `S`/`W` take precedence over `N`/`E`, so a token carrying letters from
    /// both groups resolves negative.
    pub fn detect(normalized: &str) -> Self {
        if normalized.contains(['S', 'W']) {
            Hemisphere::Negative
        } else if normalized.contains(['N', 'E']) {
            Hemisphere::Positive
        } else {
            Hemisphere::Unspecified
        }
    }

    fn apply(self, value: f64) -> f64 {
        match self {
            Hemisphere::Negative => -value.abs(),
            Hemisphere::Positive => value.abs(),
            Hemisphere::Unspecified => value,
        }
    }
}

/// Parse a coordinate token into signed decimal degrees
///
/// Returns `None` for empty tokens and tokens without a leading numeric run.
pub fn parse_coordinate(token: &str) -> Option<f64> {
    let normalized = token.trim().to_uppercase();
    if normalized.is_empty() {
        return None;
    }

    let run = NUMERIC_PREFIX.find(&normalized)?.as_str();
    let magnitude = parse_leading_float(run)?;
    let hemisphere = Hemisphere::detect(&normalized);
    let value = hemisphere.apply(magnitude);

    trace!(
        token = token,
        magnitude = magnitude,
        hemisphere = ?hemisphere,
        value = value,
        "Resolved coordinate"
    );

    Some(value)
}

/// Longest prefix of a numeric run that is a valid float
///
/// The run may hold stray characters such as a second decimal point
/// ("12.5.3") or an embedded minus ("12-3"); the valid leading part wins.
fn parse_leading_float(run: &str) -> Option<f64> {
    (1..=run.len())
        .rev()
        .find_map(|end| run[..end].parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Clamp a latitude into [-90, 90]
pub fn clamp_latitude(lat: f64) -> f64 {
    lat.clamp(MIN_LATITUDE, MAX_LATITUDE)
}

/// Clamp a longitude into [-180, 180]
pub fn clamp_longitude(lng: f64) -> f64 {
    lng.clamp(MIN_LONGITUDE, MAX_LONGITUDE)
}

/// Resolve and clamp a latitude/longitude token pair
///
/// Yields `None` when either token fails to parse; a missing coordinate is
/// never clamped into a bound.
pub fn resolve_clamped_pair(lat_token: &str, lng_token: &str) -> Option<(f64, f64)> {
    let lat = parse_coordinate(lat_token)?;
    let lng = parse_coordinate(lng_token)?;
    Some((clamp_latitude(lat), clamp_longitude(lng)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hemisphere_suffixes() {
        assert_eq!(parse_coordinate("22.0S"), Some(-22.0));
        assert_eq!(parse_coordinate("29.2E"), Some(29.2));
        assert_eq!(parse_coordinate("44.2S"), Some(-44.2));
        assert_eq!(parse_coordinate("176.2W"), Some(-176.2));
        assert_eq!(parse_coordinate("33.5N"), Some(33.5));
        assert_eq!(parse_coordinate("144.9E"), Some(144.9));
    }

    #[test]
    fn test_invalid_tokens() {
        assert_eq!(parse_coordinate(""), None);
        assert_eq!(parse_coordinate("   "), None);
        assert_eq!(parse_coordinate("abc"), None);
        assert_eq!(parse_coordinate("N22"), None);
        assert_eq!(parse_coordinate("-"), None);
        assert_eq!(parse_coordinate("."), None);
    }

    #[test]
    fn test_case_and_whitespace_are_ignored() {
        assert_eq!(parse_coordinate("  22.0s "), Some(-22.0));
        assert_eq!(parse_coordinate("\t29.2e"), Some(29.2));
        assert_eq!(parse_coordinate("12.5 w"), Some(-12.5));
    }

    #[test]
    fn test_unsuffixed_values_keep_their_sign() {
        assert_eq!(parse_coordinate("10"), Some(10.0));
        assert_eq!(parse_coordinate("20"), Some(20.0));
        assert_eq!(parse_coordinate("-64.95"), Some(-64.95));
    }

    #[test]
    fn test_letter_overrides_numeric_sign() {
        assert_eq!(parse_coordinate("-33.5N"), Some(33.5));
        assert_eq!(parse_coordinate("-10W"), Some(-10.0));
    }

    #[test]
    fn test_south_west_take_precedence() {
        assert_eq!(parse_coordinate("15.0NW"), Some(-15.0));
        assert_eq!(parse_coordinate("15.0ES"), Some(-15.0));
    }

    #[test]
    fn test_sign_matches_hemisphere_for_single_letter() {
        let magnitudes = [0.5, 12.0, 45.25, 89.9, 179.99];
        for m in magnitudes {
            for (letter, negative) in [("N", false), ("S", true), ("E", false), ("W", true)] {
                for prefix in [format!("{}", m), format!("-{}", m)] {
                    let token = format!("{}{}", prefix, letter);
                    let value = parse_coordinate(&token).unwrap();
                    assert_eq!(value.abs(), m, "magnitude of {}", token);
                    assert_eq!(value < 0.0, negative, "sign of {}", token);
                }
            }
        }
    }

    #[test]
    fn test_malformed_numeric_run_uses_valid_prefix() {
        assert_eq!(parse_coordinate("12.5.3N"), Some(12.5));
        assert_eq!(parse_coordinate("12-3S"), Some(-12.0));
    }

    #[test]
    fn test_hemisphere_detect() {
        assert_eq!(Hemisphere::detect("22.0S"), Hemisphere::Negative);
        assert_eq!(Hemisphere::detect("22.0N"), Hemisphere::Positive);
        assert_eq!(Hemisphere::detect("22.0"), Hemisphere::Unspecified);
    }

    #[test]
    fn test_clamping() {
        assert_eq!(clamp_latitude(95.0), 90.0);
        assert_eq!(clamp_latitude(-95.0), -90.0);
        assert_eq!(clamp_latitude(45.0), 45.0);
        assert_eq!(clamp_longitude(-200.0), -180.0);
        assert_eq!(clamp_longitude(181.5), 180.0);
        assert_eq!(clamp_longitude(-12.0), -12.0);
    }

    #[test]
    fn test_resolve_clamped_pair() {
        assert_eq!(resolve_clamped_pair("10", "20"), Some((10.0, 20.0)));
        assert_eq!(resolve_clamped_pair("95N", "200W"), Some((90.0, -180.0)));
        assert_eq!(resolve_clamped_pair("abc", "20"), None);
        assert_eq!(resolve_clamped_pair("10", ""), None);
    }
}
