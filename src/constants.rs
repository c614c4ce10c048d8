//! Application constants for the astro marker loader
//!
//! This module contains field names, alias lists, default endpoints, orbital
//! parameters and coordinate bounds used throughout the loader.

// =============================================================================
// Meteorite Dataset Fields
// =============================================================================

/// Field names of the meteorite landings table, consumed verbatim
pub mod meteorite_fields {
    pub const LATITUDE: &str = "reclat";
    pub const LONGITUDE: &str = "reclong";
    pub const NAME: &str = "name";
    pub const MASS: &str = "mass (g)";
    pub const YEAR: &str = "year";
    pub const CLASSIFICATION: &str = "recclass";
}

// =============================================================================
// Fireball Dataset Field Aliases
// =============================================================================

/// Ordered alias lists for the fireball and bolide reports table
///
/// Header wording and casing drift between dataset revisions, so every logical
/// field is looked up through an explicit priority list.
pub mod fireball_fields {
    pub const LATITUDE: &[&str] = &["Latitude (Deg)", "Latitude (deg.)"];

    pub const LONGITUDE: &[&str] = &["Longitude (Deg)", "Longitude (deg.)"];

    pub const ALTITUDE: &[&str] = &["Altitude (km)", "Altitude", "altitude (km)", "altitude"];

    pub const ENERGY: &[&str] = &["Total Radiated Energy (J)", "Total Radiated Energy"];

    pub const PEAK_BRIGHTNESS_DATE: &[&str] = &[
        "Date/Time - Peak Brightness (UT)",
        "Peak Brightness Date/Time (UT)",
    ];

    pub const VELOCITY: &[&str] = &["Velocity (km/s)", "Velocity"];

    /// Altitude recorded when no altitude column resolves
    pub const DEFAULT_ALTITUDE: &str = "0";
}

// =============================================================================
// Coordinate Bounds
// =============================================================================

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

// =============================================================================
// Live Feed Endpoints
// =============================================================================

/// Default endpoints for the ISS position feed, tried in order
pub const DEFAULT_ISS_ENDPOINTS: &[&str] = &[
    "https://api.wheretheiss.at/v1/satellites/25544",
    "http://api.open-notify.org/iss-now.json",
    "https://api.allorigins.win/raw?url=http://api.open-notify.org/iss-now.json",
];

/// Default endpoints for the crew roster feed, tried in order
pub const DEFAULT_CREW_ENDPOINTS: &[&str] = &[
    "http://api.open-notify.org/astros.json",
    "https://api.allorigins.win/raw?url=http://api.open-notify.org/astros.json",
];

/// Default time budget for a single source attempt
pub const DEFAULT_ATTEMPT_TIMEOUT_SECS: u64 = 5;

/// User-Agent sent with every live request
pub const USER_AGENT: &str = concat!("astro-markers/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Orbital Simulation Parameters
// =============================================================================

/// Parameters for the simulated circular orbits used as synthetic positions
pub mod orbits {
    /// Earth sidereal rotation period in seconds
    pub const SIDEREAL_DAY_SECS: f64 = 86_164.0905;

    /// Amplitude of the altitude oscillation in kilometers
    pub const ALTITUDE_OSCILLATION_KM: f64 = 2.0;

    pub const ISS_INCLINATION_DEG: f64 = 51.64;
    pub const ISS_PERIOD_SECS: f64 = 5_556.0;
    pub const ISS_NOMINAL_ALTITUDE_KM: f64 = 420.0;
    pub const ISS_ASCENDING_NODE_DEG: f64 = 0.0;

    pub const TIANGONG_INCLINATION_DEG: f64 = 41.47;
    pub const TIANGONG_PERIOD_SECS: f64 = 5_496.0;
    pub const TIANGONG_NOMINAL_ALTITUDE_KM: f64 = 390.0;
    pub const TIANGONG_ASCENDING_NODE_DEG: f64 = 120.0;
}

// =============================================================================
// Diagnostics
// =============================================================================

/// Number of leading records logged at debug level per dataset
pub const DEFAULT_DEBUG_SAMPLE_SIZE: usize = 3;

/// Environment filter target used by the binary
pub const LOG_TARGET: &str = "astro_markers";

/// Config file name inside the user config directory
pub const CONFIG_DIR_NAME: &str = "astro-markers";
pub const CONFIG_FILE_NAME: &str = "config.json";
