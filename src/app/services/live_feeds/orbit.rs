//! Simulated circular orbits
//!
//! Used as the synthetic position when no live source answers. The model is
//! a circular orbit over a uniformly rotating Earth: good enough to put a
//! marker somewhere plausible on the ground track, not for tracking.

use chrono::Utc;
use std::f64::consts::TAU;

use crate::app::models::{OrbitalPositionMarker, TrackedObject};
use crate::constants::orbits::*;

/// Circular orbit description of a tracked object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitParameters {
    pub inclination_deg: f64,
    pub period_secs: f64,
    pub nominal_altitude_km: f64,
    pub ascending_node_deg: f64,
}

impl OrbitParameters {
    pub fn for_object(object: TrackedObject) -> Self {
        match object {
            TrackedObject::Iss => Self {
                inclination_deg: ISS_INCLINATION_DEG,
                period_secs: ISS_PERIOD_SECS,
                nominal_altitude_km: ISS_NOMINAL_ALTITUDE_KM,
                ascending_node_deg: ISS_ASCENDING_NODE_DEG,
            },
            TrackedObject::Tiangong => Self {
                inclination_deg: TIANGONG_INCLINATION_DEG,
                period_secs: TIANGONG_PERIOD_SECS,
                nominal_altitude_km: TIANGONG_NOMINAL_ALTITUDE_KM,
                ascending_node_deg: TIANGONG_ASCENDING_NODE_DEG,
            },
        }
    }

    /// Orbit phase in radians at `epoch_secs`, in [0, 2π)
    pub fn phase(&self, epoch_secs: f64) -> f64 {
        TAU * epoch_secs.rem_euclid(self.period_secs) / self.period_secs
    }
}

/// Position of `object` on its simulated orbit at `epoch_secs`
///
/// Pure in its inputs: the same instant always yields the same marker.
pub fn simulate_orbit(object: TrackedObject, epoch_secs: f64) -> OrbitalPositionMarker {
    let params = OrbitParameters::for_object(object);
    let phase = params.phase(epoch_secs);
    let inclination = params.inclination_deg.to_radians();

    let lat = params.inclination_deg * phase.sin();

    // Along-track progress projected onto the equator
    let progress = (inclination.cos() * phase.sin())
        .atan2(phase.cos())
        .to_degrees();
    let earth_rotation = 360.0 * epoch_secs.rem_euclid(SIDEREAL_DAY_SECS) / SIDEREAL_DAY_SECS;
    let lng = wrap_longitude(params.ascending_node_deg + progress - earth_rotation);

    let altitude_km = params.nominal_altitude_km + ALTITUDE_OSCILLATION_KM * (2.0 * phase).sin();

    OrbitalPositionMarker {
        object,
        lat,
        lng,
        altitude_km,
        timestamp: epoch_secs.floor() as i64,
        simulated: true,
    }
}

/// Wrap any longitude into [-180, 180]
pub fn wrap_longitude(lng: f64) -> f64 {
    let wrapped = (lng + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 && lng > 0.0 { 180.0 } else { wrapped }
}

/// Current time as fractional Unix seconds
pub fn now_epoch_secs() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}
