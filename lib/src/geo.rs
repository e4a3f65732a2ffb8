//! Spherical-earth geodesy: great-circle distance, initial bearing, and
//! destination projection.
//!
//! Uses a fixed sphere of WGS84 equatorial radius. Not geodesic-accurate, but
//! the error is far below GPS noise over course-sized distances.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sphere radius in meters (WGS84 equatorial).
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
    #[error("latitude {0} out of range [-90, 90]")]
    InvalidLatitude(f64),
    #[error("longitude {0} out of range [-180, 180]")]
    InvalidLongitude(f64),
}

/// A position in decimal degrees.
///
/// Deserialization goes through `GeoPoint::new`, so a point read off the wire
/// always satisfies the range invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint")]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Deserialize)]
struct RawGeoPoint {
    #[serde(alias = "lat")]
    latitude: f64,
    #[serde(alias = "lon", alias = "lng")]
    longitude: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = GeoError;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        GeoPoint::new(raw.latitude, raw.longitude)
    }
}

impl GeoPoint {
    /// Validated constructor. NaN fails both range checks.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Build without range checks. For values produced by the projection
    /// math in this crate, which already lands in range.
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        distance(*self, *other)
    }

    pub fn bearing_to(&self, other: &GeoPoint) -> f64 {
        bearing(*self, *other)
    }

    pub fn project(&self, distance_m: f64, bearing_deg: f64) -> GeoPoint {
        destination(*self, distance_m, bearing_deg)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}

impl std::str::FromStr for GeoPoint {
    type Err = String;

    /// Parse `"lat,lon"` in decimal degrees.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| format!("invalid point {s:?}: expected \"lat,lon\""))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| format!("invalid latitude in {s:?}"))?;
        let lon: f64 = lon
            .trim()
            .parse()
            .map_err(|_| format!("invalid longitude in {s:?}"))?;
        GeoPoint::new(lat, lon).map_err(|e| e.to_string())
    }
}

/// Normalize an angle in degrees to [0, 360).
///
/// `rem_euclid` alone can return exactly 360.0 for tiny negative inputs.
pub fn normalize_degrees(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d >= 360.0 { 0.0 } else { d }
}

/// Haversine great-circle distance in meters.
pub fn distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Clamp guards asin against h drifting a hair above 1 near antipodes.
    let c = 2.0 * h.sqrt().min(1.0).asin();

    EARTH_RADIUS_M * c
}

/// Initial great-circle bearing in degrees [0, 360).
///
/// Coincident points have no direction; returns 0.
pub fn bearing(from: GeoPoint, to: GeoPoint) -> f64 {
    if from == to {
        return 0.0;
    }
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let x = d_lon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    normalize_degrees(x.atan2(y).to_degrees())
}

/// Project a point `distance_m` meters from `start` along initial bearing
/// `bearing_deg`. Longitude is wrapped to [-180, 180).
pub fn destination(start: GeoPoint, distance_m: f64, bearing_deg: f64) -> GeoPoint {
    let delta = distance_m / EARTH_RADIUS_M;
    let theta = bearing_deg.to_radians();
    let lat1 = start.latitude.to_radians();
    let lon1 = start.longitude.to_radians();

    let sin_lat2 = lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();
    let y = theta.sin() * delta.sin() * lat1.cos();
    let x = delta.cos() - lat1.sin() * sin_lat2;
    let lon2 = lon1 + y.atan2(x);

    let lon_deg = (lon2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
    GeoPoint::new_unchecked(lat2.to_degrees(), lon_deg)
}
