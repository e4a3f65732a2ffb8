//! Landing-zone scatter as an oriented ellipse.
//!
//! The ellipse is built in a local east/north tangent plane and mapped to
//! degrees with a flat-earth offset. Extents are tens of meters, so the
//! planar error is negligible.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::bag::ClubProfile;
use crate::geo::{EARTH_RADIUS_M, GeoPoint};

/// Segments around the ellipse. The polygon has one more point to close it.
pub const ELLIPSE_SEGMENTS: usize = 36;

/// Closed ring approximating an ellipse: `ELLIPSE_SEGMENTS + 1` points, last
/// equal to first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DispersionPolygon(pub Vec<GeoPoint>);

impl DispersionPolygon {
    pub fn points(&self) -> &[GeoPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Ellipse of full `width` along local x and full `height` along local y,
/// rotated counter-clockwise by `rotation_deg`, centered on `center`.
pub fn ellipse_points(
    center: GeoPoint,
    width: f64,
    height: f64,
    rotation_deg: f64,
) -> DispersionPolygon {
    let a = width / 2.0;
    let b = height / 2.0;
    let (sin_r, cos_r) = rotation_deg.to_radians().sin_cos();
    let lat0 = center.latitude.to_radians();

    let points = (0..=ELLIPSE_SEGMENTS)
        .map(|i| {
            // i == SEGMENTS reuses t = 0 so the ring closes exactly.
            let t = (i % ELLIPSE_SEGMENTS) as f64 * TAU / ELLIPSE_SEGMENTS as f64;
            let x = a * t.cos();
            let y = b * t.sin();
            let rx = x * cos_r - y * sin_r;
            let ry = x * sin_r + y * cos_r;

            let d_lat = ry / EARTH_RADIUS_M;
            let d_lon = rx / (EARTH_RADIUS_M * lat0.cos());
            GeoPoint::new_unchecked(
                center.latitude + d_lat.to_degrees(),
                center.longitude + d_lon.to_degrees(),
            )
        })
        .collect();

    DispersionPolygon(points)
}

/// Scatter ellipse for `club` landing at `center` on a shot flown along
/// `shot_bearing`.
///
/// Rotation `90 - shot_bearing` turns local x onto the travel direction, so
/// the along-travel extent goes in as `width` and the across-travel extent as
/// `height`.
pub fn landing_zone(center: GeoPoint, club: &ClubProfile, shot_bearing: f64) -> DispersionPolygon {
    ellipse_points(
        center,
        club.depth_error * 2.0,
        club.lateral_error * 2.0,
        90.0 - shot_bearing,
    )
}
