//! Curved ball-flight line for drawing.
//!
//! A quadratic Bezier from start to end, bowed to the left of the line of
//! travel. Rendering aid only: the curve has no physical meaning and its
//! length is not a carry distance.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::geo::{GeoPoint, bearing, destination, distance};

/// Segments along the arc. The iterator yields one more point than this.
pub const ARC_SEGMENTS: usize = 20;

/// Control point offset as a fraction of the start-end distance.
pub const ARC_BOW: f64 = 0.1;

/// The three Bezier control points. Cheap to copy; `iter()` can be called
/// any number of times and always yields the same points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightArc {
    pub start: GeoPoint,
    pub control: GeoPoint,
    pub end: GeoPoint,
}

impl FlightArc {
    pub fn iter(&self) -> ArcPoints {
        ArcPoints {
            arc: *self,
            next: 0,
        }
    }

    /// Point at parameter `t` in [0, 1], interpolated in degree space.
    pub fn at(&self, t: f64) -> GeoPoint {
        let u = 1.0 - t;
        let (w0, w1, w2) = (u * u, 2.0 * u * t, t * t);
        GeoPoint::new_unchecked(
            w0 * self.start.latitude + w1 * self.control.latitude + w2 * self.end.latitude,
            w0 * self.start.longitude + w1 * self.control.longitude + w2 * self.end.longitude,
        )
    }
}

impl IntoIterator for FlightArc {
    type Item = GeoPoint;
    type IntoIter = ArcPoints;

    fn into_iter(self) -> ArcPoints {
        self.iter()
    }
}

/// Iterator over the `ARC_SEGMENTS + 1` points of a `FlightArc`.
#[derive(Debug, Clone)]
pub struct ArcPoints {
    arc: FlightArc,
    next: usize,
}

impl Iterator for ArcPoints {
    type Item = GeoPoint;

    fn next(&mut self) -> Option<GeoPoint> {
        if self.next > ARC_SEGMENTS {
            return None;
        }
        let i = self.next;
        self.next += 1;
        // Endpoints are returned verbatim rather than through the blend.
        Some(match i {
            0 => self.arc.start,
            ARC_SEGMENTS => self.arc.end,
            _ => self.arc.at(i as f64 / ARC_SEGMENTS as f64),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (ARC_SEGMENTS + 1).saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for ArcPoints {}

impl FusedIterator for ArcPoints {}

/// Build the flight arc from `start` to `end`.
pub fn arc_points(start: GeoPoint, end: GeoPoint) -> FlightArc {
    let d = distance(start, end);
    let b = bearing(start, end);
    let mid = destination(start, d / 2.0, b);
    let control = destination(mid, d * ARC_BOW, b - 90.0);
    FlightArc {
        start,
        control,
        end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tee() -> GeoPoint {
        GeoPoint::new(40.0, -75.0).unwrap()
    }

    #[test]
    fn test_endpoints_and_count() {
        let end = destination(tee(), 230.0, 30.0);
        let pts: Vec<GeoPoint> = arc_points(tee(), end).iter().collect();
        assert_eq!(pts.len(), 21);
        assert_eq!(pts[0], tee());
        assert_eq!(pts[20], end);
    }

    #[test]
    fn test_restartable() {
        let end = destination(tee(), 150.0, 200.0);
        let arc = arc_points(tee(), end);
        let first: Vec<GeoPoint> = arc.iter().collect();
        let second: Vec<GeoPoint> = arc.into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(arc_points(tee(), end), arc);

        let mut it = arc.iter();
        assert_eq!(it.len(), 21);
        it.next();
        let resumed = it.clone();
        assert_eq!(it.collect::<Vec<_>>(), resumed.collect::<Vec<_>>());
    }

    #[test]
    fn test_bows_left_of_travel() {
        // Shot due north: the control point sits west of the line.
        let end = destination(tee(), 200.0, 0.0);
        let arc = arc_points(tee(), end);
        assert!(arc.control.longitude < tee().longitude);
        let offset = distance(destination(tee(), 100.0, 0.0), arc.control);
        assert!((offset - 20.0).abs() < 0.01, "offset {offset}");

        let apex = arc.at(0.5);
        assert!(apex.longitude < tee().longitude);
    }

    #[test]
    fn test_degenerate_arc() {
        let pts: Vec<GeoPoint> = arc_points(tee(), tee()).iter().collect();
        assert_eq!(pts.len(), 21);
        for p in pts {
            assert!(distance(p, tee()) < 1e-6);
        }
    }
}
