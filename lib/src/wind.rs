//! Wind model: perturbs carry and heading of a shot.
//!
//! Direction convention: `direction_deg` is the compass bearing the wind blows
//! *toward*. The relative angle is taken as `wind - shot + 180`, which makes a
//! wind blowing along the line of play a tailwind at relative 180 and a wind
//! blowing back at the player a headwind at relative 0.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo::{GeoPoint, destination, normalize_degrees};
use crate::units::Velocity;

/// Carry change per m/s of head component, as a fraction of base carry.
pub const CARRY_SENSITIVITY: f64 = 0.01;

/// Lateral drift per m/s of cross component, as a fraction of base carry.
pub const DRIFT_SENSITIVITY: f64 = 0.005;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WindError {
    #[error("wind speed {0} must be a finite, non-negative m/s value")]
    InvalidSpeed(f64),
    #[error("wind direction {0} is not a finite bearing")]
    InvalidDirection(f64),
}

/// Wind read off the wire is checked and its direction normalized.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawWindVector")]
pub struct WindVector {
    pub speed_mps: f64,
    /// Compass bearing the wind blows toward, [0, 360).
    pub direction_deg: f64,
}

#[derive(Deserialize)]
struct RawWindVector {
    speed_mps: f64,
    direction_deg: f64,
}

impl TryFrom<RawWindVector> for WindVector {
    type Error = WindError;

    fn try_from(raw: RawWindVector) -> Result<Self, Self::Error> {
        if !raw.speed_mps.is_finite() || raw.speed_mps < 0.0 {
            return Err(WindError::InvalidSpeed(raw.speed_mps));
        }
        if !raw.direction_deg.is_finite() {
            return Err(WindError::InvalidDirection(raw.direction_deg));
        }
        Ok(WindVector::new(raw.speed_mps, raw.direction_deg))
    }
}

/// Wind split relative to a shot bearing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindComponents {
    /// Positive = into the player (shortens carry).
    pub head: f64,
    /// Signed crosswind; positive pushes the shot to the right of the aim line.
    pub cross: f64,
}

impl WindVector {
    pub fn new(speed_mps: f64, direction_deg: f64) -> Self {
        Self {
            speed_mps,
            direction_deg: normalize_degrees(direction_deg),
        }
    }

    pub fn from_velocity(speed: Velocity, direction_deg: f64) -> Self {
        Self::new(speed.as_mps(), direction_deg)
    }

    pub fn calm() -> Self {
        Self::default()
    }

    /// Angle of the wind relative to `shot_bearing`, in degrees [0, 360).
    pub fn relative_angle(&self, shot_bearing: f64) -> f64 {
        normalize_degrees(self.direction_deg - shot_bearing + 180.0)
    }

    pub fn components(&self, shot_bearing: f64) -> WindComponents {
        let rel = self.relative_angle(shot_bearing).to_radians();
        WindComponents {
            head: self.speed_mps * rel.cos(),
            cross: self.speed_mps * rel.sin(),
        }
    }
}

/// Where a shot lands once wind is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotPrediction {
    pub landing_point: GeoPoint,
    /// Effective carry after wind. Not clamped: an extreme headwind can drive
    /// this negative.
    pub plays_like: f64,
}

impl ShotPrediction {
    /// `plays_like` floored at zero, for display.
    pub fn plays_like_clamped(&self) -> f64 {
        self.plays_like.max(0.0)
    }
}

/// Apply wind to a shot of `base_carry` meters hit from `start` along
/// `shot_bearing`.
pub fn wind_adjusted_shot(
    start: GeoPoint,
    base_carry: f64,
    shot_bearing: f64,
    wind: WindVector,
) -> ShotPrediction {
    let WindComponents { head, cross } = wind.components(shot_bearing);

    let new_carry = base_carry - head * CARRY_SENSITIVITY * base_carry;
    let bearing_shift = (cross * DRIFT_SENSITIVITY * base_carry)
        .atan2(new_carry)
        .to_degrees();

    ShotPrediction {
        landing_point: destination(start, new_carry, shot_bearing + bearing_shift),
        plays_like: new_carry,
    }
}
