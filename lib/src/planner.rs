//! One-shot plan: everything the map view needs for the next swing.
//!
//! Glues the geodesy, wind, dispersion, arc, and strategy pieces together for
//! a single position/target pair. Still pure.

use serde::{Deserialize, Serialize};

use crate::arc::{FlightArc, arc_points};
use crate::bag::{Bag, ClubProfile};
use crate::dispersion::{DispersionPolygon, landing_zone};
use crate::geo::{GeoPoint, bearing, distance};
use crate::strategy::{ClubCall, StrategyRecommendation, club_call, strategy_recommendation};
use crate::wind::{ShotPrediction, WindVector, wind_adjusted_shot};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotContext {
    pub position: GeoPoint,
    pub target: GeoPoint,
    #[serde(default)]
    pub wind: WindVector,
    pub shot_number: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotPlan {
    pub distance_to_target: f64,
    pub bearing_to_target: f64,
    /// "Putter", a club name, or "—" for an empty bag.
    pub club_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club: Option<ClubProfile>,
    /// Aimed carry: the club's carry, never past the target.
    pub aim_distance: f64,
    pub prediction: ShotPrediction,
    pub dispersion: Option<DispersionPolygon>,
    pub arc: FlightArc,
    pub strategy: StrategyRecommendation,
}

/// Plan the next shot from `ctx.position` toward `ctx.target`.
///
/// With a club selected, the aim distance is its carry capped at the target
/// distance. On the putter call the aim is the target itself and no scatter
/// polygon is drawn.
pub fn plan_shot(ctx: &ShotContext, bag: &Bag) -> ShotPlan {
    let remaining = distance(ctx.position, ctx.target);
    let aim_bearing = bearing(ctx.position, ctx.target);
    let call = club_call(remaining, bag);

    let aim_distance = match call {
        ClubCall::Club(club) => club.carry_distance.min(remaining),
        ClubCall::Putter | ClubCall::NoClub => remaining,
    };

    let prediction = wind_adjusted_shot(ctx.position, aim_distance, aim_bearing, ctx.wind);
    let dispersion = call
        .club()
        .map(|club| landing_zone(prediction.landing_point, club, aim_bearing));

    ShotPlan {
        distance_to_target: remaining,
        bearing_to_target: aim_bearing,
        club_label: call.to_string(),
        club: call.club().cloned(),
        aim_distance,
        prediction,
        dispersion,
        arc: arc_points(ctx.position, prediction.landing_point),
        strategy: strategy_recommendation(remaining, bag, ctx.shot_number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::destination;
    use crate::handicap::generate_bag;

    fn tee() -> GeoPoint {
        GeoPoint::new(55.9066, -3.1378).unwrap()
    }

    fn ctx(target: GeoPoint, wind: WindVector, shot_number: u32) -> ShotContext {
        ShotContext {
            position: tee(),
            target,
            wind,
            shot_number,
        }
    }

    #[test]
    fn test_par_three_calm() {
        let bag = generate_bag(0.0);
        let green = destination(tee(), 160.0, 45.0);
        let plan = plan_shot(&ctx(green, WindVector::calm(), 1), &bag);

        assert_eq!(plan.club_label, "7 Iron");
        assert!((plan.aim_distance - plan.distance_to_target).abs() < 1e-9);
        assert!(distance(plan.prediction.landing_point, green) < 0.05);
        assert_eq!(plan.dispersion.as_ref().unwrap().len(), 37);
        assert_eq!(plan.arc.iter().last(), Some(plan.prediction.landing_point));
        assert_eq!(plan.strategy.main_action(), "approach");
    }

    #[test]
    fn test_never_aims_past_target_calm() {
        let bag = generate_bag(10.0);
        for d in [25.0, 60.0, 133.0, 199.0, 260.0, 410.0] {
            let target = destination(tee(), d, 300.0);
            let plan = plan_shot(&ctx(target, WindVector::calm(), 2), &bag);
            assert!(plan.aim_distance <= plan.distance_to_target + 1e-9);
            assert!(plan.prediction.plays_like <= plan.distance_to_target + 1e-9);
        }
    }

    #[test]
    fn test_long_hole_uses_longest_club() {
        let bag = generate_bag(0.0);
        let green = destination(tee(), 480.0, 10.0);
        let plan = plan_shot(&ctx(green, WindVector::calm(), 1), &bag);
        assert_eq!(plan.club_label, "Driver");
        assert_eq!(plan.aim_distance, 250.0);
        assert_eq!(plan.strategy.main_action(), "safe drive");
    }

    #[test]
    fn test_greenside_putter() {
        let bag = generate_bag(0.0);
        let green = destination(tee(), 12.0, 180.0);
        let plan = plan_shot(&ctx(green, WindVector::calm(), 3), &bag);
        assert_eq!(plan.club_label, "Putter");
        assert!(plan.club.is_none());
        assert!(plan.dispersion.is_none());
        assert_eq!(plan.strategy.main_action(), "short game");
    }

    #[test]
    fn test_wind_moves_prediction() {
        let bag = generate_bag(0.0);
        let green = destination(tee(), 150.0, 0.0);
        // Blowing south, back at the player.
        let plan = plan_shot(&ctx(green, WindVector::new(6.0, 180.0), 2), &bag);
        assert!(plan.prediction.plays_like < plan.aim_distance);
    }

    #[test]
    fn test_empty_bag() {
        let green = destination(tee(), 150.0, 0.0);
        let plan = plan_shot(&ctx(green, WindVector::calm(), 1), &Bag::new());
        assert_eq!(plan.club_label, "—");
        assert!(plan.dispersion.is_none());
    }
}
