//! Club selection and shot strategy.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bag::{Bag, ClubProfile};

/// Below this remaining distance the call is "Putter" regardless of the bag.
pub const GREENSIDE_DISTANCE_M: f64 = 20.0;

/// Slack allowed when two clubs together fall just short of the green.
pub const LAYUP_TOLERANCE_M: f64 = 5.0;

/// Off the tee, anything longer than this suggests a controlled drive.
pub const SAFE_DRIVE_DISTANCE_M: f64 = 220.0;

/// Shortest club that covers `remaining`, or the longest club when nothing
/// does. `None` only for an empty bag.
pub fn recommend_club(remaining: f64, bag: &Bag) -> Option<&ClubProfile> {
    let sorted = bag.sorted_by_carry();
    sorted
        .iter()
        .find(|c| c.carry_distance >= remaining)
        .or_else(|| sorted.last())
        .copied()
}

/// What to hit, with the greenside substitution applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClubCall<'a> {
    /// Inside `GREENSIDE_DISTANCE_M`.
    Putter,
    Club(&'a ClubProfile),
    /// Empty bag.
    NoClub,
}

impl ClubCall<'_> {
    pub fn club(&self) -> Option<&ClubProfile> {
        match self {
            ClubCall::Club(c) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for ClubCall<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClubCall::Putter => f.write_str("Putter"),
            ClubCall::Club(c) => f.write_str(&c.name),
            ClubCall::NoClub => f.write_str("—"),
        }
    }
}

/// `recommend_club` with the greenside label substituted below 20 m.
pub fn club_call(remaining: f64, bag: &Bag) -> ClubCall<'_> {
    if remaining < GREENSIDE_DISTANCE_M {
        return ClubCall::Putter;
    }
    match recommend_club(remaining, bag) {
        Some(club) => ClubCall::Club(club),
        None => ClubCall::NoClub,
    }
}

/// Two-club route to the green.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayupPlan {
    pub first_club: ClubProfile,
    pub second_club: ClubProfile,
    pub combined_lateral_error: f64,
}

impl LayupPlan {
    pub fn combined_carry(&self) -> f64 {
        self.first_club.carry_distance + self.second_club.carry_distance
    }
}

/// Pick the pair of clubs that reaches the green (within
/// `LAYUP_TOLERANCE_M`) with the least combined lateral scatter.
///
/// After the first shot the driver and putter are off the table for the
/// first club. The driver never plays second. Ties go to the first pair in
/// bag order. `None` when no pair reaches.
pub fn layup_plan(distance_to_green: f64, bag: &Bag, shot_number: u32) -> Option<LayupPlan> {
    let target = distance_to_green - LAYUP_TOLERANCE_M;
    let first_candidates = bag
        .iter()
        .filter(|c| shot_number <= 1 || !(c.name_contains("driver") || c.name_contains("putter")));

    let mut best: Option<(&ClubProfile, &ClubProfile, f64)> = None;
    for c1 in first_candidates {
        for c2 in bag.iter().filter(|c| !c.name_contains("driver")) {
            if c1.carry_distance + c2.carry_distance < target {
                continue;
            }
            let scatter = c1.lateral_error + c2.lateral_error;
            if best.is_none_or(|(_, _, s)| scatter < s) {
                best = Some((c1, c2, scatter));
            }
        }
    }

    best.map(|(c1, c2, scatter)| LayupPlan {
        first_club: c1.clone(),
        second_club: c2.clone(),
        combined_lateral_error: scatter,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyAction {
    TapIn,
    ShortGame,
    PerfectLayup,
    LayupRequired,
    SafeDrive,
    Approach,
}

impl StrategyAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::TapIn => "tap-in",
            Self::ShortGame => "short game",
            Self::PerfectLayup => "perfect layup",
            Self::LayupRequired => "layup required",
            Self::SafeDrive => "safe drive",
            Self::Approach => "approach",
        }
    }
}

impl fmt::Display for StrategyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Advisory text for the next shot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyRecommendation {
    pub action: StrategyAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_action: Option<String>,
}

impl StrategyRecommendation {
    fn new(action: StrategyAction, sub_action: Option<String>) -> Self {
        Self { action, sub_action }
    }

    pub fn main_action(&self) -> &'static str {
        self.action.label()
    }
}

/// Decision table by distance band. First matching row wins.
pub fn strategy_recommendation(
    distance_to_green: f64,
    bag: &Bag,
    shot_number: u32,
) -> StrategyRecommendation {
    use StrategyAction::*;

    let d = distance_to_green;
    let longest = bag.longest().map(|c| c.carry_distance).unwrap_or(0.0);

    if d < 5.0 {
        StrategyRecommendation::new(TapIn, Some("hole it out".into()))
    } else if d < GREENSIDE_DISTANCE_M {
        StrategyRecommendation::new(ShortGame, Some(format!("chip or putt from {d:.0}m")))
    } else if (80.0..=110.0).contains(&d) {
        StrategyRecommendation::new(
            PerfectLayup,
            Some("full wedge distance, attack the pin".into()),
        )
    } else if shot_number > 1 && d > longest {
        let sub = layup_plan(d, bag, shot_number).map(|plan| {
            format!(
                "{} then {} (±{:.0}m)",
                plan.first_club.name, plan.second_club.name, plan.combined_lateral_error
            )
        });
        StrategyRecommendation::new(LayupRequired, sub)
    } else if shot_number == 1 && d > SAFE_DRIVE_DISTANCE_M {
        StrategyRecommendation::new(SafeDrive, Some("find the fairway".into()))
    } else {
        StrategyRecommendation::new(Approach, Some(format!("{d:.0}m to the green")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handicap::generate_bag;

    fn small_bag() -> Bag {
        let mut bag = Bag::new();
        bag.push("Driver", 230.0, 25.0, 15.0).unwrap();
        bag.push("7 Iron", 150.0, 12.0, 9.0).unwrap();
        bag.push("PW", 115.0, 9.0, 7.0).unwrap();
        bag.push("5 Iron", 175.0, 15.0, 10.0).unwrap();
        bag.push("Putter", 30.0, 1.0, 1.0).unwrap();
        bag
    }

    #[test]
    fn test_recommend_shortest_covering_club() {
        let bag = small_bag();
        assert_eq!(recommend_club(140.0, &bag).unwrap().name, "7 Iron");
        assert_eq!(recommend_club(150.0, &bag).unwrap().name, "7 Iron");
        assert_eq!(recommend_club(150.5, &bag).unwrap().name, "5 Iron");
        assert_eq!(recommend_club(10.0, &bag).unwrap().name, "Putter");
    }

    #[test]
    fn test_recommend_falls_back_to_longest() {
        let bag = small_bag();
        assert_eq!(recommend_club(300.0, &bag).unwrap().name, "Driver");
        assert!(recommend_club(100.0, &Bag::new()).is_none());
    }

    #[test]
    fn test_recommend_is_monotonic() {
        let bag = generate_bag(14.0);
        let longest = bag.longest().unwrap().carry_distance;
        let mut last = 0.0;
        for step in 0..400 {
            let d = step as f64;
            let carry = recommend_club(d, &bag).unwrap().carry_distance;
            assert!(carry >= last, "carry dropped at {d}m");
            if d > longest {
                assert_eq!(carry, longest);
            }
            last = carry;
        }
    }

    #[test]
    fn test_club_call_greenside_boundary() {
        let bag = small_bag();
        assert_eq!(club_call(19.9, &bag), ClubCall::Putter);
        assert_eq!(club_call(19.9, &bag).to_string(), "Putter");
        // At exactly 20m the bag decides.
        let at_boundary = club_call(20.0, &bag);
        assert_eq!(at_boundary.club().unwrap().name, "Putter");
        assert_eq!(club_call(100.0, &bag).to_string(), "PW");
        assert_eq!(club_call(100.0, &Bag::new()), ClubCall::NoClub);
    }

    #[test]
    fn test_layup_minimizes_scatter() {
        let bag = small_bag();
        // 260m: 7I+PW = 265 reaches with 21m scatter, the tightest pair.
        let plan = layup_plan(260.0, &bag, 2).unwrap();
        assert_eq!(plan.first_club.name, "7 Iron");
        assert_eq!(plan.second_club.name, "PW");
        assert_eq!(plan.combined_lateral_error, 21.0);
        assert!(plan.combined_carry() >= 260.0 - LAYUP_TOLERANCE_M);
    }

    #[test]
    fn test_layup_tolerance() {
        let mut bag = Bag::new();
        bag.push("9 Iron", 100.0, 8.0, 6.0).unwrap();
        // 200 reached within 5m slack, 206 is not.
        assert!(layup_plan(205.0, &bag, 2).is_some());
        assert!(layup_plan(205.1, &bag, 2).is_none());
    }

    #[test]
    fn test_layup_driver_rules() {
        let mut bag = Bag::new();
        bag.push("Driver", 240.0, 2.0, 2.0).unwrap();
        bag.push("8 Iron", 140.0, 10.0, 8.0).unwrap();
        bag.push("Putter", 30.0, 1.0, 1.0).unwrap();

        // Tee shot: driver may go first, never second.
        let plan = layup_plan(370.0, &bag, 1).unwrap();
        assert_eq!(plan.first_club.name, "Driver");
        assert_ne!(plan.second_club.name, "Driver");

        // Later shots: neither driver nor putter first.
        let plan = layup_plan(270.0, &bag, 2).unwrap();
        assert_eq!(plan.first_club.name, "8 Iron");
        assert!(layup_plan(370.0, &bag, 2).is_none());
    }

    #[test]
    fn test_layup_putter_only_first_off_the_tee() {
        let mut bag = Bag::new();
        bag.push("9 Iron", 120.0, 8.0, 6.0).unwrap();
        bag.push("Long Putter", 150.0, 0.5, 0.5).unwrap();

        let plan = layup_plan(270.0, &bag, 1).unwrap();
        assert_eq!(plan.first_club.name, "Long Putter");

        let plan = layup_plan(270.0, &bag, 2).unwrap();
        assert_eq!(plan.first_club.name, "9 Iron");
        assert_eq!(plan.second_club.name, "Long Putter");
    }

    #[test]
    fn test_layup_tie_break_is_first_pair() {
        let mut bag = Bag::new();
        bag.push("A", 100.0, 5.0, 5.0).unwrap();
        bag.push("B", 100.0, 5.0, 5.0).unwrap();
        let plan = layup_plan(200.0, &bag, 2).unwrap();
        assert_eq!(plan.first_club.name, "A");
        assert_eq!(plan.second_club.name, "A");
        assert_eq!(layup_plan(200.0, &bag, 2), Some(plan));
    }

    #[test]
    fn test_layup_result_always_feasible() {
        let bag = generate_bag(22.0);
        for d in (50..600).step_by(7) {
            let d = d as f64;
            if let Some(plan) = layup_plan(d, &bag, 2) {
                assert!(plan.combined_carry() >= d - LAYUP_TOLERANCE_M);
            }
        }
    }

    #[test]
    fn test_strategy_bands() {
        let bag = small_bag();
        let act = |d: f64, shot: u32| strategy_recommendation(d, &bag, shot).action;

        assert_eq!(act(4.9, 3), StrategyAction::TapIn);
        assert_eq!(act(5.0, 3), StrategyAction::ShortGame);
        assert_eq!(act(19.9, 3), StrategyAction::ShortGame);
        assert_eq!(act(20.0, 3), StrategyAction::Approach);
        assert_eq!(act(80.0, 1), StrategyAction::PerfectLayup);
        assert_eq!(act(110.0, 2), StrategyAction::PerfectLayup);
        assert_eq!(act(110.1, 2), StrategyAction::Approach);
        assert_eq!(act(231.0, 2), StrategyAction::LayupRequired);
        assert_eq!(act(230.0, 2), StrategyAction::Approach);
        assert_eq!(act(221.0, 1), StrategyAction::SafeDrive);
        assert_eq!(act(220.0, 1), StrategyAction::Approach);
        assert_eq!(act(400.0, 1), StrategyAction::SafeDrive);
    }

    #[test]
    fn test_strategy_text() {
        let bag = small_bag();
        let rec = strategy_recommendation(150.0, &bag, 2);
        assert_eq!(rec.main_action(), "approach");
        assert_eq!(rec.sub_action.as_deref(), Some("150m to the green"));

        let rec = strategy_recommendation(300.0, &bag, 2);
        assert_eq!(rec.main_action(), "layup required");
        assert_eq!(rec.sub_action.as_deref(), Some("7 Iron then 7 Iron (±24m)"));

        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["action"], "layup_required");
    }

    #[test]
    fn test_layup_required_empty_bag() {
        let rec = strategy_recommendation(150.0, &Bag::new(), 2);
        assert_eq!(rec.action, StrategyAction::LayupRequired);
        assert!(rec.sub_action.is_none());
    }
}
