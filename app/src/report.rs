//! Plain-text rendering for the CLI subcommands.

use caddie::{Bag, ShotPlan, UnitSystem, club_call, layup_plan, strategy_recommendation};

pub fn bag_table(bag: &Bag, units: UnitSystem) -> String {
    let mut lines = vec![format!(
        "{:<4} {:<10} {:>8} {:>8} {:>8}",
        "id", "club", "carry", "lateral", "depth"
    )];
    for club in bag {
        lines.push(format!(
            "{:<4} {:<10} {:>8} {:>8} {:>8}",
            club.id.0,
            club.name,
            units.format_meters(club.carry_distance),
            units.format_meters(club.lateral_error),
            units.format_meters(club.depth_error),
        ));
    }
    lines.push(String::new());
    lines.join("\n")
}

pub fn shot_plan(plan: &ShotPlan, units: UnitSystem) -> String {
    let mut lines = vec![
        format!(
            "target:     {} at {:.0}°",
            units.format_meters(plan.distance_to_target),
            plan.bearing_to_target
        ),
        format!("club:       {}", plan.club_label),
        format!(
            "plays like: {} (aim {})",
            units.format_meters(plan.prediction.plays_like_clamped()),
            units.format_meters(plan.aim_distance)
        ),
        format!("lands at:   {}", plan.prediction.landing_point),
    ];
    if let Some(club) = &plan.club {
        lines.push(format!(
            "scatter:    ±{} wide, ±{} deep",
            units.format_meters(club.lateral_error),
            units.format_meters(club.depth_error)
        ));
    }
    lines.push(strategy_line(&plan.strategy));
    lines.push(String::new());
    lines.join("\n")
}

pub fn advice(distance: f64, shot_number: u32, bag: &Bag, units: UnitSystem) -> String {
    let mut lines = vec![
        format!("distance:   {} (shot {shot_number})", units.format_meters(distance)),
        format!("club:       {}", club_call(distance, bag)),
    ];
    let out_of_reach = bag.longest().is_some_and(|c| distance > c.carry_distance);
    if let Some(plan) = layup_plan(distance, bag, shot_number).filter(|_| out_of_reach) {
        lines.push(format!(
            "layup:      {} then {} ({} combined, ±{})",
            plan.first_club.name,
            plan.second_club.name,
            units.format_meters(plan.combined_carry()),
            units.format_meters(plan.combined_lateral_error)
        ));
    }
    lines.push(strategy_line(&strategy_recommendation(distance, bag, shot_number)));
    lines.push(String::new());
    lines.join("\n")
}

fn strategy_line(rec: &caddie::StrategyRecommendation) -> String {
    match &rec.sub_action {
        Some(sub) => format!("strategy:   {}: {sub}", rec.main_action()),
        None => format!("strategy:   {}", rec.main_action()),
    }
}
