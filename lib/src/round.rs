//! Course holes, logged shots, and per-round scoring.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::{GeoPoint, bearing, distance};

/// A hole as supplied by the course source: tee and green center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoleDefinition {
    pub number: u8,
    pub par: u8,
    pub tee: GeoPoint,
    pub green: GeoPoint,
}

impl HoleDefinition {
    /// Straight-line tee-to-green length in meters.
    pub fn length(&self) -> f64 {
        distance(self.tee, self.green)
    }

    pub fn tee_bearing(&self) -> f64 {
        bearing(self.tee, self.green)
    }
}

/// One logged shot. `distance` is always `distance(from, to)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotRecord {
    pub hole_number: u8,
    pub shot_number: u32,
    pub from: GeoPoint,
    pub to: GeoPoint,
    #[serde(default)]
    pub club_used: Option<String>,
    pub distance: f64,
}

impl ShotRecord {
    pub fn new(
        hole_number: u8,
        shot_number: u32,
        from: GeoPoint,
        to: GeoPoint,
        club_used: Option<String>,
    ) -> Self {
        Self {
            hole_number,
            shot_number,
            from,
            to,
            club_used,
            distance: distance(from, to),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleScore {
    pub hole_number: u8,
    pub par: u8,
    pub strokes: u32,
    #[serde(default)]
    pub putts: u32,
}

impl HoleScore {
    /// Green in regulation: on the green in `par - 2` strokes or fewer.
    pub fn is_gir(&self) -> bool {
        let to_green = self.strokes.saturating_sub(self.putts);
        self.strokes > 0 && to_green + 2 <= u32::from(self.par)
    }

    pub fn to_par(&self) -> i32 {
        self.strokes as i32 - i32::from(self.par)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoundSummary {
    pub holes_played: u32,
    pub strokes: u32,
    pub par: u32,
    pub to_par: i32,
    pub putts: u32,
    pub greens_in_regulation: u32,
}

impl RoundSummary {
    /// Totals over the holes with at least one stroke recorded.
    pub fn from_scores(scores: &[HoleScore]) -> Self {
        scores
            .iter()
            .filter(|s| s.strokes > 0)
            .fold(Self::default(), |mut acc, s| {
                acc.holes_played += 1;
                acc.strokes += s.strokes;
                acc.par += u32::from(s.par);
                acc.to_par += s.to_par();
                acc.putts += s.putts;
                acc.greens_in_regulation += u32::from(s.is_gir());
                acc
            })
    }
}

/// A round in progress: shots and scores as logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub course: String,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub shots: Vec<ShotRecord>,
    #[serde(default)]
    pub scores: Vec<HoleScore>,
}

impl RoundRecord {
    pub fn new(course: impl Into<String>, started_at: DateTime<Utc>) -> Self {
        Self {
            course: course.into(),
            started_at,
            shots: Vec::new(),
            scores: Vec::new(),
        }
    }

    pub fn start(course: impl Into<String>) -> Self {
        Self::new(course, Utc::now())
    }

    /// Log a shot, numbering it after the last shot on the same hole.
    pub fn log_shot(
        &mut self,
        hole_number: u8,
        from: GeoPoint,
        to: GeoPoint,
        club_used: Option<String>,
    ) -> &ShotRecord {
        let shot_number = self
            .shots
            .iter()
            .filter(|s| s.hole_number == hole_number)
            .map(|s| s.shot_number)
            .max()
            .unwrap_or(0)
            + 1;
        self.shots
            .push(ShotRecord::new(hole_number, shot_number, from, to, club_used));
        &self.shots[self.shots.len() - 1]
    }

    /// Record or replace the score for a hole.
    pub fn set_score(&mut self, score: HoleScore) {
        match self
            .scores
            .iter_mut()
            .find(|s| s.hole_number == score.hole_number)
        {
            Some(existing) => *existing = score,
            None => self.scores.push(score),
        }
    }

    pub fn summary(&self) -> RoundSummary {
        RoundSummary::from_scores(&self.scores)
    }
}
