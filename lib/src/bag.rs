//! Club profiles and the bag that holds them.
//!
//! Club names are labels only and may repeat. Every club gets a `ClubId` from
//! its bag at insertion; edits and removals go through that id.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable per-bag club identifier. Never reused within a bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClubId(pub u32);

impl fmt::Display for ClubId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BagError {
    #[error("no club with id {0} in bag")]
    UnknownClub(ClubId),
    #[error("club id {0} appears more than once in bag")]
    DuplicateId(ClubId),
    #[error("bag has no club ids left to assign")]
    IdsExhausted,
}

/// One club's carry and scatter, all in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubProfile {
    pub id: ClubId,
    pub name: String,
    pub carry_distance: f64,
    /// One-sided scatter radius perpendicular to the aim line.
    pub lateral_error: f64,
    /// One-sided scatter radius along the aim line.
    pub depth_error: f64,
}

impl ClubProfile {
    /// Case-insensitive substring match on the club name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Clubs in display order.
///
/// `next_id` is wider than `ClubId` so a bag holding `u32::MAX` still loads;
/// it just cannot take another club.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ClubProfile>", into = "Vec<ClubProfile>")]
pub struct Bag {
    clubs: Vec<ClubProfile>,
    next_id: u64,
}

impl TryFrom<Vec<ClubProfile>> for Bag {
    type Error = BagError;

    /// Adopt clubs with their existing ids. Ids must be unique; the counter
    /// resumes past the highest one.
    fn try_from(clubs: Vec<ClubProfile>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(clubs.len());
        if let Some(dup) = clubs.iter().find(|c| !seen.insert(c.id)) {
            return Err(BagError::DuplicateId(dup.id));
        }
        let next_id = clubs
            .iter()
            .map(|c| u64::from(c.id.0) + 1)
            .max()
            .unwrap_or(0);
        Ok(Self { clubs, next_id })
    }
}

impl From<Bag> for Vec<ClubProfile> {
    fn from(bag: Bag) -> Self {
        bag.clubs
    }
}

impl Bag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt clubs already numbered `0..n` in order.
    pub(crate) fn numbered(clubs: Vec<ClubProfile>) -> Self {
        debug_assert!(clubs.iter().zip(0u32..).all(|(c, i)| c.id.0 == i));
        Self {
            next_id: clubs.len() as u64,
            clubs,
        }
    }

    /// Append a club and return its newly assigned id.
    pub fn push(
        &mut self,
        name: impl Into<String>,
        carry_distance: f64,
        lateral_error: f64,
        depth_error: f64,
    ) -> Result<ClubId, BagError> {
        let id = u32::try_from(self.next_id)
            .map(ClubId)
            .map_err(|_| BagError::IdsExhausted)?;
        self.next_id += 1;
        self.clubs.push(ClubProfile {
            id,
            name: name.into(),
            carry_distance,
            lateral_error,
            depth_error,
        });
        Ok(id)
    }

    pub fn get(&self, id: ClubId) -> Option<&ClubProfile> {
        self.clubs.iter().find(|c| c.id == id)
    }

    /// Mutate a club in place. The closure may not change the id.
    pub fn update(&mut self, id: ClubId, f: impl FnOnce(&mut ClubProfile)) -> Result<(), BagError> {
        let club = self
            .clubs
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(BagError::UnknownClub(id))?;
        f(club);
        club.id = id;
        Ok(())
    }

    pub fn remove(&mut self, id: ClubId) -> Result<ClubProfile, BagError> {
        let pos = self
            .clubs
            .iter()
            .position(|c| c.id == id)
            .ok_or(BagError::UnknownClub(id))?;
        Ok(self.clubs.remove(pos))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClubProfile> {
        self.clubs.iter()
    }

    pub fn clubs(&self) -> &[ClubProfile] {
        &self.clubs
    }

    pub fn len(&self) -> usize {
        self.clubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }

    /// Club with the greatest carry. First in display order wins a tie.
    pub fn longest(&self) -> Option<&ClubProfile> {
        self.clubs.iter().reduce(|best, c| {
            if c.carry_distance > best.carry_distance {
                c
            } else {
                best
            }
        })
    }

    /// References sorted ascending by carry. Stable, so equal carries keep
    /// display order.
    pub fn sorted_by_carry(&self) -> Vec<&ClubProfile> {
        let mut sorted: Vec<&ClubProfile> = self.clubs.iter().collect();
        sorted.sort_by(|a, b| a.carry_distance.total_cmp(&b.carry_distance));
        sorted
    }
}

impl<'a> IntoIterator for &'a Bag {
    type Item = &'a ClubProfile;
    type IntoIter = std::slice::Iter<'a, ClubProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.clubs.iter()
    }
}
