//! Persisted config types, shared between the app and its HTTP clients.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::bag::Bag;
use crate::handicap::generate_bag;
use crate::round::HoleDefinition;
use crate::units::{UnitSystem, Velocity};
use crate::wind::WindVector;

/// Handicap used to seed the bag in a fresh config.
pub const DEFAULT_HANDICAP: f64 = 18.0;

/// Top-level persisted config. Wind speed is a suffixed string (`"4mps"`,
/// `"9mph"`) so the TOML file is hand-editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaddieConfig {
    /// Unit system for displayed distances (meters by default)
    #[serde(default)]
    pub default_units: UnitSystem,
    /// Handicap index the bag was generated from, if any
    #[serde(default)]
    pub handicap: Option<f64>,
    /// Wind applied when a request does not carry its own
    #[serde(default)]
    pub wind: WindSection,
    #[serde(default)]
    pub bag: Bag,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub webserver: HashMap<String, WebserverSection>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub course: HashMap<String, CourseSection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindSection {
    #[serde(default)]
    pub speed: Velocity,
    /// Compass bearing the wind blows toward
    #[serde(default)]
    pub direction_deg: f64,
}

impl Default for WindSection {
    fn default() -> Self {
        Self {
            speed: Velocity::MetersPerSecond(0.0),
            direction_deg: 0.0,
        }
    }
}

impl WindSection {
    pub fn to_vector(self) -> WindVector {
        WindVector::from_velocity(self.speed, self.direction_deg)
    }

    /// The configured wind with either part replaced by a per-shot value.
    pub fn with_overrides(self, speed: Option<Velocity>, direction_deg: Option<f64>) -> Self {
        Self {
            speed: speed.unwrap_or(self.speed),
            direction_deg: direction_deg.unwrap_or(self.direction_deg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebserverSection {
    #[serde(default)]
    pub name: String,
    pub bind: String,
}

/// A course entered by hand or imported from a map lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSection {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub holes: Vec<HoleDefinition>,
}

impl CourseSection {
    pub fn hole(&self, number: u8) -> Option<&HoleDefinition> {
        self.holes.iter().find(|h| h.number == number)
    }

    pub fn par(&self) -> u32 {
        self.holes.iter().map(|h| u32::from(h.par)).sum()
    }
}

impl Default for CaddieConfig {
    /// A mid-handicap generated bag, calm wind, and a local web server.
    fn default() -> Self {
        let mut webserver = HashMap::new();
        webserver.insert(
            "0".into(),
            WebserverSection {
                name: "Web Server".into(),
                bind: "127.0.0.1:3030".into(),
            },
        );
        Self {
            default_units: UnitSystem::default(),
            handicap: Some(DEFAULT_HANDICAP),
            wind: WindSection::default(),
            bag: generate_bag(DEFAULT_HANDICAP),
            webserver,
            course: HashMap::new(),
        }
    }
}
