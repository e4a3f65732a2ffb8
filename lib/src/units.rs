//! Unit-tagged values for config files and the CLI, plus display formatting.
//!
//! Engine math is meters and meters per second throughout. These types only
//! exist at the edges, written as suffixed strings (`"150m"`, `"12mph"`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Yards per meter. Yards are display only.
pub const YARDS_PER_METER: f64 = 1.09361;

const MPS_PER_MPH: f64 = 0.44704;
const MPS_PER_KPH: f64 = 1.0 / 3.6;

type Ctor<T> = fn(f64) -> T;

/// Split `"12.5mph"` into its number and the constructor registered for the
/// first matching suffix. Suffixes are tried in table order.
fn parse_suffixed<T>(input: &str, what: &str, table: &[(&str, Ctor<T>)]) -> Result<T, String> {
    let s = input.trim();
    let (num, ctor) = table
        .iter()
        .find_map(|(suffix, ctor)| s.strip_suffix(suffix).map(|num| (num, ctor)))
        .ok_or_else(|| {
            let suffixes: Vec<_> = table.iter().map(|(suffix, _)| *suffix).collect();
            format!(
                "invalid {what} {s:?}: expected a number with one of {}",
                suffixes.join(", ")
            )
        })?;
    let value: f64 = num
        .trim()
        .parse()
        .map_err(|_| format!("invalid number in {what} {s:?}"))?;
    Ok(ctor(value))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Distance {
    Meters(f64),
    Yards(f64),
}

impl Distance {
    pub fn as_meters(self) -> f64 {
        match self {
            Self::Meters(m) => m,
            Self::Yards(yd) => yd / YARDS_PER_METER,
        }
    }

    /// Re-express in the unit `system` displays distances in.
    pub fn in_system(self, system: UnitSystem) -> Distance {
        let m = self.as_meters();
        match system {
            UnitSystem::Metric => Self::Meters(m),
            UnitSystem::Imperial => Self::Yards(m * YARDS_PER_METER),
        }
    }
}

impl FromStr for Distance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_suffixed(
            s,
            "distance",
            &[
                ("yd", Self::Yards as Ctor<Self>),
                ("m", Self::Meters as Ctor<Self>),
            ],
        )
    }
}

impl TryFrom<String> for Distance {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Distance> for String {
    fn from(d: Distance) -> Self {
        d.to_string()
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Meters(v) => write!(f, "{v}m"),
            Self::Yards(v) => write!(f, "{v}yd"),
        }
    }
}

/// A wind speed as the user wrote it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Velocity {
    MetersPerSecond(f64),
    MilesPerHour(f64),
    KilometersPerHour(f64),
}

impl Velocity {
    pub fn as_mps(self) -> f64 {
        match self {
            Self::MetersPerSecond(v) => v,
            Self::MilesPerHour(v) => v * MPS_PER_MPH,
            Self::KilometersPerHour(v) => v * MPS_PER_KPH,
        }
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Self::MetersPerSecond(0.0)
    }
}

impl FromStr for Velocity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_suffixed(
            s,
            "wind speed",
            &[
                ("mps", Self::MetersPerSecond as Ctor<Self>),
                ("mph", Self::MilesPerHour as Ctor<Self>),
                ("kph", Self::KilometersPerHour as Ctor<Self>),
            ],
        )
    }
}

impl TryFrom<String> for Velocity {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Velocity> for String {
    fn from(v: Velocity) -> Self {
        v.to_string()
    }
}

impl fmt::Display for Velocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MetersPerSecond(v) => write!(f, "{v}mps"),
            Self::MilesPerHour(v) => write!(f, "{v}mph"),
            Self::KilometersPerHour(v) => write!(f, "{v}kph"),
        }
    }
}

/// Display units. Metric shows meters, Imperial shows yards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Whole-unit label for a meter value, e.g. `"150m"` or `"164yd"`.
    pub fn format_meters(self, meters: f64) -> String {
        match Distance::Meters(meters).in_system(self) {
            Distance::Meters(v) => format!("{v:.0}m"),
            Distance::Yards(v) => format!("{v:.0}yd"),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        })
    }
}
