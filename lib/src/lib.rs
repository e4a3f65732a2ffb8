mod api;
mod arc;
mod bag;
mod config;
mod dispersion;
mod geo;
mod handicap;
mod planner;
mod round;
mod strategy;
mod units;
mod wind;

pub use api::*;
pub use arc::*;
pub use bag::*;
pub use config::*;
pub use dispersion::*;
pub use geo::*;
pub use handicap::*;
pub use planner::*;
pub use round::*;
pub use strategy::*;
pub use units::*;
pub use wind::*;
