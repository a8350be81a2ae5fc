//! Domain models for the Crop Planner

mod crop;
mod location;
mod schedule;
mod soil;
mod weather;

pub use crop::*;
pub use location::*;
pub use schedule::*;
pub use soil::*;
pub use weather::*;
