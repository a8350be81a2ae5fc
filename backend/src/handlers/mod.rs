//! HTTP handlers for the Crop Planner API

pub mod crops;
pub mod health;
pub mod weather;

pub use crops::*;
pub use health::*;
pub use weather::*;
