//! Business logic services for the Crop Planner

pub mod request_tracker;
pub mod weather;

pub use request_tracker::{RequestToken, RequestTracker};
pub use weather::{TrackedFetch, WeatherService};
