//! Shared types and models for the Crop Planner
//!
//! This crate contains the pure domain logic shared between the backend
//! server and the mobile web front-end (via WASM): soil and crop models, the
//! crop seed table, the recommendation selector and the weather payload
//! normalizers. Nothing in here performs I/O.

pub mod error;
pub mod models;
pub mod normalize;
pub mod payload;
pub mod recommendation;
pub mod seed;
pub mod types;
pub mod validation;

pub use error::*;
pub use models::*;
pub use normalize::*;
pub use payload::*;
pub use recommendation::*;
pub use seed::*;
pub use types::*;
pub use validation::*;
