//! Crop reference records

use serde::Serialize;

use super::SoilCategory;
use crate::types::{TemperatureRange, Tier};

/// A crop in the static seed table
///
/// Records are built at compile time and never mutated, so every text field
/// borrows from static memory.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CropRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub suitable_soils: &'static [SoilCategory],
    pub temperature_range: TemperatureRange,
    pub water_requirement: Tier,
    pub yield_potential: Tier,
    pub description: &'static str,
    pub sowing_window: &'static str,
    pub first_irrigation: &'static str,
    pub harvest_window: &'static str,
}

impl CropRecord {
    pub fn is_suitable_for(&self, soil: SoilCategory) -> bool {
        self.suitable_soils.contains(&soil)
    }

    pub fn is_high_yield(&self) -> bool {
        self.yield_potential == Tier::High
    }
}

/// A crop selected for a soil category, with the reason it was picked
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RecommendationResult {
    #[serde(flatten)]
    pub crop: CropRecord,
    /// Drives the "High Yield" badge
    pub high_yield: bool,
    pub justification: String,
}
