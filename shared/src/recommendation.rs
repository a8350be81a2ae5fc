//! Crop recommendation selector
//!
//! Not a scoring algorithm: the selector keeps the first few soil-compatible
//! crops in seed-table order and explains each pick with a short sentence.

use crate::models::{CropRecord, RecommendationResult, ReferenceWeatherSample, SoilCategory};
use crate::seed::{reference_sample, CROP_SEED};
use crate::types::Tier;

/// Upper bound on the number of crops returned
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Rain chance below which low-water crops are called out
pub const DRY_SPELL_BELOW_PERCENT: u8 = 30;

/// Rain chance above which high-water crops are called out
pub const WET_SPELL_ABOVE_PERCENT: u8 = 50;

/// Recommend up to three seed crops for `soil`
pub fn select_recommendations(soil: SoilCategory) -> Vec<RecommendationResult> {
    select_from(CROP_SEED, soil, reference_sample())
}

/// Recommend up to three crops from `table` for `soil`, keeping table order
pub fn select_from(
    table: &[CropRecord],
    soil: SoilCategory,
    reference: &ReferenceWeatherSample,
) -> Vec<RecommendationResult> {
    table
        .iter()
        .filter(|crop| crop.is_suitable_for(soil))
        .take(MAX_RECOMMENDATIONS)
        .map(|crop| RecommendationResult {
            crop: crop.clone(),
            high_yield: crop.is_high_yield(),
            justification: justify(crop, soil, reference),
        })
        .collect()
}

/// Explain why `crop` was picked for `soil`
pub fn justify(crop: &CropRecord, soil: SoilCategory, reference: &ReferenceWeatherSample) -> String {
    let mut reason = format!("Good match for {} soil.", soil.label());
    let rain_chance = reference.rain_chance_percent;

    if crop.water_requirement == Tier::Low && rain_chance < DRY_SPELL_BELOW_PERCENT {
        reason.push_str(" Suitable for current dry spell.");
    } else if crop.water_requirement == Tier::High && rain_chance > WET_SPELL_ABOVE_PERCENT {
        reason.push_str(" Can utilize expected rainfall.");
    }

    reason
}
