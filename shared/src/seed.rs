//! Built-in reference data
//!
//! The crop table is the planner's only "database". Order matters: the
//! recommendation selector keeps the first matches in table order.

use crate::models::{ConditionCategory, CropRecord, ReferenceWeatherSample};
use crate::types::{TemperatureRange, Tier};

use crate::models::SoilCategory::{BlackSoil, Clay, Loamy, Sandy};

pub static CROP_SEED: &[CropRecord] = &[
    CropRecord {
        id: "1",
        name: "Mustard",
        suitable_soils: &[Loamy, Sandy],
        temperature_range: TemperatureRange::new(15, 30),
        water_requirement: Tier::Medium,
        yield_potential: Tier::High,
        description: "A popular oilseed crop suitable for the current season.",
        sowing_window: "Nov 25 - Dec 1",
        first_irrigation: "Dec 15 - Check for rain",
        harvest_window: "Mar 10 - Mar 20",
    },
    CropRecord {
        id: "2",
        name: "Wheat",
        suitable_soils: &[Loamy, Clay, BlackSoil],
        temperature_range: TemperatureRange::new(10, 25),
        water_requirement: Tier::High,
        yield_potential: Tier::High,
        description: "Staple food crop, requires good moisture.",
        sowing_window: "Nov 20 - Nov 30",
        first_irrigation: "Dec 10 - Critical stage",
        harvest_window: "Apr 1 - Apr 15",
    },
    CropRecord {
        id: "3",
        name: "Chickpea (Gram)",
        suitable_soils: &[Loamy, Sandy, BlackSoil],
        temperature_range: TemperatureRange::new(15, 30),
        water_requirement: Tier::Low,
        yield_potential: Tier::Medium,
        description: "Drought tolerant pulse crop.",
        sowing_window: "Nov 15 - Nov 25",
        first_irrigation: "Dec 20 - Only if dry",
        harvest_window: "Mar 1 - Mar 10",
    },
    CropRecord {
        id: "4",
        name: "Cotton",
        suitable_soils: &[BlackSoil, Clay],
        temperature_range: TemperatureRange::new(20, 35),
        water_requirement: Tier::Medium,
        yield_potential: Tier::High,
        description: "Major cash crop, needs black soil.",
        sowing_window: "May 15 - Jun 15",
        first_irrigation: "Jun 30",
        harvest_window: "Oct 15 - Nov 15",
    },
    CropRecord {
        id: "5",
        name: "Groundnut",
        suitable_soils: &[Sandy, Loamy],
        temperature_range: TemperatureRange::new(20, 30),
        water_requirement: Tier::Medium,
        yield_potential: Tier::Medium,
        description: "Oilseed crop, prefers light soils.",
        sowing_window: "Jun 15 - Jul 15",
        first_irrigation: "Jul 10",
        harvest_window: "Oct 1 - Oct 15",
    },
    CropRecord {
        id: "6",
        name: "Rice",
        suitable_soils: &[Clay, Loamy],
        temperature_range: TemperatureRange::new(20, 35),
        water_requirement: Tier::High,
        yield_potential: Tier::High,
        description: "Staple crop, needs standing water.",
        sowing_window: "Jun 20 - Jul 10",
        first_irrigation: "Jul 5",
        harvest_window: "Oct 20 - Nov 10",
    },
];

/// Baseline weather table. Only the first entry is consulted.
pub static REFERENCE_WEATHER: &[ReferenceWeatherSample] = &[
    ReferenceWeatherSample {
        label: "Today",
        temperature_celsius: 28,
        humidity_percent: 65,
        rain_chance_percent: 10,
        condition: ConditionCategory::Sunny,
    },
    ReferenceWeatherSample {
        label: "Tomorrow",
        temperature_celsius: 27,
        humidity_percent: 70,
        rain_chance_percent: 30,
        condition: ConditionCategory::Cloudy,
    },
    ReferenceWeatherSample {
        label: "Day 3",
        temperature_celsius: 25,
        humidity_percent: 80,
        rain_chance_percent: 80,
        condition: ConditionCategory::Rainy,
    },
    ReferenceWeatherSample {
        label: "Day 4",
        temperature_celsius: 24,
        humidity_percent: 85,
        rain_chance_percent: 90,
        condition: ConditionCategory::Rainy,
    },
    ReferenceWeatherSample {
        label: "Day 5",
        temperature_celsius: 26,
        humidity_percent: 75,
        rain_chance_percent: 40,
        condition: ConditionCategory::Cloudy,
    },
];

/// The sample that biases recommendation justifications
pub fn reference_sample() -> &'static ReferenceWeatherSample {
    &REFERENCE_WEATHER[0]
}

/// Look up a seed crop by id
pub fn find_crop(id: &str) -> Option<&'static CropRecord> {
    CROP_SEED.iter().find(|crop| crop.id == id)
}
