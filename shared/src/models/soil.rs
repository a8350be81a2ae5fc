//! Soil categories

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseSoilError;

/// Farmland soil classification, the sole filter key for crop suitability
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SoilCategory {
    Loamy,
    Clay,
    Sandy,
    BlackSoil,
}

impl SoilCategory {
    /// All categories in display order
    pub const ALL: [SoilCategory; 4] = [
        SoilCategory::Loamy,
        SoilCategory::Clay,
        SoilCategory::Sandy,
        SoilCategory::BlackSoil,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            SoilCategory::Loamy => "Loamy",
            SoilCategory::Clay => "Clay",
            SoilCategory::Sandy => "Sandy",
            SoilCategory::BlackSoil => "Black Soil",
        }
    }

    /// Identifier used in URLs and JSON
    pub fn slug(&self) -> &'static str {
        match self {
            SoilCategory::Loamy => "loamy",
            SoilCategory::Clay => "clay",
            SoilCategory::Sandy => "sandy",
            SoilCategory::BlackSoil => "black_soil",
        }
    }
}

impl std::fmt::Display for SoilCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SoilCategory {
    type Err = ParseSoilError;

    /// Accepts either the label ("Black Soil") or the slug ("black_soil"),
    /// case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        SoilCategory::ALL
            .into_iter()
            .find(|soil| {
                soil.label().eq_ignore_ascii_case(needle) || soil.slug().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseSoilError(s.to_string()))
    }
}
