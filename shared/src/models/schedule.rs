//! Crop action schedule

use serde::Serialize;

use super::CropRecord;

/// A step on the illustrative crop timeline
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStage {
    Sowing,
    FirstIrrigation,
    Harvest,
}

/// Shown under the irrigation step
pub const IRRIGATION_ADVISORY: &str = "Check soil moisture before irrigating.";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub stage: ScheduleStage,
    pub window: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<&'static str>,
}

/// Sowing, irrigation and harvest windows for a single crop
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActionSchedule {
    pub crop_id: &'static str,
    pub crop_name: &'static str,
    pub entries: Vec<ScheduleEntry>,
}

impl CropRecord {
    /// Build the three-step timeline, always in sowing, irrigation, harvest order
    pub fn action_schedule(&self) -> ActionSchedule {
        ActionSchedule {
            crop_id: self.id,
            crop_name: self.name,
            entries: vec![
                ScheduleEntry {
                    stage: ScheduleStage::Sowing,
                    window: self.sowing_window,
                    advisory: None,
                },
                ScheduleEntry {
                    stage: ScheduleStage::FirstIrrigation,
                    window: self.first_irrigation,
                    advisory: Some(IRRIGATION_ADVISORY),
                },
                ScheduleEntry {
                    stage: ScheduleStage::Harvest,
                    window: self.harvest_window,
                    advisory: None,
                },
            ],
        }
    }
}
