//! HTTP handlers for soil and crop recommendation endpoints

use axum::{
    extract::{Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};
use shared::{find_crop, select_recommendations, ActionSchedule, RecommendationResult, SoilCategory};

use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct SoilOption {
    pub id: SoilCategory,
    pub label: &'static str,
}

/// List the selectable soil categories
pub async fn list_soils() -> Json<Vec<SoilOption>> {
    Json(
        SoilCategory::ALL
            .into_iter()
            .map(|soil| SoilOption {
                id: soil,
                label: soil.label(),
            })
            .collect(),
    )
}

/// Query parameters for crop recommendations
#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub soil: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub soil: SoilCategory,
    pub recommendations: Vec<RecommendationResult>,
}

/// Recommend crops for a soil category
pub async fn recommend_crops(
    Query(query): Query<RecommendationQuery>,
) -> AppResult<Json<RecommendationResponse>> {
    let soil: SoilCategory = query.soil.parse().map_err(|_| AppError::Validation {
        field: "soil".to_string(),
        message: format!("Unknown soil type: {}", query.soil),
        message_hi: format!("अज्ञात मिट्टी का प्रकार: {}", query.soil),
    })?;

    Ok(Json(RecommendationResponse {
        soil,
        recommendations: select_recommendations(soil),
    }))
}

/// Sowing, irrigation and harvest windows for a crop
pub async fn get_crop_schedule(Path(crop_id): Path<String>) -> AppResult<Json<ActionSchedule>> {
    let crop = find_crop(&crop_id).ok_or_else(|| AppError::NotFound(format!("Crop {}", crop_id)))?;
    Ok(Json(crop.action_schedule()))
}
