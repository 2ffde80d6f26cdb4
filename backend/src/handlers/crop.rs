//! HTTP handlers for the static crop requirement table

use axum::{extract::Path, Json};
use shared::{find_crop, CropRequirement, CROP_REQUIREMENTS};

use crate::error::{AppError, AppResult};

pub async fn list_crops() -> Json<&'static [CropRequirement]> {
    Json(CROP_REQUIREMENTS)
}

pub async fn get_crop(Path(crop): Path<String>) -> AppResult<Json<&'static CropRequirement>> {
    find_crop(&crop)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Crop not found".to_string()))
}
