//! Validation utilities for AgriConnect requests

use crate::models::{RecommendationInput, RecommendationRequest};

pub const MISSING_RECOMMENDATION_FIELDS: &str = "N, P, K, pH and district are required.";
pub const MISSING_LOCATION: &str = "City/district is required";
pub const MISSING_CROP: &str = "Crop name is required.";

// ============================================================================
// Recommendation Validations
// ============================================================================

/// Check that every soil parameter and the district are present.
///
/// Numeric values are accepted as provided; no range clamping is applied.
pub fn validate_recommendation_input(
    input: &RecommendationInput,
) -> Result<RecommendationRequest, &'static str> {
    let district = non_blank(input.district.as_deref()).ok_or(MISSING_RECOMMENDATION_FIELDS)?;

    match (input.nitrogen, input.phosphorus, input.potassium, input.ph_value) {
        (Some(nitrogen), Some(phosphorus), Some(potassium), Some(ph_value)) => {
            Ok(RecommendationRequest {
                district: district.to_string(),
                nitrogen,
                phosphorus,
                potassium,
                ph_value,
            })
        }
        _ => Err(MISSING_RECOMMENDATION_FIELDS),
    }
}

// ============================================================================
// Lookup Validations
// ============================================================================

/// Pick the first non-blank location out of the accepted query aliases
pub fn resolve_location_query<'a>(
    city: Option<&'a str>,
    district: Option<&'a str>,
    q: Option<&'a str>,
) -> Result<&'a str, &'static str> {
    non_blank(city)
        .or_else(|| non_blank(district))
        .or_else(|| non_blank(q))
        .ok_or(MISSING_LOCATION)
}

/// Validate the crop name of a price prediction request
pub fn validate_crop_name(crop: Option<&str>) -> Result<&str, &'static str> {
    non_blank(crop).ok_or(MISSING_CROP)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
