//! WebAssembly module for AgriConnect
//!
//! Provides client-side helpers for:
//! - Recommendation form validation before submission
//! - Offline crop requirement lookup

use serde::Serialize;
use shared::{find_crop, validate_recommendation_input, RecommendationInput, CROP_REQUIREMENTS};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&JsValue::from_str("agriconnect-wasm loaded"));
}

/// Outcome of checking a soil sample against a crop's ranges
#[derive(Debug, Serialize, PartialEq)]
pub struct NutrientFit {
    pub crop: &'static str,
    pub nitrogen: bool,
    pub phosphorus: bool,
    pub potassium: bool,
}

fn normalize_form(form_json: &str) -> Result<String, String> {
    let input: RecommendationInput =
        serde_json::from_str(form_json).map_err(|e| format!("Invalid form JSON: {}", e))?;
    let request = validate_recommendation_input(&input).map_err(str::to_string)?;

    let normalized = RecommendationInput {
        district: Some(request.district),
        nitrogen: Some(request.nitrogen),
        phosphorus: Some(request.phosphorus),
        potassium: Some(request.potassium),
        ph_value: Some(request.ph_value),
    };
    serde_json::to_string(&normalized).map_err(|e| e.to_string())
}

fn nutrient_fit(crop: &str, nitrogen: f64, phosphorus: f64, potassium: f64) -> Option<NutrientFit> {
    let req = find_crop(crop)?;
    Some(NutrientFit {
        crop: req.crop,
        nitrogen: (req.n_min..=req.n_max).contains(&nitrogen),
        phosphorus: (req.p_min..=req.p_max).contains(&phosphorus),
        potassium: (req.k_min..=req.k_max).contains(&potassium),
    })
}

/// Validate a recommendation form and return the request body to submit.
///
/// The district is trimmed; the error is the message the server would give.
#[wasm_bindgen]
pub fn validate_recommendation_form(form_json: &str) -> Result<String, JsValue> {
    normalize_form(form_json).map_err(|e| JsValue::from_str(&e))
}

/// The full crop requirement table as JSON
#[wasm_bindgen]
pub fn crop_requirements() -> Result<String, JsValue> {
    serde_json::to_string(CROP_REQUIREMENTS).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Requirement entry for one crop, or `undefined` when unknown
#[wasm_bindgen]
pub fn crop_requirement(crop: &str) -> Option<String> {
    find_crop(crop).and_then(|req| serde_json::to_string(req).ok())
}

/// Names of every crop in the table
#[wasm_bindgen]
pub fn crop_names() -> js_sys::Array {
    CROP_REQUIREMENTS
        .iter()
        .map(|req| JsValue::from_str(req.crop))
        .collect()
}

/// Which of N, P and K fall inside the crop's range
#[wasm_bindgen]
pub fn check_nutrients(
    crop: &str,
    nitrogen: f64,
    phosphorus: f64,
    potassium: f64,
) -> Result<String, JsValue> {
    let fit = nutrient_fit(crop, nitrogen, phosphorus, potassium)
        .ok_or_else(|| JsValue::from_str("Crop not found"))?;
    serde_json::to_string(&fit).map_err(|e| JsValue::from_str(&e.to_string()))
}


// ============================================================================
// WASM-specific Tests
// ============================================================================
