//! Static crop nutrient and climate requirements

use serde::Serialize;

/// Agronomic ranges a crop grows well in
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CropRequirement {
    #[serde(rename = "Crop")]
    pub crop: &'static str,
    #[serde(rename = "N_min")]
    pub n_min: f64,
    #[serde(rename = "N_max")]
    pub n_max: f64,
    #[serde(rename = "P_min")]
    pub p_min: f64,
    #[serde(rename = "P_max")]
    pub p_max: f64,
    #[serde(rename = "K_min")]
    pub k_min: f64,
    #[serde(rename = "K_max")]
    pub k_max: f64,
    #[serde(rename = "Temp_min")]
    pub temp_min: f64,
    #[serde(rename = "Temp_max")]
    pub temp_max: f64,
    #[serde(rename = "Rain_min")]
    pub rain_min: f64,
    #[serde(rename = "Rain_max")]
    pub rain_max: f64,
}

const fn crop(
    crop: &'static str,
    n: (f64, f64),
    p: (f64, f64),
    k: (f64, f64),
    temp: (f64, f64),
    rain: (f64, f64),
) -> CropRequirement {
    CropRequirement {
        crop,
        n_min: n.0,
        n_max: n.1,
        p_min: p.0,
        p_max: p.1,
        k_min: k.0,
        k_max: k.1,
        temp_min: temp.0,
        temp_max: temp.1,
        rain_min: rain.0,
        rain_max: rain.1,
    }
}

/// N/P/K in kg/ha, temperature in °C, rainfall in mm
pub const CROP_REQUIREMENTS: &[CropRequirement] = &[
    crop("rice", (80.0, 100.0), (40.0, 60.0), (40.0, 50.0), (20.0, 35.0), (150.0, 300.0)),
    crop("wheat", (50.0, 80.0), (30.0, 50.0), (30.0, 40.0), (15.0, 25.0), (50.0, 100.0)),
    crop("maize", (60.0, 90.0), (35.0, 55.0), (35.0, 45.0), (18.0, 30.0), (60.0, 120.0)),
    crop("cotton", (80.0, 120.0), (40.0, 70.0), (50.0, 80.0), (21.0, 35.0), (50.0, 100.0)),
    crop("sugarcane", (100.0, 150.0), (50.0, 80.0), (60.0, 100.0), (20.0, 35.0), (150.0, 300.0)),
    crop("chickpea", (20.0, 40.0), (40.0, 60.0), (20.0, 30.0), (15.0, 30.0), (50.0, 100.0)),
    crop("soybean", (30.0, 50.0), (30.0, 50.0), (25.0, 35.0), (20.0, 30.0), (60.0, 120.0)),
    crop("groundnut", (20.0, 40.0), (40.0, 60.0), (30.0, 50.0), (22.0, 30.0), (50.0, 100.0)),
];

/// Look up a crop by name, ignoring case and surrounding whitespace
pub fn find_crop(name: &str) -> Option<&'static CropRequirement> {
    let name = name.trim();
    CROP_REQUIREMENTS
        .iter()
        .find(|c| c.crop.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_crop_is_case_insensitive() {
        let rice = find_crop("  Rice ").unwrap();
        assert_eq!(rice.crop, "rice");
        assert_eq!(rice.rain_min, 150.0);
    }

    #[test]
    fn test_unknown_crop() {
        assert!(find_crop("quinoa").is_none());
        assert!(find_crop("").is_none());
    }

    #[test]
    fn test_ranges_are_ordered() {
        for c in CROP_REQUIREMENTS {
            assert!(c.n_min <= c.n_max, "{}", c.crop);
            assert!(c.p_min <= c.p_max, "{}", c.crop);
            assert!(c.k_min <= c.k_max, "{}", c.crop);
            assert!(c.temp_min <= c.temp_max, "{}", c.crop);
            assert!(c.rain_min <= c.rain_max, "{}", c.crop);
        }
    }

    #[test]
    fn test_serializes_with_table_keys() {
        let json = serde_json::to_value(find_crop("wheat").unwrap()).unwrap();
        assert_eq!(json["Crop"], "wheat");
        assert_eq!(json["N_max"], 80.0);
        assert_eq!(json["Rain_max"], 100.0);
    }
}
