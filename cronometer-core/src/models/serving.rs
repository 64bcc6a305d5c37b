//! Food serving records.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

// ============================================================================
// Serving Record
// ============================================================================

/// One logged food serving from a servings export.
///
/// A serving carries the moment it was logged, where it was logged
/// (diary group), what was eaten and how much, and the full nutrient
/// breakdown the account's export settings include.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServingRecord {
    /// When the serving was logged, in the caller's requested zone.
    pub recorded_time: DateTime<FixedOffset>,
    /// Diary group the serving was logged under ("Breakfast", ...).
    pub group: String,
    /// Food name as shown in the diary.
    pub food_name: String,
    /// Numeric magnitude of the logged amount (the `2` in "2 cups").
    pub quantity_value: f64,
    /// Free-text units of the logged amount (the `cups` in "2 cups").
    pub quantity_units: String,
    /// Food category.
    pub category: String,
    /// Nutrient amounts for this serving.
    pub nutrients: Nutrients,
}

// ============================================================================
// Nutrients
// ============================================================================

/// Nutrient amounts for a single serving.
///
/// Field names carry the unit the export reports the nutrient in. The
/// exact column set varies between accounts and server versions; columns
/// missing from an export simply leave their field at `0.0`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[allow(missing_docs)] // field names mirror the export columns 1:1
pub struct Nutrients {
    // General
    pub energy_kcal: f64,
    pub caffeine_mg: f64,
    pub water_g: f64,

    // Vitamins
    pub b1_mg: f64,
    pub b2_mg: f64,
    pub b3_mg: f64,
    pub b5_mg: f64,
    pub b6_mg: f64,
    pub b12_ug: f64,
    pub biotin_ug: f64,
    pub choline_mg: f64,
    pub folate_ug: f64,
    pub vitamin_a_iu: f64,
    pub vitamin_c_mg: f64,
    pub vitamin_d_iu: f64,
    pub vitamin_e_mg: f64,
    pub vitamin_k_ug: f64,

    // Minerals
    pub calcium_mg: f64,
    pub chromium_ug: f64,
    pub copper_mg: f64,
    pub fluoride_ug: f64,
    pub iodine_ug: f64,
    pub iron_mg: f64,
    pub magnesium_mg: f64,
    pub manganese_mg: f64,
    pub phosphorus_mg: f64,
    pub potassium_mg: f64,
    pub selenium_ug: f64,
    pub sodium_mg: f64,
    pub zinc_mg: f64,

    // Carbohydrates
    pub carbs_g: f64,
    pub fiber_g: f64,
    pub fructose_g: f64,
    pub galactose_g: f64,
    pub glucose_g: f64,
    pub lactose_g: f64,
    pub maltose_g: f64,
    pub starch_g: f64,
    pub sucrose_g: f64,
    pub sugars_g: f64,
    pub net_carbs_g: f64,

    // Lipids
    pub fat_g: f64,
    pub cholesterol_mg: f64,
    pub monounsaturated_g: f64,
    pub polyunsaturated_g: f64,
    pub saturated_g: f64,
    pub trans_fats_g: f64,
    pub omega3_g: f64,
    pub omega6_g: f64,

    // Amino acids
    pub cystine_g: f64,
    pub histidine_g: f64,
    pub isoleucine_g: f64,
    pub leucine_g: f64,
    pub lysine_g: f64,
    pub methionine_g: f64,
    pub phenylalanine_g: f64,
    pub protein_g: f64,
    pub threonine_g: f64,
    pub tryptophan_g: f64,
    pub tyrosine_g: f64,
    pub valine_g: f64,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_nutrients_default_to_zero() {
        let n = Nutrients::default();
        assert_eq!(n.energy_kcal, 0.0);
        assert_eq!(n.b12_ug, 0.0);
        assert_eq!(n.valine_g, 0.0);
    }

    #[test]
    fn test_serving_serde_roundtrip() {
        let record = ServingRecord {
            recorded_time: chrono::Utc
                .with_ymd_and_hms(2021, 6, 1, 8, 0, 0)
                .unwrap()
                .fixed_offset(),
            group: "Breakfast".to_string(),
            food_name: "Oatmeal".to_string(),
            quantity_value: 1.0,
            quantity_units: "cup".to_string(),
            category: String::new(),
            nutrients: Nutrients {
                energy_kcal: 150.0,
                ..Nutrients::default()
            },
        };

        let json = serde_json::to_string(&record).unwrap();
        let parsed: ServingRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
