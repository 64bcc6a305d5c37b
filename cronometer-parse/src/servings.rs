//! Servings export parser.

use std::io::Read;

use chrono::TimeZone;
use cronometer_core::{Nutrients, ServingRecord};

use crate::error::ParseError;
use crate::header::HeaderIndex;
use crate::timestamp;
use crate::value::parse_numeric;

// ============================================================================
// Nutrient Column Table
// ============================================================================

type NutrientSetter = fn(&mut Nutrients, f64);

/// Column name → target field for every recognized nutrient column.
///
/// Adding a nutrient the service starts exporting is a one-line data
/// change here plus a field on [`Nutrients`]. Column names not in this
/// table are ignored.
const NUTRIENT_COLUMNS: &[(&str, NutrientSetter)] = &[
    ("Energy (kcal)", |n, v| n.energy_kcal = v),
    ("Caffeine (mg)", |n, v| n.caffeine_mg = v),
    ("Water (g)", |n, v| n.water_g = v),
    ("B1 (Thiamine) (mg)", |n, v| n.b1_mg = v),
    ("B2 (Riboflavin) (mg)", |n, v| n.b2_mg = v),
    ("B3 (Niacin) (mg)", |n, v| n.b3_mg = v),
    ("B5 (Pantothenic Acid) (mg)", |n, v| n.b5_mg = v),
    ("B6 (Pyridoxine) (mg)", |n, v| n.b6_mg = v),
    ("B12 (Cobalamin) (µg)", |n, v| n.b12_ug = v),
    ("Biotin (µg)", |n, v| n.biotin_ug = v),
    ("Choline (mg)", |n, v| n.choline_mg = v),
    ("Folate (µg)", |n, v| n.folate_ug = v),
    ("Vitamin A (IU)", |n, v| n.vitamin_a_iu = v),
    ("Vitamin C (mg)", |n, v| n.vitamin_c_mg = v),
    ("Vitamin D (IU)", |n, v| n.vitamin_d_iu = v),
    ("Vitamin E (mg)", |n, v| n.vitamin_e_mg = v),
    ("Vitamin K (µg)", |n, v| n.vitamin_k_ug = v),
    ("Calcium (mg)", |n, v| n.calcium_mg = v),
    ("Chromium (µg)", |n, v| n.chromium_ug = v),
    ("Copper (mg)", |n, v| n.copper_mg = v),
    ("Fluoride (µg)", |n, v| n.fluoride_ug = v),
    ("Iodine (µg)", |n, v| n.iodine_ug = v),
    ("Iron (mg)", |n, v| n.iron_mg = v),
    ("Magnesium (mg)", |n, v| n.magnesium_mg = v),
    ("Manganese (mg)", |n, v| n.manganese_mg = v),
    ("Phosphorus (mg)", |n, v| n.phosphorus_mg = v),
    ("Potassium (mg)", |n, v| n.potassium_mg = v),
    ("Selenium (µg)", |n, v| n.selenium_ug = v),
    ("Sodium (mg)", |n, v| n.sodium_mg = v),
    ("Zinc (mg)", |n, v| n.zinc_mg = v),
    ("Carbs (g)", |n, v| n.carbs_g = v),
    ("Fiber (g)", |n, v| n.fiber_g = v),
    ("Fructose (g)", |n, v| n.fructose_g = v),
    ("Galactose (g)", |n, v| n.galactose_g = v),
    ("Glucose (g)", |n, v| n.glucose_g = v),
    ("Lactose (g)", |n, v| n.lactose_g = v),
    ("Maltose (g)", |n, v| n.maltose_g = v),
    ("Starch (g)", |n, v| n.starch_g = v),
    ("Sucrose (g)", |n, v| n.sucrose_g = v),
    ("Sugars (g)", |n, v| n.sugars_g = v),
    ("Net Carbs (g)", |n, v| n.net_carbs_g = v),
    ("Fat (g)", |n, v| n.fat_g = v),
    ("Cholesterol (mg)", |n, v| n.cholesterol_mg = v),
    ("Monounsaturated (g)", |n, v| n.monounsaturated_g = v),
    ("Polyunsaturated (g)", |n, v| n.polyunsaturated_g = v),
    ("Saturated (g)", |n, v| n.saturated_g = v),
    ("Trans-Fats (g)", |n, v| n.trans_fats_g = v),
    ("Omega-3 (g)", |n, v| n.omega3_g = v),
    ("Omega-6 (g)", |n, v| n.omega6_g = v),
    ("Cystine (g)", |n, v| n.cystine_g = v),
    ("Histidine (g)", |n, v| n.histidine_g = v),
    ("Isoleucine (g)", |n, v| n.isoleucine_g = v),
    ("Leucine (g)", |n, v| n.leucine_g = v),
    ("Lysine (g)", |n, v| n.lysine_g = v),
    ("Methionine (g)", |n, v| n.methionine_g = v),
    ("Phenylalanine (g)", |n, v| n.phenylalanine_g = v),
    ("Protein (g)", |n, v| n.protein_g = v),
    ("Threonine (g)", |n, v| n.threonine_g = v),
    ("Tryptophan (g)", |n, v| n.tryptophan_g = v),
    ("Tyrosine (g)", |n, v| n.tyrosine_g = v),
    ("Valine (g)", |n, v| n.valine_g = v),
];

fn nutrient_setter(column: &str) -> Option<NutrientSetter> {
    NUTRIENT_COLUMNS
        .iter()
        .find(|(name, _)| *name == column)
        .map(|&(_, setter)| setter)
}

// ============================================================================
// Parser
// ============================================================================

/// Parses a servings export into records, one per CSV row.
///
/// Timestamps are interpreted in `tz`; pass `&chrono::Utc` when the
/// account zone does not matter. Any field-level failure aborts the
/// parse — no partial record list is returned.
///
/// # Errors
///
/// Returns [`ParseError::Csv`] for structural CSV problems,
/// [`ParseError::FieldParse`] for an unparseable recognized cell, and
/// [`ParseError::Timestamp`] for an unparseable `Day`/`Time` pair.
pub fn parse_servings<R: Read, Tz: TimeZone>(
    reader: R,
    tz: &Tz,
) -> Result<Vec<ServingRecord>, ParseError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);
    let mut rows = csv_reader.records();

    let Some(header_row) = rows.next() else {
        return Ok(Vec::new());
    };
    let header = HeaderIndex::from_record(&header_row?);

    let mut servings = Vec::new();
    for row in rows {
        let row = row?;

        let mut day = String::new();
        let mut time = String::new();
        let mut group = String::new();
        let mut food_name = String::new();
        let mut category = String::new();
        let mut quantity_value = 0.0;
        let mut quantity_units = String::new();
        let mut nutrients = Nutrients::default();

        for (i, cell) in row.iter().enumerate() {
            let Some(column) = header.name(i) else {
                continue;
            };

            match column {
                "Day" => day = cell.to_string(),
                "Time" => time = cell.to_string(),
                "Group" => group = cell.to_string(),
                "Food Name" => food_name = cell.to_string(),
                "Category" => category = cell.to_string(),
                "Amount" => (quantity_value, quantity_units) = parse_amount(cell)?,
                _ => {
                    if let Some(set) = nutrient_setter(column) {
                        set(&mut nutrients, parse_numeric(column, cell)?);
                    }
                }
            }
        }

        servings.push(ServingRecord {
            recorded_time: timestamp::combine(&day, &time, tz)?,
            group,
            food_name,
            quantity_value,
            quantity_units,
            category,
            nutrients,
        });
    }

    Ok(servings)
}

/// Splits a serving `Amount` cell ("2 cups") into magnitude and units.
fn parse_amount(value: &str) -> Result<(f64, String), ParseError> {
    let value = value.trim();
    let (magnitude, units) = value.split_once(' ').unwrap_or((value, ""));

    let quantity = magnitude
        .parse::<f64>()
        .map_err(|e| ParseError::field("Amount", e))?;

    Ok((quantity, units.to_string()))
}

// ============================================================================
// Tests
// ============================================================================
