//! Biometrics export parser.

use std::io::Read;

use chrono::TimeZone;
use cronometer_core::BiometricRecord;

use crate::error::ParseError;
use crate::header::HeaderIndex;
use crate::timestamp;
use crate::value::parse_numeric;

/// Parses a biometrics export into records, one per CSV row.
///
/// Timestamps are interpreted in `tz`. Compound `Amount` values such as
/// blood pressure ("120/80") cannot be represented as a single float and
/// parse as `0.0` rather than erroring.
///
/// # Errors
///
/// Returns [`ParseError::Csv`] for structural CSV problems,
/// [`ParseError::FieldParse`] for an unparseable recognized cell, and
/// [`ParseError::Timestamp`] for an unparseable `Day`/`Time` pair.
pub fn parse_biometrics<R: Read, Tz: TimeZone>(
    reader: R,
    tz: &Tz,
) -> Result<Vec<BiometricRecord>, ParseError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);
    let mut rows = csv_reader.records();

    let Some(header_row) = rows.next() else {
        return Ok(Vec::new());
    };
    let header = HeaderIndex::from_record(&header_row?);

    let mut biometrics = Vec::new();
    for row in rows {
        let row = row?;

        let mut day = String::new();
        let mut time = String::new();
        let mut category = String::new();
        let mut metric = String::new();
        let mut unit = String::new();
        let mut amount = 0.0;

        for (i, cell) in row.iter().enumerate() {
            let Some(column) = header.name(i) else {
                continue;
            };

            match column {
                "Day" => day = cell.to_string(),
                "Time" => time = cell.to_string(),
                "Category" => category = cell.to_string(),
                "Metric" => metric = cell.to_string(),
                "Unit" => unit = cell.to_string(),
                "Amount" => amount = parse_biometric_amount(cell)?,
                _ => {}
            }
        }

        biometrics.push(BiometricRecord {
            recorded_time: timestamp::combine(&day, &time, tz)?,
            category,
            metric,
            unit,
            amount,
        });
    }

    Ok(biometrics)
}

/// Parses a biometric `Amount` cell.
///
/// Values containing `/` (blood pressure readings) stay at `0.0`.
fn parse_biometric_amount(value: &str) -> Result<f64, ParseError> {
    if value.contains('/') {
        return Ok(0.0);
    }
    parse_numeric("Amount", value)
}
