//! Exercises export parser.

use std::io::Read;

use chrono::TimeZone;
use cronometer_core::ExerciseRecord;

use crate::error::ParseError;
use crate::header::HeaderIndex;
use crate::timestamp;
use crate::value::parse_numeric;

/// Parses an exercises export into records, one per CSV row.
///
/// Timestamps are interpreted in `tz`. Exercise exports usually omit a
/// `Time` column, in which case records land at midnight.
///
/// # Errors
///
/// Returns [`ParseError::Csv`] for structural CSV problems,
/// [`ParseError::FieldParse`] for an unparseable recognized cell, and
/// [`ParseError::Timestamp`] for an unparseable `Day`/`Time` pair.
pub fn parse_exercises<R: Read, Tz: TimeZone>(
    reader: R,
    tz: &Tz,
) -> Result<Vec<ExerciseRecord>, ParseError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);
    let mut rows = csv_reader.records();

    let Some(header_row) = rows.next() else {
        return Ok(Vec::new());
    };
    let header = HeaderIndex::from_record(&header_row?);

    let mut exercises = Vec::new();
    for row in rows {
        let row = row?;

        let mut day = String::new();
        let mut time = String::new();
        let mut exercise = String::new();
        let mut minutes = 0.0;
        let mut calories_burned = 0.0;

        for (i, cell) in row.iter().enumerate() {
            let Some(column) = header.name(i) else {
                continue;
            };

            match column {
                "Day" => day = cell.to_string(),
                "Time" => time = cell.to_string(),
                "Exercise" => exercise = cell.to_string(),
                "Minutes" => minutes = parse_numeric(column, cell)?,
                "Calories Burned" => calories_burned = parse_numeric(column, cell)?,
                _ => {}
            }
        }

        exercises.push(ExerciseRecord {
            recorded_time: timestamp::combine(&day, &time, tz)?,
            exercise,
            minutes,
            calories_burned,
        });
    }

    Ok(exercises)
}
