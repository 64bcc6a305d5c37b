//! Cell value parsing helpers.

use crate::error::ParseError;

/// Parses a recognized numeric cell.
///
/// An empty cell is `0.0` by policy: exports routinely leave nutrient
/// cells blank rather than writing zeros. Anything else must parse as a
/// float or the whole export parse aborts.
pub(crate) fn parse_numeric(column: &str, value: &str) -> Result<f64, ParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0.0);
    }

    value
        .parse::<f64>()
        .map_err(|e| ParseError::field(column, e))
}
