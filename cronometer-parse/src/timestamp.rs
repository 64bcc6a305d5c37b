//! `Day` + `Time` column reconstruction.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};

use crate::error::ParseError;

const DAY_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%I:%M %p";

/// Combines the `Day` and `Time` cells into one timestamp in `tz`.
///
/// A missing or empty `Time` means midnight. Ambiguous local times (the
/// repeated hour of a DST fall-back) resolve to the earliest instant;
/// a nonexistent local time (DST gap) is an error.
pub(crate) fn combine<Tz: TimeZone>(
    day: &str,
    time: &str,
    tz: &Tz,
) -> Result<DateTime<FixedOffset>, ParseError> {
    let date = NaiveDate::parse_from_str(day.trim(), DAY_FORMAT).map_err(|e| {
        ParseError::Timestamp {
            value: day.to_string(),
            message: e.to_string(),
        }
    })?;

    let time = time.trim();
    let time_of_day = if time.is_empty() {
        NaiveTime::MIN
    } else {
        NaiveTime::parse_from_str(time, TIME_FORMAT).map_err(|e| ParseError::Timestamp {
            value: time.to_string(),
            message: e.to_string(),
        })?
    };

    tz.from_local_datetime(&date.and_time(time_of_day))
        .earliest()
        .map(|dt| dt.fixed_offset())
        .ok_or_else(|| ParseError::Timestamp {
            value: format!("{day} {time}"),
            message: "local time does not exist in the requested zone".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Timelike, Utc};

    #[test]
    fn test_combines_day_and_time() {
        let dt = combine("2021-06-01", "08:00 AM", &Utc).unwrap();
        assert_eq!(dt.hour(), 8);
        assert_eq!(dt.minute(), 0);
        assert_eq!(dt.date_naive(), NaiveDate::from_ymd_opt(2021, 6, 1).unwrap());
    }

    #[test]
    fn test_pm_times() {
        let dt = combine("2021-06-01", "12:15 PM", &Utc).unwrap();
        assert_eq!(dt.hour(), 12);
        assert_eq!(dt.minute(), 15);

        let dt = combine("2021-06-01", "11:59 PM", &Utc).unwrap();
        assert_eq!(dt.hour(), 23);
    }

    #[test]
    fn test_empty_time_is_midnight() {
        let dt = combine("2021-06-01", "", &Utc).unwrap();
        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.minute(), 0);
    }

    #[test]
    fn test_caller_zone_is_respected() {
        let kolkata = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let dt = combine("2021-06-01", "08:00 AM", &kolkata).unwrap();
        assert_eq!(dt.offset(), &kolkata);
        assert_eq!(dt.hour(), 8);
    }

    #[test]
    fn test_bad_day_is_an_error() {
        let err = combine("06/01/2021", "08:00 AM", &Utc).unwrap_err();
        assert!(matches!(err, ParseError::Timestamp { .. }));
    }

    #[test]
    fn test_bad_time_is_an_error() {
        let err = combine("2021-06-01", "8am", &Utc).unwrap_err();
        assert!(matches!(err, ParseError::Timestamp { .. }));
    }
}
