//! Exercise records.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One logged exercise from an exercises export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    /// When the exercise was logged, in the caller's requested zone.
    pub recorded_time: DateTime<FixedOffset>,
    /// Exercise name as shown in the diary.
    pub exercise: String,
    /// Duration in minutes.
    pub minutes: f64,
    /// Estimated calories burned (negative in exports, as the service
    /// reports energy expenditure as a negative kcal amount).
    pub calories_burned: f64,
}
