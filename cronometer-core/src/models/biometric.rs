//! Biometric records.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One logged biometric measurement from a biometrics export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiometricRecord {
    /// When the measurement was logged, in the caller's requested zone.
    pub recorded_time: DateTime<FixedOffset>,
    /// Measurement category ("Body", "Vitals", ...).
    pub category: String,
    /// Metric name ("Weight", "Blood Pressure", ...).
    pub metric: String,
    /// Unit the amount is reported in ("kg", "mmHg", ...).
    pub unit: String,
    /// Measured amount. Compound readings such as blood pressure
    /// ("120/80") are not representable as a single number and are
    /// reported as `0.0`.
    pub amount: f64,
}
