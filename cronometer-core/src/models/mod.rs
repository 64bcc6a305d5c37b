//! Record models for Cronometer exports.
//!
//! - [`ExportKind`] - Enum of the export flavors the service understands
//! - [`ServingRecord`] - One logged food serving
//! - [`Nutrients`] - Per-serving nutrient amounts
//! - [`ExerciseRecord`] - One logged exercise
//! - [`BiometricRecord`] - One logged biometric measurement

mod biometric;
mod exercise;
mod export;
mod serving;

pub use biometric::BiometricRecord;
pub use exercise::ExerciseRecord;
pub use export::ExportKind;
pub use serving::{Nutrients, ServingRecord};
