// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Cronometer Core
//!
//! Record models and export kinds for the Cronometer export API.
//!
//! Cronometer's export endpoint hands back loosely-typed CSV text. This
//! crate defines the strongly-typed records those exports parse into,
//! plus the [`ExportKind`] enum that names the five export flavors the
//! service understands.
//!
//! ## Key Types
//!
//! - [`ExportKind`] - The five export flavors (`servings`, `dailySummary`,
//!   `exercises`, `biometrics`, `notes`)
//! - [`ServingRecord`] / [`Nutrients`] - One logged food serving with its
//!   full nutrient breakdown
//! - [`ExerciseRecord`] - One logged exercise
//! - [`BiometricRecord`] - One logged biometric measurement

pub mod models;

pub use models::{
    BiometricRecord,
    ExerciseRecord,
    ExportKind,
    Nutrients,
    ServingRecord,
};
