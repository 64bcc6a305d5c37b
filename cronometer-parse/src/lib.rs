// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Cronometer Parse
//!
//! Parsers that turn raw Cronometer CSV export text into typed records.
//!
//! The export CSVs are header-driven: column order is not stable across
//! server versions, and the nutrient column set varies between accounts.
//! Each parser reads the header row into a [`HeaderIndex`] and dispatches
//! every cell by column *name*. Unrecognized columns are ignored so a
//! server-added column never breaks a sync.
//!
//! Tolerance policy for numeric columns: an empty cell parses as `0.0`.
//! Sparse nutrient data is the norm, not an error. Everything else fails
//! loudly — a single bad cell or timestamp aborts the whole parse rather
//! than silently dropping the row.
//!
//! ## Example
//!
//! ```
//! use chrono::Utc;
//!
//! let csv = "Day,Time,Group,Food Name,Amount,Energy (kcal)\n\
//!            2021-06-01,08:00 AM,Breakfast,Oatmeal,1 cup,150";
//! let records = cronometer_parse::parse_servings(csv.as_bytes(), &Utc).unwrap();
//! assert_eq!(records[0].food_name, "Oatmeal");
//! assert_eq!(records[0].nutrients.energy_kcal, 150.0);
//! ```

pub mod biometrics;
pub mod error;
pub mod exercises;
pub mod header;
pub mod servings;

mod timestamp;
mod value;

pub use biometrics::parse_biometrics;
pub use error::ParseError;
pub use exercises::parse_exercises;
pub use header::HeaderIndex;
pub use servings::parse_servings;
