// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Cronometer Client
//!
//! Session client for the Cronometer export API.
//!
//! Cronometer has no public API. This client drives the same undocumented
//! surfaces the web app uses: the HTML login form (with its `anticsrf`
//! hidden input), the internal GWT RPC endpoint for session
//! authentication and auth-token generation, and the CSV export endpoint.
//! All of it is versioned only by observation and can change without
//! notice.
//!
//! ## Flow
//!
//! 1. [`Client::login`] scrapes a fresh anticsrf token, posts the
//!    credentials, captures the `sesnonce` session cookie, and
//!    authenticates against the GWT API to learn the user id.
//! 2. Each export call generates a fresh single-use auth token and issues
//!    the export GET with it.
//! 3. [`Client::logout`] tears the session down.
//!
//! ## Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use cronometer_client::{Client, ClientOptions};
//!
//! # async fn run() -> Result<(), cronometer_client::ClientError> {
//! let mut client = Client::new(ClientOptions::default())?;
//! client.login("user@example.com", "hunter2").await?;
//!
//! let start = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2021, 6, 10).unwrap();
//! let servings = client.export_servings_parsed(start, end).await?;
//!
//! client.logout().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod gwt;
pub mod session;

mod scrape;

pub use client::{Client, ClientOptions};
pub use error::ClientError;
pub use session::Session;

// Re-exported so callers don't need a direct cronometer-core dependency
// for the common case.
pub use cronometer_core::{
    BiometricRecord, ExerciseRecord, ExportKind, Nutrients, ServingRecord,
};
