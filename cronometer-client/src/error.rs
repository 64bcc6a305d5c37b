//! Client error types.

use thiserror::Error;

/// Error type for session client operations.
///
/// The client performs no internal recovery or retries; every failure is
/// surfaced to the caller with the operation it happened in.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or connection failure, including timeouts and cancelled
    /// in-flight requests (`reqwest::Error::is_timeout` distinguishes
    /// deadline expiry from server-side failures).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Unexpected HTTP status. The body is carried for diagnostics.
    #[error("received {status} for {operation}: {body}")]
    HttpStatus {
        /// Which operation saw the status.
        operation: &'static str,
        /// The status code received.
        status: reqwest::StatusCode,
        /// Response body text.
        body: String,
    },

    /// A JSON response body failed to decode.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The login page contained no `anticsrf` input.
    #[error("anticsrf input not found in login page")]
    TokenNotFound,

    /// The server explicitly rejected the login, with its error string.
    #[error("login rejected: {0}")]
    LoginRejected(String),

    /// The GWT authenticate response did not match the expected
    /// `OK[<user id>,...` pattern.
    #[error("failed to extract user id from authenticate response: {0}")]
    AuthParse(String),

    /// The GWT token response did not contain a quoted token literal.
    #[error("failed to extract auth token from response: {0}")]
    TokenParse(String),

    /// A configured protocol header value is not a valid HTTP header.
    #[error("invalid header value: {0}")]
    Header(String),

    /// A parsed-export convenience failed to parse the CSV body.
    #[error("export parse error: {0}")]
    Parse(#[from] cronometer_parse::ParseError),
}
