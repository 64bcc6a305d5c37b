//! Session client for the Cronometer export API.

use std::time::Duration;

use chrono::{NaiveDate, TimeZone, Utc};
use cronometer_core::{BiometricRecord, ExerciseRecord, ExportKind, ServingRecord};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::ClientError;
use crate::gwt;
use crate::scrape;
use crate::session::Session;

// ============================================================================
// Constants
// ============================================================================

/// Production base URL of the service.
pub const DEFAULT_BASE_URL: &str = "https://cronometer.com";

/// Login page (HTML, carries the anticsrf input).
const LOGIN_PAGE_PATH: &str = "/login/";

/// Login endpoint (form POST, JSON response).
const LOGIN_PATH: &str = "/login";

/// Internal GWT RPC endpoint.
const GWT_APP_PATH: &str = "/cronometer/app";

/// CSV export endpoint.
const EXPORT_PATH: &str = "/export";

/// Cookie carrying the session nonce.
const SESSION_COOKIE: &str = "sesnonce";

/// Export date query parameter format.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Options
// ============================================================================

/// Construction options for [`Client`]. Every `None` falls back to the
/// library default, so `ClientOptions::default()` targets production
/// with the protocol constants in [`crate::gwt`].
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Base URL of the service (scheme + host, no trailing slash).
    pub base_url: Option<String>,
    /// Override for [`gwt::GWT_CONTENT_TYPE`].
    pub gwt_content_type: Option<String>,
    /// Override for [`gwt::GWT_MODULE_BASE`].
    pub gwt_module_base: Option<String>,
    /// Override for [`gwt::GWT_PERMUTATION`].
    pub gwt_permutation: Option<String>,
    /// Override for [`gwt::GWT_HEADER`].
    pub gwt_header: Option<String>,
    /// Per-request timeout. Defaults to 30 seconds.
    pub timeout: Option<Duration>,
}

// ============================================================================
// Wire Types
// ============================================================================

/// JSON body of the login response.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    /// Where the web app would navigate next.
    #[serde(default)]
    redirect: String,
    /// Whether the server considered the login successful.
    #[serde(default)]
    success: bool,
    /// Server-provided rejection reason; empty on success.
    #[serde(default)]
    error: String,
}

// ============================================================================
// Client
// ============================================================================

/// Client for the Cronometer export API.
///
/// One `Client` is one logical session: the cookie jar and the
/// [`Session`] value are exclusively owned, and the methods that mutate
/// session state take `&mut self`. Callers needing concurrent sessions
/// create one client per session.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    session: Session,
    base_url: String,
    gwt_content_type: String,
    gwt_module_base: String,
    gwt_permutation: String,
    gwt_header: String,
}

impl Client {
    /// Creates a client with a fresh cookie store. No network I/O
    /// happens until the first call.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the underlying HTTP client
    /// cannot be built (broken TLS configuration).
    pub fn new(options: ClientOptions) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(
                options
                    .timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            )
            .cookie_store(true)
            .build()?;

        Ok(Self {
            http,
            session: Session::default(),
            base_url: options
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            gwt_content_type: options
                .gwt_content_type
                .unwrap_or_else(|| gwt::GWT_CONTENT_TYPE.to_string()),
            gwt_module_base: options
                .gwt_module_base
                .unwrap_or_else(|| gwt::GWT_MODULE_BASE.to_string()),
            gwt_permutation: options
                .gwt_permutation
                .unwrap_or_else(|| gwt::GWT_PERMUTATION.to_string()),
            gwt_header: options
                .gwt_header
                .unwrap_or_else(|| gwt::GWT_HEADER.to_string()),
        })
    }

    /// Read access to the current session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Headers every GWT RPC request carries.
    fn gwt_headers(&self) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_str(&self.gwt_content_type)
                .map_err(|e| ClientError::Header(e.to_string()))?,
        );
        headers.insert(
            "x-gwt-module-base",
            HeaderValue::from_str(&self.gwt_module_base)
                .map_err(|e| ClientError::Header(e.to_string()))?,
        );
        headers.insert(
            "x-gwt-permutation",
            HeaderValue::from_str(&self.gwt_permutation)
                .map_err(|e| ClientError::Header(e.to_string()))?,
        );
        Ok(headers)
    }

    /// Reads the session-nonce cookie off a response, if the server set
    /// or rotated it. Must run before the body is consumed.
    fn capture_session_cookie(response: &Response) -> Option<String> {
        response
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
    }

    // ------------------------------------------------------------------
    // Authentication
    // ------------------------------------------------------------------

    /// Fetches the login page and scrapes the `anticsrf` hidden input.
    ///
    /// The token is short-lived; [`Client::login`] calls this itself
    /// immediately before posting credentials, so there is rarely a
    /// reason to call it directly.
    ///
    /// # Errors
    ///
    /// [`ClientError::Transport`] if the request cannot be sent,
    /// [`ClientError::HttpStatus`] on a non-200 response, and
    /// [`ClientError::TokenNotFound`] if the page has no anticsrf input.
    #[instrument(skip(self))]
    pub async fn obtain_anticsrf(&self) -> Result<String, ClientError> {
        debug!("Fetching login page for anticsrf token");

        let response = self.http.get(self.url(LOGIN_PAGE_PATH)).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(ClientError::HttpStatus {
                operation: "login page",
                status,
                body,
            });
        }

        scrape::extract_anticsrf(&body).ok_or(ClientError::TokenNotFound)
    }

    /// Logs in and authenticates the session against the GWT API.
    ///
    /// Posts the credentials with a freshly scraped anticsrf token,
    /// stores the `sesnonce` cookie value, then performs
    /// [`Client::gwt_authenticate`] to learn the user id needed for
    /// token generation.
    ///
    /// # Errors
    ///
    /// [`ClientError::LoginRejected`] carries the server's own error
    /// string for bad credentials; in that case no session nonce is
    /// stored. Transport, status, and decode failures surface as their
    /// respective variants.
    #[instrument(skip(self, username, password))]
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), ClientError> {
        let anticsrf = self.obtain_anticsrf().await?;

        let form = [
            ("anticsrf", anticsrf.as_str()),
            ("username", username),
            ("password", password),
        ];

        let response = self.http.post(self.url(LOGIN_PATH)).form(&form).send().await?;
        let status = response.status();
        let nonce = Self::capture_session_cookie(&response);
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(ClientError::HttpStatus {
                operation: "login",
                status,
                body,
            });
        }

        let login: LoginResponse = serde_json::from_str(&body)?;
        if !login.error.is_empty() {
            return Err(ClientError::LoginRejected(login.error));
        }
        debug!(success = login.success, redirect = %login.redirect, "Login accepted");

        // Absence of the cookie is not an error here; later calls fail
        // server-side instead.
        if let Some(nonce) = nonce {
            self.session.set_nonce(nonce);
        }

        self.gwt_authenticate().await
    }

    /// Authenticates with the GWT API using the stored session nonce.
    ///
    /// [`Client::login`] calls this already; it only needs calling
    /// directly when driving the handshake manually. Re-captures the
    /// session cookie if the server rotates it, then extracts the user
    /// id from the response body.
    ///
    /// # Errors
    ///
    /// [`ClientError::AuthParse`] when the `OK[<user id>,...` pattern is
    /// missing from the response.
    #[instrument(skip(self))]
    pub async fn gwt_authenticate(&mut self) -> Result<(), ClientError> {
        debug!("Authenticating with the GWT API");

        let payload = gwt::authenticate_payload(&self.gwt_module_base, &self.gwt_header);
        let response = self
            .http
            .post(self.url(GWT_APP_PATH))
            .headers(self.gwt_headers()?)
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        let nonce = Self::capture_session_cookie(&response);
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(ClientError::HttpStatus {
                operation: "gwt authenticate",
                status,
                body,
            });
        }

        if let Some(nonce) = nonce {
            self.session.set_nonce(nonce);
        }

        let user_id = gwt::extract_user_id(&body).ok_or_else(|| {
            ClientError::AuthParse("user id pattern not found in response".to_string())
        })?;
        self.session.set_user_id(user_id);

        Ok(())
    }

    /// Generates a short-lived auth token for one export call.
    ///
    /// The token is distinct from the session nonce and is single-use by
    /// policy: every export call generates a fresh one, never caching.
    ///
    /// # Errors
    ///
    /// [`ClientError::TokenParse`] when no quoted token literal is found
    /// in the response.
    #[instrument(skip(self))]
    pub async fn generate_auth_token(&self) -> Result<String, ClientError> {
        debug!("Generating export auth token");

        let payload = gwt::generate_auth_token_payload(
            &self.gwt_module_base,
            &self.gwt_header,
            self.session.nonce_or_empty(),
            self.session.user_id_or_empty(),
        );
        let response = self
            .http
            .post(self.url(GWT_APP_PATH))
            .headers(self.gwt_headers()?)
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(ClientError::HttpStatus {
                operation: "gwt token generation",
                status,
                body,
            });
        }

        gwt::extract_token(&body).ok_or_else(|| {
            ClientError::TokenParse("no quoted token literal in response".to_string())
        })
    }

    /// Logs out and clears the stored session state.
    ///
    /// # Errors
    ///
    /// [`ClientError::HttpStatus`] on a non-200 response; the session
    /// state is left untouched in that case.
    #[instrument(skip(self))]
    pub async fn logout(&mut self) -> Result<(), ClientError> {
        debug!("Logging out");

        let payload = gwt::logout_payload(
            &self.gwt_module_base,
            &self.gwt_header,
            self.session.nonce_or_empty(),
        );
        let response = self
            .http
            .post(self.url(GWT_APP_PATH))
            .headers(self.gwt_headers()?)
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(ClientError::HttpStatus {
                operation: "gwt logout",
                status,
                body,
            });
        }

        self.session.clear();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Exports
    // ------------------------------------------------------------------

    /// Requests a CSV export for the date range (inclusive) and returns
    /// the raw body text.
    ///
    /// Generates a fresh auth token first. The extra `sec-fetch-*`
    /// headers mark the request as a same-origin navigation fetch, which
    /// the export endpoint expects.
    ///
    /// # Errors
    ///
    /// [`ClientError::HttpStatus`] (carrying the body text) on any
    /// non-200 response; token-generation failures propagate unchanged.
    #[instrument(skip(self))]
    pub async fn export(
        &self,
        kind: ExportKind,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<String, ClientError> {
        let token = self.generate_auth_token().await?;

        debug!(kind = %kind, %start, %end, "Requesting export");

        let start = start.format(DATE_FORMAT).to_string();
        let end = end.format(DATE_FORMAT).to_string();
        let response = self
            .http
            .get(self.url(EXPORT_PATH))
            .query(&[
                ("nonce", token.as_str()),
                ("generate", kind.generate_keyword()),
                ("start", start.as_str()),
                ("end", end.as_str()),
            ])
            .header("sec-fetch-dest", "document")
            .header("sec-fetch-mode", "navigate")
            .header("sec-fetch-site", "same-origin")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(ClientError::HttpStatus {
                operation: "export",
                status,
                body,
            });
        }

        Ok(body)
    }

    /// Exports servings and parses them, timestamps in UTC.
    ///
    /// # Errors
    ///
    /// Export failures as in [`Client::export`]; CSV failures as
    /// [`ClientError::Parse`].
    pub async fn export_servings_parsed(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ServingRecord>, ClientError> {
        self.export_servings_parsed_in(start, end, &Utc).await
    }

    /// Exports servings and parses them, timestamps in `tz`.
    ///
    /// # Errors
    ///
    /// Export failures as in [`Client::export`]; CSV failures as
    /// [`ClientError::Parse`].
    pub async fn export_servings_parsed_in<Tz: TimeZone>(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        tz: &Tz,
    ) -> Result<Vec<ServingRecord>, ClientError> {
        let raw = self.export(ExportKind::Servings, start, end).await?;
        Ok(cronometer_parse::parse_servings(raw.as_bytes(), tz)?)
    }

    /// Exports exercises and parses them, timestamps in UTC.
    ///
    /// # Errors
    ///
    /// Export failures as in [`Client::export`]; CSV failures as
    /// [`ClientError::Parse`].
    pub async fn export_exercises_parsed(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ExerciseRecord>, ClientError> {
        self.export_exercises_parsed_in(start, end, &Utc).await
    }

    /// Exports exercises and parses them, timestamps in `tz`.
    ///
    /// # Errors
    ///
    /// Export failures as in [`Client::export`]; CSV failures as
    /// [`ClientError::Parse`].
    pub async fn export_exercises_parsed_in<Tz: TimeZone>(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        tz: &Tz,
    ) -> Result<Vec<ExerciseRecord>, ClientError> {
        let raw = self.export(ExportKind::Exercises, start, end).await?;
        Ok(cronometer_parse::parse_exercises(raw.as_bytes(), tz)?)
    }

    /// Exports biometrics and parses them, timestamps in UTC.
    ///
    /// # Errors
    ///
    /// Export failures as in [`Client::export`]; CSV failures as
    /// [`ClientError::Parse`].
    pub async fn export_biometrics_parsed(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<BiometricRecord>, ClientError> {
        self.export_biometrics_parsed_in(start, end, &Utc).await
    }

    /// Exports biometrics and parses them, timestamps in `tz`.
    ///
    /// # Errors
    ///
    /// Export failures as in [`Client::export`]; CSV failures as
    /// [`ClientError::Parse`].
    pub async fn export_biometrics_parsed_in<Tz: TimeZone>(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        tz: &Tz,
    ) -> Result<Vec<BiometricRecord>, ClientError> {
        let raw = self.export(ExportKind::Biometrics, start, end).await?;
        Ok(cronometer_parse::parse_biometrics(raw.as_bytes(), tz)?)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_use_protocol_constants() {
        let client = Client::new(ClientOptions::default()).unwrap();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert_eq!(client.gwt_content_type, gwt::GWT_CONTENT_TYPE);
        assert_eq!(client.gwt_module_base, gwt::GWT_MODULE_BASE);
        assert_eq!(client.gwt_permutation, gwt::GWT_PERMUTATION);
        assert_eq!(client.gwt_header, gwt::GWT_HEADER);
        assert!(!client.session.is_authenticated());
    }

    #[test]
    fn test_options_override_defaults() {
        let client = Client::new(ClientOptions {
            base_url: Some("http://127.0.0.1:9000".to_string()),
            gwt_permutation: Some("FFFF".to_string()),
            ..ClientOptions::default()
        })
        .unwrap();

        assert_eq!(client.base_url, "http://127.0.0.1:9000");
        assert_eq!(client.gwt_permutation, "FFFF");
        // Untouched options keep their defaults.
        assert_eq!(client.gwt_header, gwt::GWT_HEADER);
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = Client::new(ClientOptions {
            base_url: Some("http://127.0.0.1:9000".to_string()),
            ..ClientOptions::default()
        })
        .unwrap();

        assert_eq!(client.url("/export"), "http://127.0.0.1:9000/export");
    }

    #[test]
    fn test_gwt_headers_include_protocol_values() {
        let client = Client::new(ClientOptions::default()).unwrap();
        let headers = client.gwt_headers().unwrap();

        assert_eq!(
            headers.get(CONTENT_TYPE).unwrap(),
            gwt::GWT_CONTENT_TYPE
        );
        assert_eq!(
            headers.get("x-gwt-module-base").unwrap(),
            gwt::GWT_MODULE_BASE
        );
        assert_eq!(
            headers.get("x-gwt-permutation").unwrap(),
            gwt::GWT_PERMUTATION
        );
    }
}
