//! GWT RPC protocol constants, payload builders, and response extractors.
//!
//! The values here are found by inspecting requests from the web app and
//! change when the app is updated. They are the library defaults; every
//! one of them can be overridden through
//! [`ClientOptions`](crate::ClientOptions) when the deployed app moves.

use std::sync::LazyLock;

use regex::Regex;

// ============================================================================
// Header Constants
// ============================================================================

/// Content type for GWT RPC requests.
pub const GWT_CONTENT_TYPE: &str = "text/x-gwt-rpc; charset=UTF-8";

/// Value of the `x-gwt-module-base` header, also the first element of
/// every RPC payload.
pub const GWT_MODULE_BASE: &str = "https://cronometer.com/cronometer/";

/// Value of the `x-gwt-permutation` header.
pub const GWT_PERMUTATION: &str = "7B121DC5483BF272B1BC1916DA9FA963";

/// Hash provided at the start of every GWT payload. It changes with app
/// updates and appears to validate the app version the caller expects.
pub const GWT_HEADER: &str = "2D6A926E3729946302DC68073CB0D550";

/// Fully-qualified service name embedded in every RPC payload.
const SERVICE: &str = "com.cronometer.shared.rpc.CronometerService";

// ============================================================================
// Payload Builders
// ============================================================================
//
// The serialized-call format is pipe-delimited and positional; the
// payloads below are byte-for-byte what the web app sends, with the
// module base, version hash, and session values substituted in.

/// Payload for the `authenticate` call. The session nonce travels in the
/// `sesnonce` cookie, not the payload; the trailing `-300` is the web
/// app's UTC offset in minutes.
pub(crate) fn authenticate_payload(module_base: &str, gwt_header: &str) -> String {
    format!(
        "7|0|5|{module_base}|{gwt_header}|{SERVICE}|authenticate|\
         java.lang.Integer/3438268394|1|2|3|4|1|5|5|-300|"
    )
}

/// Payload for the `generateAuthorizationToken` call. Embeds the session
/// nonce and user id; the token is scoped for 3600 seconds.
pub(crate) fn generate_auth_token_payload(
    module_base: &str,
    gwt_header: &str,
    nonce: &str,
    user_id: &str,
) -> String {
    format!(
        "7|0|8|{module_base}|{gwt_header}|{SERVICE}|generateAuthorizationToken|\
         java.lang.String/2004016611|I|com.cronometer.shared.user.AuthScope/2065601159|\
         {nonce}|1|2|3|4|4|5|6|6|7|8|{user_id}|3600|7|2|"
    )
}

/// Payload for the `logout` call. Embeds the session nonce.
pub(crate) fn logout_payload(module_base: &str, gwt_header: &str, nonce: &str) -> String {
    format!(
        "7|0|6|{module_base}|{gwt_header}|{SERVICE}|logout|\
         java.lang.String/2004016611|{nonce}|1|2|3|4|1|5|6|"
    )
}

// ============================================================================
// Response Extractors
// ============================================================================
//
// GWT responses are plain text. The patterns below are the contract with
// the upstream format: when one stops matching, the upstream shape has
// drifted and the caller gets a loud, specific error instead of a wrong
// value.

static USER_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"OK\[(\d*),").expect("static regex"));

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)""#).expect("static regex"));

/// Extracts the user id from an authenticate response
/// (`//OK[<user id>,...`).
pub(crate) fn extract_user_id(body: &str) -> Option<String> {
    USER_ID_RE
        .captures(body)
        .map(|captures| captures[1].to_string())
}

/// Extracts the first double-quoted literal from a token-generation
/// response (`//OK["<token>"]`).
pub(crate) fn extract_token(body: &str) -> Option<String> {
    TOKEN_RE
        .captures(body)
        .map(|captures| captures[1].to_string())
}

// ============================================================================
// Tests
// ============================================================================
