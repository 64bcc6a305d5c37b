//! Session state.

/// Mutable session state owned by a [`Client`](crate::Client).
///
/// The session nonce mirrors the `sesnonce` cookie the server issues at
/// login (the cookie jar remains the transport-level source of truth);
/// the user id comes from the GWT authenticate call and is meaningful
/// only after it succeeds. Only the authentication operations mutate
/// this value — there is no shared or global session state, so one
/// `Client` is exactly one logical session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    nonce: Option<String>,
    user_id: Option<String>,
}

impl Session {
    /// The current session nonce, if logged in.
    pub fn nonce(&self) -> Option<&str> {
        self.nonce.as_deref()
    }

    /// The current user id, if GWT authentication has happened.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Whether a login has stored a session nonce.
    ///
    /// This is bookkeeping only: calls made without a session are not
    /// rejected client-side, they fail server-side instead.
    pub fn is_authenticated(&self) -> bool {
        self.nonce.is_some()
    }

    pub(crate) fn set_nonce(&mut self, nonce: String) {
        self.nonce = Some(nonce);
    }

    pub(crate) fn set_user_id(&mut self, user_id: String) {
        self.user_id = Some(user_id);
    }

    pub(crate) fn nonce_or_empty(&self) -> &str {
        self.nonce.as_deref().unwrap_or("")
    }

    pub(crate) fn user_id_or_empty(&self) -> &str {
        self.user_id.as_deref().unwrap_or("")
    }

    pub(crate) fn clear(&mut self) {
        self.nonce = None;
        self.user_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_is_unauthenticated() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.nonce(), None);
        assert_eq!(session.nonce_or_empty(), "");
    }

    #[test]
    fn test_clear_drops_both_values() {
        let mut session = Session::default();
        session.set_nonce("abc".to_string());
        session.set_user_id("123".to_string());
        assert!(session.is_authenticated());

        session.clear();
        assert_eq!(session.nonce(), None);
        assert_eq!(session.user_id(), None);
    }
}
