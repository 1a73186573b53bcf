//! Identity-provider boundary.
//!
//! The provider itself is an opaque capability: sign-in hands the browser to
//! the provider, which redirects back with a URL fragment carrying the user
//! id and token. Only the resulting session is modeled here, persisted under
//! its own key outside the snapshot store.

use serde::{Deserialize, Serialize};

const SESSION_KEY: &str = "sojourn.auth.session";

/// Authenticated identity as handed back by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user_id: String,
    pub token: String,
}

impl AuthSession {
    /// True when both parts are present; a session missing either is unusable.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.user_id.trim().is_empty() && !self.token.trim().is_empty()
    }
}

/// Parse the provider's redirect fragment, e.g. `#user=u1&token=abc`.
///
/// Unknown pairs are ignored; a fragment missing either required pair yields
/// `None` rather than a partial session.
#[must_use]
pub fn session_from_fragment(fragment: &str) -> Option<AuthSession> {
    let fragment = fragment.trim_start_matches('#');
    let mut user_id = None;
    let mut token = None;
    for pair in fragment.split('&') {
        match pair.split_once('=') {
            Some(("user", value)) if !value.is_empty() => user_id = Some(value.to_string()),
            Some(("token", value)) if !value.is_empty() => token = Some(value.to_string()),
            _ => {}
        }
    }
    let session = AuthSession {
        user_id: user_id?,
        token: token?,
    };
    session.is_usable().then_some(session)
}

/// Current session, if one was stored and still parses.
#[must_use]
pub fn auth_state() -> Option<AuthSession> {
    let raw = crate::dom::local_storage()
        .ok()
        .and_then(|storage| storage.get_item(SESSION_KEY).ok().flatten())?;
    let session: AuthSession = serde_json::from_str(&raw).ok()?;
    session.is_usable().then_some(session)
}

/// Persist a session so later visits skip the provider round-trip.
pub fn store_session(session: &AuthSession) {
    if let Ok(storage) = crate::dom::local_storage()
        && let Ok(raw) = serde_json::to_string(session)
    {
        let _ = storage.set_item(SESSION_KEY, &raw);
    }
}

/// Drop the stored session (logout, or a token the server rejected).
pub fn clear_session() {
    if let Ok(storage) = crate::dom::local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
