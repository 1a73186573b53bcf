use sojourn_core::{BootstrapAction, ProgressPointer, Snapshot};
use yew::prelude::*;

use crate::api::ApiConfig;
use crate::auth::AuthSession;

#[derive(Clone)]
pub struct AppState {
    pub auth: UseStateHandle<Option<AuthSession>>,
    pub snapshot: UseStateHandle<Snapshot>,
    pub api_config: UseStateHandle<ApiConfig>,
    pub boot_action: UseStateHandle<Option<BootstrapAction>>,
    pub hydrating: UseStateHandle<bool>,
    /// Next-day pointer carried between a completed evening and its
    /// reflection; persisted only after the day-complete write succeeds.
    pub pending_pointer: UseStateHandle<Option<ProgressPointer>>,
    pub write_error: UseStateHandle<Option<String>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        auth: use_state(crate::auth::auth_state),
        snapshot: use_state(Snapshot::default),
        api_config: use_state(ApiConfig::load_from_static),
        boot_action: use_state(|| None::<BootstrapAction>),
        hydrating: use_state(|| false),
        pending_pointer: use_state(|| None::<ProgressPointer>),
        write_error: use_state(|| None::<String>),
    }
}

impl AppState {
    /// Whether the signed-in session can authenticate server calls.
    #[must_use]
    pub fn authed(&self) -> bool {
        self.auth.as_ref().is_some_and(AuthSession::is_usable)
    }

    /// Token for API calls, empty when signed out.
    #[must_use]
    pub fn token(&self) -> String {
        self.auth
            .as_ref()
            .map_or_else(String::new, |session| session.token.clone())
    }
}
