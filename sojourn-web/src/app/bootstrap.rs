//! Session bootstrap coordinator.
//!
//! Runs on every protected-route entry: load the cached snapshot, hydrate
//! from the server when the cache is too thin, merge, and emit one
//! [`BootstrapAction`] for the router. A single in-flight guard drops
//! re-entrant invocations from rapid route changes; there is no queue.

#[cfg(any(target_arch = "wasm32", test))]
use sojourn_core::BootstrapAction;
#[cfg(target_arch = "wasm32")]
use sojourn_core::{Destination, FetchRecovery};
use sojourn_core::{Plan, Snapshot};
#[cfg(any(target_arch = "wasm32", test))]
use yew::prelude::*;

#[cfg(any(target_arch = "wasm32", test))]
use crate::app::state::AppState;
use crate::router::Route;

/// First stage, decided from local state alone.
#[must_use]
pub fn local_plan(route: &Route, authed: bool, snapshot: &Snapshot) -> Plan {
    sojourn_core::plan(route.is_self_managing(), authed, snapshot)
}

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Clone)]
struct BootstrapHandles {
    auth: UseStateHandle<Option<crate::auth::AuthSession>>,
    snapshot: UseStateHandle<Snapshot>,
    api_config: UseStateHandle<crate::api::ApiConfig>,
    boot_action: UseStateHandle<Option<BootstrapAction>>,
    hydrating: UseStateHandle<bool>,
}

#[cfg(any(target_arch = "wasm32", test))]
fn handles_from_state(app_state: &AppState) -> BootstrapHandles {
    BootstrapHandles {
        auth: app_state.auth.clone(),
        snapshot: app_state.snapshot.clone(),
        api_config: app_state.api_config.clone(),
        boot_action: app_state.boot_action.clone(),
        hydrating: app_state.hydrating.clone(),
    }
}

#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)]
async fn run_bootstrap(handles: BootstrapHandles, route: Route) {
    let store = crate::storage::trip_store();
    let session = crate::auth::auth_state();
    let local = store.load();
    handles.auth.set(session.clone());
    handles.snapshot.set(local.clone());

    let authed = session.is_some();
    match local_plan(&route, authed, &local) {
        Plan::Finished(action) => handles.boot_action.set(Some(action)),
        Plan::RefreshNeeded => {
            let Some(session) = session else {
                handles
                    .boot_action
                    .set(Some(BootstrapAction::Navigate(Destination::SignIn)));
                return;
            };
            handles.hydrating.set(true);
            crate::a11y::announce("Loading your trip…");
            let config = (*handles.api_config).clone();
            let action = match crate::api::fetch_snapshot(&config, &session.token).await {
                Ok(payload) => {
                    let mut merged = store.load();
                    merged.apply(payload.into_patch());
                    store.save(&merged.clone().into());
                    handles.snapshot.set(merged.clone());
                    sojourn_core::finish(true, &merged)
                }
                Err(error) => match sojourn_core::recovery_for(&error) {
                    FetchRecovery::UseLocal => {
                        log::warn!("hydration failed, continuing with cached state: {error}");
                        sojourn_core::finish(true, &local)
                    }
                    FetchRecovery::SignIn => {
                        crate::auth::clear_session();
                        handles.auth.set(None);
                        BootstrapAction::Navigate(Destination::SignIn)
                    }
                    FetchRecovery::ClearAndSignIn => {
                        store.clear();
                        crate::auth::clear_session();
                        handles.auth.set(None);
                        handles.snapshot.set(Snapshot::default());
                        BootstrapAction::Navigate(Destination::SignIn)
                    }
                },
            };
            handles.hydrating.set(false);
            crate::a11y::announce("");
            handles.boot_action.set(Some(action));
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState, route: Option<Route>) {
    let handles = handles_from_state(app_state);
    let in_flight = use_mut_ref(|| false);

    use_effect_with(route, move |route| {
        if let Some(route) = route.clone()
            && !*in_flight.borrow()
        {
            *in_flight.borrow_mut() = true;
            let in_flight = in_flight.clone();
            wasm_bindgen_futures::spawn_local(async move {
                run_bootstrap(handles, route).await;
                *in_flight.borrow_mut() = false;
            });
        }
        || {}
    });
}
