mod handlers;

pub use handlers::AppHandlers;

use sojourn_core::{BootstrapAction, ProgressPointer, Snapshot};
use yew::prelude::*;
use yew_router::prelude::Navigator;

use crate::app::state::AppState;
use crate::pages;
use crate::router::Route;

/// Generic anchor candidates offered before the user adds their own.
/// Destination-specific suggestions are a server concern the client does not
/// model; these seed the list so the screen is never empty.
fn anchor_suggestions() -> Vec<String> {
    [
        "Old town on foot",
        "The one museum everyone mentions",
        "A market morning",
        "Sunset viewpoint",
        "A long dinner, no reservations rushed",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

pub fn render_app(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    let handlers = AppHandlers::new(state, navigator);
    let snapshot = (*state.snapshot).clone();
    let main_view = render_main(state, &handlers, route, &snapshot);

    let resume_banner = if let Some(BootstrapAction::ShowResume(_)) = state.boot_action.as_ref() {
        let on_resume = {
            let resume = handlers.resume.clone();
            Callback::from(move |_| resume.emit(()))
        };
        html! {
            <div class="resume-banner" role="region" aria-label="Trip in progress">
                <span>{ "You have a trip in progress." }</span>
                <button class="btn btn-primary" onclick={on_resume}>{ "Jump back in" }</button>
            </div>
        }
    } else {
        Html::default()
    };

    let header = if state.authed() {
        let on_logout = {
            let logout = handlers.logout.clone();
            Callback::from(move |_| logout.emit(()))
        };
        html! {
            <header class="app-header">
                <span class="brand">{ "Sojourn" }</span>
                <button class="link-subtle" onclick={on_logout}>{ "Sign out" }</button>
            </header>
        }
    } else {
        Html::default()
    };

    html! {
        <>
            { header }
            <main id="main" role="main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                <div id="status-live" class="sr-only" aria-live="polite"></div>
                { resume_banner }
                if *state.hydrating {
                    <p class="pending" role="status">{ "Loading your trip…" }</p>
                }
                { main_view }
            </main>
        </>
    }
}

fn current_pointer(snapshot: &Snapshot) -> ProgressPointer {
    snapshot.pointer.unwrap_or_default()
}

fn render_main(
    state: &AppState,
    handlers: &AppHandlers,
    route: Option<&Route>,
    snapshot: &Snapshot,
) -> Html {
    let write_error = state
        .write_error
        .as_ref()
        .map(|message| AttrValue::from(message.clone()));

    match route {
        None | Some(Route::Home) => html! {
            <div class="page page-home" data-testid="home-screen">
                <p class="pending" role="status">{ "Finding your place…" }</p>
            </div>
        },
        Some(Route::SignIn) => html! {
            <pages::sign_in::SignInPage
                provider_login_url={AttrValue::from(state.api_config.provider_login_url.clone())}
                on_signed_in={handlers.signed_in.clone()}
            />
        },
        Some(Route::ProfileSetup) => html! {
            <pages::profile_setup::ProfileSetupPage
                profile={snapshot.profile.clone()}
                on_save={handlers.profile_saved.clone()}
            />
        },
        Some(Route::TripSetup) => html! {
            <pages::trip_setup::TripSetupPage
                on_create={handlers.trip_created.clone()}
                on_join={handlers.join_requested.clone()}
                join_error={write_error}
            />
        },
        Some(Route::TripIntent) => html! {
            <pages::trip_intent::TripIntentPage
                trip_id={AttrValue::from(trip_id(snapshot))}
                on_save={handlers.intent_saved.clone()}
            />
        },
        Some(Route::AnchorSelect) => html! {
            <pages::anchor_select::AnchorSelectPage
                trip_id={AttrValue::from(trip_id(snapshot))}
                suggestions={anchor_suggestions()}
                on_save={handlers.anchors_saved.clone()}
            />
        },
        Some(Route::ItineraryBuild) => html! {
            <pages::itinerary_build::ItineraryBuildPage
                pending={*state.hydrating}
                error={write_error}
                on_build={handlers.build_itinerary.clone()}
            />
        },
        Some(Route::PreTripHub) => match (snapshot.trip.clone(), snapshot.itinerary.clone()) {
            (Some(trip), Some(itinerary)) => html! {
                <pages::pre_trip_hub::PreTripHubPage
                    {trip}
                    {itinerary}
                    on_start={handlers.start_trip.clone()}
                />
            },
            _ => missing_state_view(handlers),
        },
        Some(Route::LiveDay) => {
            let pointer = current_pointer(snapshot);
            let day = snapshot
                .itinerary
                .as_ref()
                .and_then(|i| i.day(pointer.day_index))
                .cloned();
            html! {
                <pages::live_day::LiveDayPage
                    {pointer}
                    {day}
                    on_begin={handlers.begin_block.clone()}
                    on_pick_day={handlers.open_pick_day.clone()}
                />
            }
        }
        Some(Route::LiveBlock) => {
            let pointer = current_pointer(snapshot);
            let block = snapshot
                .itinerary
                .as_ref()
                .and_then(|i| i.day(pointer.day_index))
                .and_then(|day| day.blocks.get(&pointer.block))
                .cloned();
            html! {
                <pages::live_block::LiveBlockPage
                    {pointer}
                    {block}
                    error={write_error}
                    on_complete={handlers.complete_block.clone()}
                />
            }
        }
        Some(Route::Reflection) => html! {
            <pages::reflection::ReflectionPage
                day_index={current_pointer(snapshot).day_index}
                error={write_error}
                on_submit={handlers.reflection_submitted.clone()}
            />
        },
        Some(Route::PickDay) => match snapshot.itinerary.clone() {
            Some(itinerary) => html! {
                <pages::pick_day::PickDayPage
                    {itinerary}
                    current_day={current_pointer(snapshot).day_index}
                    on_pick={handlers.day_picked.clone()}
                />
            },
            None => missing_state_view(handlers),
        },
        Some(Route::TripComplete) => html! {
            <pages::trip_complete::TripCompletePage
                trip={snapshot.trip.clone()}
                on_logout={handlers.logout.clone()}
            />
        },
        Some(Route::NotFound) => html! {
            <pages::not_found::NotFoundPage on_go_home={handlers.go_home.clone()} />
        },
    }
}

fn trip_id(snapshot: &Snapshot) -> String {
    snapshot
        .trip
        .as_ref()
        .map(|t| t.id.clone())
        .unwrap_or_default()
}

/// Shown when a guarded screen is entered without the entities it renders;
/// returning home re-runs the bootstrap pass, which re-routes correctly.
fn missing_state_view(handlers: &AppHandlers) -> Html {
    let go_home = {
        let cb = handlers.go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="page page-missing" data-testid="missing-state-screen">
            <p class="subtitle">{ "We don't have that part of your trip yet." }</p>
            <button class="btn" onclick={go_home}>{ "Take me to the right place" }</button>
        </div>
    }
}
