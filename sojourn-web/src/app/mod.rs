#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod bootstrap;
pub mod routing;
pub mod state;
pub mod view;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();

    let navigator = use_navigator();
    let route = use_route::<Route>();

    bootstrap::use_bootstrap(&app_state, route.clone());
    routing::use_apply_boot_action(&app_state.boot_action, navigator.clone(), route.clone());

    view::render_app(&app_state, route.as_ref(), navigator)
}

#[cfg(test)]
mod tests {
    use crate::router::Route;
    use sojourn_core::Destination;

    #[test]
    fn destination_routes_partition_into_managed_and_guarded() {
        let destinations = [
            Destination::SignIn,
            Destination::ProfileSetup,
            Destination::TripSetup,
            Destination::TripIntentForm,
            Destination::AnchorSelect,
            Destination::ItineraryBuild,
            Destination::PreTripHub,
            Destination::ResumeLiveTrip,
            Destination::DayOverview,
            Destination::LiveDayBlock,
            Destination::DayReflection,
            Destination::TripComplete,
        ];

        for destination in destinations {
            let route = Route::from_destination(destination);
            let self_managing = route.is_self_managing();
            match destination {
                Destination::SignIn
                | Destination::ProfileSetup
                | Destination::ResumeLiveTrip
                | Destination::DayOverview
                | Destination::LiveDayBlock
                | Destination::DayReflection => assert!(self_managing, "{destination:?}"),
                _ => assert!(!self_managing, "{destination:?}"),
            }
        }
    }
}
