use sojourn_core::Trip;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct TripCompletePageProps {
    #[prop_or_default]
    pub trip: Option<Trip>,
    pub on_logout: Callback<()>,
}

#[function_component(TripCompletePage)]
pub fn trip_complete_page(props: &TripCompletePageProps) -> Html {
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };
    let headline = props.trip.as_ref().map_or_else(
        || String::from("Trip complete"),
        |trip| format!("{}, complete", trip.name),
    );

    html! {
        <div class="page page-complete" data-testid="complete-screen">
            <h1>{ headline }</h1>
            <p class="subtitle">
                { "Every block done, every day reflected on. Well traveled." }
            </p>
            if let Some(trip) = &props.trip {
                <p>{ format!("Safe travels home from {}.", trip.destination) }</p>
            }
            <button class="btn" onclick={on_logout}>{ "Sign out" }</button>
        </div>
    }
}
