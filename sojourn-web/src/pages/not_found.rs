use yew::prelude::*;

/// Shown when routing fails to match a known view.
#[derive(Properties, Clone, PartialEq)]
pub struct NotFoundPageProps {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFoundPage)]
pub fn not_found_page(props: &NotFoundPageProps) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="page page-not-found" data-testid="not-found-screen">
            <h1>{ "Off the map" }</h1>
            <p class="subtitle">{ "That page isn't on the itinerary." }</p>
            <button class="btn" onclick={go_home}>{ "Back to your trip" }</button>
        </div>
    }
}
