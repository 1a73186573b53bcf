use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ItineraryBuildPageProps {
    pub pending: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_build: Callback<()>,
}

/// Hands the anchors and intent to the server-side planner and waits.
/// The generation itself is entirely the server's business.
#[function_component(ItineraryBuildPage)]
pub fn itinerary_build_page(props: &ItineraryBuildPageProps) -> Html {
    let on_build = {
        let on_build = props.on_build.clone();
        Callback::from(move |_| on_build.emit(()))
    };

    html! {
        <div class="page page-itinerary-build" data-testid="itinerary-build-screen">
            <h1>{ "Build your itinerary" }</h1>
            <p class="subtitle">
                { "We'll shape your anchors and preferences into a day-by-day plan." }
            </p>
            if props.pending {
                <p class="pending" role="status">{ "Putting your days together…" }</p>
            } else {
                <button class="btn btn-primary" onclick={on_build}>{ "Build it" }</button>
            }
            if let Some(error) = &props.error {
                <p class="form-error" role="alert">{ error.clone() }</p>
            }
        </div>
    }
}
