use sojourn_core::{ItineraryBlock, ProgressPointer};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LiveBlockPageProps {
    pub pointer: ProgressPointer,
    #[prop_or_default]
    pub block: Option<ItineraryBlock>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_complete: Callback<()>,
}

/// Heading like "Day 2 · afternoon".
#[must_use]
pub fn block_heading(pointer: ProgressPointer) -> String {
    format!("Day {} · {}", pointer.day_index, pointer.block.as_str())
}

#[function_component(LiveBlockPage)]
pub fn live_block_page(props: &LiveBlockPageProps) -> Html {
    let on_complete = {
        let on_complete = props.on_complete.clone();
        Callback::from(move |_| on_complete.emit(()))
    };

    html! {
        <div class="page page-live-block" data-testid="live-block-screen">
            <h1>{ block_heading(props.pointer) }</h1>
            if let Some(block) = &props.block {
                <section class="card">
                    <h2>{ block.title.clone() }</h2>
                    if let Some(description) = &block.description {
                        <p>{ description.clone() }</p>
                    }
                    if let Some(location) = &block.location {
                        <p class="location">{ location.clone() }</p>
                    }
                    if block.ticketed {
                        <p class="badge">{ "Tickets needed" }</p>
                    }
                    if block.day_trip {
                        <p class="badge">{ "Day trip" }</p>
                    }
                </section>
            } else {
                <p class="subtitle">{ "Nothing scheduled. Make it yours." }</p>
            }
            if let Some(error) = &props.error {
                <p class="form-error" role="alert">{ error.clone() }</p>
            }
            <button class="btn btn-primary" onclick={on_complete}>{ "Done with this block" }</button>
        </div>
    }
}
