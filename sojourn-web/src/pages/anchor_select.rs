use sojourn_core::AnchorSelection;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AnchorSelectPageProps {
    pub trip_id: AttrValue,
    /// Candidate anchors suggested for the destination.
    #[prop_or_default]
    pub suggestions: Vec<String>,
    pub on_save: Callback<AnchorSelection>,
}

/// Toggle one title in the picked set, preserving set semantics.
#[must_use]
pub fn toggle_anchor(selection: &AnchorSelection, title: &str) -> AnchorSelection {
    let mut next = selection.clone();
    let before = next.anchors.len();
    next.anchors.retain(|a| a != title);
    if next.anchors.len() == before {
        next.insert(title);
    }
    next
}

#[function_component(AnchorSelectPage)]
pub fn anchor_select_page(props: &AnchorSelectPageProps) -> Html {
    let selection = use_state(|| AnchorSelection {
        trip_id: props.trip_id.to_string(),
        anchors: vec![],
    });
    let custom_ref = use_node_ref();

    let toggle = |title: String| {
        let selection = selection.clone();
        Callback::from(move |_| selection.set(toggle_anchor(&selection, &title)))
    };

    let on_add_custom = {
        let selection = selection.clone();
        let custom_ref = custom_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(input) = custom_ref.cast::<HtmlInputElement>() {
                let mut next = (*selection).clone();
                next.insert(&input.value());
                selection.set(next);
                input.set_value("");
            }
        })
    };

    let on_save = {
        let props = props.clone();
        let selection = selection.clone();
        Callback::from(move |_| props.on_save.emit((*selection).clone()))
    };

    let none_picked = selection.is_empty();

    html! {
        <div class="page page-anchors" data-testid="anchors-screen">
            <h1>{ "Pick your anchors" }</h1>
            <p class="subtitle">{ "The must-do moments the rest of the plan bends around." }</p>
            <ul class="anchor-list">
                { for props.suggestions.iter().map(|title| {
                    let picked = selection.anchors.iter().any(|a| a == title);
                    html! {
                        <li>
                            <button
                                class={classes!("anchor", picked.then_some("anchor-picked"))}
                                onclick={toggle(title.clone())}
                            >
                                { title.clone() }
                            </button>
                        </li>
                    }
                }) }
                { for selection.anchors.iter()
                    .filter(|a| !props.suggestions.contains(a))
                    .map(|title| html! {
                        <li>
                            <button class="anchor anchor-picked" onclick={toggle(title.clone())}>
                                { title.clone() }
                            </button>
                        </li>
                    }) }
            </ul>
            <form onsubmit={on_add_custom}>
                <label class="field"><span>{ "Add your own" }</span>
                    <input ref={custom_ref} type="text" /></label>
                <button class="btn" type="submit">{ "Add" }</button>
            </form>
            <button class="btn btn-primary" disabled={none_picked} onclick={on_save}>
                { "Lock in anchors" }
            </button>
        </div>
    }
}
