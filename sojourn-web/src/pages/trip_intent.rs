use sojourn_core::TripIntent;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

pub const PRIORITY_OPTIONS: [&str; 6] = [
    "food", "museums", "nightlife", "nature", "shopping", "history",
];
pub const VIBE_OPTIONS: [&str; 5] = ["relaxed", "adventurous", "romantic", "social", "curious"];
pub const MOBILITY_OPTIONS: [&str; 3] = ["walk-everywhere", "mix", "ride-mostly"];
pub const PACE_OPTIONS: [&str; 3] = ["slow", "balanced", "packed"];
pub const BUDGET_OPTIONS: [&str; 3] = ["shoestring", "comfortable", "treat-yourself"];

#[derive(Properties, Clone, PartialEq)]
pub struct TripIntentPageProps {
    pub trip_id: AttrValue,
    pub on_save: Callback<TripIntent>,
}

/// Flip a value in a multi-select list.
#[must_use]
pub fn toggled(current: &[String], value: &str) -> Vec<String> {
    let mut next: Vec<String> = current
        .iter()
        .filter(|v| v.as_str() != value)
        .cloned()
        .collect();
    if next.len() == current.len() {
        next.push(value.to_string());
    }
    next
}

#[function_component(TripIntentPage)]
pub fn trip_intent_page(props: &TripIntentPageProps) -> Html {
    let priorities = use_state(Vec::<String>::new);
    let vibes = use_state(Vec::<String>::new);
    let mobility_ref = use_node_ref();
    let pace_ref = use_node_ref();
    let budget_ref = use_node_ref();

    let checkbox_list = |options: &[&str],
                        selected: &UseStateHandle<Vec<String>>| {
        let selected = selected.clone();
        options
            .iter()
            .map(|option| {
                let option = (*option).to_string();
                let checked = selected.contains(&option);
                let onchange = {
                    let selected = selected.clone();
                    let option = option.clone();
                    Callback::from(move |_| selected.set(toggled(&selected, &option)))
                };
                html! {
                    <label class="choice">
                        <input type="checkbox" {checked} {onchange} />
                        <span>{ option }</span>
                    </label>
                }
            })
            .collect::<Html>()
    };

    let select = |node: &NodeRef, options: &[&str]| {
        html! {
            <select ref={node.clone()}>
                { for options.iter().map(|o| html! { <option value={(*o).to_string()}>{ (*o).to_string() }</option> }) }
            </select>
        }
    };

    let onsubmit = {
        let props = props.clone();
        let priorities = priorities.clone();
        let vibes = vibes.clone();
        let refs = (mobility_ref.clone(), pace_ref.clone(), budget_ref.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let choice = |node: &NodeRef, fallback: &str| {
                node.cast::<HtmlSelectElement>()
                    .map_or_else(|| fallback.to_string(), |select| select.value())
            };
            props.on_save.emit(TripIntent {
                trip_id: props.trip_id.to_string(),
                priorities: (*priorities).clone(),
                vibes: (*vibes).clone(),
                mobility: choice(&refs.0, MOBILITY_OPTIONS[0]),
                pace: choice(&refs.1, PACE_OPTIONS[1]),
                budget: choice(&refs.2, BUDGET_OPTIONS[1]),
            });
        })
    };

    html! {
        <div class="page page-intent" data-testid="intent-screen">
            <h1>{ "What kind of trip is this?" }</h1>
            <form {onsubmit}>
                <fieldset>
                    <legend>{ "Priorities" }</legend>
                    { checkbox_list(&PRIORITY_OPTIONS, &priorities) }
                </fieldset>
                <fieldset>
                    <legend>{ "Vibes" }</legend>
                    { checkbox_list(&VIBE_OPTIONS, &vibes) }
                </fieldset>
                <label class="field"><span>{ "Getting around" }</span>
                    { select(&mobility_ref, &MOBILITY_OPTIONS) }</label>
                <label class="field"><span>{ "Pace" }</span>
                    { select(&pace_ref, &PACE_OPTIONS) }</label>
                <label class="field"><span>{ "Budget" }</span>
                    { select(&budget_ref, &BUDGET_OPTIONS) }</label>
                <button class="btn btn-primary" type="submit">{ "Save preferences" }</button>
            </form>
        </div>
    }
}
