use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use sojourn_core::Trip;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct TripSetupPageProps {
    pub on_create: Callback<Trip>,
    pub on_join: Callback<String>,
    #[prop_or_default]
    pub join_error: Option<AttrValue>,
}

static JOIN_CODE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[A-Z0-9]{6}$").ok());

/// Uppercase and strip whitespace so codes paste cleanly from messages.
#[must_use]
pub fn normalize_join_code(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[must_use]
pub fn is_join_code_valid(code: &str) -> bool {
    JOIN_CODE.as_ref().is_some_and(|re| re.is_match(code))
}

/// Trip entity from the create form. The id and share code are
/// server-assigned; they stay empty until the next hydration fills them in.
#[must_use]
pub fn build_trip(
    name: &str,
    destination: &str,
    purpose: &str,
    start_date: &str,
    end_date: &str,
    party_count: &str,
) -> Trip {
    Trip {
        name: name.trim().to_string(),
        destination: destination.trim().to_string(),
        purpose: purpose.trim().to_string(),
        start_date: parse_date(start_date),
        end_date: parse_date(end_date),
        party_count: party_count.trim().parse().unwrap_or(1),
        ..Trip::default()
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[function_component(TripSetupPage)]
pub fn trip_setup_page(props: &TripSetupPageProps) -> Html {
    let name_ref = use_node_ref();
    let destination_ref = use_node_ref();
    let purpose_ref = use_node_ref();
    let start_ref = use_node_ref();
    let end_ref = use_node_ref();
    let party_ref = use_node_ref();
    let code_ref = use_node_ref();
    let code_invalid = use_state(|| false);

    fn value(node: &NodeRef) -> String {
        node.cast::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    }

    let on_create = {
        let props = props.clone();
        let refs = (
            name_ref.clone(),
            destination_ref.clone(),
            purpose_ref.clone(),
            start_ref.clone(),
            end_ref.clone(),
            party_ref.clone(),
        );
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            props.on_create.emit(build_trip(
                &value(&refs.0),
                &value(&refs.1),
                &value(&refs.2),
                &value(&refs.3),
                &value(&refs.4),
                &value(&refs.5),
            ));
        })
    };

    let on_join = {
        let props = props.clone();
        let code_ref = code_ref.clone();
        let code_invalid = code_invalid.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let code = normalize_join_code(&value(&code_ref));
            if is_join_code_valid(&code) {
                code_invalid.set(false);
                props.on_join.emit(code);
            } else {
                code_invalid.set(true);
            }
        })
    };

    html! {
        <div class="page page-trip-setup" data-testid="trip-setup-screen">
            <h1>{ "Where to next?" }</h1>
            <section class="card">
                <h2>{ "Start a trip" }</h2>
                <form onsubmit={on_create}>
                    <label class="field"><span>{ "Trip name" }</span>
                        <input ref={name_ref} type="text" /></label>
                    <label class="field"><span>{ "Destination city" }</span>
                        <input ref={destination_ref} type="text" /></label>
                    <label class="field"><span>{ "Purpose" }</span>
                        <input ref={purpose_ref} type="text" /></label>
                    <label class="field"><span>{ "Start date" }</span>
                        <input ref={start_ref} type="date" /></label>
                    <label class="field"><span>{ "End date" }</span>
                        <input ref={end_ref} type="date" /></label>
                    <label class="field"><span>{ "Travelers" }</span>
                        <input ref={party_ref} type="number" min="1" value="1" /></label>
                    <button class="btn btn-primary" type="submit">{ "Create trip" }</button>
                </form>
            </section>
            <section class="card">
                <h2>{ "Join with a code" }</h2>
                <form onsubmit={on_join}>
                    <label class="field"><span>{ "Share code" }</span>
                        <input ref={code_ref} type="text" placeholder="QX7A4B" /></label>
                    if *code_invalid {
                        <p class="form-error" role="alert">
                            { "Codes are six letters and digits, like QX7A4B." }
                        </p>
                    }
                    if let Some(error) = &props.join_error {
                        <p class="form-error" role="alert">{ error.clone() }</p>
                    }
                    <button class="btn" type="submit">{ "Join trip" }</button>
                </form>
            </section>
        </div>
    }
}
