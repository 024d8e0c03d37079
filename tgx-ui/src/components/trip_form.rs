//! The trip planner form.

use crate::api::FetchClient;
use crate::components::{DistrictSelector, ErrorDisplay, StateSelector};
use crate::state::AppState;
use crate::{FORM_ID, PLANNER_ID};
use dioxus::prelude::*;
use tgx_core::query::FormVariant;
use tgx_core::submission::submit_trip;

const BUDGETS: [(&str, &str); 4] = [
    ("", "Any Budget"),
    ("Low", "Low (Backpacker)"),
    ("Medium", "Medium (Comfort)"),
    ("High", "High (Luxury)"),
];

/// Budget, location, days and interests, plus the submit control.
///
/// Submitting never navigates; the query is posted in a spawned task and
/// the results section is filled in when it answers.
#[component]
pub fn TripForm() -> Element {
    let mut state = use_context::<AppState>();
    let config = state.config.read().clone();
    let busy = state.is_busy();
    let budget = (state.budget)();
    let place = (state.place)();
    let days = (state.days)();
    let interests = (state.interests)();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let query = state.current_query();
        let config = (state.config)();
        spawn(async move {
            let client = FetchClient::new(&config.recommend_endpoint);
            submit_trip(&client, state, query, &config).await;
        });
    };

    let location_fields = match config.form_variant {
        FormVariant::Place => rsx! {
            div {
                class: "form-group",
                label { r#for: "place", "Where to?" }
                input {
                    id: "place",
                    r#type: "text",
                    placeholder: "e.g. Kerala, Goa, Himalayas",
                    value: "{place}",
                    oninput: move |evt: Event<FormData>| state.place.set(evt.value()),
                }
            }
        },
        FormVariant::Region => rsx! {
            StateSelector {}
            DistrictSelector {}
        },
    };

    rsx! {
        section {
            id: PLANNER_ID,
            class: "planner-section",
            h2 { class: "section-title", "Plan Your Trip" }
            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            }
            form {
                id: FORM_ID,
                class: "planner-form",
                onsubmit: on_submit,
                div {
                    class: "form-group",
                    label { r#for: "budget", "Budget" }
                    select {
                        id: "budget",
                        onchange: move |evt: Event<FormData>| state.budget.set(evt.value()),
                        for (value, label) in BUDGETS {
                            option {
                                key: "{value}",
                                value: "{value}",
                                selected: value == budget,
                                "{label}"
                            }
                        }
                    }
                }
                {location_fields}
                div {
                    class: "form-group",
                    label { r#for: "days", "Days" }
                    input {
                        id: "days",
                        r#type: "number",
                        min: "1",
                        max: "30",
                        value: "{days}",
                        oninput: move |evt: Event<FormData>| state.days.set(evt.value()),
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "interests", "Interests" }
                    input {
                        id: "interests",
                        r#type: "text",
                        placeholder: "e.g. Beach, Heritage, Adventure",
                        value: "{interests}",
                        oninput: move |evt: Event<FormData>| state.interests.set(evt.value()),
                    }
                }
                button {
                    r#type: "submit",
                    class: "submit-btn",
                    disabled: busy,
                    if busy {
                        "{config.busy_label} "
                        i { class: "fas fa-spinner fa-spin" }
                    } else {
                        "{config.submit_label}"
                    }
                }
            }
        }
    }
}
