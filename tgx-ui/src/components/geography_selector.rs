//! Dependent state and district dropdowns.

use crate::state::AppState;
use dioxus::prelude::*;
use tgx_core::geography::{Geography, DISTRICT_SENTINEL};

/// State dropdown: "All Over India" followed by every state.
/// Changing the state resets the district to its sentinel.
#[component]
pub fn StateSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.selected_state)();
    let options = Geography::embedded().state_options();

    let on_change = move |evt: Event<FormData>| {
        state.selected_state.set(evt.value());
        state.selected_district.set(DISTRICT_SENTINEL.to_string());
    };

    rsx! {
        div {
            class: "form-group",
            label { r#for: "state", "State" }
            select {
                id: "state",
                onchange: on_change,
                for opt in options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == selected,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}

/// District dropdown for the selected state. Only the sentinel is offered
/// for "All Over India" or a state missing from the table.
#[component]
pub fn DistrictSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected_state = (state.selected_state)();
    let selected = (state.selected_district)();
    let options = Geography::embedded().district_options(&selected_state);

    let on_change = move |evt: Event<FormData>| {
        state.selected_district.set(evt.value());
    };

    rsx! {
        div {
            class: "form-group",
            label { r#for: "district", "District" }
            select {
                id: "district",
                disabled: options.len() == 1,
                onchange: on_change,
                for opt in options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == selected,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
