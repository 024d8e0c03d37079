//! Collapsible per-day itinerary.

use dioxus::prelude::*;
use tgx_core::itinerary::{DayPlan, ItineraryState};

#[derive(Props, Clone, PartialEq)]
pub struct ItineraryProps {
    pub days: Vec<DayPlan>,
}

/// One entry per day, first one open. Headers toggle their own entry only.
#[component]
pub fn Itinerary(props: ItineraryProps) -> Element {
    let day_count = props.days.len();
    let mut expanded = use_signal(|| ItineraryState::new(day_count));

    rsx! {
        div {
            class: "itinerary-section",
            h4 {
                i { class: "fas fa-route" }
                " Your Personalized Plan"
            }
            for (index, day) in props.days.iter().enumerate() {
                div {
                    key: "{index}",
                    class: if expanded.read().is_expanded(index) { "day-item active" } else { "day-item" },
                    div {
                        class: "day-header",
                        onclick: move |_| expanded.write().toggle(index),
                        span { {day.title()} }
                        i { class: "fas fa-chevron-down" }
                    }
                    if expanded.read().is_expanded(index) {
                        div {
                            class: "day-body",
                            for (label, text) in day.slots() {
                                p {
                                    strong { "{label}:" }
                                    " {text}"
                                }
                            }
                            if let Some(cost) = day.cost_label() {
                                p { class: "day-cost", "{cost}" }
                            }
                            div {
                                style: "margin-top:10px; padding:10px; background:#f1f5f9; border-radius:8px; font-weight:600; font-size: 0.85rem;",
                                i { class: "fas fa-hotel" }
                                " Stay: {day.hotel}"
                            }
                        }
                    }
                }
            }
        }
    }
}
