//! Results section: hidden until the first successful response.

use crate::components::DestinationCard;
use crate::state::AppState;
use crate::{RECOMMENDATIONS_ID, RESULTS_ID};
use dioxus::prelude::*;
use tgx_core::results::{ResultsView, NO_MATCHES_MESSAGE};

/// Rebuilds the grid from scratch on every response: cards are keyed by
/// submission generation, so nothing from a previous response is reused.
#[component]
pub fn ResultsSection() -> Element {
    let state = use_context::<AppState>();
    let visible = (state.results_visible)();
    let generation = (state.rendered_generation)();
    let results = state.results.read().clone();

    let grid = match results {
        ResultsView::NoMatches => rsx! {
            div {
                key: "{generation}-none",
                style: "grid-column: 1/-1; text-align: center; padding: 3rem;",
                p { "{NO_MATCHES_MESSAGE}" }
            }
        },
        ResultsView::Cards(cards) => rsx! {
            for (index, destination) in cards.into_iter().enumerate() {
                DestinationCard { key: "{generation}-{index}", destination }
            }
        },
    };

    rsx! {
        section {
            id: RESULTS_ID,
            class: if visible { "results-section" } else { "results-section hidden" },
            h2 { class: "section-title", "Your Recommendations" }
            div {
                id: RECOMMENDATIONS_ID,
                class: "destinations-grid",
                {grid}
            }
        }
    }
}
