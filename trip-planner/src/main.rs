//! TripGenix Trip Planner
//!
//! Collects trip preferences (budget, location, days, interests), posts
//! them to the recommendation endpoint and renders the returned
//! destinations as cards with itineraries, ratings and map links.
//!
//! Data flow:
//! 1. The state/district table is compiled into `tgx-core` and parsed on
//!    first render of the location selectors.
//! 2. Submitting the form snapshots the fields into a `TripQuery` and
//!    spawns `submit_trip` with a `fetch`-backed client.
//! 3. The newest response replaces the results grid; older ones are dropped.

use dioxus::prelude::*;
use tgx_core::geography::Geography;
use tgx_ui::components::{InterestCategories, ResultsSection, TripForm};
use tgx_ui::state::AppState;

/// Element the app mounts into.
const ROOT_ID: &str = "trip-planner-root";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // Parse the geography table once, before the selectors ask for it
    use_hook(|| {
        let geo = Geography::embedded();
        log::info!(
            "trip-planner: {} states available, form variant {:?}",
            geo.state_count(),
            state.config.read().form_variant
        );
    });

    rsx! {
        div {
            class: "app",
            style: "font-family: 'Poppins', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            header {
                class: "hero",
                h1 { "TripGenix" }
                p { "Tell us your budget, where and how long. We'll plan the rest." }
            }

            InterestCategories {}
            TripForm {}
            ResultsSection {}

            footer {
                class: "site-footer",
                style: "margin-top: 2rem; padding: 1rem; text-align: center; font-size: 12px; color: #64748b;",
                "Recommendations are suggestions; check local conditions before you travel."
            }
        }
    }
}
