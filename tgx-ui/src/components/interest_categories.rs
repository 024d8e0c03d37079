//! Category quick-pick buttons above the planner.

use crate::js_bridge;
use crate::state::AppState;
use crate::PLANNER_ID;
use dioxus::prelude::*;
use tgx_core::query::{interest_for_category, INTEREST_CATEGORIES};

fn icon_for(category: &str) -> &'static str {
    match category {
        "Beach" => "fas fa-umbrella-beach",
        "Mountains" => "fas fa-mountain",
        "Heritage" => "fas fa-landmark",
        "Nature" => "fas fa-leaf",
        "Adventure" => "fas fa-hiking",
        "Spiritual" => "fas fa-om",
        _ => "fas fa-globe-asia",
    }
}

/// Clicking a category fills the interests field and scrolls to the form.
#[component]
pub fn InterestCategories() -> Element {
    let state = use_context::<AppState>();

    rsx! {
        div {
            class: "category-list",
            for category in INTEREST_CATEGORIES {
                button {
                    key: "{category}",
                    r#type: "button",
                    class: "category-btn",
                    onclick: move |_| {
                        let mut interests = state.interests;
                        interests.set(interest_for_category(category).to_string());
                        js_bridge::scroll_into_view(PLANNER_ID);
                    },
                    i { class: icon_for(category) }
                    " {category}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_an_icon() {
        for category in INTEREST_CATEGORIES.iter().filter(|c| **c != "All") {
            assert_ne!(icon_for(category), "fas fa-globe-asia", "{} should have its own icon", category);
        }
        assert_eq!(icon_for("All"), "fas fa-globe-asia");
    }
}
