//! Star rating row.

use dioxus::prelude::*;
use tgx_core::rating::StarRating;

#[derive(Props, Clone, PartialEq)]
pub struct StarRatingViewProps {
    pub rating: f64,
}

/// Full stars for each whole point and at most one half star.
#[component]
pub fn StarRatingView(props: StarRatingViewProps) -> Element {
    let stars = StarRating::from_rating(props.rating);
    let value = format!("{:.1}", props.rating);

    rsx! {
        div {
            class: "star-rating",
            style: "color: #f59e0b; margin-top: 1rem;",
            for n in 0..stars.full {
                i { key: "{n}", class: "fas fa-star" }
            }
            if stars.half {
                i { class: "fas fa-star-half-alt" }
            }
            span {
                style: "margin-left: 6px; color: #64748b; font-weight: 600;",
                "{value}"
            }
        }
    }
}
