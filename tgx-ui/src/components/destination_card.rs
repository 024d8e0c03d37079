//! One recommended destination.

use crate::components::{Itinerary, StarRatingView};
use dioxus::prelude::*;
use tgx_core::destination::Destination;

#[derive(Props, Clone, PartialEq)]
pub struct DestinationCardProps {
    pub destination: Destination,
}

/// Card with image, linked title, tag pills, description, itinerary,
/// rating, review, price and a map link.
///
/// A failed image load advances to the next source in the destination's
/// image chain, which ends with a static placeholder.
#[component]
pub fn DestinationCard(props: DestinationCardProps) -> Element {
    let dest = props.destination;
    let mut image_pos = use_signal(|| 0usize);

    let images = dest.images.clone();
    let src = images
        .get(image_pos())
        .unwrap_or_else(|| images.first())
        .to_string();
    let on_image_error = move |_: ImageEvent| {
        let pos = image_pos();
        match images.next(pos) {
            Some((next, url)) => {
                log::debug!("image {} failed, trying {}", pos, url);
                image_pos.set(next);
            }
            None => log::warn!("image chain exhausted at {}", pos),
        }
    };

    rsx! {
        div {
            class: "destination-card",
            div {
                class: "card-img",
                img {
                    src: "{src}",
                    alt: "{dest.name}",
                    onerror: on_image_error,
                }
            }
            div {
                class: "card-body",
                h3 {
                    class: "card-title",
                    a { href: "{dest.detail_href}", "{dest.name}" }
                }
                div {
                    class: "tag-list",
                    for tag in dest.tags.iter() {
                        span { class: "tag-pill", "{tag}" }
                    }
                }
                p { class: "card-desc", "{dest.description}" }

                Itinerary { days: dest.itinerary.clone() }

                StarRatingView { rating: dest.rating }
                blockquote {
                    class: "card-review",
                    style: "margin: 0.75rem 0 0; font-style: italic; color: #475569;",
                    "“{dest.review}”"
                }

                div {
                    style: "margin-top: 1.5rem; display: flex; justify-content: space-between; align-items: center; border-top: 1px solid #e2e8f0; padding-top: 1rem;",
                    if let Some(price) = dest.price_label() {
                        span {
                            style: "font-weight: 800; color: var(--primary); font-size: 1.1rem;",
                            "{price}"
                        }
                    } else {
                        span {}
                    }
                    a {
                        href: "{dest.map_href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        style: "color: var(--primary); text-decoration: none; font-weight: 700;",
                        i { class: "fas fa-map-marked-alt" }
                        " Maps"
                    }
                }
            }
        }
    }
}
