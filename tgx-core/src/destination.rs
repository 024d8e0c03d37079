//! Recommendation response shapes and their normalization.
//!
//! The backend has answered in two shapes over time: a legacy one with
//! capitalized keys (`Place`, `Description`, `Price_Day`, ...) and a newer
//! lowercase one (`name`, `about`, `priceDay`, `images`, ...). Both are
//! deserialized into [`RawDestination`] side by side and resolved once in
//! [`Destination::normalize`]: new key, then legacy key, then a default.

use crate::config::PlannerConfig;
use crate::itinerary::DayPlan;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Deserializer};

/// Rating used when the server sends none.
pub const DEFAULT_RATING: f64 = 4.5;

/// Description used when neither shape carries one.
pub const FALLBACK_DESCRIPTION: &str =
    "A handpicked destination that matches your travel style and budget.";

/// Review quote used when the server sends none.
pub const FALLBACK_REVIEW: &str = "An unforgettable experience. Highly recommended!";

/// Display name used when neither shape carries one.
pub const UNNAMED_DESTINATION: &str = "Unnamed Destination";

/// One destination exactly as the server sent it.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawDestination {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "Place", default)]
    pub legacy_place: Option<String>,

    #[serde(default)]
    pub about: Option<String>,
    #[serde(rename = "Description", default)]
    pub legacy_description: Option<String>,

    #[serde(default)]
    pub tags: Option<String>,
    #[serde(rename = "Tags", default)]
    pub legacy_tags: Option<String>,

    #[serde(rename = "priceDay", default, deserialize_with = "lenient_f64")]
    pub price_day: Option<f64>,
    #[serde(rename = "Price_Day", default, deserialize_with = "lenient_f64")]
    pub legacy_price_day: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review: Option<String>,

    #[serde(default)]
    pub map: Option<String>,
    #[serde(rename = "Map_Link", default)]
    pub legacy_map_link: Option<String>,

    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(rename = "Image", default)]
    pub legacy_image: Option<String>,

    #[serde(default)]
    pub itinerary: Option<Vec<RawDayPlan>>,
    #[serde(rename = "Itinerary", default)]
    pub legacy_itinerary: Option<Vec<RawDayPlan>>,
}

/// One itinerary day exactly as the server sent it.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawDayPlan {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub day: Option<f64>,
    #[serde(rename = "Day", default, deserialize_with = "lenient_f64")]
    pub legacy_day: Option<f64>,
    #[serde(default)]
    pub morning: Option<String>,
    #[serde(rename = "Morning", default)]
    pub legacy_morning: Option<String>,
    #[serde(default)]
    pub afternoon: Option<String>,
    #[serde(rename = "Afternoon", default)]
    pub legacy_afternoon: Option<String>,
    #[serde(default)]
    pub evening: Option<String>,
    #[serde(rename = "Evening", default)]
    pub legacy_evening: Option<String>,
    #[serde(default)]
    pub night: Option<String>,
    #[serde(rename = "Night", default)]
    pub legacy_night: Option<String>,
    #[serde(default)]
    pub hotel: Option<String>,
    #[serde(rename = "Hotel", default)]
    pub legacy_hotel: Option<String>,
    #[serde(rename = "estimatedCost", default, deserialize_with = "lenient_f64")]
    pub estimated_cost: Option<f64>,
    #[serde(rename = "EstimatedCost", default, deserialize_with = "lenient_f64")]
    pub legacy_estimated_cost: Option<f64>,
}

/// Accepts a JSON number, a numeric string, or null.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    Ok(
        match Option::<NumberOrText>::deserialize(deserializer)? {
            Some(NumberOrText::Number(n)) => Some(n),
            Some(NumberOrText::Text(s)) => s.trim().parse().ok(),
            None => None,
        }
        .filter(|n: &f64| n.is_finite()),
    )
}

/// First present, non-blank value.
fn prefer(new: Option<String>, legacy: Option<String>) -> Option<String> {
    new.filter(|s| !s.trim().is_empty())
        .or_else(|| legacy.filter(|s| !s.trim().is_empty()))
}

/// Candidate image URLs for a card, tried in order.
///
/// Always ends with the static placeholder, so the `onerror` walk never
/// runs out of sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageChain {
    sources: Vec<String>,
}

impl ImageChain {
    /// `images[0]`, then the legacy `Image` unless it is the placeholder
    /// sentinel, then a generated search image, then the static placeholder.
    pub fn for_destination(
        raw: &RawDestination,
        display_name: &str,
        index: usize,
        config: &PlannerConfig,
    ) -> Self {
        let provided = raw
            .images
            .as_ref()
            .and_then(|images| images.iter().find(|url| !url.trim().is_empty()).cloned());
        let legacy = raw.legacy_image.clone().filter(|url| {
            let url = url.trim();
            !url.is_empty() && url != config.legacy_image_placeholder
        });
        let generated = generated_image_url(display_name, index);

        let mut sources: Vec<String> = Vec::with_capacity(4);
        for url in provided
            .into_iter()
            .chain(legacy)
            .chain(std::iter::once(generated))
            .chain(std::iter::once(config.static_placeholder_image.clone()))
        {
            if !sources.contains(&url) {
                sources.push(url);
            }
        }
        Self { sources }
    }

    pub fn first(&self) -> &str {
        self.sources.first().map(String::as_str).unwrap_or_default()
    }

    /// Source to try after the one at `position` failed to load.
    pub fn next(&self, position: usize) -> Option<(usize, &str)> {
        let next = position + 1;
        self.sources.get(next).map(|url| (next, url.as_str()))
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.sources.get(position).map(String::as_str)
    }
}

/// Search image keyed on the first word of the name; `sig` keeps
/// neighbouring cards from receiving the same picture.
pub fn generated_image_url(display_name: &str, index: usize) -> String {
    let keyword = display_name
        .split_whitespace()
        .next()
        .unwrap_or("india")
        .to_lowercase();
    format!(
        "https://source.unsplash.com/featured/800x600?{},travel&sig={}",
        utf8_percent_encode(&keyword, NON_ALPHANUMERIC),
        index
    )
}

/// A destination with every field resolved, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub price_per_day: Option<f64>,
    pub rating: f64,
    pub review: String,
    pub detail_href: String,
    pub map_href: String,
    pub images: ImageChain,
    pub itinerary: Vec<DayPlan>,
}

impl Destination {
    /// Resolve both response shapes into one record. `index` is the
    /// position in the response, used to vary generated images.
    pub fn normalize(raw: RawDestination, index: usize, config: &PlannerConfig) -> Self {
        let name = prefer(raw.name.clone(), raw.legacy_place.clone())
            .unwrap_or_else(|| UNNAMED_DESTINATION.to_string());
        let images = ImageChain::for_destination(&raw, &name, index, config);
        let encoded_name = utf8_percent_encode(&name, NON_ALPHANUMERIC).to_string();

        let tags = prefer(raw.tags, raw.legacy_tags)
            .map(|tags| split_tags(&tags))
            .unwrap_or_default();

        let map_href = prefer(raw.map, raw.legacy_map_link)
            .unwrap_or_else(|| format!("{}{}", config.map_search_base, encoded_name));

        let raw_itinerary = raw.itinerary.or(raw.legacy_itinerary).unwrap_or_default();
        let itinerary = raw_itinerary
            .into_iter()
            .enumerate()
            .map(|(i, day)| DayPlan::normalize(day, i))
            .collect();

        Self {
            description: prefer(raw.about, raw.legacy_description)
                .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string()),
            tags,
            price_per_day: raw.price_day.or(raw.legacy_price_day),
            rating: raw.rating.unwrap_or(DEFAULT_RATING),
            review: prefer(raw.review, None).unwrap_or_else(|| FALLBACK_REVIEW.to_string()),
            detail_href: format!(
                "{}/{}",
                config.detail_page_prefix.trim_end_matches('/'),
                encoded_name
            ),
            map_href,
            images,
            itinerary,
            name,
        }
    }

    /// e.g. `₹3500/day`; `None` when the server sent no price.
    pub fn price_label(&self) -> Option<String> {
        self.price_per_day.map(|p| format!("₹{}/day", format_amount(p)))
    }
}

/// Whole amounts print without a fractional part.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

/// Split a comma-separated tag string into trimmed, non-empty tags.
pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
