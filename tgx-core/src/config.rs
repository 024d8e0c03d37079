//! Planner configuration.
//!
//! Defaults are compiled in. The recommendation endpoint and form variant
//! can be overridden at build time through `TGX_RECOMMEND_ENDPOINT` and
//! `TGX_FORM_VARIANT`.

use crate::query::FormVariant;

/// Default recommendation endpoint.
pub const RECOMMEND_ENDPOINT: &str = "/recommend";

/// Per-place detail page prefix; the display name is appended as a path segment.
pub const DETAIL_PAGE_PREFIX: &str = "/place";

/// Map search URL; the display name is appended percent-encoded.
pub const MAP_SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Last image in every fallback chain.
pub const STATIC_PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1469474968028-56623f02e42e?auto=format&fit=crop&w=800&q=80";

/// Value the legacy `Image` field carries when the backend had no picture.
pub const LEGACY_IMAGE_PLACEHOLDER: &str = "placeholder.jpg";

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub recommend_endpoint: String,
    pub detail_page_prefix: String,
    pub map_search_base: String,
    pub static_placeholder_image: String,
    pub legacy_image_placeholder: String,
    pub form_variant: FormVariant,
    /// Initial value of the days field.
    pub default_days: u32,
    pub submit_label: String,
    pub busy_label: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            recommend_endpoint: RECOMMEND_ENDPOINT.to_string(),
            detail_page_prefix: DETAIL_PAGE_PREFIX.to_string(),
            map_search_base: MAP_SEARCH_BASE.to_string(),
            static_placeholder_image: STATIC_PLACEHOLDER_IMAGE.to_string(),
            legacy_image_placeholder: LEGACY_IMAGE_PLACEHOLDER.to_string(),
            form_variant: FormVariant::Region,
            default_days: 3,
            submit_label: "Generate My Trip".to_string(),
            busy_label: "Planning your trip...".to_string(),
        }
    }
}

impl PlannerConfig {
    /// Defaults with the build-time overrides applied.
    pub fn from_build_env() -> Self {
        Self::with_overrides(
            option_env!("TGX_RECOMMEND_ENDPOINT"),
            option_env!("TGX_FORM_VARIANT"),
        )
    }

    fn with_overrides(endpoint: Option<&str>, variant: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            config.recommend_endpoint = endpoint.to_string();
        }
        if let Some(raw) = variant {
            match raw.parse::<FormVariant>() {
                Ok(variant) => config.form_variant = variant,
                Err(()) => log::warn!("config: unknown form variant {:?}, using default", raw),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_recommend_endpoint() {
        let config = PlannerConfig::default();
        assert_eq!(config.recommend_endpoint, "/recommend");
        assert_eq!(config.form_variant, FormVariant::Region);
        assert_eq!(config.default_days, 3);
    }

    #[test]
    fn overrides_replace_endpoint_and_variant() {
        let config = PlannerConfig::with_overrides(Some("https://api.example.com/recommend"), Some("place"));
        assert_eq!(config.recommend_endpoint, "https://api.example.com/recommend");
        assert_eq!(config.form_variant, FormVariant::Place);
    }

    #[test]
    fn blank_or_unknown_overrides_keep_defaults() {
        let config = PlannerConfig::with_overrides(Some("   "), Some("sideways"));
        assert_eq!(config, PlannerConfig::default());
    }
}
