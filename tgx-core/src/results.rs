//! What the results container shows after a response.

use crate::config::PlannerConfig;
use crate::destination::{Destination, RawDestination};
use crate::error::Result;

/// Message shown when the server returns no destinations.
pub const NO_MATCHES_MESSAGE: &str = "No matching destinations found. Try broadening your criteria.";

/// The full contents of the results grid for one response.
///
/// Each response replaces the previous view entirely.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultsView {
    /// A single placeholder spanning the grid, no cards.
    #[default]
    NoMatches,
    /// One card per destination, in response order.
    Cards(Vec<Destination>),
}

impl ResultsView {
    pub fn from_raw(raw: Vec<RawDestination>, config: &PlannerConfig) -> Self {
        if raw.is_empty() {
            return Self::NoMatches;
        }
        Self::Cards(
            raw.into_iter()
                .enumerate()
                .map(|(i, r)| Destination::normalize(r, i, config))
                .collect(),
        )
    }

    pub fn card_count(&self) -> usize {
        match self {
            Self::NoMatches => 0,
            Self::Cards(cards) => cards.len(),
        }
    }
}

/// Parse a response body into raw destinations.
///
/// Anything other than a JSON array of objects is a malformed response.
pub fn parse_recommendations(body: &str) -> Result<Vec<RawDestination>> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;

    #[test]
    fn empty_array_renders_placeholder_only() {
        let raw = parse_recommendations("[]").unwrap();
        let view = ResultsView::from_raw(raw, &PlannerConfig::default());
        assert_eq!(view, ResultsView::NoMatches);
        assert_eq!(view.card_count(), 0);
    }

    #[test]
    fn cards_keep_response_order() {
        let body = r#"[{"name": "Ooty"}, {"Place": "Hampi"}, {"name": "Gokarna"}]"#;
        let view = ResultsView::from_raw(parse_recommendations(body).unwrap(), &PlannerConfig::default());
        let ResultsView::Cards(cards) = view else {
            panic!("Expected cards");
        };
        let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ooty", "Hampi", "Gokarna"]);
    }

    #[test]
    fn generated_images_vary_by_position() {
        let body = r#"[{"name": "Goa North"}, {"name": "Goa South"}]"#;
        let view = ResultsView::from_raw(parse_recommendations(body).unwrap(), &PlannerConfig::default());
        let ResultsView::Cards(cards) = view else {
            panic!("Expected cards");
        };
        assert!(cards[0].images.first().ends_with("sig=0"));
        assert!(cards[1].images.first().ends_with("sig=1"));
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = parse_recommendations("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, PlannerError::MalformedResponse(_)));
    }

    #[test]
    fn object_instead_of_array_is_malformed() {
        let err = parse_recommendations(r#"{"error": "boom"}"#).unwrap_err();
        assert!(matches!(err, PlannerError::MalformedResponse(_)));
    }
}
