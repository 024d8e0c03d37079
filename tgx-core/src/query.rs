//! The request body posted to the recommendation endpoint.

use crate::error::Result;
use serde::Serialize;
use std::str::FromStr;

/// Which location controls the planner form shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormVariant {
    /// A single free-text `place` field.
    Place,
    /// Dependent `state` / `district` selectors.
    Region,
}

impl FromStr for FormVariant {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "place" => Ok(Self::Place),
            "region" | "state" => Ok(Self::Region),
            _ => Err(()),
        }
    }
}

/// Location part of a query. Serialized flat into the body, so the
/// variant decides which keys appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Location {
    Place {
        place: String,
    },
    Region {
        state: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        district: Option<String>,
    },
}

/// Trip criteria taken verbatim from the form controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripQuery {
    pub budget: String,
    #[serde(flatten)]
    pub location: Location,
    pub days: String,
    pub interests: String,
}

impl TripQuery {
    pub fn new(budget: &str, location: Location, days: &str, interests: &str) -> Self {
        Self {
            budget: budget.to_string(),
            location,
            days: days.to_string(),
            interests: interests.to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn variant(&self) -> FormVariant {
        match self.location {
            Location::Place { .. } => FormVariant::Place,
            Location::Region { .. } => FormVariant::Region,
        }
    }
}

/// Quick-pick categories offered above the planner form.
pub const INTEREST_CATEGORIES: [&str; 7] = [
    "All",
    "Beach",
    "Mountains",
    "Heritage",
    "Nature",
    "Adventure",
    "Spiritual",
];

/// Interest text a category button writes into the form.
pub fn interest_for_category(category: &str) -> &str {
    if category == "All" {
        "Travel"
    } else {
        category
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn place_variant_serializes_place_key_only() {
        let query = TripQuery::new(
            "Low",
            Location::Place {
                place: "Goa".to_string(),
            },
            "3",
            "Beach",
        );
        let body: serde_json::Value = serde_json::from_str(&query.to_json().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"budget": "Low", "place": "Goa", "days": "3", "interests": "Beach"})
        );
        assert_eq!(query.variant(), FormVariant::Place);
    }

    #[test]
    fn region_variant_serializes_state_and_district() {
        let query = TripQuery::new(
            "High",
            Location::Region {
                state: "Kerala".to_string(),
                district: Some("All Districts".to_string()),
            },
            "5",
            "Nature, Backwaters",
        );
        let body: serde_json::Value = serde_json::from_str(&query.to_json().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "budget": "High",
                "state": "Kerala",
                "district": "All Districts",
                "days": "5",
                "interests": "Nature, Backwaters"
            })
        );
    }

    #[test]
    fn region_without_district_omits_key() {
        let query = TripQuery::new(
            "",
            Location::Region {
                state: "All".to_string(),
                district: None,
            },
            "",
            "",
        );
        let body: serde_json::Value = serde_json::from_str(&query.to_json().unwrap()).unwrap();
        assert!(body.get("district").is_none());
        assert_eq!(body["state"], "All");
    }

    #[test]
    fn all_category_maps_to_travel() {
        assert_eq!(interest_for_category("All"), "Travel");
        assert_eq!(interest_for_category("Heritage"), "Heritage");
    }

    #[test]
    fn form_variant_parses_case_insensitively() {
        assert_eq!("Place".parse::<FormVariant>(), Ok(FormVariant::Place));
        assert_eq!(" region ".parse::<FormVariant>(), Ok(FormVariant::Region));
        assert_eq!("state".parse::<FormVariant>(), Ok(FormVariant::Region));
        assert!("map".parse::<FormVariant>().is_err());
    }
}
