//! Core types for the TripGenix trip planner.
//!
//! This crate has no UI dependency and is tested natively. It provides:
//! - `geography`: the embedded state/district table behind the location selectors
//! - `query`: the `TripQuery` request body and its two form variants
//! - `destination` / `itinerary`: both response shapes, normalized into one record
//! - `rating`: full/half star markers
//! - `results`: the contents of the results grid for one response
//! - `submission`: request generations and the submit flow
//!
//! # Usage
//!
//! ```rust
//! use tgx_core::config::PlannerConfig;
//! use tgx_core::results::{parse_recommendations, ResultsView};
//!
//! let raw = parse_recommendations(r#"[{"Place": "Hampi", "Tags": "Heritage, Ruins"}]"#).unwrap();
//! let view = ResultsView::from_raw(raw, &PlannerConfig::default());
//! assert_eq!(view.card_count(), 1);
//! ```

pub mod config;
pub mod destination;
pub mod error;
pub mod geography;
pub mod itinerary;
pub mod query;
pub mod rating;
pub mod results;
pub mod submission;

pub use error::{PlannerError, Result};
