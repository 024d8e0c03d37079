//! Reusable Dioxus RSX components for the planner page.

mod destination_card;
mod error_display;
mod geography_selector;
mod interest_categories;
mod itinerary;
mod results_section;
mod star_rating;
mod trip_form;

pub use destination_card::DestinationCard;
pub use error_display::ErrorDisplay;
pub use geography_selector::{DistrictSelector, StateSelector};
pub use interest_categories::InterestCategories;
pub use itinerary::Itinerary;
pub use results_section::ResultsSection;
pub use star_rating::StarRatingView;
pub use trip_form::TripForm;
