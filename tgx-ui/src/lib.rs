//! Shared Dioxus components and browser bridge for the TripGenix planner.
//!
//! This crate provides:
//! - `js_bridge`: fetch, alert and scroll helpers over `web_sys` / `js_sys::eval()`
//! - `api`: the `fetch`-backed recommendation client
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: the planner form, selectors and result cards

pub mod api;
pub mod components;
pub mod js_bridge;
pub mod state;

/// Id of the planner form.
pub const FORM_ID: &str = "tripForm";
/// Id of the section wrapping the form, scrolled to by the category buttons.
pub const PLANNER_ID: &str = "planner";
/// Id of the results section, hidden until the first successful response.
pub const RESULTS_ID: &str = "results";
/// Id of the grid the destination cards render into.
pub const RECOMMENDATIONS_ID: &str = "recommendations-container";
