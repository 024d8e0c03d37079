//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the form fields, the submission tracker and the
//! rendered results into one `Copy` struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. It is also the `PlannerView` the submit
//! flow drives.

use crate::js_bridge;
use crate::RESULTS_ID;
use dioxus::prelude::*;
use tgx_core::config::PlannerConfig;
use tgx_core::geography::{DISTRICT_SENTINEL, STATE_SENTINEL};
use tgx_core::query::{FormVariant, Location, TripQuery};
use tgx_core::results::ResultsView;
use tgx_core::submission::{PlannerView, SubmissionTracker, Ticket};

/// Shared application state for the planner page.
#[derive(Clone, Copy)]
pub struct AppState {
    pub config: Signal<PlannerConfig>,
    pub budget: Signal<String>,
    /// Free-text location (place variant)
    pub place: Signal<String>,
    /// Selected state (region variant)
    pub selected_state: Signal<String>,
    /// Selected district (region variant)
    pub selected_district: Signal<String>,
    pub days: Signal<String>,
    pub interests: Signal<String>,
    /// Submission generations and in-flight count
    pub submission: Signal<SubmissionTracker>,
    /// Whether the results section has been revealed
    pub results_visible: Signal<bool>,
    pub results: Signal<ResultsView>,
    /// Generation of the submission whose results are on screen; keys the cards
    pub rendered_generation: Signal<u64>,
    /// Last failure shown above the form
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self::with_config(PlannerConfig::from_build_env())
    }

    pub fn with_config(config: PlannerConfig) -> Self {
        let days = config.default_days.to_string();
        Self {
            config: Signal::new(config),
            budget: Signal::new(String::new()),
            place: Signal::new(String::new()),
            selected_state: Signal::new(STATE_SENTINEL.to_string()),
            selected_district: Signal::new(DISTRICT_SENTINEL.to_string()),
            days: Signal::new(days),
            interests: Signal::new(String::new()),
            submission: Signal::new(SubmissionTracker::default()),
            results_visible: Signal::new(false),
            results: Signal::new(ResultsView::default()),
            rendered_generation: Signal::new(0),
            error_msg: Signal::new(None),
        }
    }

    /// Snapshot the form fields into a request body.
    pub fn current_query(&self) -> TripQuery {
        let location = match self.config.read().form_variant {
            FormVariant::Place => Location::Place {
                place: (self.place)(),
            },
            FormVariant::Region => Location::Region {
                state: (self.selected_state)(),
                district: Some((self.selected_district)()),
            },
        };
        TripQuery::new(
            &self.budget.read(),
            location,
            &self.days.read(),
            &self.interests.read(),
        )
    }

    pub fn is_busy(&self) -> bool {
        self.submission.read().is_busy()
    }
}

impl PlannerView for AppState {
    fn begin_request(&mut self) -> Ticket {
        self.error_msg.set(None);
        self.submission.write().begin()
    }

    fn end_request(&mut self, ticket: Ticket) {
        self.submission.write().finish(ticket);
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        self.submission.read().is_current(ticket)
    }

    fn show_results(&mut self, ticket: Ticket, results: ResultsView) {
        self.rendered_generation.set(ticket.generation());
        self.results.set(results);
        self.results_visible.set(true);
        js_bridge::scroll_into_view(RESULTS_ID);
    }

    fn show_error(&mut self, message: &str) {
        self.error_msg.set(Some(message.to_string()));
        js_bridge::alert(message);
    }
}
