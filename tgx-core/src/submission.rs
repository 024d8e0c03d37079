//! Trip submission: request tracking and the submit flow.
//!
//! Each submission takes a [`Ticket`] from a [`SubmissionTracker`]. Only the
//! response for the newest ticket is rendered, so a slow early response can
//! no longer overwrite a faster later one. The submit control stays busy
//! while any request is in flight and is restored by a drop guard, which
//! also runs when rendering panics.

use crate::config::PlannerConfig;
use crate::destination::RawDestination;
use crate::error::Result;
use crate::query::TripQuery;
use crate::results::ResultsView;

/// Message shown to the user for any request-path failure.
pub const USER_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Generation number of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Counts submissions and tracks which one is newest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionTracker {
    latest: u64,
    in_flight: u32,
}

impl SubmissionTracker {
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        self.in_flight += 1;
        Ticket(self.latest)
    }

    pub fn finish(&mut self, ticket: Ticket) {
        debug_assert!(ticket.0 <= self.latest);
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    pub fn in_flight(&self) -> u32 {
        self.in_flight
    }

    /// Generation of the newest submission, 0 before the first.
    pub fn latest(&self) -> u64 {
        self.latest
    }
}

/// Sends a query to the recommendation backend.
#[allow(async_fn_in_trait)]
pub trait RecommendClient {
    async fn recommend(&self, query: &TripQuery) -> Result<Vec<RawDestination>>;
}

/// The page surface a submission touches.
///
/// Implementations are cheap handles onto shared state; the flow clones
/// one into its restore guard.
pub trait PlannerView {
    /// Register a submission and put the submit control into its busy state.
    fn begin_request(&mut self) -> Ticket;
    /// Release a submission. Once none remain, restore the submit control.
    fn end_request(&mut self, ticket: Ticket);
    fn is_current(&self, ticket: Ticket) -> bool;
    /// Reveal the results container and replace its contents.
    fn show_results(&mut self, ticket: Ticket, results: ResultsView);
    /// Blocking user notification. Must leave the results untouched.
    fn show_error(&mut self, message: &str);
}

/// How a submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Results were rendered with this many cards.
    Rendered(usize),
    /// A newer submission superseded this one; nothing was shown.
    Stale,
    /// The error notification was shown.
    Failed,
}

struct RequestGuard<V: PlannerView> {
    view: V,
    ticket: Ticket,
}

impl<V: PlannerView> Drop for RequestGuard<V> {
    fn drop(&mut self) {
        self.view.end_request(self.ticket);
    }
}

/// Post `query` and render the answer into `view`.
///
/// Failures are logged and shown through [`PlannerView::show_error`]; a
/// failure of a superseded submission is only logged.
pub async fn submit_trip<C, V>(
    client: &C,
    mut view: V,
    query: TripQuery,
    config: &PlannerConfig,
) -> SubmitOutcome
where
    C: RecommendClient,
    V: PlannerView + Clone,
{
    let ticket = view.begin_request();
    let _guard = RequestGuard {
        view: view.clone(),
        ticket,
    };
    log::info!(
        "submission #{}: {:?} query, budget={:?} days={:?}",
        ticket.generation(),
        query.variant(),
        query.budget,
        query.days
    );

    match client.recommend(&query).await {
        Ok(raw) => {
            if !view.is_current(ticket) {
                log::warn!(
                    "submission #{}: discarding stale response ({} destinations)",
                    ticket.generation(),
                    raw.len()
                );
                return SubmitOutcome::Stale;
            }
            let results = ResultsView::from_raw(raw, config);
            let count = results.card_count();
            log::info!("submission #{}: rendering {} destinations", ticket.generation(), count);
            view.show_results(ticket, results);
            SubmitOutcome::Rendered(count)
        }
        Err(e) => {
            log::error!("submission #{}: {}", ticket.generation(), e);
            if view.is_current(ticket) {
                view.show_error(USER_ERROR_MESSAGE);
                SubmitOutcome::Failed
            } else {
                SubmitOutcome::Stale
            }
        }
    }
}
