//! Itinerary days and their expand/collapse state.

use crate::destination::{format_amount, RawDayPlan};

/// One day of a destination's plan.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan {
    pub day: u32,
    pub morning: String,
    pub afternoon: String,
    pub evening: String,
    pub night: Option<String>,
    pub hotel: String,
    pub estimated_cost: Option<f64>,
}

impl DayPlan {
    /// Resolve a raw day. `position` numbers the day when the server
    /// omitted it.
    pub fn normalize(raw: RawDayPlan, position: usize) -> Self {
        let pick = |new: Option<String>, legacy: Option<String>| {
            new.filter(|s| !s.trim().is_empty())
                .or(legacy)
                .unwrap_or_default()
        };
        let day = raw
            .day
            .or(raw.legacy_day)
            .filter(|d| *d >= 0.0)
            .map(|d| d.trunc() as u32)
            .unwrap_or(position as u32 + 1);

        Self {
            day,
            morning: pick(raw.morning, raw.legacy_morning),
            afternoon: pick(raw.afternoon, raw.legacy_afternoon),
            evening: pick(raw.evening, raw.legacy_evening),
            night: raw
                .night
                .or(raw.legacy_night)
                .filter(|s| !s.trim().is_empty()),
            hotel: pick(raw.hotel, raw.legacy_hotel),
            estimated_cost: raw.estimated_cost.or(raw.legacy_estimated_cost),
        }
    }

    /// Header text, e.g. `Day 2: Overview`.
    pub fn title(&self) -> String {
        format!("Day {}: Overview", self.day)
    }

    /// Labelled time slots in display order; night only when present.
    pub fn slots(&self) -> Vec<(&'static str, &str)> {
        let mut slots = vec![
            ("Morning", self.morning.as_str()),
            ("Afternoon", self.afternoon.as_str()),
            ("Evening", self.evening.as_str()),
        ];
        if let Some(night) = &self.night {
            slots.push(("Night", night.as_str()));
        }
        slots
    }

    pub fn cost_label(&self) -> Option<String> {
        self.estimated_cost
            .map(|c| format!("Est. cost: ₹{}", format_amount(c)))
    }
}

/// Which itinerary entries of one card are expanded.
///
/// Entries toggle independently; several may be open at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryState {
    expanded: Vec<bool>,
}

impl ItineraryState {
    /// First entry open, the rest collapsed.
    pub fn new(days: usize) -> Self {
        Self {
            expanded: (0..days).map(|i| i == 0).collect(),
        }
    }

    /// Flip one entry. Out-of-range indexes are ignored.
    pub fn toggle(&mut self, index: usize) {
        if let Some(open) = self.expanded.get_mut(index) {
            *open = !*open;
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.iter().filter(|open| **open).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: f64) -> RawDayPlan {
        RawDayPlan {
            legacy_day: Some(n),
            legacy_morning: Some("Sunrise trek".to_string()),
            legacy_afternoon: Some("Monastery".to_string()),
            legacy_evening: Some("Market".to_string()),
            legacy_hotel: Some("Zostel".to_string()),
            ..RawDayPlan::default()
        }
    }

    #[test]
    fn first_entry_starts_expanded() {
        let state = ItineraryState::new(3);
        assert!(state.is_expanded(0));
        assert!(!state.is_expanded(1));
        assert!(!state.is_expanded(2));
    }

    #[test]
    fn toggles_are_independent() {
        let mut state = ItineraryState::new(3);
        state.toggle(2);
        assert!(state.is_expanded(0), "Opening day 3 must not close day 1");
        assert!(state.is_expanded(2));
        assert_eq!(state.expanded_count(), 2);

        state.toggle(0);
        assert!(!state.is_expanded(0));
        assert!(state.is_expanded(2));
    }

    #[test]
    fn toggle_out_of_range_is_ignored() {
        let mut state = ItineraryState::new(1);
        state.toggle(5);
        assert_eq!(state, ItineraryState::new(1));
        assert!(!state.is_expanded(5));
    }

    #[test]
    fn empty_itinerary_has_nothing_expanded() {
        assert_eq!(ItineraryState::new(0).expanded_count(), 0);
    }

    #[test]
    fn slots_include_night_only_when_present() {
        let plan = DayPlan::normalize(day(1.0), 0);
        assert_eq!(plan.slots().len(), 3);
        assert_eq!(plan.title(), "Day 1: Overview");

        let mut raw = day(2.0);
        raw.night = Some("Stargazing".to_string());
        let plan = DayPlan::normalize(raw, 1);
        assert_eq!(plan.slots().last(), Some(&("Night", "Stargazing")));
    }

    #[test]
    fn cost_label_formats_rupees() {
        let mut raw = day(1.0);
        raw.legacy_estimated_cost = Some(3000.0);
        assert_eq!(
            DayPlan::normalize(raw, 0).cost_label().as_deref(),
            Some("Est. cost: ₹3000")
        );
    }
}
