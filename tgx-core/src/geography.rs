//! State and district lookup backing the dependent location selectors.
//!
//! The table is compiled into the binary from `data/geography.csv`
//! (`STATE,DISTRICT`, one row per district) and parsed once on first use.
//! It is never mutated afterwards.

use crate::error::Result;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

/// Embedded `STATE,DISTRICT` table.
const GEOGRAPHY_CSV: &str = include_str!("../data/geography.csv");

/// Option value meaning "any state".
pub const STATE_SENTINEL: &str = "All";
/// Label shown for [`STATE_SENTINEL`].
pub const STATE_SENTINEL_LABEL: &str = "All Over India";
/// Option value (and label) meaning "any district".
pub const DISTRICT_SENTINEL: &str = "All Districts";

static EMBEDDED: OnceLock<Geography> = OnceLock::new();

/// A single entry in a `<select>` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn sentinel(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }

    fn plain(name: &str) -> Self {
        Self::sentinel(name, name)
    }

    /// True for the "no filter" entries.
    pub fn is_sentinel(&self) -> bool {
        self.value == STATE_SENTINEL || self.value == DISTRICT_SENTINEL
    }
}

/// Mapping from state name to its districts, both kept in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Geography {
    states: BTreeMap<String, BTreeSet<String>>,
}

impl Geography {
    /// Parse a `STATE,DISTRICT` CSV (with headers).
    ///
    /// Blank rows are skipped. A state row with an empty district still
    /// registers the state.
    pub fn from_csv(csv_data: &str) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut states: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for result in rdr.records() {
            let r = result?;
            let state = r.get(0).unwrap_or("").trim();
            if state.is_empty() {
                continue;
            }
            let districts = states.entry(state.to_string()).or_default();
            let district = r.get(1).unwrap_or("").trim();
            if !district.is_empty() {
                districts.insert(district.to_string());
            }
        }
        Ok(Self { states })
    }

    /// The process-wide table compiled into the binary.
    ///
    /// A parse failure is logged and yields an empty table, so the
    /// selectors degrade to their sentinels instead of breaking the page.
    pub fn embedded() -> &'static Geography {
        EMBEDDED.get_or_init(|| match Geography::from_csv(GEOGRAPHY_CSV) {
            Ok(geo) => {
                log::info!(
                    "geography: loaded {} states, {} districts",
                    geo.state_count(),
                    geo.states.values().map(BTreeSet::len).sum::<usize>()
                );
                geo
            }
            Err(e) => {
                log::error!("geography: {}", e);
                Geography::default()
            }
        })
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// State names in alphabetical order.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    /// Districts of `state` in alphabetical order, `None` if the state is unknown.
    pub fn districts(&self, state: &str) -> Option<impl Iterator<Item = &str>> {
        self.states
            .get(state)
            .map(|districts| districts.iter().map(String::as_str))
    }

    /// Options for the state selector: the sentinel, then every state.
    pub fn state_options(&self) -> Vec<SelectOption> {
        std::iter::once(SelectOption::sentinel(STATE_SENTINEL, STATE_SENTINEL_LABEL))
            .chain(self.states().map(SelectOption::plain))
            .collect()
    }

    /// Options for the district selector given the selected state.
    ///
    /// The sentinel state, or a state not in the table, yields only the
    /// district sentinel.
    pub fn district_options(&self, state: &str) -> Vec<SelectOption> {
        let sentinel = SelectOption::sentinel(DISTRICT_SENTINEL, DISTRICT_SENTINEL);
        match self.districts(state) {
            Some(districts) => std::iter::once(sentinel)
                .chain(districts.map(SelectOption::plain))
                .collect(),
            None => vec![sentinel],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "STATE,DISTRICT\n\
        Kerala,Wayanad\n\
        Goa,South Goa\n\
        Kerala,Alappuzha\n\
        Goa,North Goa\n\
        Kerala,Idukki\n";

    fn values(options: &[SelectOption]) -> Vec<&str> {
        options.iter().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn state_options_start_with_sentinel_then_sorted_states() {
        let geo = Geography::from_csv(SAMPLE).unwrap();
        let options = geo.state_options();
        assert_eq!(values(&options), vec!["All", "Goa", "Kerala"]);
        assert_eq!(options[0].label, "All Over India");
        assert!(options[0].is_sentinel());
    }

    #[test]
    fn district_options_are_sorted_after_sentinel() {
        let geo = Geography::from_csv(SAMPLE).unwrap();
        assert_eq!(
            values(&geo.district_options("Kerala")),
            vec!["All Districts", "Alappuzha", "Idukki", "Wayanad"]
        );
    }

    #[test]
    fn sentinel_state_yields_only_district_sentinel() {
        let geo = Geography::from_csv(SAMPLE).unwrap();
        assert_eq!(values(&geo.district_options(STATE_SENTINEL)), vec!["All Districts"]);
    }

    #[test]
    fn unknown_state_degrades_to_sentinel() {
        let geo = Geography::from_csv(SAMPLE).unwrap();
        assert_eq!(values(&geo.district_options("Atlantis")), vec!["All Districts"]);
        assert!(geo.districts("Atlantis").is_none());
    }

    #[test]
    fn duplicate_rows_collapse() {
        let geo = Geography::from_csv("STATE,DISTRICT\nGoa,North Goa\nGoa,North Goa\n").unwrap();
        assert_eq!(geo.district_options("Goa").len(), 2);
    }

    #[test]
    fn blank_and_padded_rows_are_tolerated() {
        let geo = Geography::from_csv("STATE,DISTRICT\n  Goa , North Goa \n,\nSikkim\n").unwrap();
        assert_eq!(values(&geo.state_options()), vec!["All", "Goa", "Sikkim"]);
        assert_eq!(values(&geo.district_options("Goa")), vec!["All Districts", "North Goa"]);
        assert_eq!(values(&geo.district_options("Sikkim")), vec!["All Districts"]);
    }

    #[test]
    fn every_embedded_state_lists_exactly_its_districts_sorted() {
        let geo = Geography::embedded();
        assert!(geo.state_count() > 20, "Embedded table should cover India");
        for state in geo.states() {
            let options = geo.district_options(state);
            assert_eq!(options[0].value, DISTRICT_SENTINEL);
            let names: Vec<&str> = options[1..].iter().map(|o| o.value.as_str()).collect();
            let mut sorted = names.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(names, sorted, "Districts of {} should be sorted", state);
            assert_eq!(names.len(), geo.districts(state).unwrap().count());
        }
    }

    #[test]
    fn embedded_table_is_initialized_once() {
        let first = Geography::embedded() as *const Geography;
        let second = Geography::embedded() as *const Geography;
        assert_eq!(first, second);
    }
}
