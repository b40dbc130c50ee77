//! Presentation-side state container: the city list, the current selection,
//! and the forecast being displayed
//!
//! The container is the single owner of display state. Lookups it starts are
//! tagged with a monotonically increasing sequence number; a completed lookup
//! whose tag is no longer current is discarded instead of overwriting a
//! fresher selection.

use crate::models::HourlyForecast;
use tracing::{debug, warn};

/// Tag for one in-flight lookup. Only the most recently issued ticket can
/// still apply its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    seq: u64,
    city: String,
}

impl LookupTicket {
    /// The city this lookup was started for
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }
}

/// City list, current selection, and the forecast for the current selection.
#[derive(Debug, Default)]
pub struct WeatherState {
    cities: Vec<String>,
    current: Option<usize>,
    forecast: Option<HourlyForecast>,
    seq: u64,
}

impl WeatherState {
    /// Create a state container seeded with an initial city list. Duplicate
    /// and blank seed entries are dropped; the first city becomes current.
    pub fn new<I, S>(cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = Self::default();
        for city in cities {
            let city = city.into();
            let city = city.trim();
            if city.is_empty() || state.position_of(city).is_some() {
                continue;
            }
            state.cities.push(city.to_string());
        }
        if !state.cities.is_empty() {
            state.current = Some(0);
        }
        state
    }

    /// Cities known to the UI, in insertion order
    #[must_use]
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// The currently selected city, if any
    #[must_use]
    pub fn current_city(&self) -> Option<&str> {
        self.current.map(|i| self.cities[i].as_str())
    }

    /// The forecast for the current city, once a lookup has applied
    #[must_use]
    pub fn forecast(&self) -> Option<&HourlyForecast> {
        self.forecast.as_ref()
    }

    /// Add a city and select it, returning the ticket for the lookup the
    /// caller should now run.
    ///
    /// A name that is empty after trimming is a no-op; a name already in the
    /// list is selected without growing the list.
    pub fn add_city(&mut self, input: &str) -> Option<LookupTicket> {
        let name = input.trim();
        if name.is_empty() {
            debug!("ignoring blank city submission");
            return None;
        }

        let index = match self.position_of(name) {
            Some(existing) => existing,
            None => {
                self.cities.push(name.to_string());
                self.cities.len() - 1
            }
        };
        self.current = Some(index);
        Some(self.issue_ticket())
    }

    /// Select a city already in the list, returning the lookup ticket.
    /// Re-selecting the current city issues a fresh ticket (manual retry).
    pub fn select_city(&mut self, name: &str) -> Option<LookupTicket> {
        let Some(index) = self.position_of(name.trim()) else {
            debug!("ignoring selection of unknown city '{}'", name);
            return None;
        };
        self.current = Some(index);
        Some(self.issue_ticket())
    }

    /// Issue a ticket for the current city without changing the selection,
    /// e.g. for the initial lookup after seeding.
    pub fn refresh(&mut self) -> Option<LookupTicket> {
        self.current?;
        Some(self.issue_ticket())
    }

    /// Apply a completed lookup. Returns `false` when the ticket is stale
    /// (a newer selection superseded it) and the result was discarded.
    ///
    /// A failed lookup leaves the display empty; the session stays usable
    /// and the user retries by re-selecting a city.
    pub fn apply_lookup(
        &mut self,
        ticket: &LookupTicket,
        result: crate::Result<HourlyForecast>,
    ) -> bool {
        if ticket.seq != self.seq {
            debug!(
                "discarding stale lookup result for '{}' (seq {} != {})",
                ticket.city, ticket.seq, self.seq
            );
            return false;
        }

        match result {
            Ok(forecast) => {
                self.forecast = Some(forecast);
            }
            Err(e) => {
                warn!("lookup for '{}' failed: {}", ticket.city, e);
            }
        }
        true
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.cities.iter().position(|c| c == name)
    }

    // Bumping the sequence invalidates every outstanding ticket and discards
    // the forecast of the previous selection.
    fn issue_ticket(&mut self) -> LookupTicket {
        self.seq += 1;
        self.forecast = None;
        LookupTicket {
            seq: self.seq,
            city: self
                .current_city()
                .unwrap_or_default()
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;
    use crate::models::HourlyForecast;

    fn seeded() -> WeatherState {
        WeatherState::new(["Austin", "Dallas", "Houston"])
    }

    #[test]
    fn test_seed_selects_first_city() {
        let state = seeded();
        assert_eq!(state.cities(), &["Austin", "Dallas", "Houston"]);
        assert_eq!(state.current_city(), Some("Austin"));
        assert!(state.forecast().is_none());
    }

    #[test]
    fn test_add_city_appends_and_selects() {
        let mut state = seeded();
        let ticket = state.add_city("Seattle").unwrap();
        assert_eq!(ticket.city(), "Seattle");
        assert_eq!(state.cities(), &["Austin", "Dallas", "Houston", "Seattle"]);
        assert_eq!(state.current_city(), Some("Seattle"));
    }

    #[test]
    fn test_blank_submission_is_a_no_op() {
        let mut state = seeded();
        assert!(state.add_city("").is_none());
        assert!(state.add_city("   ").is_none());
        assert_eq!(state.cities(), &["Austin", "Dallas", "Houston"]);
        assert_eq!(state.current_city(), Some("Austin"));
    }

    #[test]
    fn test_duplicate_add_selects_without_growing_list() {
        let mut state = seeded();
        let ticket = state.add_city("Dallas").unwrap();
        assert_eq!(ticket.city(), "Dallas");
        assert_eq!(state.cities().len(), 3);
        assert_eq!(state.current_city(), Some("Dallas"));
    }

    #[test]
    fn test_select_unknown_city_is_rejected() {
        let mut state = seeded();
        assert!(state.select_city("Atlantis").is_none());
        assert_eq!(state.current_city(), Some("Austin"));
    }

    #[test]
    fn test_switching_cities_discards_previous_forecast() {
        let mut state = seeded();
        let ticket = state.refresh().unwrap();
        assert!(state.apply_lookup(&ticket, Ok(HourlyForecast::default())));
        assert!(state.forecast().is_some());

        state.select_city("Dallas").unwrap();
        assert!(state.forecast().is_none());
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut state = seeded();
        let older = state.select_city("Dallas").unwrap();
        let newer = state.select_city("Houston").unwrap();

        // The Dallas lookup finishes after Houston was selected.
        assert!(!state.apply_lookup(&older, Ok(HourlyForecast::default())));
        assert!(state.forecast().is_none());

        assert!(state.apply_lookup(&newer, Ok(HourlyForecast::default())));
        assert!(state.forecast().is_some());
        assert_eq!(state.current_city(), Some("Houston"));
    }

    #[test]
    fn test_failed_lookup_leaves_display_empty_but_current() {
        let mut state = seeded();
        let ticket = state.refresh().unwrap();
        let applied = state.apply_lookup(
            &ticket,
            Err(LookupError::NoMatch {
                city: "Austin".into(),
            }),
        );
        assert!(applied);
        assert!(state.forecast().is_none());
        assert_eq!(state.current_city(), Some("Austin"));
    }

    #[test]
    fn test_reselecting_current_city_issues_fresh_ticket() {
        let mut state = seeded();
        let first = state.select_city("Austin").unwrap();
        let second = state.select_city("Austin").unwrap();
        assert_ne!(first, second);
        assert!(!state.apply_lookup(&first, Ok(HourlyForecast::default())));
        assert!(state.apply_lookup(&second, Ok(HourlyForecast::default())));
    }
}
