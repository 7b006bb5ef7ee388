// web_app/search/state.rs - Search box state machine
//
// Pure state for the header search: query text, last results, dropdown
// visibility and the lifecycle phase. It owns no timers and performs no
// I/O. Each transition tells the caller what to do next, so the same
// machine drives the browser header and the native tokio controller.
//
// Lifecycle:
//   Idle --set_query--> Debouncing --begin_lookup--> Fetching --settle--> Showing | Idle
//   Showing --pointer_down(outside) / blank query--> Idle
//   Fetching --set_query--> Debouncing (the in-flight answer becomes stale)

use std::time::Duration;

use crate::web_app::model::MediaSummary;
use super::LookupError;

/// Quiet period between the last keystroke and the lookup
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchPhase {
    /// Blank query, or the last lookup came back empty or failed
    #[default]
    Idle,
    /// A lookup is scheduled and waiting for the quiet period
    Debouncing,
    /// A lookup for the current query is in flight
    Fetching,
    /// Results are on screen
    Showing,
}

/// Generation stamp of a query edit.
///
/// Every `set_query` bumps the generation; timers and requests carry the
/// ticket they were created for and are ignored once it is outdated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// A lookup the caller should issue
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupRequest {
    pub ticket: Ticket,
    pub term: String,
}

/// What `set_query` asks of the caller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryChange {
    /// Blank query: cancel any pending timer, nothing to fetch
    Cleared,
    /// Restart the debounce timer for this ticket
    Scheduled(Ticket),
}

/// Outcome of feeding a lookup result back in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settlement {
    Applied { visible: bool },
    Failed,
    /// The query moved on while the request was in flight; result dropped
    Stale,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    query: String,
    results: Vec<MediaSummary>,
    dropdown_open: bool,
    phase: SearchPhase,
    generation: u64,
    disposed: bool,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[MediaSummary] {
        &self.results
    }

    pub fn dropdown_visible(&self) -> bool {
        self.dropdown_open
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        !self.disposed && ticket.0 == self.generation
    }

    /// Record a keystroke. The text is stored verbatim so the input shows
    /// exactly what was typed.
    pub fn set_query(&mut self, text: impl Into<String>) -> QueryChange {
        self.query = text.into();
        self.generation += 1;

        if !self.has_query() || self.disposed {
            self.results.clear();
            self.dropdown_open = false;
            self.phase = SearchPhase::Idle;
            return QueryChange::Cleared;
        }

        self.phase = SearchPhase::Debouncing;
        QueryChange::Scheduled(Ticket(self.generation))
    }

    /// Called when the debounce timer for `ticket` fires.
    ///
    /// Returns `None` when another keystroke superseded the timer.
    pub fn begin_lookup(&mut self, ticket: Ticket) -> Option<LookupRequest> {
        if !self.is_current(ticket) || !self.has_query() {
            return None;
        }
        self.phase = SearchPhase::Fetching;
        Some(LookupRequest {
            ticket,
            term: self.query.clone(),
        })
    }

    /// Apply the answer to `request` unless it has gone stale.
    pub fn settle(
        &mut self,
        request: &LookupRequest,
        outcome: Result<Vec<MediaSummary>, LookupError>,
    ) -> Settlement {
        if !self.is_current(request.ticket) {
            return Settlement::Stale;
        }

        match outcome {
            Ok(results) => {
                self.results = results;
                self.dropdown_open = !self.results.is_empty();
                self.phase = if self.dropdown_open {
                    SearchPhase::Showing
                } else {
                    SearchPhase::Idle
                };
                Settlement::Applied {
                    visible: self.dropdown_open,
                }
            }
            Err(_) => {
                self.results.clear();
                self.dropdown_open = false;
                self.phase = SearchPhase::Idle;
                Settlement::Failed
            }
        }
    }

    /// Pointer pressed somewhere on the page. Outside the search region
    /// it closes the dropdown; query and results are kept.
    ///
    /// Returns whether visibility changed.
    pub fn pointer_down(&mut self, inside_search: bool) -> bool {
        if inside_search || !self.dropdown_open {
            return false;
        }
        self.dropdown_open = false;
        if self.phase == SearchPhase::Showing {
            self.phase = SearchPhase::Idle;
        }
        true
    }

    /// Input focused again: show the last results if they still apply.
    pub fn reopen(&mut self) -> bool {
        if self.dropdown_open || self.disposed || !self.has_query() || self.results.is_empty() {
            return false;
        }
        // Only reuse results that belong to the text currently typed.
        if matches!(self.phase, SearchPhase::Debouncing | SearchPhase::Fetching) {
            return false;
        }
        self.dropdown_open = true;
        self.phase = SearchPhase::Showing;
        true
    }

    /// Component teardown: every outstanding ticket becomes stale.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.generation += 1;
        self.dropdown_open = false;
        self.phase = SearchPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::model::MediaCategory;

    fn media(id: i64, title: &str) -> MediaSummary {
        MediaSummary {
            id,
            title: title.to_string(),
            category: MediaCategory::Images,
            average_rating: 0.0,
            url: None,
        }
    }

    fn issue(state: &mut SearchState, text: &str) -> LookupRequest {
        let ticket = scheduled(state.set_query(text));
        state.begin_lookup(ticket).unwrap()
    }

    fn scheduled(change: QueryChange) -> Ticket {
        match change {
            QueryChange::Scheduled(ticket) => ticket,
            QueryChange::Cleared => panic!("expected a scheduled lookup"),
        }
    }

    #[test]
    fn test_blank_query_clears() {
        let mut state = SearchState::new();
        assert_eq!(state.set_query("   "), QueryChange::Cleared);
        assert_eq!(state.query(), "   ");
        assert_eq!(state.phase(), SearchPhase::Idle);
        assert!(!state.dropdown_visible());
    }

    #[test]
    fn test_superseded_timer_yields_nothing() {
        let mut state = SearchState::new();
        let first = scheduled(state.set_query("s"));
        let second = scheduled(state.set_query("su"));

        assert!(state.begin_lookup(first).is_none());
        let request = state.begin_lookup(second).unwrap();
        assert_eq!(request.term, "su");
        assert_eq!(state.phase(), SearchPhase::Fetching);
    }

    #[test]
    fn test_settle_applies_current() {
        let mut state = SearchState::new();
        let ticket = scheduled(state.set_query("sun"));
        let request = state.begin_lookup(ticket).unwrap();

        let settled = state.settle(&request, Ok(vec![media(1, "Sunset"), media(2, "Sunrise")]));
        assert_eq!(settled, Settlement::Applied { visible: true });
        assert_eq!(state.results().len(), 2);
        assert_eq!(state.phase(), SearchPhase::Showing);
    }

    #[test]
    fn test_empty_results_stay_hidden() {
        let mut state = SearchState::new();
        let ticket = scheduled(state.set_query("zzz"));
        let request = state.begin_lookup(ticket).unwrap();

        assert_eq!(state.settle(&request, Ok(vec![])), Settlement::Applied { visible: false });
        assert!(!state.dropdown_visible());
        assert_eq!(state.phase(), SearchPhase::Idle);
    }

    #[test]
    fn test_stale_response_dropped() {
        let mut state = SearchState::new();
        let a = issue(&mut state, "a");
        let b = issue(&mut state, "b");

        state.settle(&b, Ok(vec![media(2, "Bee")]));
        assert_eq!(state.settle(&a, Ok(vec![media(1, "Ant")])), Settlement::Stale);
        assert_eq!(state.results()[0].title, "Bee");
    }

    #[test]
    fn test_same_text_retyped_still_stale() {
        let mut state = SearchState::new();
        let first = issue(&mut state, "a");
        state.set_query("ab");
        state.set_query("a");

        assert_eq!(state.settle(&first, Ok(vec![media(1, "Ant")])), Settlement::Stale);
        assert!(state.results().is_empty());
    }

    #[test]
    fn test_failure_clears_results() {
        let mut state = SearchState::new();
        let request = issue(&mut state, "sun");
        state.settle(&request, Ok(vec![media(1, "Sunset")]));

        let again = issue(&mut state, "sunr");
        let settled = state.settle(&again, Err(LookupError::new("connection refused")));
        assert_eq!(settled, Settlement::Failed);
        assert!(state.results().is_empty());
        assert!(!state.dropdown_visible());
    }

    #[test]
    fn test_pointer_down_outside_keeps_query() {
        let mut state = SearchState::new();
        let request = issue(&mut state, "sun");
        state.settle(&request, Ok(vec![media(1, "Sunset")]));

        assert!(!state.pointer_down(true));
        assert!(state.dropdown_visible());

        assert!(state.pointer_down(false));
        assert!(!state.dropdown_visible());
        assert_eq!(state.query(), "sun");
        assert_eq!(state.results().len(), 1);
        assert_eq!(state.phase(), SearchPhase::Idle);
    }

    #[test]
    fn test_reopen_reuses_results() {
        let mut state = SearchState::new();
        let request = issue(&mut state, "sun");
        state.settle(&request, Ok(vec![media(1, "Sunset")]));
        state.pointer_down(false);

        assert!(state.reopen());
        assert!(state.dropdown_visible());
        assert!(!state.reopen());
    }

    #[test]
    fn test_reopen_refused_while_debouncing() {
        let mut state = SearchState::new();
        let request = issue(&mut state, "sun");
        state.settle(&request, Ok(vec![media(1, "Sunset")]));
        state.pointer_down(false);
        state.set_query("sunr");

        assert!(!state.reopen());
    }

    #[test]
    fn test_dispose_invalidates_in_flight() {
        let mut state = SearchState::new();
        let request = issue(&mut state, "sun");
        state.dispose();

        assert_eq!(state.settle(&request, Ok(vec![media(1, "Sunset")])), Settlement::Stale);
        assert_eq!(state.set_query("moon"), QueryChange::Cleared);
        assert!(state.is_disposed());
    }
}
