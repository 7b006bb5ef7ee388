// web_app/search/controller.rs - Native driver for the search box
//
// Wires `SearchState` to a real clock and a `MediaLookup`. Everything runs
// on one thread: state sits in `Rc<RefCell<..>>` and tasks are spawned on
// the current tokio `LocalSet`.
//
// The debounce timer and the lookup are separate tasks. A keystroke aborts
// the timer, never a request that is already in flight; that request's
// answer is simply dropped as stale when it lands.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::web_app::model::MediaSummary;
use super::debounce::Debouncer;
use super::lookup::MediaLookup;
use super::state::{LookupRequest, QueryChange, SearchPhase, SearchState, Settlement, Ticket, DEFAULT_DEBOUNCE};

/// Point-in-time copy of what the search box would render
#[derive(Clone, Debug, PartialEq)]
pub struct SearchSnapshot {
    pub query: String,
    pub results: Vec<MediaSummary>,
    pub dropdown_visible: bool,
    pub phase: SearchPhase,
}

struct Inner<L> {
    state: RefCell<SearchState>,
    timer: RefCell<Debouncer>,
    lookup: L,
}

/// Debounced, stale-safe search over a `MediaLookup`.
///
/// Must be created and used inside a tokio `LocalSet`. Dropping it cancels
/// the pending timer and discards any answer still in flight.
pub struct SearchController<L: MediaLookup + 'static> {
    inner: Rc<Inner<L>>,
}

impl<L: MediaLookup + 'static> SearchController<L> {
    pub fn new(lookup: L) -> Self {
        Self::with_debounce(lookup, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(lookup: L, debounce: Duration) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(SearchState::new()),
                timer: RefCell::new(Debouncer::new(debounce)),
                lookup,
            }),
        }
    }

    /// Keystroke: update the query and restart the quiet period.
    pub fn set_query(&self, text: impl Into<String>) {
        let change = self.inner.state.borrow_mut().set_query(text);
        match change {
            QueryChange::Cleared => {
                if self.inner.timer.borrow_mut().cancel() {
                    tracing::debug!("Search cleared, pending lookup cancelled");
                }
            }
            QueryChange::Scheduled(ticket) => {
                let weak = Rc::downgrade(&self.inner);
                self.inner.timer.borrow_mut().schedule(async move {
                    if let Some(inner) = weak.upgrade() {
                        Inner::fire(inner, ticket);
                    }
                });
            }
        }
    }

    /// Pointer pressed on the page; `inside_search` tells whether it hit
    /// the search region.
    pub fn pointer_down(&self, inside_search: bool) {
        if self.inner.state.borrow_mut().pointer_down(inside_search) {
            tracing::debug!("Search dropdown dismissed by outside pointer");
        }
    }

    /// Search input focused again
    pub fn focus(&self) -> bool {
        self.inner.state.borrow_mut().reopen()
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        let state = self.inner.state.borrow();
        SearchSnapshot {
            query: state.query().to_string(),
            results: state.results().to_vec(),
            dropdown_visible: state.dropdown_visible(),
            phase: state.phase(),
        }
    }

    pub fn phase(&self) -> SearchPhase {
        self.inner.state.borrow().phase()
    }

    pub fn dropdown_visible(&self) -> bool {
        self.inner.state.borrow().dropdown_visible()
    }

    /// Whether a debounce timer is still waiting to fire
    pub fn has_pending_lookup(&self) -> bool {
        self.inner.timer.borrow().is_pending()
    }
}

impl<L: MediaLookup + 'static> Inner<L> {
    /// Debounce timer elapsed: start the lookup in its own task.
    fn fire(inner: Rc<Self>, ticket: Ticket) {
        let Some(request) = inner.state.borrow_mut().begin_lookup(ticket) else {
            return;
        };
        tracing::info!("Search lookup: term='{}'", request.term);
        tokio::task::spawn_local(async move {
            let outcome = inner.lookup.search(&request.term).await;
            inner.settle(&request, outcome);
        });
    }

    fn settle(
        &self,
        request: &LookupRequest,
        outcome: Result<Vec<MediaSummary>, super::LookupError>,
    ) {
        let failure = outcome.as_ref().err().cloned();
        let count = outcome.as_ref().map(Vec::len).unwrap_or(0);

        match self.state.borrow_mut().settle(request, outcome) {
            Settlement::Applied { visible } => {
                tracing::info!(
                    "Search results for '{}': {} item(s), dropdown visible={}",
                    request.term,
                    count,
                    visible
                );
            }
            Settlement::Failed => {
                if let Some(err) = failure {
                    tracing::error!("Error fetching search results for '{}': {}", request.term, err);
                }
            }
            Settlement::Stale => {
                tracing::debug!("Discarding stale search results for '{}'", request.term);
            }
        }
    }
}

impl<L: MediaLookup + 'static> Drop for SearchController<L> {
    fn drop(&mut self) {
        self.inner.timer.borrow_mut().cancel();
        self.inner.state.borrow_mut().dispose();
    }
}
