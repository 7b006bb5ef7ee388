// web_app/search/mod.rs - Live search behind the header search box
//
// - state.rs: runtime-agnostic state machine (query, results, dropdown)
// - lookup.rs: `MediaLookup` seam and `LookupError`
// - debounce.rs: tokio single-slot cancellable timer (native only)
// - controller.rs: tokio driver combining the three (native only)
//
// The browser header drives the same `SearchState` with Leptos timers,
// see components/header.rs.

pub mod lookup;
pub mod state;

#[cfg(feature = "native")]
pub mod debounce;

#[cfg(feature = "native")]
pub mod controller;

pub use lookup::{LookupError, MediaLookup};
pub use state::{
    LookupRequest, QueryChange, SearchPhase, SearchState, Settlement, Ticket, DEFAULT_DEBOUNCE,
};

#[cfg(feature = "native")]
pub use controller::{SearchController, SearchSnapshot};
#[cfg(feature = "native")]
pub use debounce::Debouncer;
