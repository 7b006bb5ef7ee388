// web_app/search/lookup.rs - The media lookup seam
//
// The search box only needs "search media by term". Anything that can
// answer that (the upstream HTTP client, a server function, a test
// double) implements `MediaLookup`.

use std::future::Future;

use thiserror::Error;

use crate::web_app::model::MediaSummary;

/// A failed media lookup.
///
/// The search box treats every failure the same way (empty, hidden
/// dropdown), so the only payload is the message that ends up in the log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("media lookup failed: {message}")]
pub struct LookupError {
    message: String,
}

impl LookupError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
impl From<leptos::prelude::ServerFnError> for LookupError {
    fn from(err: leptos::prelude::ServerFnError) -> Self {
        Self::new(err.to_string())
    }
}

/// Search media by free-text term.
///
/// Futures are not required to be `Send`: lookups run on the UI thread
/// (browser) or on a tokio `LocalSet` (native).
pub trait MediaLookup {
    fn search(&self, term: &str) -> impl Future<Output = Result<Vec<MediaSummary>, LookupError>>;
}

impl<L: MediaLookup> MediaLookup for std::rc::Rc<L> {
    fn search(&self, term: &str) -> impl Future<Output = Result<Vec<MediaSummary>, LookupError>> {
        (**self).search(term)
    }
}
