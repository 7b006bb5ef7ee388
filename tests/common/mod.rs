// common/mod.rs - Shared test utilities
//
// - media(): build a MediaSummary with sensible defaults
// - ScriptedLookup: a MediaLookup that answers from a script, optionally
//   after a delay, and records every term it was asked for

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use elvco_web::web_app::model::{MediaCategory, MediaSummary};
use elvco_web::web_app::search::{LookupError, MediaLookup};

pub fn media(id: i64, title: &str) -> MediaSummary {
    MediaSummary {
        id,
        title: title.to_string(),
        category: MediaCategory::Images,
        average_rating: 4.0,
        url: Some(format!("https://cdn.example.com/{}.jpg", id)),
    }
}

#[derive(Clone, Debug)]
pub struct Script {
    pub delay: Duration,
    pub outcome: Result<Vec<MediaSummary>, LookupError>,
}

/// Scripted `MediaLookup`; unknown terms answer immediately with no results.
#[derive(Clone, Default)]
pub struct ScriptedLookup {
    scripts: Rc<RefCell<HashMap<String, Script>>>,
    calls: Rc<RefCell<Vec<String>>>,
    completed: Rc<RefCell<Vec<String>>>,
}

impl ScriptedLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, term: &str, delay: Duration, results: Vec<MediaSummary>) -> Self {
        self.scripts.borrow_mut().insert(
            term.to_string(),
            Script {
                delay,
                outcome: Ok(results),
            },
        );
        self
    }

    pub fn fail(self, term: &str, delay: Duration, message: &str) -> Self {
        self.scripts.borrow_mut().insert(
            term.to_string(),
            Script {
                delay,
                outcome: Err(LookupError::new(message)),
            },
        );
        self
    }

    /// Terms in the order the lookups started
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Terms whose lookups ran to completion
    pub fn completed(&self) -> Vec<String> {
        self.completed.borrow().clone()
    }
}

impl MediaLookup for ScriptedLookup {
    async fn search(&self, term: &str) -> Result<Vec<MediaSummary>, LookupError> {
        self.calls.borrow_mut().push(term.to_string());
        let script = self.scripts.borrow().get(term).cloned();

        let outcome = match script {
            Some(script) => {
                if !script.delay.is_zero() {
                    tokio::time::sleep(script.delay).await;
                }
                script.outcome
            }
            None => Ok(Vec::new()),
        };

        self.completed.borrow_mut().push(term.to_string());
        outcome
    }
}
