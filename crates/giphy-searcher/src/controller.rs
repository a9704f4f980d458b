//! Search state and the operations that are allowed to change it.
//!
//! The controller knows nothing about rendering. Components read a
//! [`SearchState`] snapshot and feed user input back through
//! [`SearchController::update_search_text`] and
//! [`SearchController::submit_search`].
//!
//! There is no request sequencing: when two searches overlap, whichever
//! completion is applied last decides the result list. The
//! [`SearchController::begin_search`] / [`SearchController::fetch`] /
//! [`SearchController::complete_search`] split exists so callers can observe
//! or order completions themselves.

use async_trait::async_trait;
use giphy_ox::{Giphy, GiphyRequestError, ImageResult};
use serde::Serialize;
use std::collections::HashSet;

/// Anything that can turn a search term into an ordered list of results.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn fetch_images(&self, term: &str) -> Result<Vec<ImageResult>, GiphyRequestError>;
}

#[async_trait]
impl SearchBackend for Giphy {
    async fn fetch_images(&self, term: &str) -> Result<Vec<ImageResult>, GiphyRequestError> {
        self.search_images(term).await
    }
}

/// What happens to the input text after a successful search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputReset {
    #[default]
    Keep,
    Clear,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Term used by the automatic search on activation.
    pub initial_term: String,
    pub input_reset: InputReset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchState {
    input: String,
    last_search: String,
    results: Vec<ImageResult>,
}

impl SearchState {
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Most recent successfully completed term; empty before the first one.
    pub fn last_search(&self) -> &str {
        &self.last_search
    }

    pub fn results(&self) -> &[ImageResult] {
        &self.results
    }
}

/// A search whose term has been captured but whose result is not applied yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    term: String,
}

impl PendingSearch {
    pub fn term(&self) -> &str {
        &self.term
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Completed { term: String, count: usize },
    Failed { term: String },
}

impl SearchOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

#[derive(Debug)]
pub struct SearchController<B> {
    backend: B,
    options: ControllerOptions,
    state: SearchState,
    activated: bool,
}

impl<B: SearchBackend> SearchController<B> {
    pub fn new(backend: B, options: ControllerOptions) -> Self {
        Self {
            backend,
            options,
            state: SearchState::default(),
            activated: false,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    pub fn update_search_text(&mut self, text: impl Into<String>) {
        self.state.input = text.into();
    }

    /// Run the initial search. Only the first call does anything.
    pub async fn activate(&mut self) -> Option<SearchOutcome> {
        if self.activated {
            return None;
        }
        self.activated = true;

        let pending = PendingSearch {
            term: self.options.initial_term.clone(),
        };
        tracing::debug!(term = %pending.term, "running initial search");
        Some(self.run(pending).await)
    }

    /// Search for the current input text and apply the outcome.
    pub async fn submit_search(&mut self) -> SearchOutcome {
        let pending = self.begin_search();
        self.run(pending).await
    }

    /// Capture the current input text as the term of a new search.
    pub fn begin_search(&self) -> PendingSearch {
        PendingSearch {
            term: self.state.input.clone(),
        }
    }

    /// Issue the request for `pending` without touching state.
    pub async fn fetch(
        &self,
        pending: &PendingSearch,
    ) -> Result<Vec<ImageResult>, GiphyRequestError> {
        self.backend.fetch_images(&pending.term).await
    }

    /// Apply the result of a search.
    ///
    /// On success the result list and last search are replaced, and the
    /// input is cleared if configured to. On failure the error is logged and
    /// state is left exactly as it was.
    pub fn complete_search(
        &mut self,
        pending: PendingSearch,
        result: Result<Vec<ImageResult>, GiphyRequestError>,
    ) -> SearchOutcome {
        let PendingSearch { term } = pending;

        match result {
            Ok(results) => {
                warn_on_duplicate_ids(&term, &results);
                let count = results.len();
                tracing::info!(term = %term, count, "search completed");

                self.state.results = results;
                self.state.last_search.clone_from(&term);
                if self.options.input_reset == InputReset::Clear {
                    self.state.input.clear();
                }

                SearchOutcome::Completed { term, count }
            }
            Err(err) => {
                tracing::error!(term = %term, error = %err, "search failed");
                SearchOutcome::Failed { term }
            }
        }
    }

    async fn run(&mut self, pending: PendingSearch) -> SearchOutcome {
        let result = self.fetch(&pending).await;
        self.complete_search(pending, result)
    }
}

fn warn_on_duplicate_ids(term: &str, results: &[ImageResult]) {
    let mut seen = HashSet::with_capacity(results.len());
    for result in results {
        if !seen.insert(&result.id) {
            tracing::warn!(term = %term, id = %result.id, "duplicate result id in response");
        }
    }
}
