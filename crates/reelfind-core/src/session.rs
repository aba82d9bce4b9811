//! Search session: query, results and busy flag, plus the submit lifecycle.
//!
//! # Lifecycle of one submit
//!
//! ```text
//! submit(q) ── empty? ──► error notice, publish empty, done (no request)
//!     │
//!     ▼
//! tag generation, busy = true, progress notice
//!     │
//!     ▼
//! api.search(q) ... (only suspension point)
//!     │
//!     ├─ session closed ───────► drop result, touch nothing
//!     ├─ newer submit started ─► drop result, touch nothing
//!     ▼
//! dismiss, notify (success / no results / error), publish, busy = false
//! ```
//!
//! State changes are broadcast on a `tokio::sync::watch` channel so the UI
//! can mirror them without polling.

use crate::api::MovieSearchApi;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::movie::{extract_movies, ResultSet};
use crate::notifier::Notifier;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::{debug, info, warn};

pub const EMPTY_SEARCH_TITLE: &str = "Empty Search";
pub const LOADING_TITLE: &str = "Loading...";
pub const LOADING_TEXT: &str = "Fetching movies...";
pub const NO_RESULTS_TITLE: &str = "No Movies Found";
pub const SUCCESS_TITLE: &str = "Movies Loaded";
pub const FETCH_ERROR_TITLE: &str = "Error fetching movies";

/// Everything the UI needs to render the search page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub current_query: String,
    pub results: ResultSet,
    /// True while the most recent request is outstanding.
    pub is_busy: bool,
}

impl SessionState {
    pub fn new(default_query: &str) -> Self {
        Self {
            current_query: default_query.to_string(),
            results: ResultSet::initial(),
            is_busy: false,
        }
    }
}

/// How a call to [`SearchSession::submit`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A non-empty result set was published.
    Published { count: usize },
    /// The submit resolved to a user-visible failure; an empty set was published.
    Rejected(SearchError),
    /// A newer submit started while this one was in flight; result dropped.
    Superseded,
    /// The session was closed; result dropped.
    Cancelled,
}

/// Owns [`SessionState`] and runs searches against a [`MovieSearchApi`].
pub struct SearchSession<A, N> {
    api: A,
    notifier: N,
    config: SearchConfig,
    state: watch::Sender<SessionState>,
    generation: AtomicU64,
    closed: AtomicBool,
}

impl<A, N> SearchSession<A, N>
where
    A: MovieSearchApi,
    N: Notifier,
{
    pub fn new(api: A, notifier: N, config: SearchConfig) -> Self {
        let (state, _) = watch::channel(SessionState::new(&config.default_query));
        Self {
            api,
            notifier,
            config,
            state,
            generation: AtomicU64::new(0),
            closed: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receiver that wakes on every state change.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Updates the query held in state (controlled input), without searching.
    pub fn set_query(&self, query: &str) {
        self.state.send_if_modified(|state| {
            if state.current_query == query {
                return false;
            }
            state.current_query = query.to_string();
            true
        });
    }

    /// Submits whatever query the state currently holds.
    pub async fn submit_current(&self) -> SubmitOutcome {
        let query = self.state.borrow().current_query.clone();
        self.submit(&query).await
    }

    /// Runs one search and publishes its outcome.
    ///
    /// Only the most recent submit may publish. A submit whose response
    /// arrives after a newer one started, or after [`close`](Self::close),
    /// returns without touching state or notifying.
    pub async fn submit(&self, query: &str) -> SubmitOutcome {
        if self.is_closed() {
            return SubmitOutcome::Cancelled;
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if query.trim().is_empty() {
            let err = SearchError::EmptyQuery;
            self.notifier.show_error(EMPTY_SEARCH_TITLE, &err.to_string());
            self.state.send_modify(|state| {
                state.current_query = query.to_string();
                state.results = ResultSet::publish(Vec::new());
                state.is_busy = false;
            });
            return SubmitOutcome::Rejected(err);
        }

        self.state.send_modify(|state| {
            state.current_query = query.to_string();
            state.is_busy = true;
        });
        self.notifier.show_blocking_progress(LOADING_TITLE, LOADING_TEXT);

        debug!("Submitting search #{} for '{}'", generation, query);
        let response = self.api.search(query).await;

        if self.is_closed() {
            debug!("Session closed; dropping response for search #{}", generation);
            return SubmitOutcome::Cancelled;
        }
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("Search #{} superseded; dropping its response", generation);
            return SubmitOutcome::Superseded;
        }

        self.notifier.dismiss();

        let (movies, outcome) = match response {
            Ok(body) => {
                let movies = extract_movies(&body);
                if movies.is_empty() {
                    let err = SearchError::NoResults {
                        query: query.to_string(),
                    };
                    info!("No movies found for '{}'", query);
                    self.notifier.show_info(NO_RESULTS_TITLE, &err.to_string());
                    (movies, SubmitOutcome::Rejected(err))
                } else {
                    let count = movies.len();
                    info!("Loaded {} movies for '{}'", count, query);
                    self.notifier.show_success(
                        SUCCESS_TITLE,
                        &format!("Successfully fetched movies for \"{}\".", query),
                        self.config.success_notice_duration(),
                    );
                    (movies, SubmitOutcome::Published { count })
                }
            }
            Err(api_err) => {
                warn!("Search for '{}' failed: {}", query, api_err);
                let err = SearchError::from(&api_err);
                self.notifier.show_error(FETCH_ERROR_TITLE, &err.to_string());
                (Vec::new(), SubmitOutcome::Rejected(err))
            }
        };

        self.state.send_modify(|state| {
            state.results = ResultSet::publish(movies);
            state.is_busy = false;
        });

        outcome
    }

    /// Tears the session down. In-flight responses become no-ops.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}
