//! Test doubles for reelfind-core.
//!
//! Only compiled when running tests.

use crate::api::MovieSearchApi;
use crate::error::ApiError;
use crate::notifier::Notifier;
use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

/// Response body in the catalog's shape with one record per title.
pub fn movie_body(titles: &[&str]) -> Value {
    let records: Vec<Value> = titles
        .iter()
        .enumerate()
        .map(|(idx, title)| {
            json!({
                "#TITLE": title,
                "#YEAR": 2000 + idx,
                "#IMDB_ID": format!("tt{:07}", idx + 1),
                "#RANK": idx + 1,
            })
        })
        .collect();
    json!({ "ok": true, "description": records, "error_code": 200 })
}

/// One recorded [`Notifier`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifierCall {
    Progress { title: String, text: String },
    Dismiss,
    Error { title: String, text: String },
    Info { title: String, text: String },
    Success {
        title: String,
        text: String,
        auto_dismiss: Duration,
    },
}

/// Notifier that remembers every call in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    calls: RefCell<Vec<NotifierCall>>,
}

impl RecordingNotifier {
    pub fn calls(&self) -> Vec<NotifierCall> {
        self.calls.borrow().clone()
    }

    pub fn last(&self) -> Option<NotifierCall> {
        self.calls.borrow().last().cloned()
    }

    fn record(&self, call: NotifierCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl Notifier for RecordingNotifier {
    fn show_blocking_progress(&self, title: &str, text: &str) {
        self.record(NotifierCall::Progress {
            title: title.into(),
            text: text.into(),
        });
    }

    fn dismiss(&self) {
        self.record(NotifierCall::Dismiss);
    }

    fn show_error(&self, title: &str, text: &str) {
        self.record(NotifierCall::Error {
            title: title.into(),
            text: text.into(),
        });
    }

    fn show_info(&self, title: &str, text: &str) {
        self.record(NotifierCall::Info {
            title: title.into(),
            text: text.into(),
        });
    }

    fn show_success(&self, title: &str, text: &str, auto_dismiss: Duration) {
        self.record(NotifierCall::Success {
            title: title.into(),
            text: text.into(),
            auto_dismiss,
        });
    }
}

/// Answers each search with the next queued response.
#[derive(Debug, Default)]
pub struct ScriptedApi {
    responses: RefCell<VecDeque<Result<Value, ApiError>>>,
    queries: RefCell<Vec<String>>,
}

impl ScriptedApi {
    pub fn push_ok(&self, body: Value) {
        self.responses.borrow_mut().push_back(Ok(body));
    }

    pub fn push_err(&self, err: ApiError) {
        self.responses.borrow_mut().push_back(Err(err));
    }

    pub fn call_count(&self) -> usize {
        self.queries.borrow().len()
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

#[async_trait(?Send)]
impl MovieSearchApi for ScriptedApi {
    async fn search(&self, query: &str) -> Result<Value, ApiError> {
        self.queries.borrow_mut().push(query.to_string());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".into())))
    }
}

type GateSender = oneshot::Sender<Result<Value, ApiError>>;
type GateReceiver = oneshot::Receiver<Result<Value, ApiError>>;

/// Holds each search open until the test releases its gate, so responses
/// can be made to arrive in any order.
#[derive(Debug, Default)]
pub struct GatedApi {
    gates: RefCell<HashMap<String, GateReceiver>>,
}

impl GatedApi {
    /// Registers a gate for `query`; sending on it resolves that search.
    pub fn gate(&self, query: &str) -> GateSender {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(query.to_string(), rx);
        tx
    }
}

#[async_trait(?Send)]
impl MovieSearchApi for GatedApi {
    async fn search(&self, query: &str) -> Result<Value, ApiError> {
        let gate = self.gates.borrow_mut().remove(query);
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Transport("gate dropped".into()))),
            None => Err(ApiError::Transport(format!("no gate for '{}'", query))),
        }
    }
}
