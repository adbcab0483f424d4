//! Recording fakes for `RawApiPort` and `ShellPort`

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::ports::outbound::{ApiError, RawApiPort, ShellPort};
use crate::routes::Route;

/// One HTTP call observed by [`ScriptedApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// A `RawApiPort` fake that replays a scripted queue of responses and records
/// every call it receives.
#[derive(Default)]
pub struct ScriptedApi {
    responses: Mutex<VecDeque<Result<Value, ApiError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful JSON response.
    pub fn push_ok(&self, value: Value) {
        self.push(Ok(value));
    }

    /// Queue a failure.
    pub fn push_err(&self, error: ApiError) {
        self.push(Err(error));
    }

    fn push(&self, response: Result<Value, ApiError>) {
        self.responses
            .lock()
            .expect("scripted responses poisoned")
            .push_back(response);
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("recorded calls poisoned").clone()
    }

    fn record(&self, method: &'static str, path: &str, body: Option<&Value>) {
        self.calls
            .lock()
            .expect("recorded calls poisoned")
            .push(RecordedCall {
                method,
                path: path.to_string(),
                body: body.cloned(),
            });
    }

    fn next_response(&self) -> Result<Value, ApiError> {
        self.responses
            .lock()
            .expect("scripted responses poisoned")
            .pop_front()
            .expect("ScriptedApi ran out of scripted responses")
    }
}

#[async_trait]
impl RawApiPort for ScriptedApi {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.record("GET", path, None);
        self.next_response()
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.record("POST", path, Some(body));
        self.next_response()
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.record("POST", path, None);
        self.next_response().map(|_| ())
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.record("PUT", path, Some(body));
        self.next_response()
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.record("DELETE", path, None);
        self.next_response().map(|_| ())
    }
}

/// One user-facing side effect observed by [`RecordingShell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    Alert(String),
    Confirm(String),
    Navigate(Route),
}

/// A `ShellPort` fake recording alerts/confirms/navigations in order.
pub struct RecordingShell {
    events: Mutex<Vec<ShellEvent>>,
    confirm_answer: bool,
}

impl RecordingShell {
    /// A shell whose confirmation dialogs answer `yes`.
    pub fn confirming() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            confirm_answer: true,
        }
    }

    /// A shell whose confirmation dialogs answer `no`.
    pub fn declining() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            confirm_answer: false,
        }
    }

    /// Every event recorded so far, in order.
    pub fn events(&self) -> Vec<ShellEvent> {
        self.events.lock().expect("shell events poisoned").clone()
    }

    /// All alert messages, in order.
    pub fn alerts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ShellEvent::Alert(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    /// All navigation targets, in order.
    pub fn navigations(&self) -> Vec<Route> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ShellEvent::Navigate(route) => Some(route),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ShellEvent) {
        self.events.lock().expect("shell events poisoned").push(event);
    }
}

impl ShellPort for RecordingShell {
    fn alert(&self, message: &str) {
        self.push(ShellEvent::Alert(message.to_string()));
    }

    fn confirm(&self, message: &str) -> bool {
        self.push(ShellEvent::Confirm(message.to_string()));
        self.confirm_answer
    }

    fn navigate(&self, route: Route) {
        self.push(ShellEvent::Navigate(route));
    }
}
