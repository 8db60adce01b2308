//! Scripted transport fakes shared by the service tests.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use critiq_http::{Connection, Headers, HttpError, Request, Response, StatusCode, Transport};

/// One recorded dispatch.
#[derive(Debug, Clone)]
pub(crate) struct SeenRequest {
    pub(crate) method: String,
    pub(crate) url: String,
    pub(crate) headers: Headers,
    pub(crate) body: Option<Vec<u8>>,
}

#[derive(Default)]
struct ScriptState {
    scripts: Mutex<HashMap<String, VecDeque<Response>>>,
    seen: Mutex<Vec<SeenRequest>>,
    connects: AtomicUsize,
}

/// Transport fake replaying scripted responses keyed by full URL.
///
/// Panics inside a test when a request arrives for an unscripted URL or
/// after its queue runs dry, which surfaces unexpected traffic directly.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    state: Arc<ScriptState>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queues responses for a URL, served in order.
    pub(crate) fn script(&self, url: &str, responses: Vec<Response>) {
        self.state
            .scripts
            .lock()
            .unwrap()
            .insert(url.to_string(), responses.into());
    }

    pub(crate) fn connects(&self) -> usize {
        self.state.connects.load(Ordering::SeqCst)
    }

    pub(crate) fn dispatches(&self) -> usize {
        self.state.seen.lock().unwrap().len()
    }

    /// Every dispatched request, in order.
    pub(crate) fn requests(&self) -> Vec<SeenRequest> {
        self.state.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn connect(&self) -> Result<Box<dyn Connection>, HttpError> {
        self.state.connects.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(ScriptedConnection {
            state: Arc::clone(&self.state),
        }))
    }
}

struct ScriptedConnection {
    state: Arc<ScriptState>,
}

#[async_trait]
impl Connection for ScriptedConnection {
    async fn dispatch(&self, request: &Request) -> Result<Response, HttpError> {
        self.state.seen.lock().unwrap().push(SeenRequest {
            method: request.method().to_string(),
            url: request.url().to_string(),
            headers: request.headers().clone(),
            body: request.body().map(<[u8]>::to_vec),
        });

        let mut scripts = self.state.scripts.lock().unwrap();
        let queue = scripts
            .get_mut(request.url().as_str())
            .unwrap_or_else(|| panic!("no scripted response for {}", request.url()));
        Ok(queue
            .pop_front()
            .unwrap_or_else(|| panic!("script exhausted for {}", request.url())))
    }
}

/// A JSON response with the matching content type.
pub(crate) fn json(status: u16, body: &serde_json::Value) -> Response {
    let mut headers = Headers::new();
    headers.insert("Content-Type", "application/json");
    Response::new(
        StatusCode::from_u16(status).unwrap(),
        headers,
        body.to_string(),
    )
}

/// A plain-text response.
pub(crate) fn text(status: u16, body: &str) -> Response {
    Response::new(StatusCode::from_u16(status).unwrap(), Headers::new(), body)
}
