//! JSON fetch wrapper with cancellation
//!
//! The actual network layer is a host-supplied [`Transport`]; the fetcher
//! owns the request lifecycle around it. Re-invoking while a request is in
//! flight aborts the old task silently, so only the newest request ever
//! lands in the observable [`FetchState`].
//!
//! Requests run on a tokio runtime; [`Fetcher::load`] must be called from
//! within one.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use tactile_core::State;
use tokio::task::JoinHandle;

/// HTTP method for a [`Request`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Request {
    pub url: String,
    pub method: Method,
    pub headers: FxHashMap<String, String>,
    pub body: Option<Vec<u8>>,
}

impl Request {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::Get,
            headers: FxHashMap::default(),
            body: None,
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub type TransportFuture = Pin<Box<dyn Future<Output = Result<Response, FetchError>> + Send>>;

/// Host-supplied request execution. Tests use plain closures.
pub trait Transport: Send + Sync {
    fn send(&self, request: Request) -> TransportFuture;
}

impl<F> Transport for F
where
    F: Fn(Request) -> TransportFuture + Send + Sync,
{
    fn send(&self, request: Request) -> TransportFuture {
        self(request)
    }
}

/// `Clone` so it can sit inside [`FetchState`] behind a [`State`] cell
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("http status {status}")]
    Http { status: u16 },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("decode error: {0}")]
    Decode(String),
}

/// Observable request lifecycle
#[derive(Debug, Clone)]
pub struct FetchState<T: Clone> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<FetchError>,
}

impl<T: Clone> Default for FetchState<T> {
    /// Starts loading; consumers render a spinner until the first request
    /// settles or the fetcher turns out to be disabled.
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }
}

/// Drives JSON requests through a [`Transport`] into a [`State`] cell
pub struct Fetcher<T>
where
    T: Clone + DeserializeOwned + Send + Sync + 'static,
{
    transport: Arc<dyn Transport>,
    state: State<FetchState<T>>,
    enabled: bool,
    last_request: Option<Request>,
    in_flight: Option<JoinHandle<()>>,
}

impl<T> Fetcher<T>
where
    T: Clone + DeserializeOwned + Send + Sync + 'static,
{
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
            state: State::new(FetchState::default()),
            enabled: true,
            last_request: None,
            in_flight: None,
        }
    }

    /// A disabled fetcher short-circuits every load with `loading = false`.
    pub fn enabled(mut self, enabled: bool) -> Self {
        if !enabled {
            self.state.update(|s| s.loading = false);
        }
        self.enabled = enabled;
        self
    }

    /// Issue `request`, aborting any request still in flight.
    ///
    /// The aborted task never touches the state cell, so cancellation is
    /// invisible to observers.
    pub fn load(&mut self, request: Request) {
        self.last_request = Some(request.clone());
        if !self.enabled {
            self.state.update(|s| s.loading = false);
            return;
        }
        if let Some(handle) = self.in_flight.take() {
            tracing::trace!(url = %request.url, "aborting superseded request");
            handle.abort();
        }

        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        let transport = Arc::clone(&self.transport);
        let state = self.state.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let result = run_request(transport.as_ref(), request).await;
            match result {
                Ok(data) => state.update(|s| {
                    s.data = Some(data);
                    s.loading = false;
                    s.error = None;
                }),
                Err(error) => state.update(|s| {
                    s.loading = false;
                    s.error = Some(error);
                }),
            }
        }));
    }

    /// Re-issue the most recent request, if any
    pub fn retry(&mut self) {
        match self.last_request.clone() {
            Some(request) => self.load(request),
            None => tracing::trace!("retry with no prior request"),
        }
    }

    /// Wait for the in-flight request to settle. Aborted tasks resolve
    /// silently. Intended for tests and teardown.
    pub async fn join(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            let _ = handle.await;
        }
    }

    pub fn snapshot(&self) -> FetchState<T> {
        self.state.get()
    }

    pub fn state(&self) -> State<FetchState<T>> {
        self.state.clone()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl<T> Drop for Fetcher<T>
where
    T: Clone + DeserializeOwned + Send + Sync + 'static,
{
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

async fn run_request<T: DeserializeOwned>(
    transport: &dyn Transport,
    request: Request,
) -> Result<T, FetchError> {
    let response = transport.send(request).await?;
    if !response.is_success() {
        return Err(FetchError::Http {
            status: response.status,
        });
    }
    serde_json::from_slice(&response.body).map_err(|e| FetchError::Decode(e.to_string()))
}
