//! Test doubles for host capabilities and the HTTP transport.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use futures::future::LocalBoxFuture;

use crate::net::api::ApiClient;
use crate::net::transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};
use crate::util::host::{Clock, Host, HostKind, MemoryArea, Navigator, Scheduler, Task, TimerId};

pub const START_MILLIS: i64 = 1_700_000_000_000;
pub const START_SECS: i64 = START_MILLIS / 1000;
pub const BASE_URL: &str = "http://api.test";

pub struct ManualClock(AtomicI64);

impl ManualClock {
    pub fn new(now_millis: i64) -> Self {
        Self(AtomicI64::new(now_millis))
    }

    pub fn advance(&self, millis: i64) {
        self.0.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// Runs due tasks only when the test advances time.
pub struct ManualScheduler {
    clock: Arc<ManualClock>,
    next_id: AtomicU64,
    pending: Mutex<Vec<(TimerId, i64, Task)>>,
}

impl ManualScheduler {
    pub fn new(clock: Arc<ManualClock>) -> Self {
        Self { clock, next_id: AtomicU64::new(1), pending: Mutex::new(Vec::new()) }
    }

    pub fn pending(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    /// Move the clock forward and run every task that became due.
    pub fn advance(&self, millis: i64) {
        self.clock.advance(millis);
        let now = self.clock.now_millis();
        let due: Vec<Task> = {
            let mut pending = self.pending.lock().unwrap();
            let (due, keep): (Vec<_>, Vec<_>) = pending.drain(..).partition(|(_, at, _)| *at <= now);
            *pending = keep;
            due.into_iter().map(|(_, _, task)| task).collect()
        };
        for task in due {
            task();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerId {
        let id = TimerId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let at = self.clock.now_millis() + i64::try_from(delay.as_millis()).unwrap();
        self.pending.lock().unwrap().push((id, at, task));
        id
    }

    fn cancel(&self, id: TimerId) {
        self.pending.lock().unwrap().retain(|(pending, _, _)| *pending != id);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEvent {
    Alert(String),
    Visit(String),
}

/// Records alerts and visits in the order they happened.
#[derive(Default)]
pub struct RecordingNavigator(Mutex<Vec<NavEvent>>);

impl RecordingNavigator {
    pub fn events(&self) -> Vec<NavEvent> {
        self.0.lock().unwrap().clone()
    }

    pub fn visits(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                NavEvent::Visit(path) => Some(path),
                NavEvent::Alert(_) => None,
            })
            .collect()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                NavEvent::Alert(message) => Some(message),
                NavEvent::Visit(_) => None,
            })
            .collect()
    }

    pub fn last(&self) -> Option<String> {
        self.visits().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.0.lock().unwrap().push(NavEvent::Visit(path.to_owned()));
    }

    fn alert(&self, message: &str) {
        self.0.lock().unwrap().push(NavEvent::Alert(message.to_owned()));
    }
}

/// Browser-kind host wired to in-memory doubles, with typed handles kept for
/// assertions.
pub struct TestHost {
    pub host: Host,
    pub durable: Arc<MemoryArea>,
    pub session: Arc<MemoryArea>,
    pub clock: Arc<ManualClock>,
    pub scheduler: Arc<ManualScheduler>,
    pub navigator: Arc<RecordingNavigator>,
}

impl TestHost {
    pub fn browser() -> Self {
        let durable = Arc::new(MemoryArea::default());
        let session = Arc::new(MemoryArea::default());
        let clock = Arc::new(ManualClock::new(START_MILLIS));
        let scheduler = Arc::new(ManualScheduler::new(clock.clone()));
        let navigator = Arc::new(RecordingNavigator::default());
        let host = Host {
            kind: HostKind::Browser,
            durable: durable.clone(),
            session: session.clone(),
            clock: clock.clone(),
            scheduler: scheduler.clone(),
            navigator: navigator.clone(),
        };
        Self { host, durable, session, clock, scheduler, navigator }
    }

    pub fn headless() -> Self {
        let mut test_host = Self::browser();
        test_host.host.kind = HostKind::Headless;
        test_host
    }
}

/// Transport answering from per-route queues and recording every request.
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<HashMap<(Method, String), VecDeque<Result<HttpResponse, TransportError>>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a response for `method path` (path relative to [`BASE_URL`]).
    pub fn respond(&self, method: Method, path: &str, status: u16, body: impl Into<String>) {
        self.push(method, path, Ok(HttpResponse::new(status, body)));
    }

    pub fn fail(&self, method: Method, path: &str, message: &str) {
        self.push(method, path, Err(TransportError(message.to_owned())));
    }

    fn push(&self, method: Method, path: &str, result: Result<HttpResponse, TransportError>) {
        self.routes
            .lock()
            .unwrap()
            .entry((method, format!("{BASE_URL}{path}")))
            .or_default()
            .push_back(result);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        let url = format!("{BASE_URL}{path}");
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .count()
    }
}

impl Transport for FakeTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, Result<HttpResponse, TransportError>> {
        let key = (request.method, request.url.clone());
        self.requests.lock().unwrap().push(request);
        let result = self
            .routes
            .lock()
            .unwrap()
            .get_mut(&key)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Ok(HttpResponse::new(404, r#"{"message":"no route scripted"}"#)));
        Box::pin(std::future::ready(result))
    }
}

pub fn api_client(transport: &Arc<FakeTransport>) -> Arc<ApiClient> {
    Arc::new(ApiClient::new(BASE_URL, transport.clone()))
}

/// Unsigned token with the given JSON payload.
pub fn token_with(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

/// Token for user `user_id` expiring `ttl_secs` after [`START_SECS`].
pub fn token_for(user_id: &str, ttl_secs: i64) -> String {
    token_with(&serde_json::json!({ "user": user_id, "exp": START_SECS + ttl_secs }))
}

pub fn user_json(id: &str, role: &str) -> String {
    serde_json::json!({
        "_id": id,
        "email": format!("{id}@example.com"),
        "username": format!("user-{id}"),
        "role": role,
        "isVerified": true,
    })
    .to_string()
}
