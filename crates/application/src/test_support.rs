//! In-memory doubles for the ports, shared by the unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use foodapp_domain::Location;
use parking_lot::Mutex;

use crate::auth::TokenStore;
use crate::http::ApiClient;
use crate::ports::{
    Clock, HttpRequest, HttpResponse, HttpTransport, KeyValueStorage, Navigator,
    NotificationSink, StorageError, TransportError, TransportFuture,
};

#[derive(Debug, Default)]
pub struct MemoryKv {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryKv {
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.values.lock().insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl KeyValueStorage for MemoryKv {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.insert(key, value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values.lock().remove(key);
        Ok(())
    }
}

/// Clock pinned to an instant that tests move by hand.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn at_millis(millis: i64) -> Self {
        Self {
            now: Mutex::new(Utc.timestamp_millis_opt(millis).unwrap()),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now += chrono::Duration::from_std(by).unwrap();
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

/// Transport answering from a queue and recording every request.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.responses
            .lock()
            .push_back(Ok(HttpResponse::new(status, body.as_bytes().to_vec())));
        self
    }

    pub fn fail(&self, error: TransportError) -> &Self {
        self.responses.lock().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests.lock().last().cloned().expect("no request sent")
    }
}

impl HttpTransport for ScriptedTransport {
    fn send(&self, request: HttpRequest) -> TransportFuture<'_> {
        self.requests.lock().push(request);
        let response = self
            .responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::new(200, b"{}".to_vec())));
        Box::pin(async move { response })
    }
}

#[derive(Debug)]
pub struct RecordingNavigator {
    current: Mutex<Location>,
    redirects: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self {
            current: Mutex::new(Location::parse(path).unwrap()),
            redirects: Mutex::new(Vec::new()),
        }
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_location(&self) -> Location {
        self.current.lock().clone()
    }

    fn redirect(&self, target: &str) {
        self.redirects.lock().push(target.to_string());
    }
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    errors: Mutex<Vec<String>>,
    successes: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().clone()
    }

    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn error(&self, message: &str) {
        self.errors.lock().push(message.to_string());
    }

    fn success(&self, message: &str) {
        self.successes.lock().push(message.to_string());
    }
}

/// 2024-01-01T00:00:00Z
pub const EPOCH_MILLIS: i64 = 1_704_067_200_000;

/// A client wired to in-memory doubles, plus handles on each of them.
pub struct Harness {
    pub kv: Arc<MemoryKv>,
    pub clock: Arc<ManualClock>,
    pub transport: Arc<ScriptedTransport>,
    pub navigator: Arc<RecordingNavigator>,
    pub tokens: TokenStore,
    pub client: ApiClient,
}

impl Harness {
    pub fn new() -> Self {
        Self::at("/dict/units")
    }

    pub fn at(path: &str) -> Self {
        let kv = Arc::new(MemoryKv::default());
        let clock = Arc::new(ManualClock::at_millis(EPOCH_MILLIS));
        let transport = Arc::new(ScriptedTransport::default());
        let navigator = Arc::new(RecordingNavigator::at(path));
        let tokens = TokenStore::new(kv.clone(), clock.clone());
        let client = ApiClient::builder()
            .transport(transport.clone())
            .token_store(tokens.clone())
            .navigator(navigator.clone())
            .build()
            .unwrap();
        Self {
            kv,
            clock,
            transport,
            navigator,
            tokens,
            client,
        }
    }

    pub async fn logged_in(self) -> Self {
        self.tokens.set_auth("tok", 3600).await.unwrap();
        self
    }
}
