#![allow(dead_code)]

use std::sync::{Mutex, Once};

use autocomplete_engine::{FailureKind, FetchError, Transport};
use serde_json::{json, Value};
use tokio::sync::oneshot;

type Reply = Result<Value, FetchError>;

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(widget_logging::initialize_for_tests);
}

pub fn docs(names: &[&str]) -> Value {
    let docs: Vec<_> = names.iter().map(|name| json!({ "name": name })).collect();
    json!({ "data": { "docs": docs } })
}

/// Transport whose calls stay pending until the test resolves them, in any order.
#[derive(Default)]
pub struct ScriptedTransport {
    urls: Mutex<Vec<String>>,
    replies: Mutex<Vec<Option<oneshot::Sender<Reply>>>>,
}

impl ScriptedTransport {
    pub fn call_count(&self) -> usize {
        self.urls.lock().unwrap().len()
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }

    /// Completes call `index`. Returns false when the caller already gave up on it.
    pub fn resolve(&self, index: usize, reply: Reply) -> bool {
        let sender = self.replies.lock().unwrap()[index]
            .take()
            .expect("call resolved twice");
        sender.send(reply).is_ok()
    }
}

#[async_trait::async_trait]
impl Transport for ScriptedTransport {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let (tx, rx) = oneshot::channel();
        self.urls.lock().unwrap().push(url.to_string());
        self.replies.lock().unwrap().push(Some(tx));
        rx.await
            .unwrap_or_else(|_| Err(FetchError::new(FailureKind::Network, "script dropped")))
    }
}

/// Transport that answers every call immediately with the same body.
pub struct ImmediateTransport {
    pub body: Value,
    pub calls: Mutex<usize>,
}

impl ImmediateTransport {
    pub fn new(body: Value) -> Self {
        Self {
            body,
            calls: Mutex::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl Transport for ImmediateTransport {
    async fn get_json(&self, _url: &str) -> Result<Value, FetchError> {
        *self.calls.lock().unwrap() += 1;
        Ok(self.body.clone())
    }
}

pub async fn wait_for_calls(transport: &ScriptedTransport, expected: usize) {
    for _ in 0..100 {
        if transport.call_count() >= expected {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!(
        "expected {expected} transport calls, saw {}",
        transport.call_count()
    );
}

/// Lets spawned tasks run until they block.
pub async fn settle_tasks() {
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
}
