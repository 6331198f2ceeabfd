#![allow(dead_code)]

use async_trait::async_trait;
use recipe_sync::{ApiRequest, SessionContext, Transport, TransportError};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const SERVER: &str = "http://localhost:3000";
pub const USERNAME: &str = "ann";

pub fn session() -> Arc<SessionContext> {
    Arc::new(SessionContext::new(SERVER, USERNAME).unwrap())
}

/// In-memory transport: replays queued replies in order and records every request
#[derive(Default)]
pub struct RecordingTransport {
    replies: Mutex<VecDeque<Result<Option<Value>, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn replying(reply: Result<Option<Value>, TransportError>) -> Arc<Self> {
        let transport = Self::new();
        transport.push(reply);
        transport
    }

    pub fn push(&self, reply: Result<Option<Value>, TransportError>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<Option<Value>, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(None))
    }
}

/// Transport whose requests never complete; only cancellation ends them
pub struct StalledTransport;

#[async_trait]
impl Transport for StalledTransport {
    async fn send(&self, _request: ApiRequest) -> Result<Option<Value>, TransportError> {
        std::future::pending().await
    }
}

pub fn network_error() -> TransportError {
    TransportError::Network("connection refused".to_string())
}
