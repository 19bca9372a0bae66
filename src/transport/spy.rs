//! An offline transport for tests: replays canned responses and records every URL.

use crate::transport::error::TransportError;
use crate::transport::{RawPayload, Transport};
use serde_json::Value;
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};

/// Queued responses; `None` stands for an undecodable body.
type Responses = VecDeque<Option<(u16, Value)>>;

#[derive(Clone, Default)]
pub(crate) struct SpyTransport {
    responses: Arc<Mutex<Responses>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl SpyTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queues a response. Responses are served in order; the last one repeats.
    pub(crate) fn respond(self, status: u16, json: Value) -> Self {
        self.responses.lock().unwrap().push_back(Some((status, json)));
        self
    }

    /// Queues a response whose body cannot be decoded.
    pub(crate) fn fail(self) -> Self {
        self.responses.lock().unwrap().push_back(None);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for SpyTransport {
    fn get(&self, url: &str) -> Result<RawPayload, TransportError> {
        self.calls.lock().unwrap().push(url.to_string());
        let mut responses = self.responses.lock().unwrap();
        let next = if responses.len() > 1 {
            responses.pop_front().unwrap()
        } else {
            responses.front().cloned().unwrap_or(Some((200, Value::Null)))
        };
        let Some((status, json)) = next else {
            let err = serde_json::from_str::<Value>("{").unwrap_err();
            return Err(TransportError::Decode(url.to_string(), err));
        };
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        Ok(RawPayload {
            url: url.to_string(),
            status,
            headers,
            json,
        })
    }
}
