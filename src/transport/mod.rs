//! The seam between the client and the network.

pub mod error;
pub mod http;
#[cfg(test)]
pub(crate) mod spy;

use crate::transport::error::TransportError;
use serde_json::Value;
use std::collections::BTreeMap;

/// A decoded HTTP response: status, headers, originating URL and JSON body.
///
/// Error bodies that are not JSON are kept as a JSON string. An empty body is `Null`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPayload {
    /// The requested URL, API key included. Redact it before logging.
    pub url: String,
    pub status: u16,
    /// Header names are lower-case.
    pub headers: BTreeMap<String, String>,
    pub json: Value,
}

impl RawPayload {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 204: the query matched no data.
    pub fn is_empty_response(&self) -> bool {
        self.status == 204
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Performs `GET url` and returns the decoded response.
///
/// Implementations must return non-success statuses as a normal [`RawPayload`];
/// only failures to obtain a response at all are errors.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<RawPayload, TransportError>;
}
