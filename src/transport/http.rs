use crate::request::url_builder::redact_key;
use crate::transport::error::TransportError;
use crate::transport::{RawPayload, Transport};
use bon::bon;
use log::debug;
use reqwest::blocking::Client;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

/// The default [`Transport`]: a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

#[bon]
impl HttpTransport {
    /// Creates the transport.
    ///
    /// # Arguments
    ///
    /// * `timeout` - Total time allowed per request. No limit when omitted.
    /// * `user_agent` - Overrides reqwest's default `User-Agent`.
    ///
    /// # Errors
    ///
    /// [`TransportError::ClientBuild`] if the TLS backend cannot be initialised.
    #[builder]
    pub fn new(
        timeout: Option<Duration>,
        #[builder(into)] user_agent: Option<String>,
    ) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder.build().map_err(TransportError::ClientBuild)?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<RawPayload, TransportError> {
        let redacted = redact_key(url);
        debug!("GET {}", redacted);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| TransportError::Request(redacted.clone(), e.without_url()))?;

        let status = response.status();
        let headers: BTreeMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response
            .bytes()
            .map_err(|e| TransportError::Body(redacted.clone(), e.without_url()))?;

        let json = decode_body(&body, status.is_success())
            .map_err(|e| TransportError::Decode(redacted.clone(), e))?;
        debug!("{} from {} ({} bytes)", status, redacted, body.len());

        Ok(RawPayload {
            url: url.to_string(),
            status: status.as_u16(),
            headers,
            json,
        })
    }
}

/// Empty bodies decode to `Null`. Error responses that are not JSON are kept as text.
fn decode_body(body: &[u8], success: bool) -> Result<Value, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    match serde_json::from_slice(body) {
        Ok(json) => Ok(json),
        Err(_) if !success => Ok(Value::String(String::from_utf8_lossy(body).into_owned())),
        Err(e) => Err(e),
    }
}
