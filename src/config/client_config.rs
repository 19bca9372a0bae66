//! Immutable client configuration.

use crate::config::error::ConfigurationError;
use crate::request::endpoint::{Endpoint, Granularity};
use crate::request::url_builder::describe_granularities;
use bon::bon;
use std::fmt;
use url::Url;

pub const DEFAULT_API_HOST: &str = "api.weatherbit.io";
pub const DEFAULT_API_VERSION: &str = "v2.0";
pub const DEFAULT_CLIENT_TAG: &str = "weatherbit-rs";

/// URL scheme used to reach the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Protocol {
    Http,
    #[default]
    Https,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Http => write!(f, "http"),
            Protocol::Https => write!(f, "https"),
        }
    }
}

/// Settings shared by every request a [`crate::Weatherbit`] client makes.
///
/// Validated once at construction and immutable afterwards.
///
/// # Examples
///
/// ```
/// use weatherbit::{ClientConfig, Granularity};
///
/// let config = ClientConfig::builder()
///     .api_key("my-key")
///     .forecast_granularity(Granularity::Hourly)
///     .build()
///     .unwrap();
/// assert_eq!(config.base_url(), "https://api.weatherbit.io/v2.0");
/// assert_eq!(config.forecast_granularity(), Granularity::Hourly);
/// ```
#[derive(Clone, PartialEq)]
pub struct ClientConfig {
    api_key: String,
    forecast_granularity: Granularity,
    history_granularity: Granularity,
    protocol: Protocol,
    api_host: String,
    api_version: String,
    client_tag: String,
    base_url: String,
}

#[bon]
impl ClientConfig {
    /// Builds and validates a configuration.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Sent as `key` on every request. Must not be blank.
    /// * `forecast_granularity` - Default for the standard forecast endpoint. Defaults to daily.
    /// * `history_granularity` - Default for the standard history endpoint. Defaults to hourly.
    /// * `protocol` - Defaults to https.
    /// * `api_host` - Defaults to `api.weatherbit.io`.
    /// * `api_version` - Defaults to `v2.0`.
    /// * `client_tag` - Sent as `client` on every request. Defaults to `weatherbit-rs`.
    ///
    /// # Errors
    ///
    /// * [`ConfigurationError::MissingApiKey`] for an empty or whitespace-only key.
    /// * [`ConfigurationError::InvalidGranularity`] when a default granularity is not
    ///   accepted by its endpoint (e.g. a subhourly forecast).
    /// * [`ConfigurationError::InvalidBaseUrl`] when protocol, host and version do not
    ///   form a valid URL.
    #[builder]
    pub fn new(
        #[builder(into)] api_key: String,
        #[builder(default = Granularity::Daily)] forecast_granularity: Granularity,
        #[builder(default = Granularity::Hourly)] history_granularity: Granularity,
        #[builder(default)] protocol: Protocol,
        #[builder(into, default = DEFAULT_API_HOST.to_string())] api_host: String,
        #[builder(into, default = DEFAULT_API_VERSION.to_string())] api_version: String,
        #[builder(into, default = DEFAULT_CLIENT_TAG.to_string())] client_tag: String,
    ) -> Result<Self, ConfigurationError> {
        if api_key.trim().is_empty() {
            return Err(ConfigurationError::MissingApiKey);
        }
        check_granularity("forecast_granularity", Endpoint::Forecast, forecast_granularity)?;
        check_granularity("history_granularity", Endpoint::History, history_granularity)?;

        let base_url = format!(
            "{}://{}/{}",
            protocol,
            api_host.trim_end_matches('/'),
            api_version.trim_matches('/')
        );
        Url::parse(&base_url).map_err(|e| ConfigurationError::InvalidBaseUrl(base_url.clone(), e))?;

        Ok(Self {
            api_key,
            forecast_granularity,
            history_granularity,
            protocol,
            api_host,
            api_version,
            client_tag,
            base_url,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn forecast_granularity(&self) -> Granularity {
        self.forecast_granularity
    }

    pub fn history_granularity(&self) -> Granularity {
        self.history_granularity
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn api_host(&self) -> &str {
        &self.api_host
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn client_tag(&self) -> &str {
        &self.client_tag
    }

    /// `protocol://host/version`, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn check_granularity(
    setting: &'static str,
    endpoint: Endpoint,
    granularity: Granularity,
) -> Result<(), ConfigurationError> {
    let allowed = endpoint.allowed_granularities();
    if allowed.contains(&granularity) {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidGranularity {
            setting,
            granularity,
            allowed: describe_granularities(allowed),
        })
    }
}

// Keeps the key out of debug output.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"***")
            .field("forecast_granularity", &self.forecast_granularity)
            .field("history_granularity", &self.history_granularity)
            .field("base_url", &self.base_url)
            .field("client_tag", &self.client_tag)
            .finish()
    }
}
