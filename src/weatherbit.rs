//! The main entry point: a configured client that builds URLs, fetches them and maps
//! the responses.

use crate::clients::current_client::CurrentClient;
use crate::clients::forecast_client::ForecastClient;
use crate::clients::history_client::HistoryClient;
use crate::config::ClientConfig;
use crate::error::WeatherbitError;
use crate::request::endpoint::Endpoint;
use crate::request::params::QueryParams;
use crate::request::url_builder::build_url;
use crate::response::current::Current;
use crate::response::series::{Alerts, Normals, Series};
use crate::transport::http::HttpTransport;
use crate::transport::{RawPayload, Transport};
use crate::types::points::Point;
use std::fmt;

/// The Weatherbit client.
///
/// Holds an immutable [`ClientConfig`] and a [`Transport`]. Every operation validates
/// its parameters before anything is sent, so a bad request never reaches the network.
///
/// Endpoints are grouped the way the service groups them: [`Weatherbit::current`],
/// [`Weatherbit::forecast`] and [`Weatherbit::history`] return small sub-clients with
/// one method per data source, while normals and alerts are plain methods.
///
/// # Examples
///
/// ```no_run
/// use weatherbit::{QueryParams, Weatherbit, WeatherbitError};
///
/// # fn main() -> Result<(), WeatherbitError> {
/// let client = Weatherbit::with_api_key("YOUR_KEY")?;
/// let params = QueryParams::builder().city("Raleigh").state("NC").build();
///
/// let forecast = client.forecast().standard(&params)?;
/// for point in &forecast {
///     println!("{:?}: {:?}", point.datetime, point.temp);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Weatherbit {
    config: ClientConfig,
    transport: Box<dyn Transport>,
}

impl Weatherbit {
    /// Creates a client that talks to the service over a default [`HttpTransport`].
    ///
    /// # Errors
    ///
    /// [`WeatherbitError::Transport`] if the HTTP client cannot be initialised.
    pub fn new(config: ClientConfig) -> Result<Self, WeatherbitError> {
        let transport = HttpTransport::builder().build()?;
        Ok(Self::with_transport(config, transport))
    }

    /// Creates a client with the default configuration for `api_key`.
    ///
    /// # Errors
    ///
    /// [`WeatherbitError::Configuration`] for a blank key, or
    /// [`WeatherbitError::Transport`] if the HTTP client cannot be initialised.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, WeatherbitError> {
        let config = ClientConfig::builder().api_key(api_key).build()?;
        Self::new(config)
    }

    /// Creates a client that sends its requests through `transport`.
    ///
    /// ```
    /// use weatherbit::{ClientConfig, HttpTransport, Weatherbit};
    /// use std::time::Duration;
    ///
    /// let config = ClientConfig::builder().api_key("KEY").build().unwrap();
    /// let transport = HttpTransport::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()
    ///     .unwrap();
    /// let client = Weatherbit::with_transport(config, transport);
    /// assert_eq!(client.config().api_host(), "api.weatherbit.io");
    /// ```
    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        Self {
            config,
            transport: Box::new(transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds the URL an operation on `endpoint` would request, without sending it.
    ///
    /// # Errors
    ///
    /// [`WeatherbitError::RequestValidation`] for parameters the endpoint cannot accept.
    pub fn build_url(&self, endpoint: Endpoint, params: &QueryParams) -> Result<String, WeatherbitError> {
        Ok(build_url(&self.config, endpoint, params)?)
    }

    /// Current conditions. See [`CurrentClient`].
    pub fn current(&self) -> CurrentClient<'_> {
        CurrentClient::new(self)
    }

    /// Forecasts. See [`ForecastClient`].
    pub fn forecast(&self) -> ForecastClient<'_> {
        ForecastClient::new(self)
    }

    /// Historical observations. See [`HistoryClient`].
    pub fn history(&self) -> HistoryClient<'_> {
        HistoryClient::new(self)
    }

    /// Climate normals between `start_day` and `end_day` (`MM-DD`).
    ///
    /// The granularity (`daily` by default, or `hourly`/`monthly`) is sent as `tp`.
    ///
    /// # Errors
    ///
    /// * [`WeatherbitError::RequestValidation`] without a lat/lon locator, without both
    ///   days, or for a day that is not `MM-DD`.
    /// * [`WeatherbitError::Transport`], [`WeatherbitError::Remote`] or
    ///   [`WeatherbitError::Parse`] when fetching or mapping fails.
    pub fn normals(&self, params: &QueryParams) -> Result<Normals, WeatherbitError> {
        self.series(Endpoint::Normals, params)
    }

    /// Severe weather alerts active for a location.
    ///
    /// # Errors
    ///
    /// * [`WeatherbitError::RequestValidation`] for a missing location.
    /// * [`WeatherbitError::Transport`], [`WeatherbitError::Remote`] or
    ///   [`WeatherbitError::Parse`] when fetching or mapping fails.
    pub fn alerts(&self, params: &QueryParams) -> Result<Alerts, WeatherbitError> {
        self.series(Endpoint::Alerts, params)
    }

    pub(crate) fn series<P: Point>(
        &self,
        endpoint: Endpoint,
        params: &QueryParams,
    ) -> Result<Series<P>, WeatherbitError> {
        let url = build_url(&self.config, endpoint, params)?;
        let payload = self.fetch(&url)?;
        Series::from_payload(endpoint, payload)
    }

    pub(crate) fn current_conditions(
        &self,
        endpoint: Endpoint,
        params: &QueryParams,
    ) -> Result<Current, WeatherbitError> {
        let url = build_url(&self.config, endpoint, params)?;
        let payload = self.fetch(&url)?;
        Current::from_payload(endpoint, payload)
    }

    pub(crate) fn fetch(&self, url: &str) -> Result<RawPayload, WeatherbitError> {
        Ok(self.transport.get(url)?)
    }
}

impl fmt::Debug for Weatherbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Weatherbit")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
