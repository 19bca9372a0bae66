//! Provides the `CurrentClient` for fetching current conditions.
//!
//! Obtained via [`Weatherbit::current()`], it picks the data source of the request.

use crate::request::endpoint::Endpoint;
use crate::request::params::QueryParams;
use crate::response::current::Current;
use crate::weatherbit::Weatherbit;
use crate::WeatherbitError;

/// Fetches current conditions for one location.
///
/// Instances are created by calling [`Weatherbit::current()`].
#[derive(Debug, Clone, Copy)]
pub struct CurrentClient<'a> {
    client: &'a Weatherbit,
}

impl<'a> CurrentClient<'a> {
    pub(crate) fn new(client: &'a Weatherbit) -> Self {
        Self { client }
    }

    /// Current weather observations.
    ///
    /// Set `include` on the parameters to embed a minutely nowcast or active alerts.
    ///
    /// # Errors
    ///
    /// * [`WeatherbitError::RequestValidation`] for a missing location.
    /// * [`WeatherbitError::Transport`], [`WeatherbitError::Remote`] or
    ///   [`WeatherbitError::Parse`] when fetching or mapping fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use weatherbit::{Include, QueryParams, Weatherbit, WeatherbitError};
    /// # fn main() -> Result<(), WeatherbitError> {
    /// let client = Weatherbit::with_api_key("YOUR_KEY")?;
    /// let params = QueryParams::builder()
    ///     .city("Raleigh")
    ///     .country("US")
    ///     .include(vec![Include::Alerts])
    ///     .build();
    ///
    /// let current = client.current().standard(&params)?;
    /// println!("{} active alerts", current.alerts().map_or(0, |a| a.len()));
    /// # Ok(())
    /// # }
    /// ```
    pub fn standard(&self, params: &QueryParams) -> Result<Current, WeatherbitError> {
        self.client.current_conditions(Endpoint::Current, params)
    }

    /// Current air quality: AQI, pollutant concentrations and pollen levels.
    ///
    /// # Errors
    ///
    /// Same as [`CurrentClient::standard`].
    pub fn air_quality(&self, params: &QueryParams) -> Result<Current, WeatherbitError> {
        self.client.current_conditions(Endpoint::CurrentAirQuality, params)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ClientConfig;
    use crate::request::params::QueryParams;
    use crate::transport::spy::SpyTransport;
    use crate::weatherbit::Weatherbit;
    use serde_json::json;

    #[test]
    fn test_air_quality() {
        let spy = SpyTransport::new().respond(
            200,
            json!({"city_name": "Raleigh", "data": [{"aqi": 42, "pm25": 7.5, "pollen_level_tree": 3}]}),
        );
        let config = ClientConfig::builder().api_key("K").build().unwrap();
        let client = Weatherbit::with_transport(config, spy.clone());
        let params = QueryParams::builder().postal_code("27601").country("US").build();

        let current = client.current().air_quality(&params).unwrap();
        assert_eq!(current.count(), None);
        assert_eq!(current.points()[0].aqi, Some(42.0));
        assert_eq!(current.points()[0].pollen_level_tree, Some(3));
        assert_eq!(
            spy.calls(),
            vec![
                "https://api.weatherbit.io/v2.0/current/airquality?key=K&client=weatherbit-rs&postal_code=27601&country=US"
                    .to_string()
            ]
        );
    }
}
