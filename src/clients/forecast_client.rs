//! Provides the `ForecastClient` for fetching forecasts.
//!
//! Obtained via [`Weatherbit::forecast()`], it picks the data source of the request.

use crate::request::endpoint::Endpoint;
use crate::request::params::QueryParams;
use crate::response::series::Forecast;
use crate::weatherbit::Weatherbit;
use crate::WeatherbitError;

/// Fetches forecasts for one location.
///
/// Instances are created by calling [`Weatherbit::forecast()`].
#[derive(Debug, Clone, Copy)]
pub struct ForecastClient<'a> {
    client: &'a Weatherbit,
}

impl<'a> ForecastClient<'a> {
    pub(crate) fn new(client: &'a Weatherbit) -> Self {
        Self { client }
    }

    /// The standard weather forecast.
    ///
    /// The granularity comes from `params.granularity`, falling back to the client's
    /// `forecast_granularity`. Daily forecasts accept `days`, hourly ones `hours`.
    ///
    /// # Errors
    ///
    /// * [`WeatherbitError::RequestValidation`] for a missing location or a granularity
    ///   other than daily, hourly or minutely.
    /// * [`WeatherbitError::Transport`], [`WeatherbitError::Remote`] or
    ///   [`WeatherbitError::Parse`] when fetching or mapping fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use weatherbit::{Granularity, QueryParams, Weatherbit, WeatherbitError};
    /// # fn main() -> Result<(), WeatherbitError> {
    /// let client = Weatherbit::with_api_key("YOUR_KEY")?;
    /// let params = QueryParams::builder()
    ///     .lat(35.78)
    ///     .lon(-78.64)
    ///     .granularity(Granularity::Hourly)
    ///     .hours(24)
    ///     .build();
    ///
    /// let forecast = client.forecast().standard(&params)?;
    /// let rows = forecast.project(Some(&["temp", "precip"]))?;
    /// println!("{} hours", rows.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn standard(&self, params: &QueryParams) -> Result<Forecast, WeatherbitError> {
        self.client.series(Endpoint::Forecast, params)
    }

    /// Hourly air quality forecast.
    ///
    /// # Errors
    ///
    /// Same as [`ForecastClient::standard`]; only hourly granularity is accepted.
    pub fn air_quality(&self, params: &QueryParams) -> Result<Forecast, WeatherbitError> {
        self.client.series(Endpoint::ForecastAirQuality, params)
    }

    /// Daily agricultural forecast: soil temperature and moisture, evapotranspiration.
    ///
    /// # Errors
    ///
    /// Same as [`ForecastClient::standard`], plus
    /// [`RequestValidationError::LatLonRequired`](crate::RequestValidationError::LatLonRequired)
    /// for any locator other than lat/lon.
    pub fn ag_weather(&self, params: &QueryParams) -> Result<Forecast, WeatherbitError> {
        self.client.series(Endpoint::ForecastAgWeather, params)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ClientConfig;
    use crate::request::endpoint::Granularity;
    use crate::request::error::RequestValidationError;
    use crate::request::params::QueryParams;
    use crate::transport::spy::SpyTransport;
    use crate::weatherbit::Weatherbit;
    use crate::WeatherbitError;
    use serde_json::json;

    fn client(spy: &SpyTransport) -> Weatherbit {
        let config = ClientConfig::builder()
            .api_key("K")
            .forecast_granularity(Granularity::Hourly)
            .build()
            .unwrap();
        Weatherbit::with_transport(config, spy.clone())
    }

    #[test]
    fn test_configured_granularity() {
        let spy = SpyTransport::new().respond(200, json!({"data": []}));
        let params = QueryParams::builder().city("Raleigh").hours(12).days(3).build();
        client(&spy).forecast().standard(&params).unwrap();
        assert_eq!(
            spy.calls(),
            vec!["https://api.weatherbit.io/v2.0/forecast/hourly?key=K&client=weatherbit-rs&city=Raleigh&hours=12".to_string()]
        );
    }

    #[test]
    fn test_ag_weather_needs_coordinates() {
        let spy = SpyTransport::new();
        let params = QueryParams::builder().city("Raleigh").build();
        let err = client(&spy).forecast().ag_weather(&params).unwrap_err();
        assert!(matches!(
            err,
            WeatherbitError::RequestValidation(RequestValidationError::LatLonRequired { given: "city", .. })
        ));
        assert!(spy.calls().is_empty());
    }

    #[test]
    fn test_air_quality_forecast() {
        let spy = SpyTransport::new().respond(
            200,
            json!({"data": [
                {"timestamp_utc": "2024-05-01T01:00:00", "timestamp_local": "2024-04-30T21:00:00", "aqi": 40},
                {"timestamp_utc": "2024-05-01T00:00:00", "timestamp_local": "2024-04-30T20:00:00", "aqi": 38}
            ]}),
        );
        let params = QueryParams::builder().city_id(4487042).hours(2).build();
        let forecast = client(&spy).forecast().air_quality(&params).unwrap();
        let aqi: Vec<_> = forecast.iter().filter_map(|p| p.aqi).collect();
        assert_eq!(aqi, vec![38.0, 40.0]);
        assert_eq!(
            spy.calls(),
            vec!["https://api.weatherbit.io/v2.0/forecast/airquality?key=K&client=weatherbit-rs&city_id=4487042&hours=2".to_string()]
        );
    }
}
