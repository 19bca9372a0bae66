//! Provides the `HistoryClient` for fetching historical observations.

use crate::request::endpoint::Endpoint;
use crate::request::params::QueryParams;
use crate::response::series::History;
use crate::weatherbit::Weatherbit;
use crate::WeatherbitError;

/// Fetches historical observations for one location and date range.
///
/// Instances are created by calling [`Weatherbit::history()`]. Every method requires
/// both `start_date` and `end_date`.
#[derive(Debug, Clone, Copy)]
pub struct HistoryClient<'a> {
    client: &'a Weatherbit,
}

impl<'a> HistoryClient<'a> {
    pub(crate) fn new(client: &'a Weatherbit) -> Self {
        Self { client }
    }

    /// Standard historical weather, at `params.granularity` or the client's
    /// `history_granularity`.
    ///
    /// # Errors
    ///
    /// * [`WeatherbitError::RequestValidation`] for a missing location, a missing or
    ///   inverted date range, or a granularity other than subhourly, hourly or daily.
    /// * [`WeatherbitError::Transport`], [`WeatherbitError::Remote`] or
    ///   [`WeatherbitError::Parse`] when fetching or mapping fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use weatherbit::{Granularity, QueryParams, Weatherbit, WeatherbitError};
    /// use chrono::NaiveDate;
    ///
    /// # fn main() -> Result<(), WeatherbitError> {
    /// let client = Weatherbit::with_api_key("YOUR_KEY")?;
    /// let params = QueryParams::builder()
    ///     .station("KRDU")
    ///     .granularity(Granularity::Daily)
    ///     .start_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    ///     .end_date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
    ///     .build();
    ///
    /// let history = client.history().standard(&params)?;
    /// println!("{} days", history.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn standard(&self, params: &QueryParams) -> Result<History, WeatherbitError> {
        self.client.series(Endpoint::History, params)
    }

    /// Hourly historical air quality.
    ///
    /// # Errors
    ///
    /// Same as [`HistoryClient::standard`]; only hourly granularity is accepted.
    pub fn air_quality(&self, params: &QueryParams) -> Result<History, WeatherbitError> {
        self.client.series(Endpoint::HistoryAirQuality, params)
    }

    /// Daily historical agricultural data. Requires a lat/lon locator.
    ///
    /// # Errors
    ///
    /// Same as [`HistoryClient::standard`].
    pub fn ag_weather(&self, params: &QueryParams) -> Result<History, WeatherbitError> {
        self.client.series(Endpoint::HistoryAgWeather, params)
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
    fn test_ag_weather_history() {
        let spy = SpyTransport::new().respond(
            200,
            json!({"lat": 35.78, "lon": -78.64, "data": [
                {"valid_date": "2024-01-02", "soilt_0_10cm": 6.5},
                {"valid_date": "2024-01-01", "soilt_0_10cm": 6.1}
            ]}),
        );
        let config = ClientConfig::builder().api_key("K").build().unwrap();
        let client = Weatherbit::with_transport(config, spy.clone());
        let params = QueryParams::builder()
            .lat(35.78)
            .lon(-78.64)
            .start_date("2024-01-01")
            .end_date("2024-01-03")
            .build();

        let history = client.history().ag_weather(&params).unwrap();
        let soil: Vec<_> = history.iter().filter_map(|p| p.soilt_0_10cm).collect();
        assert_eq!(soil, vec![6.1, 6.5]);
        assert_eq!(
            spy.calls(),
            vec![
                "https://api.weatherbit.io/v2.0/history/agweather?key=K&client=weatherbit-rs&lat=35.78&lon=-78.64&start_date=2024-01-01&end_date=2024-01-03"
                    .to_string()
            ]
        );
    }
}
