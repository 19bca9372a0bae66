//! Multi-point responses: forecasts, history, normals and alerts.

use crate::error::WeatherbitError;
use crate::projection::error::ProjectionError;
use crate::projection::projector::project;
use crate::request::endpoint::{Endpoint, EndpointFamily};
use crate::request::url_builder::redact_key;
use crate::response::{check_status, require_points, root_object};
use crate::transport::RawPayload;
use crate::types::field::Row;
use crate::types::location::SeriesLocation;
use crate::types::points::alert::AlertPoint;
use crate::types::points::normals::NormalsPoint;
use crate::types::points::weather::WeatherPoint;
use crate::types::points::Point;
use crate::weatherbit::Weatherbit;
use log::debug;

/// An ordered sequence of points from one response, with its location metadata.
///
/// Points are sorted by their ordering key when the series is built and after every
/// [`Series::refresh`]. The raw payload is kept so the series can be refreshed.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<P> {
    endpoint: Endpoint,
    location: SeriesLocation,
    points: Vec<P>,
    payload: RawPayload,
}

pub type Forecast = Series<WeatherPoint>;
pub type History = Series<WeatherPoint>;
pub type Normals = Series<NormalsPoint>;
pub type Alerts = Series<AlertPoint>;

impl<P: Point> Series<P> {
    /// Maps a raw payload into a series.
    ///
    /// Points are read from `alerts` for the alerts endpoint and from `data` otherwise.
    /// A 204 response yields an empty series.
    ///
    /// # Errors
    ///
    /// * [`WeatherbitError::Remote`] for a non-success status.
    /// * [`WeatherbitError::Parse`] for a missing or mistyped structural key, or a
    ///   malformed temporal literal.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use std::collections::BTreeMap;
    /// use weatherbit::{Endpoint, Forecast, RawPayload};
    ///
    /// let payload = RawPayload {
    ///     url: "https://api.weatherbit.io/v2.0/forecast/daily?key=K&city=Raleigh".into(),
    ///     status: 200,
    ///     headers: BTreeMap::new(),
    ///     json: json!({"city_name": "Raleigh", "data": [
    ///         {"datetime": "2024-01-03", "temp": 12},
    ///         {"datetime": "2024-01-01", "temp": 10}
    ///     ]}),
    /// };
    /// let forecast = Forecast::from_payload(Endpoint::Forecast, payload).unwrap();
    /// assert_eq!(forecast.points()[0].temp, Some(10.0));
    /// assert_eq!(forecast.location().city_name.as_deref(), Some("Raleigh"));
    /// ```
    pub fn from_payload(endpoint: Endpoint, payload: RawPayload) -> Result<Self, WeatherbitError> {
        check_status(&payload)?;
        if payload.is_empty_response() {
            debug!("No data for {}", redact_key(&payload.url));
            return Ok(Self {
                endpoint,
                location: SeriesLocation::default(),
                points: Vec::new(),
                payload,
            });
        }

        let object = root_object(&payload.json)?;
        let key = match endpoint.family() {
            EndpointFamily::Alerts => "alerts",
            _ => "data",
        };
        let points = require_points::<P>(object, key)?;
        let location = SeriesLocation::from_object(object);
        debug!("Parsed {} {}s from {}", points.len(), P::KIND, endpoint);

        Ok(Self {
            endpoint,
            location,
            points,
            payload,
        })
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn location(&self) -> &SeriesLocation {
        &self.location
    }

    /// The points, sorted ascending by ordering key.
    pub fn points(&self) -> &[P] {
        &self.points
    }

    pub fn into_points(self) -> Vec<P> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.points.iter()
    }

    /// The response this series was built from.
    pub fn payload(&self) -> &RawPayload {
        &self.payload
    }

    /// Projects the points into rows. See [`project`] for the sparse and dense forms.
    ///
    /// # Errors
    ///
    /// [`ProjectionError::UnknownField`] for a name outside the point kind's catalog.
    pub fn project(&self, fields: Option<&[&str]>) -> Result<Vec<Row>, ProjectionError> {
        project(&self.points, fields)
    }

    /// Re-requests the URL this series came from and replaces its contents.
    ///
    /// On error the series is left untouched.
    pub fn refresh(&mut self, client: &Weatherbit) -> Result<(), WeatherbitError> {
        let payload = client.fetch(&self.payload.url)?;
        *self = Self::from_payload(self.endpoint, payload)?;
        Ok(())
    }
}

impl<'a, P> IntoIterator for &'a Series<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::request::params::QueryParams;
    use crate::response::error::ParseError;
    use crate::transport::spy::SpyTransport;
    use chrono::NaiveDate;
    use serde_json::{json, Value};
    use std::collections::BTreeMap;

    fn payload(status: u16, json: Value) -> RawPayload {
        RawPayload {
            url: "https://api.weatherbit.io/v2.0/forecast/daily?key=K&client=weatherbit-rs&city=Raleigh"
                .to_string(),
            status,
            headers: BTreeMap::new(),
            json,
        }
    }

    fn day(d: u32) -> Option<chrono::NaiveDateTime> {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap().and_hms_opt(0, 0, 0)
    }

    #[test]
    fn test_forecast_points_are_sorted() {
        let forecast = Forecast::from_payload(
            Endpoint::Forecast,
            payload(
                200,
                json!({"data": [
                    {"datetime": "2024-01-01", "temp": 10},
                    {"datetime": "2024-01-03", "temp": 12},
                    {"datetime": "2024-01-02", "temp": 11}
                ]}),
            ),
        )
        .unwrap();
        let dates: Vec<_> = forecast.iter().map(|p| p.datetime).collect();
        assert_eq!(dates, vec![day(1), day(2), day(3)]);
        assert!(forecast
            .points()
            .windows(2)
            .all(|w| w[0].ordering_key() <= w[1].ordering_key()));
    }

    #[test]
    fn test_missing_data_key() {
        let err = Forecast::from_payload(Endpoint::Forecast, payload(200, json!({"city_name": "Raleigh"})))
            .unwrap_err();
        assert!(matches!(
            err,
            WeatherbitError::Parse(ParseError::MissingKey { key: "data" })
        ));
    }

    #[test]
    fn test_remote_error_carries_body() {
        let err = Forecast::from_payload(
            Endpoint::Forecast,
            payload(400, json!({"error": "Invalid Parameters supplied."})),
        )
        .unwrap_err();
        match err {
            WeatherbitError::Remote { status, url, body } => {
                assert_eq!(status, 400);
                assert!(url.contains("key=***"));
                assert_eq!(body, json!({"error": "Invalid Parameters supplied."}));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_no_content_is_an_empty_series() {
        let history = History::from_payload(Endpoint::History, payload(204, Value::Null)).unwrap();
        assert!(history.is_empty());
        assert_eq!(history.project(None).unwrap(), Vec::<Row>::new());
    }

    #[test]
    fn test_alerts_read_the_alerts_key() {
        let alerts = Alerts::from_payload(
            Endpoint::Alerts,
            payload(
                200,
                json!({"city_name": "Raleigh", "alerts": [
                    {"title": "B", "effective_utc": "2024-04-02T00:00:00"},
                    {"title": "A", "effective_utc": "2024-04-01T00:00:00"}
                ]}),
            ),
        )
        .unwrap();
        let titles: Vec<_> = alerts.iter().filter_map(|a| a.title.as_deref()).collect();
        assert_eq!(titles, vec!["A", "B"]);

        let rows = alerts.project(None).unwrap();
        assert_eq!(
            rows[0].keys().copied().collect::<Vec<_>>(),
            vec!["effective_utc", "effective_local", "title"]
        );
    }

    #[test]
    fn test_normals_sort_by_month_day_hour() {
        let normals = Normals::from_payload(
            Endpoint::Normals,
            payload(
                200,
                json!({"data": [
                    {"month": 2, "day": 1, "temp": 3},
                    {"month": 1, "day": 31, "temp": 1},
                    {"month": 1, "day": 2, "temp": 2}
                ]}),
            ),
        )
        .unwrap();
        let keys: Vec<_> = normals.iter().map(|p| (p.month, p.day)).collect();
        assert_eq!(keys, vec![(Some(1), Some(2)), (Some(1), Some(31)), (Some(2), Some(1))]);

        let rows = normals.project(Some(&["temp"])).unwrap();
        assert_eq!(rows[1]["day"], crate::types::field::FieldValue::Integer(31));
    }

    #[test]
    fn test_refresh_replaces_points() {
        let spy = SpyTransport::new()
            .respond(200, json!({"data": [{"datetime": "2024-01-01", "temp": 10}]}))
            .respond(
                200,
                json!({"data": [
                    {"datetime": "2024-01-02", "temp": 11},
                    {"datetime": "2024-01-03", "temp": 12}
                ]}),
            );
        let config = ClientConfig::builder().api_key("K").build().unwrap();
        let client = Weatherbit::with_transport(config, spy.clone());
        let params = QueryParams::builder().city("Raleigh").build();

        let mut forecast = client.forecast().standard(&params).unwrap();
        assert_eq!(forecast.len(), 1);

        forecast.refresh(&client).unwrap();
        assert_eq!(forecast.len(), 2);
        assert_eq!(forecast.points()[0].datetime, day(2));

        let calls = spy.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
    }

    #[test]
    fn test_failed_refresh_keeps_contents() {
        let spy = SpyTransport::new()
            .respond(200, json!({"data": [{"datetime": "2024-01-01", "temp": 10}]}))
            .respond(500, json!({"error": "Internal error"}));
        let config = ClientConfig::builder().api_key("K").build().unwrap();
        let client = Weatherbit::with_transport(config, spy);
        let params = QueryParams::builder().city("Raleigh").build();

        let mut forecast = client.forecast().standard(&params).unwrap();
        let before = forecast.clone();
        assert!(matches!(
            forecast.refresh(&client),
            Err(WeatherbitError::Remote { status: 500, .. })
        ));
        assert_eq!(forecast, before);
    }

    #[test]
    fn test_failed_transport_keeps_contents() {
        let spy = SpyTransport::new()
            .respond(200, json!({"data": [{"datetime": "2024-01-01", "temp": 10}]}))
            .fail()
            .respond(200, json!({"data": []}));
        let config = ClientConfig::builder().api_key("K").build().unwrap();
        let client = Weatherbit::with_transport(config, spy);
        let params = QueryParams::builder().city("Raleigh").build();

        let mut forecast = client.forecast().standard(&params).unwrap();
        assert!(matches!(
            forecast.refresh(&client),
            Err(WeatherbitError::Transport(_))
        ));
        assert_eq!(forecast.len(), 1);
    }
}
