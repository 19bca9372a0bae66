//! Current-conditions responses.

use crate::error::WeatherbitError;
use crate::projection::error::ProjectionError;
use crate::projection::projector::project;
use crate::request::endpoint::Endpoint;
use crate::request::url_builder::redact_key;
use crate::response::error::ParseError;
use crate::response::{check_status, json_type, parse_points, require_points, root_object};
use crate::transport::RawPayload;
use crate::types::field::{FieldValue, Row};
use crate::types::location::SeriesLocation;
use crate::types::points::alert::AlertPoint;
use crate::types::points::current::CurrentPoint;
use crate::types::points::weather::WeatherPoint;
use crate::weatherbit::Weatherbit;
use log::debug;
use serde_json::{Map, Value};

/// A current-conditions snapshot.
///
/// Besides the observations themselves, the standard endpoint can embed a `minutely`
/// nowcast and active `alerts` when asked for them with `include`.
#[derive(Debug, Clone, PartialEq)]
pub struct Current {
    endpoint: Endpoint,
    count: Option<u64>,
    location: SeriesLocation,
    points: Vec<CurrentPoint>,
    minutely: Option<Vec<WeatherPoint>>,
    alerts: Option<Vec<AlertPoint>>,
    payload: RawPayload,
}

impl Current {
    /// Maps a raw current-conditions payload.
    ///
    /// # Errors
    ///
    /// * [`WeatherbitError::Remote`] for a non-success status.
    /// * [`WeatherbitError::Parse`] when `data` is missing, or `count` is missing from a
    ///   standard current response, or any block is mistyped.
    pub fn from_payload(endpoint: Endpoint, payload: RawPayload) -> Result<Self, WeatherbitError> {
        check_status(&payload)?;
        if payload.is_empty_response() {
            debug!("No data for {}", redact_key(&payload.url));
            return Ok(Self {
                endpoint,
                count: None,
                location: SeriesLocation::default(),
                points: Vec::new(),
                minutely: None,
                alerts: None,
                payload,
            });
        }

        let object = root_object(&payload.json)?;
        let count = read_count(object, endpoint == Endpoint::Current)?;
        let points = require_points::<CurrentPoint>(object, "data")?;
        let minutely = parse_points::<WeatherPoint>(object, "minutely")?;
        let alerts = parse_points::<AlertPoint>(object, "alerts")?;
        let location = SeriesLocation::from_object(object);
        debug!(
            "Parsed {} current points ({} minutely, {} alerts) from {}",
            points.len(),
            minutely.as_ref().map_or(0, Vec::len),
            alerts.as_ref().map_or(0, Vec::len),
            endpoint
        );

        Ok(Self {
            endpoint,
            count,
            location,
            points,
            minutely,
            alerts,
            payload,
        })
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// Number of observations the service reported.
    pub fn count(&self) -> Option<u64> {
        self.count
    }

    pub fn location(&self) -> &SeriesLocation {
        &self.location
    }

    pub fn points(&self) -> &[CurrentPoint] {
        &self.points
    }

    /// The minutely nowcast, if the response carried one.
    pub fn minutely(&self) -> Option<&[WeatherPoint]> {
        self.minutely.as_deref()
    }

    /// Active alerts, if the response carried them.
    pub fn alerts(&self) -> Option<&[AlertPoint]> {
        self.alerts.as_deref()
    }

    pub fn payload(&self) -> &RawPayload {
        &self.payload
    }

    /// Projects the observations into rows.
    ///
    /// Rows are built like [`crate::Series::project`]. When the response carried
    /// `minutely` or `alerts`, each row also gets that block as sparse nested rows.
    /// Alerts on their own are projected with [`Current::project_alerts`].
    pub fn project(&self, fields: Option<&[&str]>) -> Result<Vec<Row>, ProjectionError> {
        let mut rows = project(&self.points, fields)?;
        let minutely = self
            .minutely
            .as_deref()
            .map(|points| project(points, None))
            .transpose()?;
        let alerts = self
            .alerts
            .as_deref()
            .map(|points| project(points, None))
            .transpose()?;

        for row in &mut rows {
            if let Some(minutely) = &minutely {
                row.insert("minutely", FieldValue::Rows(minutely.clone()));
            }
            if let Some(alerts) = &alerts {
                row.insert("alerts", FieldValue::Rows(alerts.clone()));
            }
        }
        Ok(rows)
    }

    /// Projects the embedded alerts. Empty when the response carried none.
    pub fn project_alerts(&self, fields: Option<&[&str]>) -> Result<Vec<Row>, ProjectionError> {
        project(self.alerts.as_deref().unwrap_or_default(), fields)
    }

    /// Re-requests the originating URL and replaces the snapshot. On error it is left untouched.
    pub fn refresh(&mut self, client: &Weatherbit) -> Result<(), WeatherbitError> {
        let payload = client.fetch(&self.payload.url)?;
        *self = Self::from_payload(self.endpoint, payload)?;
        Ok(())
    }
}

fn read_count(object: &Map<String, Value>, required: bool) -> Result<Option<u64>, ParseError> {
    match object.get("count") {
        None | Some(Value::Null) if required => Err(ParseError::MissingKey { key: "count" }),
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) if n.as_u64().is_some() => Ok(n.as_u64()),
        Some(other) => Err(ParseError::UnexpectedType {
            key: "count".to_string(),
            expected: "a non-negative integer",
            found: json_type(other),
        }),
    }
}
