//! Mapping of raw payloads into sorted point collections.

pub mod current;
pub mod error;
pub mod series;

use crate::error::WeatherbitError;
use crate::request::url_builder::redact_key;
use crate::response::error::ParseError;
use crate::transport::RawPayload;
use crate::types::points::Point;
use log::warn;
use serde_json::{Map, Value};

/// Fails with [`WeatherbitError::Remote`] unless the status is 2xx.
pub(crate) fn check_status(payload: &RawPayload) -> Result<(), WeatherbitError> {
    if payload.is_success() {
        return Ok(());
    }
    let url = redact_key(&payload.url);
    warn!("Weatherbit returned HTTP {} for {}", payload.status, url);
    Err(WeatherbitError::Remote {
        status: payload.status,
        url,
        body: payload.json.clone(),
    })
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub(crate) fn root_object(json: &Value) -> Result<&Map<String, Value>, ParseError> {
    json.as_object().ok_or_else(|| ParseError::UnexpectedType {
        key: "response".to_string(),
        expected: "an object",
        found: json_type(json),
    })
}

/// Parses the array under `key`, sorted by ordering key. `None` if the key is absent or null.
pub(crate) fn parse_points<P: Point>(
    object: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<Vec<P>>, ParseError> {
    let items = match object.get(key) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(ParseError::UnexpectedType {
                key: key.to_string(),
                expected: "an array",
                found: json_type(other),
            })
        }
    };

    let mut points = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let item = item.as_object().ok_or_else(|| ParseError::UnexpectedType {
            key: format!("{}[{}]", key, index),
            expected: "an object",
            found: json_type(item),
        })?;
        points.push(P::from_object(item)?);
    }
    sort_points(&mut points);
    Ok(Some(points))
}

/// Stable: points with equal keys keep their arrival order.
pub(crate) fn sort_points<P: Point>(points: &mut [P]) {
    points.sort_by_key(|point| point.ordering_key());
}

pub(crate) fn require_points<P: Point>(
    object: &Map<String, Value>,
    key: &'static str,
) -> Result<Vec<P>, ParseError> {
    parse_points(object, key)?.ok_or(ParseError::MissingKey { key })
}
