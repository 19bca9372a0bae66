//! Field catalog primitives: what a field is called, what it holds, and its projected value.

use crate::types::weather_summary::WeatherSummary;
use chrono::{NaiveDateTime, NaiveTime};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// The kinds of point the service returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointKind {
    /// A forecast, history or minutely sample.
    Weather,
    /// One current-conditions observation.
    Current,
    /// A climate normals sample.
    Normals,
    /// A severe weather alert.
    Alert,
}

impl fmt::Display for PointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PointKind::Weather => "weather point",
            PointKind::Current => "current point",
            PointKind::Normals => "normals point",
            PointKind::Alert => "alert point",
        };
        write!(f, "{}", name)
    }
}

/// The value type of a catalog field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Number,
    Integer,
    Text,
    /// A `{icon, code, description}` weather summary.
    Weather,
    TextList,
    DateTime,
    Time,
}

/// One entry of a point kind's field catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub field_type: FieldType,
}

/// A single projected value.
///
/// Serializes to plain JSON: `null`, numbers, strings, arrays, or objects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Number(f64),
    Integer(i64),
    Text(String),
    Weather(WeatherSummary),
    List(Vec<String>),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
    /// Nested rows, used for the `minutely` and `alerts` blocks of current conditions.
    Rows(Vec<Row>),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            FieldValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Converts into a `serde_json::Value`.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// One projected point: field name to value, in catalog order.
pub type Row = IndexMap<&'static str, FieldValue>;
