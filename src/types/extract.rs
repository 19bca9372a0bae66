//! Typed, lenient extraction of point fields from JSON objects.
//!
//! Each marker type below knows how to read one kind of field. Absent and `null`
//! values are `None`; values of an unexpected JSON type are `None` as well, except for
//! temporal fields, whose literals must match their format.

use crate::response::error::ParseError;
use crate::types::field::{FieldType, FieldValue};
use crate::types::temporal::TemporalFormat;
use crate::types::weather_summary::WeatherSummary;
use chrono::{NaiveDateTime, NaiveTime};
use serde_json::{Map, Value};

pub(crate) trait FieldKind {
    type Value;
    const FIELD_TYPE: FieldType;

    fn parse(field: &'static str, json: &Value) -> Result<Option<Self::Value>, ParseError>;

    fn to_field_value(value: &Self::Value) -> FieldValue;

    fn read(
        field: &'static str,
        object: &Map<String, Value>,
    ) -> Result<Option<Self::Value>, ParseError> {
        match object.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(json) => Self::parse(field, json),
        }
    }

    fn project(value: &Option<Self::Value>) -> FieldValue {
        value.as_ref().map_or(FieldValue::Null, Self::to_field_value)
    }
}

pub(crate) struct Number;
pub(crate) struct Integer;
pub(crate) struct Text;
pub(crate) struct Summary;
pub(crate) struct TextList;
/// `YYYY-MM-DD` or `YYYY-MM-DD:HH`, picked per value.
pub(crate) struct CalendarStamp;
/// Strictly `YYYY-MM-DD:HH`.
pub(crate) struct HourlyStamp;
pub(crate) struct Timestamp;
/// `HH:MM`.
pub(crate) struct ClockTime;

impl FieldKind for Number {
    type Value = f64;
    const FIELD_TYPE: FieldType = FieldType::Number;

    fn parse(_field: &'static str, json: &Value) -> Result<Option<f64>, ParseError> {
        let number = match json {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        Ok(number.filter(|n| n.is_finite()))
    }

    fn to_field_value(value: &f64) -> FieldValue {
        FieldValue::Number(*value)
    }
}

impl FieldKind for Integer {
    type Value = i64;
    const FIELD_TYPE: FieldType = FieldType::Integer;

    fn parse(_field: &'static str, json: &Value) -> Result<Option<i64>, ParseError> {
        let integer = match json {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        Ok(integer)
    }

    fn to_field_value(value: &i64) -> FieldValue {
        FieldValue::Integer(*value)
    }
}

impl FieldKind for Text {
    type Value = String;
    const FIELD_TYPE: FieldType = FieldType::Text;

    fn parse(_field: &'static str, json: &Value) -> Result<Option<String>, ParseError> {
        Ok(match json {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
    }

    fn to_field_value(value: &String) -> FieldValue {
        FieldValue::Text(value.clone())
    }
}

impl FieldKind for Summary {
    type Value = WeatherSummary;
    const FIELD_TYPE: FieldType = FieldType::Weather;

    fn parse(_field: &'static str, json: &Value) -> Result<Option<WeatherSummary>, ParseError> {
        Ok(WeatherSummary::from_json(json))
    }

    fn to_field_value(value: &WeatherSummary) -> FieldValue {
        FieldValue::Weather(value.clone())
    }
}

impl FieldKind for TextList {
    type Value = Vec<String>;
    const FIELD_TYPE: FieldType = FieldType::TextList;

    fn parse(_field: &'static str, json: &Value) -> Result<Option<Vec<String>>, ParseError> {
        Ok(match json {
            Value::Array(items) => Some(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect(),
            ),
            Value::String(s) => Some(vec![s.clone()]),
            _ => None,
        })
    }

    fn to_field_value(value: &Vec<String>) -> FieldValue {
        FieldValue::List(value.clone())
    }
}

/// Shared handling of temporal literals: empty strings count as absent, anything
/// that is not a string is malformed.
fn temporal_text<'a>(
    field: &'static str,
    json: &'a Value,
    format: TemporalFormat,
) -> Result<Option<&'a str>, ParseError> {
    match json {
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s.as_str())),
        other => Err(ParseError::MalformedTimestamp {
            field,
            value: other.to_string(),
            expected: format.pattern(),
        }),
    }
}

fn read_datetime(
    field: &'static str,
    json: &Value,
    format: impl Fn(&str) -> TemporalFormat,
    nominal: TemporalFormat,
) -> Result<Option<NaiveDateTime>, ParseError> {
    match temporal_text(field, json, nominal)? {
        Some(text) => format(text).parse_datetime(field, text).map(Some),
        None => Ok(None),
    }
}

impl FieldKind for CalendarStamp {
    type Value = NaiveDateTime;
    const FIELD_TYPE: FieldType = FieldType::DateTime;

    fn parse(field: &'static str, json: &Value) -> Result<Option<NaiveDateTime>, ParseError> {
        read_datetime(
            field,
            json,
            TemporalFormat::for_calendar_literal,
            TemporalFormat::Date,
        )
    }

    fn to_field_value(value: &NaiveDateTime) -> FieldValue {
        FieldValue::DateTime(*value)
    }
}

impl FieldKind for HourlyStamp {
    type Value = NaiveDateTime;
    const FIELD_TYPE: FieldType = FieldType::DateTime;

    fn parse(field: &'static str, json: &Value) -> Result<Option<NaiveDateTime>, ParseError> {
        read_datetime(
            field,
            json,
            |_| TemporalFormat::DateHour,
            TemporalFormat::DateHour,
        )
    }

    fn to_field_value(value: &NaiveDateTime) -> FieldValue {
        FieldValue::DateTime(*value)
    }
}

impl FieldKind for Timestamp {
    type Value = NaiveDateTime;
    const FIELD_TYPE: FieldType = FieldType::DateTime;

    fn parse(field: &'static str, json: &Value) -> Result<Option<NaiveDateTime>, ParseError> {
        read_datetime(
            field,
            json,
            |_| TemporalFormat::Timestamp,
            TemporalFormat::Timestamp,
        )
    }

    fn to_field_value(value: &NaiveDateTime) -> FieldValue {
        FieldValue::DateTime(*value)
    }
}

impl FieldKind for ClockTime {
    type Value = NaiveTime;
    const FIELD_TYPE: FieldType = FieldType::Time;

    fn parse(field: &'static str, json: &Value) -> Result<Option<NaiveTime>, ParseError> {
        let format = TemporalFormat::ClockTime;
        match temporal_text(field, json, format)? {
            Some(text) => format.parse_time(field, text).map(Some),
            None => Ok(None),
        }
    }

    fn to_field_value(value: &NaiveTime) -> FieldValue {
        FieldValue::Time(*value)
    }
}

/// Declares a point struct together with its field catalog.
///
/// Fields under `derived` are computed by the point's own constructor; fields under
/// `fields` are read straight from the JSON key of the same name. Both end up in
/// `FIELDS`, derived ones first, in declaration order.
macro_rules! define_point {
    (
        $(#[$meta:meta])*
        pub struct $name:ident;
        derived {
            $( $(#[$dmeta:meta])* $dfield:ident : $dty:ty as $dkind:ident ),* $(,)?
        }
        fields {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty as $kind:ident ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
        pub struct $name {
            $(
                $(#[$dmeta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $dfield: Option<$dty>,
            )*
            $(
                $(#[$fmeta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            /// Every field this point kind can carry, in projection order.
            pub const FIELDS: &'static [$crate::types::field::FieldSpec] = &[
                $(
                    $crate::types::field::FieldSpec {
                        name: stringify!($dfield),
                        field_type: <$crate::types::extract::$dkind as $crate::types::extract::FieldKind>::FIELD_TYPE,
                    },
                )*
                $(
                    $crate::types::field::FieldSpec {
                        name: stringify!($field),
                        field_type: <$crate::types::extract::$kind as $crate::types::extract::FieldKind>::FIELD_TYPE,
                    },
                )*
            ];

            fn extract_fields(
                object: &serde_json::Map<String, serde_json::Value>,
            ) -> Result<Self, $crate::response::error::ParseError> {
                Ok(Self {
                    $( $dfield: None, )*
                    $(
                        $field: <$crate::types::extract::$kind as $crate::types::extract::FieldKind>::read(
                            stringify!($field),
                            object,
                        )?,
                    )*
                })
            }

            fn field_value(&self, name: &str) -> Option<$crate::types::field::FieldValue> {
                use $crate::types::extract::FieldKind;
                match name {
                    $(
                        stringify!($dfield) => Some($crate::types::extract::$dkind::project(&self.$dfield)),
                    )*
                    $(
                        stringify!($field) => Some($crate::types::extract::$kind::project(&self.$field)),
                    )*
                    _ => None,
                }
            }
        }
    };
}

pub(crate) use define_point;
