use crate::response::error::ParseError;
use crate::types::extract::define_point;
use crate::types::field::{FieldSpec, FieldValue, PointKind};
use crate::types::points::Point;
use serde_json::{Map, Value};

define_point! {
    /// One climate normals sample. Hourly normals carry `hour`, monthly ones lack `day`.
    pub struct NormalsPoint;
    derived {}
    fields {
        month: i64 as Integer,
        day: i64 as Integer,
        hour: i64 as Integer,
        temp: f64 as Number,
        max_temp: f64 as Number,
        min_temp: f64 as Number,
        dewpt: f64 as Number,
        wind_spd: f64 as Number,
        max_wind_spd: f64 as Number,
        min_wind_spd: f64 as Number,
        wind_dir: f64 as Number,
        precip: f64 as Number,
        snow: f64 as Number,
    }
}

impl Point for NormalsPoint {
    const KIND: PointKind = PointKind::Normals;
    const KEY_FIELDS: &'static [&'static str] = &["month", "day", "hour"];
    type Key = (Option<i64>, Option<i64>, Option<i64>);

    fn fields() -> &'static [FieldSpec] {
        Self::FIELDS
    }

    fn from_object(object: &Map<String, Value>) -> Result<Self, ParseError> {
        Self::extract_fields(object)
    }

    fn ordering_key(&self) -> Self::Key {
        (self.month, self.day, self.hour)
    }

    fn value(&self, field: &str) -> Option<FieldValue> {
        self.field_value(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ordering_key() {
        let point = NormalsPoint::from_object(
            json!({"month": 2, "day": 14, "temp": 5.1}).as_object().unwrap(),
        )
        .unwrap();
        assert_eq!(point.ordering_key(), (Some(2), Some(14), None));
        assert_eq!(point.value("day"), Some(FieldValue::Integer(14)));
    }
}
