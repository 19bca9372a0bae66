use crate::response::error::ParseError;
use crate::types::extract::{define_point, FieldKind, HourlyStamp, Timestamp};
use crate::types::field::{FieldSpec, FieldValue, PointKind};
use crate::types::points::weather::is_present;
use crate::types::points::Point;
use crate::types::weather_summary::WeatherSummary;
use chrono::{NaiveDateTime, NaiveTime};
use serde_json::{Map, Value};

define_point! {
    /// One current-conditions observation, from the standard or air quality endpoint.
    pub struct CurrentPoint;
    derived {
        /// Observation hour, `YYYY-MM-DD:HH`.
        datetime: NaiveDateTime as HourlyStamp,
        /// Equals `datetime` unless both timestamps are reported.
        timestamp_utc: NaiveDateTime as Timestamp,
        /// Only set when both timestamps are reported.
        timestamp_local: NaiveDateTime as Timestamp,
    }
    fields {
        city_name: String as Text,
        lat: f64 as Number,
        lon: f64 as Number,
        country_code: String as Text,
        state_code: String as Text,
        timezone: String as Text,
        station: String as Text,
        sources: Vec<String> as TextList,
        ob_time: String as Text,
        ts: i64 as Integer,

        weather: WeatherSummary as Summary,
        pod: String as Text,
        temp: f64 as Number,
        app_temp: f64 as Number,
        dewpt: f64 as Number,
        rh: f64 as Number,
        pres: f64 as Number,
        slp: f64 as Number,
        precip: f64 as Number,
        snow: f64 as Number,
        wind_spd: f64 as Number,
        wind_dir: f64 as Number,
        wind_cdir: String as Text,
        wind_cdir_full: String as Text,
        clouds: f64 as Number,
        visibility: f64 as Number,
        vis: f64 as Number,

        sunrise: NaiveTime as ClockTime,
        sunset: NaiveTime as ClockTime,
        uv: f64 as Number,
        ghi: f64 as Number,
        dni: f64 as Number,
        dhi: f64 as Number,
        solar_rad: f64 as Number,
        elev_angle: f64 as Number,
        h_angle: f64 as Number,

        aqi: f64 as Number,
        pm25: f64 as Number,
        pm10: f64 as Number,
        o3: f64 as Number,
        no2: f64 as Number,
        so2: f64 as Number,
        co: f64 as Number,
        pollen_level_tree: i64 as Integer,
        pollen_level_grass: i64 as Integer,
        pollen_level_weed: i64 as Integer,
        mold_level: i64 as Integer,
        predominant_pollen_type: String as Text,
    }
}

impl Point for CurrentPoint {
    const KIND: PointKind = PointKind::Current;
    const KEY_FIELDS: &'static [&'static str] = &["datetime", "timestamp_utc", "timestamp_local"];
    type Key = Option<NaiveDateTime>;

    fn fields() -> &'static [FieldSpec] {
        Self::FIELDS
    }

    fn from_object(object: &Map<String, Value>) -> Result<Self, ParseError> {
        let mut point = Self::extract_fields(object)?;
        point.datetime = HourlyStamp::read("datetime", object)?;

        if is_present(object, "timestamp_utc") && is_present(object, "timestamp_local") {
            point.timestamp_utc = Timestamp::read("timestamp_utc", object)?;
            point.timestamp_local = Timestamp::read("timestamp_local", object)?;
        } else {
            point.timestamp_utc = point.datetime;
            point.timestamp_local = None;
        }
        Ok(point)
    }

    fn ordering_key(&self) -> Self::Key {
        self.timestamp_utc
    }

    fn value(&self, field: &str) -> Option<FieldValue> {
        self.field_value(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn parse(value: Value) -> Result<CurrentPoint, ParseError> {
        CurrentPoint::from_object(value.as_object().unwrap())
    }

    #[test]
    fn test_current_observation() {
        let point = parse(json!({
            "city_name": "Raleigh",
            "state_code": "NC",
            "country_code": "US",
            "datetime": "2024-03-10:14",
            "sunrise": "11:25",
            "sunset": "23:14",
            "temp": 18.3,
            "sources": ["KRDU", "radar"],
            "weather": {"icon": "c01d", "code": 800, "description": "Clear sky"}
        }))
        .unwrap();
        let hour = NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        assert_eq!(point.datetime, Some(hour));
        assert_eq!(point.timestamp_utc, Some(hour));
        assert_eq!(point.timestamp_local, None);
        assert_eq!(point.sunrise, NaiveTime::from_hms_opt(11, 25, 0));
        assert_eq!(point.city_name.as_deref(), Some("Raleigh"));
        assert_eq!(point.sources.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_current_datetime_requires_an_hour() {
        assert!(matches!(
            parse(json!({"datetime": "2024-03-10"})),
            Err(ParseError::MalformedTimestamp { field: "datetime", expected: "YYYY-MM-DD:HH", .. })
        ));
    }

    #[test]
    fn test_sunrise_format() {
        assert!(matches!(
            parse(json!({"sunrise": "6am"})),
            Err(ParseError::MalformedTimestamp { field: "sunrise", expected: "HH:MM", .. })
        ));
    }

    #[test]
    fn test_both_timestamps() {
        let point = parse(json!({
            "datetime": "2024-03-10:14",
            "timestamp_utc": "2024-03-10T14:00:00",
            "timestamp_local": "2024-03-10T10:00:00"
        }))
        .unwrap();
        assert_eq!(
            point.value("timestamp_local").and_then(|v| v.as_datetime()),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap().and_hms_opt(10, 0, 0)
        );
    }
}
