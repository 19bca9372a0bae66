use crate::response::error::ParseError;
use crate::types::extract::{define_point, CalendarStamp, FieldKind, Timestamp};
use crate::types::field::{FieldSpec, FieldValue, PointKind};
use crate::types::points::Point;
use crate::types::weather_summary::WeatherSummary;
use chrono::NaiveDateTime;
use serde_json::{Map, Value};

define_point! {
    /// One sample of a forecast, history or minutely series.
    ///
    /// Covers the standard, air quality and agricultural variables; which ones are
    /// present depends on the endpoint queried. Every field is optional.
    pub struct WeatherPoint;
    derived {
        /// From `valid_date` if present, else `datetime`. Dates without an hour read as midnight.
        datetime: NaiveDateTime as CalendarStamp,
        /// Falls back to `datetime` unless both timestamps are reported.
        timestamp_utc: NaiveDateTime as Timestamp,
        timestamp_local: NaiveDateTime as Timestamp,
    }
    fields {
        ts: i64 as Integer,
        revision_status: String as Text,
        weather: WeatherSummary as Summary,
        pod: String as Text,

        temp: f64 as Number,
        app_temp: f64 as Number,
        max_temp: f64 as Number,
        min_temp: f64 as Number,
        high_temp: f64 as Number,
        low_temp: f64 as Number,
        app_max_temp: f64 as Number,
        app_min_temp: f64 as Number,
        dewpt: f64 as Number,
        rh: f64 as Number,
        pres: f64 as Number,
        slp: f64 as Number,

        precip: f64 as Number,
        precip_rate: f64 as Number,
        pop: f64 as Number,
        snow: f64 as Number,
        snow_depth: f64 as Number,

        wind_spd: f64 as Number,
        wind_gust_spd: f64 as Number,
        wind_dir: f64 as Number,
        wind_cdir: String as Text,
        wind_cdir_full: String as Text,
        max_wind_spd: f64 as Number,
        max_wind_dir: f64 as Number,
        max_wind_ts: i64 as Integer,

        clouds: f64 as Number,
        clouds_hi: f64 as Number,
        clouds_mid: f64 as Number,
        clouds_low: f64 as Number,
        vis: f64 as Number,
        ozone: f64 as Number,

        uv: f64 as Number,
        max_uv: f64 as Number,
        ghi: f64 as Number,
        t_ghi: f64 as Number,
        max_ghi: f64 as Number,
        dni: f64 as Number,
        t_dni: f64 as Number,
        max_dni: f64 as Number,
        dhi: f64 as Number,
        t_dhi: f64 as Number,
        max_dhi: f64 as Number,
        solar_rad: f64 as Number,
        t_solar_rad: f64 as Number,
        elev_angle: f64 as Number,
        azimuth: f64 as Number,

        moon_phase: f64 as Number,
        moon_phase_lunation: f64 as Number,
        moonrise_ts: i64 as Integer,
        moonset_ts: i64 as Integer,
        sunrise_ts: i64 as Integer,
        sunset_ts: i64 as Integer,

        aqi: f64 as Number,
        pm25: f64 as Number,
        pm10: f64 as Number,
        o3: f64 as Number,
        no2: f64 as Number,
        so2: f64 as Number,
        co: f64 as Number,

        bulk_soil_density: f64 as Number,
        skin_temp_max: f64 as Number,
        skin_temp_avg: f64 as Number,
        skin_temp_min: f64 as Number,
        temp_2m_avg: f64 as Number,
        specific_humidity: f64 as Number,
        evapotranspiration: f64 as Number,
        pres_avg: f64 as Number,
        wind_10m_spd_avg: f64 as Number,
        dlwrf_avg: f64 as Number,
        dlwrf_max: f64 as Number,
        dlwrf_net: f64 as Number,
        dswrf_avg: f64 as Number,
        dswrf_max: f64 as Number,
        dswrf_net: f64 as Number,
        soilm_0_10cm: f64 as Number,
        soilm_10_40cm: f64 as Number,
        soilm_40_100cm: f64 as Number,
        soilm_100_200cm: f64 as Number,
        v_soilm_0_10cm: f64 as Number,
        v_soilm_10_40cm: f64 as Number,
        v_soilm_40_100cm: f64 as Number,
        v_soilm_100_200cm: f64 as Number,
        soilt_0_10cm: f64 as Number,
        soilt_10_40cm: f64 as Number,
        soilt_40_100cm: f64 as Number,
        soilt_100_200cm: f64 as Number,
    }
}

/// Whether `key` holds a usable (non-null, non-empty) value.
pub(crate) fn is_present(object: &Map<String, Value>, key: &str) -> bool {
    match object.get(key) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

impl Point for WeatherPoint {
    const KIND: PointKind = PointKind::Weather;
    const KEY_FIELDS: &'static [&'static str] = &["datetime", "timestamp_utc", "timestamp_local"];
    type Key = Option<NaiveDateTime>;

    fn fields() -> &'static [FieldSpec] {
        Self::FIELDS
    }

    fn from_object(object: &Map<String, Value>) -> Result<Self, ParseError> {
        let mut point = Self::extract_fields(object)?;

        point.datetime = if is_present(object, "valid_date") {
            CalendarStamp::read("valid_date", object)?
        } else {
            CalendarStamp::read("datetime", object)?
        };

        if is_present(object, "timestamp_utc") && is_present(object, "timestamp_local") {
            point.timestamp_utc = Timestamp::read("timestamp_utc", object)?;
            point.timestamp_local = Timestamp::read("timestamp_local", object)?;
        } else {
            point.timestamp_utc = point.datetime;
            point.timestamp_local = point.datetime;
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

    fn parse(value: Value) -> Result<WeatherPoint, ParseError> {
        WeatherPoint::from_object(value.as_object().unwrap())
    }

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_daily_forecast_point() {
        let point = parse(json!({
            "valid_date": "2024-01-02",
            "datetime": "2024-01-02",
            "ts": 1704153600,
            "temp": 12.4,
            "max_temp": "15",
            "weather": {"icon": "r01d", "code": 500, "description": "Light rain"},
            "snow": null
        }))
        .unwrap();
        assert_eq!(point.datetime, Some(at(2, 0)));
        // No timestamps on daily points: both fall back to the date.
        assert_eq!(point.timestamp_utc, Some(at(2, 0)));
        assert_eq!(point.timestamp_local, Some(at(2, 0)));
        assert_eq!(point.temp, Some(12.4));
        assert_eq!(point.max_temp, Some(15.0));
        assert_eq!(point.snow, None);
        assert_eq!(point.weather.unwrap().code, Some(500));
    }

    #[test]
    fn test_valid_date_wins_over_datetime() {
        let point = parse(json!({"valid_date": "2024-01-05", "datetime": "2024-01-04:23"})).unwrap();
        assert_eq!(point.datetime, Some(at(5, 0)));
    }

    #[test]
    fn test_hourly_point_uses_its_timestamps() {
        let point = parse(json!({
            "datetime": "2024-01-02:05",
            "timestamp_utc": "2024-01-02T05:00:00",
            "timestamp_local": "2024-01-02T00:00:00"
        }))
        .unwrap();
        assert_eq!(point.datetime, Some(at(2, 5)));
        assert_eq!(point.timestamp_utc, Some(at(2, 5)));
        assert_eq!(point.timestamp_local, Some(at(2, 0)));
    }

    #[test]
    fn test_single_timestamp_is_ignored() {
        let point = parse(json!({
            "datetime": "2024-01-02:05",
            "timestamp_utc": "2024-01-02T05:00:00"
        }))
        .unwrap();
        assert_eq!(point.timestamp_utc, Some(at(2, 5)));
        assert_eq!(point.timestamp_local, Some(at(2, 5)));
    }

    #[test]
    fn test_malformed_datetime() {
        let err = parse(json!({"datetime": "02/01/2024"})).unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedTimestamp {
                field: "datetime",
                value: "02/01/2024".to_string(),
                expected: "YYYY-MM-DD"
            }
        );
    }

    #[test]
    fn test_catalog_lists_key_fields_first() {
        let names: Vec<&str> = WeatherPoint::FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(&names[..3], WeatherPoint::KEY_FIELDS);
        assert!(names.contains(&"soilt_100_200cm"));
        assert!(!names.contains(&"valid_date"));
    }

    #[test]
    fn test_value_lookup() {
        let point = parse(json!({"datetime": "2024-01-02", "pod": "d"})).unwrap();
        assert_eq!(point.value("pod"), Some(FieldValue::Text("d".to_string())));
        assert_eq!(point.value("temp"), Some(FieldValue::Null));
        assert_eq!(point.value("no_such_field"), None);
    }

    #[test]
    fn test_extraction_leaves_derived_fields_unset() {
        let object = json!({"datetime": "2024-01-02", "timestamp_utc": "2024-01-02T00:00:00", "temp": 4});
        let point = WeatherPoint::extract_fields(object.as_object().unwrap()).unwrap();
        assert_eq!(point.datetime, None);
        assert_eq!(point.timestamp_utc, None);
        assert_eq!(point.temp, Some(4.0));
    }
}
