use crate::types::extract::{FieldKind, Number, Text, TextList};
use serde::Serialize;
use serde_json::{Map, Value};

/// Top-level location metadata reported alongside a series.
///
/// Coordinates are sometimes sent as strings; both forms are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeriesLocation {
    pub city_name: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub country_code: Option<String>,
    pub state_code: Option<String>,
    pub timezone: Option<String>,
    /// Reported by history endpoints.
    pub station_id: Option<String>,
    pub sources: Option<Vec<String>>,
}

impl SeriesLocation {
    pub(crate) fn from_object(object: &Map<String, Value>) -> Self {
        // None of these kinds can fail.
        Self {
            city_name: Text::read("city_name", object).ok().flatten(),
            lat: Number::read("lat", object).ok().flatten(),
            lon: Number::read("lon", object).ok().flatten(),
            country_code: Text::read("country_code", object).ok().flatten(),
            state_code: Text::read("state_code", object).ok().flatten(),
            timezone: Text::read("timezone", object).ok().flatten(),
            station_id: Text::read("station_id", object).ok().flatten(),
            sources: TextList::read("sources", object).ok().flatten(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_object() {
        let location = SeriesLocation::from_object(
            json!({
                "city_name": "Raleigh",
                "lat": "35.7796",
                "lon": -78.6382,
                "timezone": "America/New_York",
                "country_code": "US",
                "state_code": "NC",
                "data": []
            })
            .as_object()
            .unwrap(),
        );
        assert_eq!(location.city_name.as_deref(), Some("Raleigh"));
        assert_eq!(location.lat, Some(35.7796));
        assert_eq!(location.lon, Some(-78.6382));
        assert_eq!(location.station_id, None);
    }
}
