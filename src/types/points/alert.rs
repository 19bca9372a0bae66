use crate::response::error::ParseError;
use crate::types::extract::define_point;
use crate::types::field::{FieldSpec, FieldValue, PointKind};
use crate::types::points::Point;
use chrono::NaiveDateTime;
use serde_json::{Map, Value};

define_point! {
    /// A severe weather alert, from the alerts endpoint or embedded in current conditions.
    pub struct AlertPoint;
    derived {}
    fields {
        effective_utc: NaiveDateTime as Timestamp,
        effective_local: NaiveDateTime as Timestamp,
        title: String as Text,
        description: String as Text,
        severity: String as Text,
        expires_utc: NaiveDateTime as Timestamp,
        expires_local: NaiveDateTime as Timestamp,
        onset_utc: NaiveDateTime as Timestamp,
        onset_local: NaiveDateTime as Timestamp,
        ends_utc: NaiveDateTime as Timestamp,
        ends_local: NaiveDateTime as Timestamp,
        uri: String as Text,
        regions: Vec<String> as TextList,
    }
}

impl Point for AlertPoint {
    const KIND: PointKind = PointKind::Alert;
    const KEY_FIELDS: &'static [&'static str] = &["effective_utc", "effective_local"];
    type Key = Option<NaiveDateTime>;

    fn fields() -> &'static [FieldSpec] {
        Self::FIELDS
    }

    fn from_object(object: &Map<String, Value>) -> Result<Self, ParseError> {
        Self::extract_fields(object)
    }

    fn ordering_key(&self) -> Self::Key {
        self.effective_utc
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
    fn test_alert() {
        let alert = AlertPoint::from_object(
            json!({
                "title": "Flood Watch",
                "severity": "Watch",
                "effective_utc": "2024-04-01T12:00:00",
                "expires_utc": "2024-04-02T00:00:00",
                "regions": ["Wake", "Durham"]
            })
            .as_object()
            .unwrap(),
        )
        .unwrap();
        assert_eq!(alert.title.as_deref(), Some("Flood Watch"));
        assert!(alert.ordering_key().is_some());
        assert_eq!(alert.regions.map(|r| r.len()), Some(2));
    }

    #[test]
    fn test_malformed_expiry() {
        let err = AlertPoint::from_object(json!({"expires_utc": "tomorrow"}).as_object().unwrap())
            .unwrap_err();
        assert!(matches!(err, ParseError::MalformedTimestamp { field: "expires_utc", .. }));
    }

    #[test]
    fn test_every_field_is_read_from_json() {
        let alert = AlertPoint::from_object(
            json!({"uri": "https://example.org/a", "ends_local": "2024-04-02T08:00:00"})
                .as_object()
                .unwrap(),
        )
        .unwrap();
        assert_eq!(alert.uri.as_deref(), Some("https://example.org/a"));
        assert!(alert.ends_local.is_some());
        assert_eq!(alert.effective_utc, None);
    }
}
