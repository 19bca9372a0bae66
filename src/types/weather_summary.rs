use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `weather` object attached to most points: icon, condition code and description.
///
/// The code is defined by the service (e.g. 800 for clear sky, 500 for light rain).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub icon: Option<String>,
    pub code: Option<i64>,
    pub description: Option<String>,
}

impl WeatherSummary {
    /// Reads a summary from a JSON object, tolerating a code sent as a string.
    /// Anything other than an object yields `None`.
    pub(crate) fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let code = match object.get("code") {
            Some(Value::Number(n)) => n.as_i64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        };
        Some(Self {
            icon: object.get("icon").and_then(Value::as_str).map(str::to_string),
            code,
            description: object
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json() {
        let summary = WeatherSummary::from_json(&json!({
            "icon": "c02d",
            "code": "802",
            "description": "Scattered clouds"
        }))
        .unwrap();
        assert_eq!(summary.code, Some(802));
        assert_eq!(summary.icon.as_deref(), Some("c02d"));

        assert_eq!(WeatherSummary::from_json(&json!("sunny")), None);
    }
}
