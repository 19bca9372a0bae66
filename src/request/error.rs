use crate::request::endpoint::{Endpoint, EndpointFamily, Granularity, Source};
use thiserror::Error;

/// A request that cannot be turned into a URL. Raised before any network access.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RequestValidationError {
    #[error("No location given; expected one of lat/lon, city, city_id, station or postal_code")]
    MissingLocation,

    #[error("The {endpoint} endpoint only accepts a lat/lon location, got {given}")]
    LatLonRequired {
        endpoint: Endpoint,
        given: &'static str,
    },

    #[error("Coordinates out of range: lat={lat}, lon={lon}")]
    InvalidCoordinates { lat: f64, lon: f64 },

    #[error("Unknown granularity '{0}'")]
    UnknownGranularity(String),

    #[error("Unsupported granularity '{granularity}' for the {endpoint} endpoint (allowed: {allowed})")]
    UnsupportedGranularity {
        endpoint: Endpoint,
        granularity: Granularity,
        allowed: String,
    },

    #[error("The {family} endpoint family has no {data_source} source")]
    UnsupportedEndpoint {
        family: EndpointFamily,
        data_source: Source,
    },

    #[error("The {endpoint} endpoint requires both start_date and end_date")]
    MissingDateRange { endpoint: Endpoint },

    #[error("The {endpoint} endpoint requires both start_day and end_day")]
    MissingDayRange { endpoint: Endpoint },

    #[error("Invalid {param} '{value}', expected YYYY-MM-DD or YYYY-MM-DD:HH")]
    InvalidDate { param: &'static str, value: String },

    #[error("start_date ({start}) is after end_date ({end})")]
    InvertedDateRange { start: String, end: String },

    #[error("Invalid {param} '{value}', expected a calendar day in MM-DD format")]
    InvalidDayFormat { param: &'static str, value: String },
}
