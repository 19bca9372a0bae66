//! The per-call query parameters.

use crate::request::endpoint::Granularity;
use crate::request::query_date::DateParam;
use bon::Builder;
use std::fmt;

/// Unit system of the returned measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Units {
    /// Celsius, m/s, mm. The service default.
    #[default]
    Metric,
    /// Kelvin, m/s, mm.
    Scientific,
    /// Fahrenheit, mph, in.
    Imperial,
}

impl Units {
    pub(crate) fn code(&self) -> &'static str {
        match self {
            Units::Metric => "M",
            Units::Scientific => "S",
            Units::Imperial => "I",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Extra blocks the current-conditions endpoint can embed in its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Include {
    /// A minute-by-minute precipitation nowcast (`minutely`).
    Minutely,
    /// Active severe weather alerts (`alerts`).
    Alerts,
}

impl Include {
    pub(crate) fn code(&self) -> &'static str {
        match self {
            Include::Minutely => "minutely",
            Include::Alerts => "alerts",
        }
    }
}

/// Optional parameters of one request.
///
/// Any combination may be set; the URL builder picks the locator by priority and
/// drops (with a warning) parameters the chosen endpoint does not understand.
///
/// # Examples
///
/// ```
/// use weatherbit::{Granularity, QueryParams, Units};
///
/// let params = QueryParams::builder()
///     .city("Raleigh")
///     .state("NC")
///     .country("US")
///     .granularity(Granularity::Hourly)
///     .hours(48)
///     .units(Units::Imperial)
///     .build();
/// assert_eq!(params.city.as_deref(), Some("Raleigh"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder)]
pub struct QueryParams {
    /// Overrides the endpoint's default granularity. Sent as `tp` to the normals endpoint.
    pub granularity: Option<Granularity>,

    pub lat: Option<f64>,
    pub lon: Option<f64>,
    #[builder(into)]
    pub city: Option<String>,
    #[builder(into)]
    pub state: Option<String>,
    #[builder(into)]
    pub country: Option<String>,
    pub city_id: Option<u64>,
    #[builder(into)]
    pub station: Option<String>,
    #[builder(into)]
    pub postal_code: Option<String>,

    /// Number of forecast days (daily forecast only).
    pub days: Option<u32>,
    /// Number of forecast hours (hourly and air quality forecasts).
    pub hours: Option<u32>,
    pub units: Option<Units>,
    #[builder(default)]
    pub include: Vec<Include>,

    #[builder(into)]
    pub start_date: Option<DateParam>,
    #[builder(into)]
    pub end_date: Option<DateParam>,
    /// First day of a normals range, `MM-DD`.
    #[builder(into)]
    pub start_day: Option<String>,
    /// Last day of a normals range, `MM-DD`.
    #[builder(into)]
    pub end_day: Option<String>,
    /// Anchors normals timestamps to this year.
    pub series_year: Option<i32>,
}
