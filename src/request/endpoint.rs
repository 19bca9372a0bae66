//! Defines the Weatherbit endpoint variants and the sampling granularities they accept.

use crate::request::error::RequestValidationError;
use std::fmt;
use std::str::FromStr;

/// The sampling resolution of a time series.
///
/// Which values an endpoint accepts is given by [`Endpoint::allowed_granularities`].
///
/// # Examples
///
/// ```
/// use weatherbit::Granularity;
///
/// assert_eq!(Granularity::Hourly.to_string(), "hourly");
/// assert_eq!("Daily".parse::<Granularity>().unwrap(), Granularity::Daily);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// One point per minute (forecast only).
    Minutely,
    /// One point per 15 minutes (history only).
    Subhourly,
    /// One point per hour.
    Hourly,
    /// One point per day.
    Daily,
    /// One point per month (climate normals only).
    Monthly,
}

impl Granularity {
    pub(crate) fn path_segment(&self) -> &'static str {
        match self {
            Granularity::Minutely => "minutely",
            Granularity::Subhourly => "subhourly",
            Granularity::Hourly => "hourly",
            Granularity::Daily => "daily",
            Granularity::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

impl FromStr for Granularity {
    type Err = RequestValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minutely" => Ok(Granularity::Minutely),
            "subhourly" => Ok(Granularity::Subhourly),
            "hourly" => Ok(Granularity::Hourly),
            "daily" => Ok(Granularity::Daily),
            "monthly" => Ok(Granularity::Monthly),
            _ => Err(RequestValidationError::UnknownGranularity(s.to_string())),
        }
    }
}

/// The endpoint families offered by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointFamily {
    Current,
    Forecast,
    History,
    Normals,
    Alerts,
}

impl fmt::Display for EndpointFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EndpointFamily::Current => "current",
            EndpointFamily::Forecast => "forecast",
            EndpointFamily::History => "history",
            EndpointFamily::Normals => "normals",
            EndpointFamily::Alerts => "alerts",
        };
        write!(f, "{}", name)
    }
}

/// The data source behind an endpoint family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Source {
    /// Regular weather observations and predictions.
    #[default]
    Standard,
    /// Pollutant concentrations and the air quality index.
    AirQuality,
    /// Soil, evapotranspiration and radiation variables.
    AgWeather,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Source::Standard => "standard",
            Source::AirQuality => "airquality",
            Source::AgWeather => "agweather",
        };
        write!(f, "{}", name)
    }
}

/// One concrete Weatherbit endpoint.
///
/// Only the (family, source) pairs the service actually offers are representable,
/// so every `Endpoint` can be turned into a URL path.
///
/// # Examples
///
/// ```
/// use weatherbit::{Endpoint, EndpointFamily, Source};
///
/// let endpoint = Endpoint::new(EndpointFamily::History, Source::AirQuality).unwrap();
/// assert_eq!(endpoint, Endpoint::HistoryAirQuality);
///
/// assert!(Endpoint::new(EndpointFamily::Alerts, Source::AgWeather).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Current,
    CurrentAirQuality,
    Forecast,
    ForecastAirQuality,
    ForecastAgWeather,
    History,
    HistoryAirQuality,
    HistoryAgWeather,
    Normals,
    Alerts,
}

const NO_GRANULARITY: &[Granularity] = &[];
const FORECAST_GRANULARITIES: &[Granularity] = &[
    Granularity::Minutely,
    Granularity::Hourly,
    Granularity::Daily,
];
const HISTORY_GRANULARITIES: &[Granularity] = &[
    Granularity::Subhourly,
    Granularity::Hourly,
    Granularity::Daily,
];
const NORMALS_GRANULARITIES: &[Granularity] = &[
    Granularity::Hourly,
    Granularity::Daily,
    Granularity::Monthly,
];
const HOURLY_ONLY: &[Granularity] = &[Granularity::Hourly];
const DAILY_ONLY: &[Granularity] = &[Granularity::Daily];

impl Endpoint {
    /// Resolves a (family, source) pair into an endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`RequestValidationError::UnsupportedEndpoint`] when the service has no
    /// such combination (e.g. agricultural weather alerts).
    pub fn new(family: EndpointFamily, source: Source) -> Result<Self, RequestValidationError> {
        match (family, source) {
            (EndpointFamily::Current, Source::Standard) => Ok(Endpoint::Current),
            (EndpointFamily::Current, Source::AirQuality) => Ok(Endpoint::CurrentAirQuality),
            (EndpointFamily::Forecast, Source::Standard) => Ok(Endpoint::Forecast),
            (EndpointFamily::Forecast, Source::AirQuality) => Ok(Endpoint::ForecastAirQuality),
            (EndpointFamily::Forecast, Source::AgWeather) => Ok(Endpoint::ForecastAgWeather),
            (EndpointFamily::History, Source::Standard) => Ok(Endpoint::History),
            (EndpointFamily::History, Source::AirQuality) => Ok(Endpoint::HistoryAirQuality),
            (EndpointFamily::History, Source::AgWeather) => Ok(Endpoint::HistoryAgWeather),
            (EndpointFamily::Normals, Source::Standard) => Ok(Endpoint::Normals),
            (EndpointFamily::Alerts, Source::Standard) => Ok(Endpoint::Alerts),
            (family, data_source) => Err(RequestValidationError::UnsupportedEndpoint {
                family,
                data_source,
            }),
        }
    }

    pub fn family(&self) -> EndpointFamily {
        match self {
            Endpoint::Current | Endpoint::CurrentAirQuality => EndpointFamily::Current,
            Endpoint::Forecast | Endpoint::ForecastAirQuality | Endpoint::ForecastAgWeather => {
                EndpointFamily::Forecast
            }
            Endpoint::History | Endpoint::HistoryAirQuality | Endpoint::HistoryAgWeather => {
                EndpointFamily::History
            }
            Endpoint::Normals => EndpointFamily::Normals,
            Endpoint::Alerts => EndpointFamily::Alerts,
        }
    }

    pub fn source(&self) -> Source {
        match self {
            Endpoint::CurrentAirQuality
            | Endpoint::ForecastAirQuality
            | Endpoint::HistoryAirQuality => Source::AirQuality,
            Endpoint::ForecastAgWeather | Endpoint::HistoryAgWeather => Source::AgWeather,
            _ => Source::Standard,
        }
    }

    /// The granularities this endpoint accepts. Empty for endpoints without one.
    pub fn allowed_granularities(&self) -> &'static [Granularity] {
        match self {
            Endpoint::Current | Endpoint::CurrentAirQuality | Endpoint::Alerts => NO_GRANULARITY,
            Endpoint::Forecast => FORECAST_GRANULARITIES,
            Endpoint::History => HISTORY_GRANULARITIES,
            Endpoint::ForecastAirQuality | Endpoint::HistoryAirQuality => HOURLY_ONLY,
            Endpoint::ForecastAgWeather | Endpoint::HistoryAgWeather => DAILY_ONLY,
            Endpoint::Normals => NORMALS_GRANULARITIES,
        }
    }

    /// Whether the endpoint only accepts a coordinate locator.
    pub fn requires_lat_lon(&self) -> bool {
        matches!(
            self,
            Endpoint::ForecastAgWeather | Endpoint::HistoryAgWeather | Endpoint::Normals
        )
    }

    /// The path below the API version, e.g. `forecast/hourly` or `current/airquality`.
    pub(crate) fn path(&self, granularity: Option<Granularity>) -> String {
        match (self, granularity) {
            (Endpoint::Forecast, Some(g)) => format!("forecast/{}", g.path_segment()),
            (Endpoint::History, Some(g)) => format!("history/{}", g.path_segment()),
            (Endpoint::Forecast, None) => "forecast".to_string(),
            (Endpoint::History, None) => "history".to_string(),
            (Endpoint::Current, _) => "current".to_string(),
            (Endpoint::CurrentAirQuality, _) => "current/airquality".to_string(),
            (Endpoint::ForecastAirQuality, _) => "forecast/airquality".to_string(),
            (Endpoint::ForecastAgWeather, _) => "forecast/agweather".to_string(),
            (Endpoint::HistoryAirQuality, _) => "history/airquality".to_string(),
            (Endpoint::HistoryAgWeather, _) => "history/agweather".to_string(),
            (Endpoint::Normals, _) => "normals".to_string(),
            (Endpoint::Alerts, _) => "alerts".to_string(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source() {
            Source::Standard => write!(f, "{}", self.family()),
            source => write!(f, "{}/{}", self.family(), source),
        }
    }
}
