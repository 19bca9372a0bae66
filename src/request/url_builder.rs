//! Turns an [`Endpoint`] and its [`QueryParams`] into a request URL.
//!
//! The query string always has the same layout:
//!
//! `key`, `client`, the locator (`lat`+`lon` | `city` | `city_id` | `station` |
//! `postal_code`), `state`, `country`, then `days`, `hours`, `units`, `include`,
//! `start_date`, `end_date`, `start_day`, `end_day`, `tp`, `series_year`.
//!
//! Parameters the endpoint does not understand at the resolved granularity are
//! dropped with a warning instead of failing the request.

use crate::config::ClientConfig;
use crate::request::endpoint::{Endpoint, EndpointFamily, Granularity, Source};
use crate::request::error::RequestValidationError;
use crate::request::locator::Locator;
use crate::request::params::QueryParams;
use crate::request::query_date::{DayOfYear, QueryDate};
use log::warn;
use url::form_urlencoded::Serializer;
use url::Url;

/// Optional parameters whose relevance depends on the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Param {
    Days,
    Hours,
    Units,
    Include,
    StartDate,
    EndDate,
    StartDay,
    EndDay,
    SeriesYear,
}

impl Param {
    fn name(self) -> &'static str {
        match self {
            Param::Days => "days",
            Param::Hours => "hours",
            Param::Units => "units",
            Param::Include => "include",
            Param::StartDate => "start_date",
            Param::EndDate => "end_date",
            Param::StartDay => "start_day",
            Param::EndDay => "end_day",
            Param::SeriesYear => "series_year",
        }
    }

    fn applies_to(self, endpoint: Endpoint, granularity: Option<Granularity>) -> bool {
        match self {
            Param::Days => endpoint == Endpoint::Forecast && granularity == Some(Granularity::Daily),
            Param::Hours => {
                (endpoint == Endpoint::Forecast && granularity == Some(Granularity::Hourly))
                    || endpoint == Endpoint::ForecastAirQuality
            }
            Param::Units => {
                endpoint.source() == Source::Standard && endpoint.family() != EndpointFamily::Alerts
            }
            Param::Include => endpoint == Endpoint::Current,
            Param::StartDate | Param::EndDate => endpoint.family() == EndpointFamily::History,
            Param::StartDay | Param::EndDay | Param::SeriesYear => endpoint == Endpoint::Normals,
        }
    }
}

/// Returns whether a supplied parameter should be sent, warning when it is dropped.
fn accepts(param: Param, endpoint: Endpoint, granularity: Option<Granularity>) -> bool {
    let applies = param.applies_to(endpoint, granularity);
    if !applies {
        match granularity {
            Some(g) => warn!(
                "Dropping `{}`: not supported by the {} endpoint at {} granularity",
                param.name(),
                endpoint,
                g
            ),
            None => warn!(
                "Dropping `{}`: not supported by the {} endpoint",
                param.name(),
                endpoint
            ),
        }
    }
    applies
}

fn default_granularity(config: &ClientConfig, endpoint: Endpoint) -> Option<Granularity> {
    match endpoint {
        Endpoint::Forecast => Some(config.forecast_granularity()),
        Endpoint::History => Some(config.history_granularity()),
        Endpoint::ForecastAirQuality | Endpoint::HistoryAirQuality => Some(Granularity::Hourly),
        Endpoint::ForecastAgWeather | Endpoint::HistoryAgWeather | Endpoint::Normals => {
            Some(Granularity::Daily)
        }
        Endpoint::Current | Endpoint::CurrentAirQuality | Endpoint::Alerts => None,
    }
}

pub(crate) fn describe_granularities(allowed: &[Granularity]) -> String {
    if allowed.is_empty() {
        return "none".to_string();
    }
    allowed
        .iter()
        .map(Granularity::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolves the granularity to query with: the explicit one if given, otherwise the
/// endpoint default. `None` for endpoints without a granularity.
pub fn resolve_granularity(
    config: &ClientConfig,
    endpoint: Endpoint,
    requested: Option<Granularity>,
) -> Result<Option<Granularity>, RequestValidationError> {
    let Some(granularity) = requested.or_else(|| default_granularity(config, endpoint)) else {
        return Ok(None);
    };
    let allowed = endpoint.allowed_granularities();
    if !allowed.contains(&granularity) {
        return Err(RequestValidationError::UnsupportedGranularity {
            endpoint,
            granularity,
            allowed: describe_granularities(allowed),
        });
    }
    Ok(Some(granularity))
}

fn resolve_date_range(
    endpoint: Endpoint,
    params: &QueryParams,
) -> Result<Option<(QueryDate, QueryDate)>, RequestValidationError> {
    if endpoint.family() != EndpointFamily::History {
        return Ok(None);
    }
    let (Some(start), Some(end)) = (&params.start_date, &params.end_date) else {
        return Err(RequestValidationError::MissingDateRange { endpoint });
    };
    let start = start.resolve("start_date")?;
    let end = end.resolve("end_date")?;
    if start > end {
        return Err(RequestValidationError::InvertedDateRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok(Some((start, end)))
}

fn resolve_day_range(
    endpoint: Endpoint,
    params: &QueryParams,
) -> Result<Option<(DayOfYear, DayOfYear)>, RequestValidationError> {
    if endpoint != Endpoint::Normals {
        return Ok(None);
    }
    let (Some(start), Some(end)) = (&params.start_day, &params.end_day) else {
        return Err(RequestValidationError::MissingDayRange { endpoint });
    };
    Ok(Some((
        DayOfYear::parse("start_day", start)?,
        DayOfYear::parse("end_day", end)?,
    )))
}

/// Builds the full request URL for `endpoint`.
///
/// Pure and deterministic: the same configuration, endpoint and parameters always
/// produce the same string. All values are form-url-encoded.
///
/// # Errors
///
/// Any [`RequestValidationError`]: an unsupported granularity, a missing or
/// unacceptable locator, a missing or malformed date/day range.
///
/// # Examples
///
/// ```
/// use weatherbit::{build_url, ClientConfig, Endpoint, QueryParams, Units};
///
/// let config = ClientConfig::builder().api_key("KEY").build().unwrap();
/// let params = QueryParams::builder()
///     .city("Raleigh")
///     .country("US")
///     .units(Units::Metric)
///     .build();
///
/// assert_eq!(
///     build_url(&config, Endpoint::Current, &params).unwrap(),
///     "https://api.weatherbit.io/v2.0/current?key=KEY&client=weatherbit-rs&city=Raleigh&country=US&units=M"
/// );
/// ```
pub fn build_url(
    config: &ClientConfig,
    endpoint: Endpoint,
    params: &QueryParams,
) -> Result<String, RequestValidationError> {
    let granularity = resolve_granularity(config, endpoint, params.granularity)?;

    let locator = Locator::resolve(params)?;
    if endpoint.requires_lat_lon() && !matches!(locator, Locator::LatLon { .. }) {
        return Err(RequestValidationError::LatLonRequired {
            endpoint,
            given: locator.kind(),
        });
    }

    let dates = resolve_date_range(endpoint, params)?;
    let days = resolve_day_range(endpoint, params)?;

    let mut query = Serializer::new(String::new());
    query.append_pair("key", config.api_key());
    query.append_pair("client", config.client_tag());
    for (name, value) in locator.query_pairs() {
        query.append_pair(name, &value);
    }

    if let Some(days) = params.days {
        if accepts(Param::Days, endpoint, granularity) {
            query.append_pair("days", &days.to_string());
        }
    }
    if let Some(hours) = params.hours {
        if accepts(Param::Hours, endpoint, granularity) {
            query.append_pair("hours", &hours.to_string());
        }
    }
    if let Some(units) = params.units {
        if accepts(Param::Units, endpoint, granularity) {
            query.append_pair("units", units.code());
        }
    }
    if !params.include.is_empty() && accepts(Param::Include, endpoint, granularity) {
        let mut codes: Vec<&str> = Vec::with_capacity(params.include.len());
        for include in &params.include {
            if !codes.contains(&include.code()) {
                codes.push(include.code());
            }
        }
        query.append_pair("include", &codes.join(","));
    }

    match dates {
        Some((start, end)) => {
            query.append_pair("start_date", &start.to_string());
            query.append_pair("end_date", &end.to_string());
        }
        None => {
            if params.start_date.is_some() {
                accepts(Param::StartDate, endpoint, granularity);
            }
            if params.end_date.is_some() {
                accepts(Param::EndDate, endpoint, granularity);
            }
        }
    }

    match days {
        Some((start, end)) => {
            query.append_pair("start_day", &start.to_string());
            query.append_pair("end_day", &end.to_string());
            if let Some(granularity) = granularity {
                query.append_pair("tp", granularity.path_segment());
            }
        }
        None => {
            if params.start_day.is_some() {
                accepts(Param::StartDay, endpoint, granularity);
            }
            if params.end_day.is_some() {
                accepts(Param::EndDay, endpoint, granularity);
            }
        }
    }
    if let Some(series_year) = params.series_year {
        if accepts(Param::SeriesYear, endpoint, granularity) {
            query.append_pair("series_year", &series_year.to_string());
        }
    }

    Ok(format!(
        "{}/{}?{}",
        config.base_url(),
        endpoint.path(granularity),
        query.finish()
    ))
}

/// Replaces the API key in `url` so it can be logged or put in an error.
pub(crate) fn redact_key(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };
    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == "key" {
                "***".to_string()
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();
    if pairs.is_empty() {
        return parsed.to_string();
    }
    parsed.query_pairs_mut().clear().extend_pairs(pairs);
    parsed.to_string()
}
