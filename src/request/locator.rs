//! Resolution of the geographic part of a query.

use crate::request::error::RequestValidationError;
use crate::request::params::QueryParams;
use log::warn;
use std::fmt;

/// A geographic identifier scoping a query.
///
/// Built from [`QueryParams`] by [`Locator::resolve`], which picks the first complete
/// variant in priority order: lat/lon, city, city id, station, postal code.
#[derive(Debug, Clone, PartialEq)]
pub enum Locator {
    LatLon {
        lat: f64,
        lon: f64,
    },
    City {
        city: String,
        state: Option<String>,
        country: Option<String>,
    },
    CityId(u64),
    Station(String),
    PostalCode {
        postal_code: String,
        country: Option<String>,
    },
}

impl Locator {
    /// Picks the highest-priority complete locator present in `params`.
    ///
    /// Lower-priority locator fields are ignored. `state` and `country` only qualify a
    /// city (and `country` a postal code); with any other locator they are dropped with
    /// a warning, as is a `lat` without a `lon` or the reverse.
    ///
    /// # Errors
    ///
    /// * [`RequestValidationError::MissingLocation`] if no complete variant is present.
    /// * [`RequestValidationError::InvalidCoordinates`] if the chosen lat/lon is out of range.
    pub fn resolve(params: &QueryParams) -> Result<Self, RequestValidationError> {
        match (params.lat, params.lon) {
            (Some(_), None) => warn!("Dropping `lat`: it needs a `lon` to locate anything"),
            (None, Some(_)) => warn!("Dropping `lon`: it needs a `lat` to locate anything"),
            _ => {}
        }

        let locator = if let (Some(lat), Some(lon)) = (params.lat, params.lon) {
            if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
                return Err(RequestValidationError::InvalidCoordinates { lat, lon });
            }
            Locator::LatLon { lat, lon }
        } else if let Some(city) = &params.city {
            Locator::City {
                city: city.clone(),
                state: params.state.clone(),
                country: params.country.clone(),
            }
        } else if let Some(city_id) = params.city_id {
            Locator::CityId(city_id)
        } else if let Some(station) = &params.station {
            Locator::Station(station.clone())
        } else if let Some(postal_code) = &params.postal_code {
            Locator::PostalCode {
                postal_code: postal_code.clone(),
                country: params.country.clone(),
            }
        } else {
            return Err(RequestValidationError::MissingLocation);
        };

        let takes_state = matches!(locator, Locator::City { .. });
        let takes_country = matches!(locator, Locator::City { .. } | Locator::PostalCode { .. });
        if params.state.is_some() && !takes_state {
            warn!("Dropping `state`: it only qualifies a city, not a {} location", locator.kind());
        }
        if params.country.is_some() && !takes_country {
            warn!("Dropping `country`: it only qualifies a city or postal code, not a {} location", locator.kind());
        }

        Ok(locator)
    }

    /// Short name of the variant, used in messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Locator::LatLon { .. } => "lat/lon",
            Locator::City { .. } => "city",
            Locator::CityId(_) => "city_id",
            Locator::Station(_) => "station",
            Locator::PostalCode { .. } => "postal_code",
        }
    }

    /// The query pairs this locator contributes, in URL order.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            Locator::LatLon { lat, lon } => vec![("lat", lat.to_string()), ("lon", lon.to_string())],
            Locator::City {
                city,
                state,
                country,
            } => {
                let mut pairs = vec![("city", city.clone())];
                if let Some(state) = state {
                    pairs.push(("state", state.clone()));
                }
                if let Some(country) = country {
                    pairs.push(("country", country.clone()));
                }
                pairs
            }
            Locator::CityId(id) => vec![("city_id", id.to_string())],
            Locator::Station(station) => vec![("station", station.clone())],
            Locator::PostalCode {
                postal_code,
                country,
            } => {
                let mut pairs = vec![("postal_code", postal_code.clone())];
                if let Some(country) = country {
                    pairs.push(("country", country.clone()));
                }
                pairs
            }
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::LatLon { lat, lon } => write!(f, "{}, {}", lat, lon),
            Locator::City { city, state, country } => {
                write!(f, "{}", city)?;
                if let Some(state) = state {
                    write!(f, ", {}", state)?;
                }
                if let Some(country) = country {
                    write!(f, ", {}", country)?;
                }
                Ok(())
            }
            Locator::CityId(id) => write!(f, "city #{}", id),
            Locator::Station(station) => write!(f, "station {}", station),
            Locator::PostalCode { postal_code, country } => match country {
                Some(country) => write!(f, "{} {}", postal_code, country),
                None => write!(f, "{}", postal_code),
            },
        }
    }
}
