mod clients;
mod config;
mod error;
mod projection;
mod request;
mod response;
mod transport;
mod types;
mod weatherbit;

pub use error::WeatherbitError;
pub use weatherbit::Weatherbit;

pub use clients::current_client::CurrentClient;
pub use clients::forecast_client::ForecastClient;
pub use clients::history_client::HistoryClient;

pub use config::{ClientConfig, ConfigurationError, Protocol};

pub use request::endpoint::{Endpoint, EndpointFamily, Granularity, Source};
pub use request::error::RequestValidationError;
pub use request::locator::Locator;
pub use request::params::{Include, QueryParams, Units};
pub use request::query_date::{DateParam, DayOfYear, QueryDate};
pub use request::url_builder::{build_url, resolve_granularity};

pub use transport::error::TransportError;
pub use transport::http::HttpTransport;
pub use transport::{RawPayload, Transport};

pub use response::current::Current;
pub use response::error::ParseError;
pub use response::series::{Alerts, Forecast, History, Normals, Series};

pub use projection::error::ProjectionError;
pub use projection::projector::project;

pub use types::field::{FieldSpec, FieldType, FieldValue, PointKind, Row};
pub use types::location::SeriesLocation;
pub use types::points::alert::AlertPoint;
pub use types::points::current::CurrentPoint;
pub use types::points::normals::NormalsPoint;
pub use types::points::weather::WeatherPoint;
pub use types::points::{field_catalog, Point};
pub use types::temporal::{Temporal, TemporalFormat};
pub use types::weather_summary::WeatherSummary;
