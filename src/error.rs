use crate::config::error::ConfigurationError;
use crate::projection::error::ProjectionError;
use crate::request::error::RequestValidationError;
use crate::response::error::ParseError;
use crate::transport::error::TransportError;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherbitError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    RequestValidation(#[from] RequestValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// A non-success HTTP status. `body` is the decoded error response.
    #[error("Weatherbit returned HTTP {status} for {url}: {body}")]
    Remote { status: u16, url: String, body: Value },
}
