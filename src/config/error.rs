use crate::request::endpoint::Granularity;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("An API key is required")]
    MissingApiKey,

    #[error("Invalid {setting} '{granularity}' (allowed: {allowed})")]
    InvalidGranularity {
        setting: &'static str,
        granularity: Granularity,
        allowed: String,
    },

    #[error("Invalid API base URL '{0}'")]
    InvalidBaseUrl(String, #[source] url::ParseError),
}
