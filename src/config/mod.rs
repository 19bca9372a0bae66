pub mod client_config;
pub mod error;

pub use client_config::{ClientConfig, Protocol};
pub use error::ConfigurationError;
