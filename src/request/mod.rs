pub mod endpoint;
pub mod error;
pub mod locator;
pub mod params;
pub mod query_date;
pub mod url_builder;
