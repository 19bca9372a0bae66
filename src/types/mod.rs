pub mod extract;
pub mod field;
pub mod location;
pub mod points;
pub mod temporal;
pub mod weather_summary;
