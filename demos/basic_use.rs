use std::env;
use weatherbit::{Granularity, QueryParams, Units, Weatherbit, WeatherbitError};

fn main() -> Result<(), WeatherbitError> {
    let client = Weatherbit::with_api_key(env::var("WEATHERBIT_API_KEY").unwrap_or_default())?;

    let params = QueryParams::builder()
        .city("Raleigh")
        .state("NC")
        .country("US")
        .granularity(Granularity::Daily)
        .days(7)
        .units(Units::Imperial)
        .build();

    let forecast = client.forecast().standard(&params)?;
    println!(
        "{} days for {:?}",
        forecast.len(),
        forecast.location().city_name
    );

    for row in forecast.project(Some(&["max_temp", "min_temp", "pop", "weather"]))? {
        println!("{}", serde_json::to_string(&row).unwrap_or_default());
    }

    Ok(())
}
