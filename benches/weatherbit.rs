use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use weatherbit::{build_url, ClientConfig, Endpoint, Forecast, Granularity, QueryParams, RawPayload, Units};

fn forecast_json(days: usize) -> Value {
    let data: Vec<Value> = (0..days)
        .rev()
        .map(|i| {
            json!({
                "valid_date": format!("2024-{:02}-{:02}", 1 + i / 28, 1 + i % 28),
                "temp": 10.0 + i as f64 * 0.1,
                "rh": 70,
                "precip": 0.25,
                "weather": {"icon": "c02d", "code": 801, "description": "Few clouds"}
            })
        })
        .collect();
    json!({"city_name": "Raleigh", "lat": 35.78, "lon": -78.64, "timezone": "America/New_York", "data": data})
}

fn bench_weatherbit(c: &mut Criterion) {
    let config = ClientConfig::builder().api_key("KEY").build().unwrap();
    let params = QueryParams::builder()
        .city("Raleigh")
        .state("NC")
        .country("US")
        .granularity(Granularity::Hourly)
        .hours(48)
        .units(Units::Imperial)
        .build();
    c.bench_function("build_url", |b| {
        b.iter(|| build_url(black_box(&config), Endpoint::Forecast, black_box(&params)))
    });

    let payload = RawPayload {
        url: "https://api.weatherbit.io/v2.0/forecast/daily?key=KEY&city=Raleigh".to_string(),
        status: 200,
        headers: BTreeMap::new(),
        json: forecast_json(240),
    };
    c.bench_function("parse_forecast", |b| {
        b.iter(|| Forecast::from_payload(Endpoint::Forecast, black_box(payload.clone())))
    });
    let forecast = Forecast::from_payload(Endpoint::Forecast, payload).unwrap();
    c.bench_function("project_forecast", |b| {
        b.iter(|| forecast.project(black_box(Some(&["temp", "precip", "weather"]))))
    });
}

criterion_group!(benches, bench_weatherbit);
criterion_main!(benches);
