use crate::domain::model::WeatherReport;
use reqwest::Client;
use std::time::Duration;

pub const WEATHER_TIMEOUT: Duration = Duration::from_secs(10);

/// Single GET against the weather API. Never fails the query: every
/// outcome maps to one of the four display states.
pub async fn fetch_weather(
    client: &Client,
    base_url: &str,
    city: &str,
    api_key: &str,
) -> WeatherReport {
    if city.trim().is_empty() || api_key.is_empty() {
        return WeatherReport::MissingParams;
    }

    let url = format!("{}/v1/current.json", base_url.trim_end_matches('/'));
    tracing::debug!("Requesting weather from: {}", url);

    let result = client
        .get(&url)
        .query(&[("key", api_key), ("q", city), ("lang", "es")])
        .timeout(WEATHER_TIMEOUT)
        .send()
        .await;

    let response = match result {
        Ok(r) => r,
        Err(e) => return WeatherReport::ConnectionError(e.to_string()),
    };

    tracing::debug!("Weather API response status: {}", response.status());

    if !response.status().is_success() {
        return WeatherReport::ConnectionError(format!("HTTP status {}", response.status()));
    }

    let data: serde_json::Value = match response.json().await {
        Ok(v) => v,
        Err(_) => return WeatherReport::Unavailable,
    };

    parse_current(&data).unwrap_or(WeatherReport::Unavailable)
}

fn parse_current(data: &serde_json::Value) -> Option<WeatherReport> {
    let current = data.get("current")?;
    Some(WeatherReport::Current {
        condition: current.get("condition")?.get("text")?.as_str()?.to_string(),
        temp_c: current.get("temp_c")?.as_f64()?,
        humidity: current.get("humidity")?.as_f64()?,
    })
}
