use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::config::Config;
use crate::error::MonitorError;

// Numbers are kept as received so that `15.0` is reported as `15.0` and `10`
// as `10`.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct WeatherReport {
    pub location: Location,
    pub current: CurrentConditions,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Location {
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct CurrentConditions {
    pub temp_c: Number,
    pub condition: Condition,
    pub wind_kph: Number,
    pub pressure_mb: Number,
    pub air_quality: AirQuality,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Condition {
    pub text: String,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct AirQuality {
    pub co: Number,
    pub no2: Number,
    pub o3: Number,
    pub so2: Number,
    pub pm2_5: Number,
    pub pm10: Number,
    #[serde(rename = "us-epa-index")]
    pub us_epa_index: Number,
}

#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn current(&self, location: &str) -> Result<WeatherReport, MonitorError>;
}

/// Client for the weatherapi.com `current.json` endpoint.
#[derive(Clone)]
pub struct WeatherApiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl WeatherApiClient {
    pub fn new(client: reqwest::Client, config: &Config) -> WeatherApiClient {
        WeatherApiClient {
            client,
            endpoint: format!(
                "{}/current.json",
                config.weather_api_url.trim_end_matches('/')
            ),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl WeatherSource for WeatherApiClient {
    async fn current(&self, location: &str) -> Result<WeatherReport, MonitorError> {
        debug!("Fetching current weather for {}", location);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", location),
                ("aqi", "yes"),
            ])
            .send()
            .await
            .map_err(|source| MonitorError::WeatherRequest { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MonitorError::WeatherStatus { status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| MonitorError::WeatherRequest { source })?;
        Ok(serde_json::from_slice(&body)?)
    }
}
