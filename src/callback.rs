use async_trait::async_trait;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::MonitorError;
use crate::weather::WeatherReport;

pub const USERNAME: &str = "Weather and Air Quality Monitor";
pub const EVENT_NAME: &str = "Weather and Air Quality check";

/// Envelope posted to the caller's return URL.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct CallbackMessage {
    pub message: String,
    pub username: String,
    pub event_name: String,
    pub status: String,
}

impl CallbackMessage {
    pub fn weather_report(report: &WeatherReport) -> CallbackMessage {
        CallbackMessage {
            message: render_report(report),
            username: USERNAME.to_string(),
            event_name: EVENT_NAME.to_string(),
            status: "success".to_string(),
        }
    }
}

pub fn render_report(report: &WeatherReport) -> String {
    let current = &report.current;
    let air = &current.air_quality;
    format!(
        concat!(
            "\n",
            "    Location: {name}\n",
            "    Temp.: {temp} deg. celsius\n",
            "    Condition: {condition}\n",
            "    Wind Speed: {wind} kmph\n",
            "    Pressure: {pressure} milibar\n",
            "    Air Quality:\n",
            "        CO2: {co}\n",
            "        NO2: {no2}\n",
            "        O3: {o3}\n",
            "        SO2: {so2}\n",
            "        Fine Particle Matter: {pm2_5}\n",
            "        Particle Matter: {pm10}\n",
            "        Air Quality Index: {index}\n",
            "    ",
        ),
        name = report.location.name,
        temp = current.temp_c,
        condition = current.condition.text,
        wind = current.wind_kph,
        pressure = current.pressure_mb,
        co = air.co,
        no2 = air.no2,
        o3 = air.o3,
        so2 = air.so2,
        pm2_5 = air.pm2_5,
        pm10 = air.pm10,
        index = air.us_epa_index,
    )
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(
        &self,
        return_url: &str,
        message: &CallbackMessage,
    ) -> Result<(), MonitorError>;
}

/// Posts reports to return URLs over HTTP.
#[derive(Clone)]
pub struct HttpNotifier {
    client: reqwest::Client,
}

impl HttpNotifier {
    pub fn new(client: reqwest::Client) -> HttpNotifier {
        HttpNotifier { client }
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    async fn notify(
        &self,
        return_url: &str,
        message: &CallbackMessage,
    ) -> Result<(), MonitorError> {
        let response = self
            .client
            .post(return_url)
            .json(message)
            .send()
            .await
            .map_err(|source| MonitorError::Callback {
                url: return_url.to_string(),
                source,
            })?;

        // The receiver's answer is not acted upon.
        let status = response.status();
        if status.is_success() {
            debug!("Return url {} accepted report with {}", return_url, status);
        } else {
            warn!("Return url {} answered report with {}", return_url, status);
        }
        Ok(())
    }
}
