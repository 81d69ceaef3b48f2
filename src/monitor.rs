use std::sync::Arc;

use log::{debug, error, info};
use tokio::task::JoinHandle;

use crate::callback::{CallbackMessage, Notifier};
use crate::error::MonitorError;
use crate::payload::MonitorPayload;
use crate::weather::WeatherSource;

/// Runs weather checks for ticks: fetch the weather for the configured
/// location and post the report to the tick's return url.
///
/// A check either runs to completion or stops at the first error. Nothing is
/// retried.
pub struct Monitor {
    weather: Arc<dyn WeatherSource>,
    notifier: Arc<dyn Notifier>,
}

impl Monitor {
    pub fn new(weather: Arc<dyn WeatherSource>, notifier: Arc<dyn Notifier>) -> Monitor {
        Monitor { weather, notifier }
    }

    pub async fn check(&self, payload: &MonitorPayload) -> Result<(), MonitorError> {
        let location = payload.location()?;

        debug!("Fetching weather for channel {}", payload.channel_id);
        let report = self.weather.current(location).await?;

        debug!("Notifying {} for channel {}", payload.return_url, payload.channel_id);
        let message = CallbackMessage::weather_report(&report);
        self.notifier.notify(&payload.return_url, &message).await
    }

    /// Runs a check in the background.
    ///
    /// The result only ends up in the log, the caller is free to drop the
    /// returned handle.
    pub fn schedule(self: &Arc<Self>, payload: MonitorPayload) -> JoinHandle<()> {
        let monitor = self.clone();
        tokio::spawn(async move {
            match monitor.check(&payload).await {
                Ok(()) => info!("Delivered weather report for channel {}", payload.channel_id),
                Err(err) => error!(
                    "Weather check for channel {} failed: {}",
                    payload.channel_id, err
                ),
            }
        })
    }
}
