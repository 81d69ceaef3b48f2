use serde::{Deserialize, Serialize};

use crate::error::MonitorError;

/// One configurable field of the integration.
///
/// There is no persistence, so `default` is also the value currently in use.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Setting {
    pub label: String,
    #[serde(rename = "type")]
    pub setting_type: String,
    pub required: bool,
    pub default: String,
}

impl Setting {
    pub fn text(label: &str, default: &str) -> Setting {
        Setting {
            label: label.to_string(),
            setting_type: "text".to_string(),
            required: true,
            default: default.to_string(),
        }
    }
}

/// Body of a tick request.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct MonitorPayload {
    pub channel_id: String,
    pub return_url: String,
    pub settings: Vec<Setting>,
}

impl MonitorPayload {
    /// The location to report on.
    ///
    /// The first setting is always taken as the location, whatever its label.
    pub fn location(&self) -> Result<&str, MonitorError> {
        self.settings
            .first()
            .map(|setting| setting.default.as_str())
            .ok_or(MonitorError::MissingLocation)
    }
}
