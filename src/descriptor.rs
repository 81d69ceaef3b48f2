use serde::Serialize;

use crate::callback::USERNAME;
use crate::payload::Setting;

pub const DEFAULT_LOCATION: &str = "london";
pub const DEFAULT_INTERVAL: &str = "* * * * *";

/// The `integration.json` document advertised to the scheduling platform.
#[derive(Serialize, Debug)]
pub struct IntegrationDescriptor {
    pub data: IntegrationData,
}

#[derive(Serialize, Debug)]
pub struct IntegrationData {
    pub date: IntegrationDates,
    pub descriptions: Descriptions,
    pub is_active: bool,
    pub integration_type: String,
    pub key_features: Vec<String>,
    pub integration_category: String,
    pub author: String,
    pub website: String,
    pub settings: Vec<Setting>,
    pub target_url: String,
    pub tick_url: String,
}

#[derive(Serialize, Debug)]
pub struct IntegrationDates {
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, Debug)]
pub struct Descriptions {
    pub app_name: String,
    pub app_description: String,
    pub app_logo: String,
    pub app_url: String,
    pub background_color: String,
}

impl IntegrationDescriptor {
    /// Describe the integration as served from `base_url` (no trailing slash).
    pub fn new(base_url: &str) -> IntegrationDescriptor {
        IntegrationDescriptor {
            data: IntegrationData {
                date: IntegrationDates {
                    created_at: "2025-02-18".to_string(),
                    updated_at: "2025-02-18".to_string(),
                },
                descriptions: Descriptions {
                    app_name: USERNAME.to_string(),
                    app_description: "A Weather and Air Quality Monitor for a Specific Location"
                        .to_string(),
                    app_logo: "https://ibb.co/SLdFBnf".to_string(),
                    app_url: base_url.to_string(),
                    background_color: "#fff".to_string(),
                },
                is_active: true,
                integration_type: "interval".to_string(),
                key_features: vec![
                    "- monitors weather conditions".to_string(),
                    "- monitors air quality".to_string(),
                ],
                integration_category: "Monitoring & Logging".to_string(),
                author: "Kenechi Nzewi".to_string(),
                website: base_url.to_string(),
                settings: vec![
                    Setting::text("location", DEFAULT_LOCATION),
                    Setting::text("interval", DEFAULT_INTERVAL),
                ],
                target_url: String::new(),
                tick_url: format!("{}/tick", base_url),
            },
        }
    }
}
