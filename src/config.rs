use std::fmt;

pub const DEFAULT_WEATHER_API_URL: &str = "https://api.weatherapi.com/v1";

/// Process-wide settings, built once at startup.
#[derive(Clone)]
pub struct Config {
    /// Credential for the weather API.
    pub api_key: String,
    /// Base of the weather API, `current.json` is appended to it.
    pub weather_api_url: String,
    /// Externally visible address of this service. When unset the address is
    /// derived from each request.
    pub public_url: Option<String>,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Config {
        Config {
            api_key: api_key.into(),
            weather_api_url: DEFAULT_WEATHER_API_URL.to_string(),
            public_url: None,
        }
    }
}

// The API key must never end up in a log line.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("weather_api_url", &self.weather_api_url)
            .field("public_url", &self.public_url)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_config_points_at_weatherapi() {
        let config = Config::new("secret");
        assert_eq!(config.weather_api_url, "https://api.weatherapi.com/v1");
        assert_eq!(config.public_url, None);
    }

    #[test]
    fn debug_output_hides_api_key() {
        let config = Config::new("very-secret-key");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("very-secret-key"));
        assert!(printed.contains("<redacted>"));
    }
}
