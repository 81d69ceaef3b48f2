use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::callback::HttpNotifier;
use crate::config::Config;
use crate::integration_routes;
use crate::monitor::Monitor;
use crate::weather::WeatherApiClient;

// Anything that goes in here must be a handle or pointer that can be cloned.
// Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub monitor: Arc<Monitor>,
}

impl AppState {
    /// State talking to the real weather api and return urls through `client`.
    pub fn new(config: Config, client: reqwest::Client) -> AppState {
        let weather = WeatherApiClient::new(client.clone(), &config);
        let notifier = HttpNotifier::new(client);
        AppState {
            config: Arc::new(config),
            monitor: Arc::new(Monitor::new(Arc::new(weather), Arc::new(notifier))),
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    log::debug!("creating app with {:?}", state.config);
    integration_routes::routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}
