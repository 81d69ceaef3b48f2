use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, Uri, header},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::config::Config;
use crate::descriptor::IntegrationDescriptor;
use crate::error::ApiError;
use crate::payload::MonitorPayload;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/integration.json", get(get_integration))
        .route("/tick", post(post_tick))
        .with_state(state)
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct TickAccepted {
    pub status: String,
}

async fn get_integration(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Json<IntegrationDescriptor> {
    Json(IntegrationDescriptor::new(&base_url(
        &state.config,
        &headers,
        &uri,
    )))
}

async fn post_tick(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<TickAccepted>), ApiError> {
    let payload = parse_tick(&headers, &body)?;
    log::debug!("Accepted tick for channel {}", payload.channel_id);
    // Not awaited, the tick is answered before the check runs.
    drop(state.monitor.schedule(payload));
    Ok((
        StatusCode::ACCEPTED,
        Json(TickAccepted {
            status: "accepted".to_string(),
        }),
    ))
}

/// Parse a tick body. A body without content type is read as JSON.
fn parse_tick(headers: &HeaderMap, body: &[u8]) -> Result<MonitorPayload, ApiError> {
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        let content_type = content_type.to_str().unwrap_or_default();
        if !is_json(content_type) {
            return Err(ApiError::UnsupportedMediaType(content_type.to_string()));
        }
    }
    Ok(serde_json::from_slice(body)?)
}

fn is_json(content_type: &str) -> bool {
    content_type
        .parse::<mime::Mime>()
        .map(|parsed| {
            parsed.type_() == mime::APPLICATION
                && (parsed.subtype() == mime::JSON || parsed.suffix() == Some(mime::JSON))
        })
        .unwrap_or(false)
}

/// Address the service is reached at, without trailing slash.
fn base_url(config: &Config, headers: &HeaderMap, uri: &Uri) -> String {
    if let Some(public_url) = &config.public_url {
        return public_url.trim_end_matches('/').to_string();
    }
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| uri.authority().map(|authority| authority.as_str()))
        .unwrap_or("localhost");
    format!("{}://{}", scheme, host)
}
