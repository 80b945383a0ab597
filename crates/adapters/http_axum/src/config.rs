//! `GET /config.json`: runtime configuration for the browser app.

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use mikrodash_domain::config::ClientConfig;

use crate::state::AppState;

/// Possible responses from the config endpoint.
pub enum ConfigResponse {
    Ok(Json<ClientConfig>),
}

impl IntoResponse for ConfigResponse {
    fn into_response(self) -> Response {
        match self {
            // The router endpoint may change between deploys; never cache it.
            Self::Ok(json) => ([(header::CACHE_CONTROL, "no-store")], json).into_response(),
        }
    }
}

/// `GET /config.json`
pub async fn show(State(state): State<AppState>) -> ConfigResponse {
    ConfigResponse::Ok(Json(ClientConfig::clone(&state.client_config)))
}
