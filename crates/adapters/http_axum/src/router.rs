//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// `/health` and `/config.json` are handled directly; every other path is
/// served from the dashboard bundle.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build(state: AppState) -> Router {
    let assets = crate::assets::service(&state.dist_dir);
    tracing::debug!(dist_dir = %state.dist_dir.display(), "serving dashboard bundle");

    Router::new()
        .route("/health", get(health_check))
        .route("/config.json", get(crate::config::show))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use mikrodash_domain::config::ClientConfig;
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn dist_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "mikrodash-http-{}-{name}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<title>mikrodash</title>").unwrap();
        std::fs::write(dir.join("app.js"), "console.log('mikrodash')").unwrap();
        dir
    }

    fn test_state(name: &str) -> AppState {
        AppState::new(
            ClientConfig::new("https://router.lan").unwrap(),
            dist_dir(name),
        )
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (status, _, body) = fetch(build(test_state("health")), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn should_serve_client_config_as_json() {
        let (status, headers, body) = fetch(build(test_state("config")), "/config.json").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CACHE_CONTROL], "no-store");
        let config: ClientConfig = serde_json::from_str(&body).unwrap();
        assert_eq!(config.router_url, "https://router.lan");
    }

    #[tokio::test]
    async fn should_serve_bundle_files() {
        let (status, _, body) = fetch(build(test_state("files")), "/app.js").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("console.log"));
    }

    #[tokio::test]
    async fn should_serve_index_at_root() {
        let (status, _, body) = fetch(build(test_state("root")), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>mikrodash</title>"));
    }

    #[tokio::test]
    async fn should_fall_back_to_index_for_client_routes() {
        let (status, _, body) = fetch(build(test_state("spa")), "/dashboard").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>mikrodash</title>"));
    }
}
