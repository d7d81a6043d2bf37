//! # Server Setup
//!
//! Router construction, tracing initialization and HTTP server startup.

// region: --- Imports
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
// endregion: --- Imports

// region: --- Tracing
/// Install the global subscriber. `LOG_LEVEL` picks the level, default `info`.
fn init_tracing() {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let filter = match log_level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => EnvFilter::new(&log_level),
        _ => EnvFilter::new("info"),
    };

    // A subscriber may already be set (tests, embedding)
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_err()
    {
        tracing::debug!("Tracing subscriber already installed");
    }
}
// endregion: --- Tracing

// region: --- Router
/// Static bundle with an `index.html` fallback for client-side routes.
pub fn create_router(config: &ServerConfig) -> Router {
    let spa = ServeDir::new(&config.dist_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(config.index_file()));

    Router::new()
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
}
// endregion: --- Router

// region: --- Server Setup
/// Validate the config, bind and serve until the process exits.
///
/// # Errors
///
/// Returns an error if the bundle is missing or the address can't be bound.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    init_tracing();

    info!("Dr. Zoe site server starting");
    config.validate()?;
    info!("Serving bundle from {}", config.dist_dir.display());

    let app = create_router(&config);
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    info!("SERVER READY: http://{}", config.bind_address);
    axum::serve(listener, app).await?;
    Ok(())
}
// endregion: --- Server Setup

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    const INDEX: &str = "<!DOCTYPE html><title>Dr. Zoe</title>";

    fn bundle(name: &str) -> ServerConfig {
        let dist_dir: PathBuf = std::env::temp_dir().join(format!("zoe-server-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dist_dir).unwrap();
        fs::write(dist_dir.join("index.html"), INDEX).unwrap();
        fs::write(dist_dir.join("app.css"), "body {}").unwrap();
        ServerConfig {
            dist_dir,
            ..Default::default()
        }
    }

    async fn get(config: &ServerConfig, uri: &str) -> (StatusCode, String) {
        let response = create_router(config)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_serves_assets() {
        let config = bundle("assets");
        let (status, body) = get(&config, "/app.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body {}");
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let config = bundle("fallback");
        for uri in ["/", "/login", "/download", "/no/such/page"] {
            let (status, body) = get(&config, uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(body, INDEX, "{}", uri);
        }
    }

    #[test]
    fn test_validate_bundle() {
        let config = bundle("validate");
        assert!(config.validate().is_ok());
    }
}
