use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zipcloud_rs::types::LookupResult;
use zipcloud_rs::{
    AddressRecord, LookupError, ZipValidation, ZipcloudClient, format_zip, messages, normalize,
    validate,
};

/// Server configuration
struct ServerConfig {
    port: u16,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
        }
    }
}

/// Application state shared across all requests
#[derive(Clone)]
struct AppState {
    client: Arc<ZipcloudClient>,
    metrics: Arc<Metrics>,
}

/// Server metrics
struct Metrics {
    total_requests: AtomicU64,
    requests_in_flight: AtomicU64,
    start_time: Instant,
}

/// RAII guard for tracking in-flight requests
struct RequestGuard<'a>(&'a AtomicU64);

impl<'a> Drop for RequestGuard<'a> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::Relaxed);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Read configuration from environment
    let config = ServerConfig::from_env();

    let client = Arc::new(ZipcloudClient::new().context("Failed to initialize zipcloud client")?);

    // Build Axum app with routes
    let app = build_app(client);

    // Bind server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on {}", addr);

    // Run server with graceful shutdown
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Build the Axum application with routes and middleware
fn build_app(client: Arc<ZipcloudClient>) -> Router {
    let metrics = Arc::new(Metrics {
        total_requests: AtomicU64::new(0),
        requests_in_flight: AtomicU64::new(0),
        start_time: Instant::now(),
    });

    let state = AppState { client, metrics };

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // API routes
        .route("/api/search", get(search_address))
        .route("/api/metrics", get(get_metrics))
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Deserialize)]
struct SearchParams {
    #[serde(default)]
    zipcode: String,
}

/// Look up one postal code
async fn search_address(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchApiResponse>, ApiError> {
    // Increment metrics
    state.metrics.total_requests.fetch_add(1, Ordering::Relaxed);
    state
        .metrics
        .requests_in_flight
        .fetch_add(1, Ordering::Relaxed);

    // Ensure we decrement on exit
    let _guard = RequestGuard(&state.metrics.requests_in_flight);

    let code = normalize(&params.zipcode);
    match validate(&code) {
        ZipValidation::Empty => {
            return Err(ApiError::BadRequest(messages::EMPTY_INPUT.to_string()));
        }
        ZipValidation::WrongLength => {
            return Err(ApiError::BadRequest(messages::WRONG_LENGTH.to_string()));
        }
        ZipValidation::Valid => {}
    }

    tracing::info!("Looking up postal code {}", code);

    let response = state.client.search(&code).await.map_err(|e| match e {
        LookupError::Timeout => ApiError::Timeout(messages::TIMEOUT.to_string()),
        LookupError::Transport(err) => {
            tracing::error!("Lookup transport error: {}", err);
            ApiError::Transport(messages::TRANSPORT_ERROR.to_string())
        }
    })?;

    match response.result() {
        LookupResult::Failure(message) => Err(ApiError::Upstream(
            message.unwrap_or(messages::SERVICE_ERROR_FALLBACK).to_string(),
        )),
        LookupResult::NoMatch => Err(ApiError::NotFound(messages::NO_MATCH.to_string())),
        LookupResult::Matches(records) => Ok(Json(SearchApiResponse {
            success: true,
            zipcode: format_zip(&code),
            count: records.len(),
            results: records.to_vec(),
        })),
    }
}

#[derive(Serialize)]
struct SearchApiResponse {
    success: bool,
    zipcode: String,
    count: usize,
    results: Vec<AddressRecord>,
}

/// Get server metrics
async fn get_metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    Json(MetricsResponse {
        total_requests: state.metrics.total_requests.load(Ordering::Relaxed),
        requests_in_flight: state.metrics.requests_in_flight.load(Ordering::Relaxed),
        uptime_seconds: state.metrics.start_time.elapsed().as_secs(),
    })
}

#[derive(Serialize)]
struct MetricsResponse {
    total_requests: u64,
    requests_in_flight: u64,
    uptime_seconds: u64,
}

/// API error types
enum ApiError {
    BadRequest(String),
    NotFound(String),
    Upstream(String),
    Transport(String),
    Timeout(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::Transport(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::Timeout(msg) => (StatusCode::GATEWAY_TIMEOUT, msg),
        };

        let body = Json(serde_json::json!({
            "success": false,
            "error": message
        }));

        (status, body).into_response()
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down gracefully...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down gracefully...");
        }
    }
}
