//! Axum server setup
//!
//! Two apps share the same handlers:
//! - the kasir API (Postgres-backed products, categories and reports)
//! - the category demo (in-memory categories only)
//!
//! Both get request tracing, a request timeout (408), permissive CORS, JSON
//! 404/405 bodies and graceful shutdown on SIGTERM/Ctrl+C.

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::{StatusCode, Uri};
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::routes::{self, health};
use crate::services::CategoryService;
use crate::state::AppState;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8080)
    pub bind_addr: SocketAddr,

    /// Upper bound on a single request (default: 30s)
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            request_timeout: Duration::from_secs(30),
        }
    }
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        resource: "Route",
        id: uri.path().to_owned(),
    }
}

/// Tracing, timeout and CORS, outermost first
fn with_middleware(app: Router, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                request_timeout,
            ))
            .layer(cors),
    )
}

/// Build the kasir API router
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    let app = Router::new()
        .merge(health::router(health::KASIR_API_MESSAGE))
        .merge(routes::products::router())
        .merge(routes::categories::router("/api/categories"))
        .merge(routes::reports::router())
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state);

    with_middleware(app, request_timeout)
}

/// Build the standalone category demo router
pub fn demo_router(categories: CategoryService, request_timeout: Duration) -> Router {
    let app = Router::new()
        .merge(health::router(health::CATEGORY_API_MESSAGE))
        .merge(routes::categories::router("/categories"))
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(categories);

    with_middleware(app, request_timeout)
}

/// Run the kasir API until shutdown.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&config.db_conn).await?;
/// run_server(AppState::from_pool(pool), ServerConfig::default()).await?;
/// ```
pub async fn run_server(state: AppState, config: ServerConfig) -> Result<(), ServerError> {
    let app = build_router(state, config.request_timeout);
    serve(app, config.bind_addr).await
}

/// Run the in-memory category demo until shutdown
pub async fn run_demo_server(
    categories: CategoryService,
    config: ServerConfig,
) -> Result<(), ServerError> {
    let app = demo_router(categories, config.request_timeout);
    serve(app, config.bind_addr).await
}

async fn serve(app: Router, bind_addr: SocketAddr) -> Result<(), ServerError> {
    let listener = TcpListener::bind(bind_addr)
        .await
        .inspect_err(|e| tracing::error!(error = %e, %bind_addr, "failed to bind"))?;
    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| tracing::error!(error = %e, "server stopped with error"))?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use sqlx::postgres::PgPoolOptions;

    use super::*;
    use crate::db::DbError;
    use crate::http::routes::test_support::send;
    use crate::memory::MemoryCategoryRepo;
    use crate::models::{Category, CategoryInput};

    /// Kasir app over a pool that never connects; only routes that reject
    /// before reaching the database can be exercised.
    fn unreachable_db_app() -> Router {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://kasir@127.0.0.1:1/unreachable")
            .unwrap();
        build_router(AppState::from_pool(pool), Duration::from_secs(5))
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8080);
        assert!(config.bind_addr.ip().is_unspecified());
    }

    #[tokio::test]
    async fn health_is_independent_of_database() {
        let app = unreachable_db_app();
        let (status, body) = send(&app, Method::GET, "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "OK", "message": "Kasir API Running" }));
    }

    #[tokio::test]
    async fn unsupported_method_is_json_405() {
        let app = unreachable_db_app();
        let (status, body) = send(&app, Method::PATCH, "/api/categories", None).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"], "method_not_allowed");
    }

    #[tokio::test]
    async fn bad_id_rejected_before_database() {
        let app = unreachable_db_app();

        let (status, _) = send(&app, Method::GET, "/api/produk/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, Method::GET, "/api/report?start_date=2024-01-01", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn demo_serves_seeded_categories() {
        let service = CategoryService::new(Arc::new(MemoryCategoryRepo::seeded()));
        let app = demo_router(service, Duration::from_secs(5));

        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Category API Running");

        let (status, list) = send(&app, Method::GET, "/categories", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().unwrap().len(), 3);

        // Deleting the newest then creating never reuses its id
        let (status, _) = send(&app, Method::DELETE, "/categories/3", None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, created) = send(
            &app,
            Method::POST,
            "/categories",
            Some(json!({ "name": "Mainan", "description": "Mainan anak" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], 4);

        let (status, body) = send(&app, Method::GET, "/api/categories", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let app = unreachable_db_app();
        let (status, body) = send(&app, Method::GET, "/api/kasir", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
        assert_eq!(body["message"], "Route /api/kasir tidak ditemukan");
    }

    /// Categories that never answer
    struct StalledCategories;

    #[async_trait::async_trait]
    impl crate::db::CategoryRepository for StalledCategories {
        async fn list(&self) -> Result<Vec<Category>, DbError> {
            std::future::pending().await
        }

        async fn create(&self, _: CategoryInput) -> Result<Category, DbError> {
            std::future::pending().await
        }

        async fn get(&self, _: i64) -> Result<Category, DbError> {
            std::future::pending().await
        }

        async fn update(&self, _: i64, _: CategoryInput) -> Result<Category, DbError> {
            std::future::pending().await
        }

        async fn delete(&self, _: i64) -> Result<(), DbError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn slow_request_times_out_with_408() {
        let service = CategoryService::new(Arc::new(StalledCategories));
        let app = demo_router(service, Duration::from_millis(20));

        let (status, _) = send(&app, Method::GET, "/categories", None).await;
        assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    }
}
