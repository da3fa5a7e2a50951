//! HTTP layer
//!
//! Axum server with:
//! - Per-resource routers merged into one app
//! - Request tracing and timeouts
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, demo_router, run_demo_server, run_server, ServerConfig, ServerError};
