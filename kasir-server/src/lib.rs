//! kasir-server: HTTP API for a point-of-sale backend
//!
//! Products and categories are stored in PostgreSQL and exposed as JSON CRUD
//! endpoints. Sales reports are aggregated on demand from the transaction
//! tables. Layering is handler -> service -> repository; each layer takes its
//! collaborators explicitly at construction.

pub mod config;
pub mod db;
pub mod http;
pub mod memory;
pub mod models;
pub mod services;
pub mod state;

pub use config::{ConfigError, KasirConfig};
pub use state::AppState;
