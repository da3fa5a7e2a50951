//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::db::{PgCategoryRepo, PgProductRepo, PgReportRepo};
use crate::services::{CategoryService, ProductService, ReportService};

/// Services for every resource; handlers extract the one they need
#[derive(Clone, FromRef)]
pub struct AppState {
    pub categories: CategoryService,
    pub products: ProductService,
    pub reports: ReportService,
}

impl AppState {
    pub fn new(
        categories: CategoryService,
        products: ProductService,
        reports: ReportService,
    ) -> Self {
        Self {
            categories,
            products,
            reports,
        }
    }

    /// Wire Postgres repositories onto one shared pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            CategoryService::new(Arc::new(PgCategoryRepo::new(pool.clone()))),
            ProductService::new(Arc::new(PgProductRepo::new(pool.clone()))),
            ReportService::new(Arc::new(PgReportRepo::new(pool))),
        )
    }
}
