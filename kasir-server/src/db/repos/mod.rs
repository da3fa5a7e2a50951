//! Repository traits and their PostgreSQL implementations
//!
//! Each repository follows these patterns:
//! - Absent rows become `DbError::NotFound`, other driver errors pass through
//! - Writes use `RETURNING` (plus a CTE join where the response needs it),
//!   one round trip per operation
//! - Reads that combine several queries share one snapshot transaction

pub mod categories;
pub mod products;
pub mod reports;

pub use categories::{CategoryRepository, PgCategoryRepo};
pub use products::{PgProductRepo, ProductRepository};
pub use reports::{PgReportRepo, ReportRepository};

/// Pool with the schema applied, for the `#[ignore]`d database tests
#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::PgPool {
    let url = std::env::var("DB_CONN").expect("DB_CONN required");
    let pool = sqlx::PgPool::connect(&url).await.expect("connect failed");
    sqlx::raw_sql(include_str!("../../../sql/schema.sql"))
        .execute(&pool)
        .await
        .expect("schema setup failed");
    pool
}
