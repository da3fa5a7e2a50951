//! Product repository
//!
//! Every read returns the joined category name, so writes go through a CTE
//! (`INSERT/UPDATE ... RETURNING`) joined back to `categories` in the same
//! statement.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{Product, ProductInput};

/// Product storage
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Products ordered by id, optionally filtered by a case-insensitive
    /// name fragment
    async fn list(&self, name: Option<&str>) -> Result<Vec<Product>, DbError>;

    async fn create(&self, input: ProductInput) -> Result<Product, DbError>;

    async fn get(&self, id: i64) -> Result<Product, DbError>;

    /// Overwrite the product stored under `id`
    async fn update(&self, id: i64, input: ProductInput) -> Result<Product, DbError>;

    async fn delete(&self, id: i64) -> Result<(), DbError>;
}

/// PostgreSQL-backed products
#[derive(Clone)]
pub struct PgProductRepo {
    pool: PgPool,
}

impl PgProductRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `ILIKE` pattern matching `fragment` literally anywhere in the name.
/// `\`, `%` and `_` are escaped for `ESCAPE '\'`.
fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl ProductRepository for PgProductRepo {
    async fn list(&self, name: Option<&str>) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT p.id, p.name, p.price, p.stock, p.category_id,
                   c.name AS category_name
            FROM products p
            LEFT JOIN categories c ON c.id = p.category_id
            WHERE $1::TEXT IS NULL OR p.name ILIKE $1 ESCAPE '\'
            ORDER BY p.id
            "#,
        )
        .bind(name.map(contains_pattern))
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn create(&self, input: ProductInput) -> Result<Product, DbError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            WITH inserted AS (
                INSERT INTO products (name, price, stock, category_id)
                VALUES ($1, $2, $3, $4)
                RETURNING id, name, price, stock, category_id
            )
            SELECT i.id, i.name, i.price, i.stock, i.category_id,
                   c.name AS category_name
            FROM inserted i
            LEFT JOIN categories c ON c.id = i.category_id
            "#,
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(input.stock)
        .bind(input.category_id)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = product.id, "product created");
        Ok(product)
    }

    async fn get(&self, id: i64) -> Result<Product, DbError> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT p.id, p.name, p.price, p.stock, p.category_id,
                   c.name AS category_name
            FROM products p
            LEFT JOIN categories c ON c.id = p.category_id
            WHERE p.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("Produk", id))
    }

    async fn update(&self, id: i64, input: ProductInput) -> Result<Product, DbError> {
        sqlx::query_as::<_, Product>(
            r#"
            WITH updated AS (
                UPDATE products
                SET name = $1, price = $2, stock = $3, category_id = $4
                WHERE id = $5
                RETURNING id, name, price, stock, category_id
            )
            SELECT u.id, u.name, u.price, u.stock, u.category_id,
                   c.name AS category_name
            FROM updated u
            LEFT JOIN categories c ON c.id = u.category_id
            "#,
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(input.stock)
        .bind(input.category_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("Produk", id))
    }

    async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Produk", id));
        }
        Ok(())
    }
}
