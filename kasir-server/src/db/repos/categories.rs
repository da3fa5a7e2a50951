//! Category repository

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{Category, CategoryInput};

/// Category storage
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by id
    async fn list(&self) -> Result<Vec<Category>, DbError>;

    /// Insert and return the stored record with its assigned id
    async fn create(&self, input: CategoryInput) -> Result<Category, DbError>;

    async fn get(&self, id: i64) -> Result<Category, DbError>;

    /// Overwrite the category stored under `id`
    async fn update(&self, id: i64, input: CategoryInput) -> Result<Category, DbError>;

    async fn delete(&self, id: i64) -> Result<(), DbError>;
}

/// PostgreSQL-backed categories
#[derive(Clone)]
pub struct PgCategoryRepo {
    pool: PgPool,
}

impl PgCategoryRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepo {
    async fn list(&self) -> Result<Vec<Category>, DbError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, description FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn create(&self, input: CategoryInput) -> Result<Category, DbError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = category.id, "category created");
        Ok(category)
    }

    async fn get(&self, id: i64) -> Result<Category, DbError> {
        sqlx::query_as::<_, Category>(
            "SELECT id, name, description FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("Category", id))
    }

    async fn update(&self, id: i64, input: CategoryInput) -> Result<Category, DbError> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = $1, description = $2
            WHERE id = $3
            RETURNING id, name, description
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("Category", id))
    }

    async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Category", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::test_pool;

    // Integration tests - run with DB_CONN set
    // cargo test -p kasir-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_round_trips() {
        let repo = PgCategoryRepo::new(test_pool().await);
        let created = repo
            .create(CategoryInput {
                name: "Minuman".into(),
                description: "Minuman dingin".into(),
            })
            .await
            .unwrap();

        let fetched = repo.get(created.id).await.unwrap();
        assert_eq!(fetched, created);

        repo.delete(created.id).await.unwrap();
        assert!(matches!(
            repo.get(created.id).await,
            Err(DbError::NotFound { .. })
        ));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_missing_is_not_found() {
        let repo = PgCategoryRepo::new(test_pool().await);
        let err = repo
            .update(
                i64::MAX,
                CategoryInput {
                    name: "x".into(),
                    description: String::new(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
