use std::sync::Arc;

use crate::db::{CategoryRepository, DbError};
use crate::models::{Category, CategoryInput};

#[derive(Clone)]
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        self.repo.list().await
    }

    pub async fn create(&self, input: CategoryInput) -> Result<Category, DbError> {
        self.repo.create(input).await
    }

    pub async fn get(&self, id: i64) -> Result<Category, DbError> {
        self.repo.get(id).await
    }

    pub async fn update(&self, id: i64, input: CategoryInput) -> Result<Category, DbError> {
        self.repo.update(id, input).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        self.repo.delete(id).await
    }
}
