use std::sync::Arc;

use crate::db::{DbError, ProductRepository};
use crate::models::{Product, ProductInput};

#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// List products; an empty filter lists everything
    pub async fn list(&self, name: Option<&str>) -> Result<Vec<Product>, DbError> {
        let name = name.map(str::trim).filter(|n| !n.is_empty());
        self.repo.list(name).await
    }

    pub async fn create(&self, input: ProductInput) -> Result<Product, DbError> {
        self.repo.create(input).await
    }

    pub async fn get(&self, id: i64) -> Result<Product, DbError> {
        self.repo.get(id).await
    }

    pub async fn update(&self, id: i64, input: ProductInput) -> Result<Product, DbError> {
        self.repo.update(id, input).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        self.repo.delete(id).await
    }
}
