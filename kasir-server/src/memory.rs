//! In-memory category store
//!
//! Backs the standalone category demo with the same [`CategoryRepository`]
//! contract as Postgres. Categories live in an id-ordered map; ids come from
//! a counter that only ever increases, so a deleted id is never handed out
//! again.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::db::{CategoryRepository, DbError};
use crate::models::{Category, CategoryInput};

#[derive(Debug)]
struct Inner {
    categories: BTreeMap<i64, Category>,
    next_id: i64,
}

/// Category repository held entirely in process memory
#[derive(Debug)]
pub struct MemoryCategoryRepo {
    inner: RwLock<Inner>,
}

impl MemoryCategoryRepo {
    /// Empty store; the first id handed out is 1
    pub fn new() -> Self {
        Self::with_categories(Vec::new())
    }

    /// Store pre-filled with `categories`. The counter starts after the
    /// largest existing id.
    pub fn with_categories(categories: Vec<Category>) -> Self {
        let categories: BTreeMap<i64, Category> =
            categories.into_iter().map(|c| (c.id, c)).collect();
        let next_id = categories.keys().next_back().map_or(1, |max| max + 1);

        Self {
            inner: RwLock::new(Inner {
                categories,
                next_id,
            }),
        }
    }

    /// The three starter categories served by the demo
    pub fn seeded() -> Self {
        let seed = [
            (1, "Makanan", "Produk makanan dan minuman"),
            (2, "Elektronik", "Barang-barang elektronik"),
            (3, "Pakaian", "Baju, celana, dan aksesoris"),
        ];

        Self::with_categories(
            seed.into_iter()
                .map(|(id, name, description)| Category {
                    id,
                    name: name.to_owned(),
                    description: description.to_owned(),
                })
                .collect(),
        )
    }
}

impl Default for MemoryCategoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryRepository for MemoryCategoryRepo {
    async fn list(&self) -> Result<Vec<Category>, DbError> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(inner.categories.values().cloned().collect())
    }

    async fn create(&self, input: CategoryInput) -> Result<Category, DbError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let id = inner.next_id;
        inner.next_id += 1;

        let category = input.into_category(id);
        inner.categories.insert(id, category.clone());
        Ok(category)
    }

    async fn get(&self, id: i64) -> Result<Category, DbError> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner
            .categories
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::not_found("Category", id))
    }

    async fn update(&self, id: i64, input: CategoryInput) -> Result<Category, DbError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let slot = inner
            .categories
            .get_mut(&id)
            .ok_or_else(|| DbError::not_found("Category", id))?;

        *slot = input.into_category(id);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DbError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner
            .categories
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DbError::not_found("Category", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> CategoryInput {
        CategoryInput {
            name: name.into(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn seeded_store_lists_in_id_order() {
        let repo = MemoryCategoryRepo::seeded();
        let names: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["Makanan", "Elektronik", "Pakaian"]);
    }

    #[tokio::test]
    async fn deleted_id_is_never_reused() {
        let repo = MemoryCategoryRepo::seeded();
        repo.delete(3).await.unwrap();

        let created = repo.create(input("Minuman")).await.unwrap();
        assert_eq!(created.id, 4);
        assert!(matches!(repo.get(3).await, Err(DbError::NotFound { .. })));
    }

    #[tokio::test]
    async fn update_keeps_path_id() {
        let repo = MemoryCategoryRepo::seeded();
        let updated = repo.update(2, input("Gadget")).await.unwrap();
        assert_eq!(updated.id, 2);
        assert_eq!(repo.get(2).await.unwrap().name, "Gadget");
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let repo = MemoryCategoryRepo::new();
        assert!(matches!(repo.get(1).await, Err(DbError::NotFound { .. })));
        assert!(matches!(
            repo.update(1, input("x")).await,
            Err(DbError::NotFound { .. })
        ));
        assert!(matches!(repo.delete(1).await, Err(DbError::NotFound { .. })));
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let repo = std::sync::Arc::new(MemoryCategoryRepo::new());
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(input(&format!("c{i}"))).await.unwrap().id })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.expect("task panicked"));
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=16).collect::<Vec<_>>());
    }
}
