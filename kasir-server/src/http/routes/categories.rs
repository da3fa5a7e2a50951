//! Category endpoints
//!
//! Mounted at `/api/categories` by the main server and at `/categories` by
//! the in-memory demo; the base path is a parameter.

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::models::{Category, CategoryInput};
use crate::services::CategoryService;

/// GET /categories - list all categories
async fn list_categories(
    State(service): State<CategoryService>,
) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(service.list().await?))
}

/// POST /categories - create a category
async fn create_category(
    State(service): State<CategoryService>,
    JsonBody(input): JsonBody<CategoryInput>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let category = service.create(input).await?;
    tracing::info!(id = category.id, "category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /categories/{id}
async fn get_category(
    State(service): State<CategoryService>,
    ValidId(id): ValidId,
) -> Result<Json<Category>, ApiError> {
    Ok(Json(service.get(id).await?))
}

/// PUT /categories/{id} - the path id wins over any id in the body
async fn update_category(
    State(service): State<CategoryService>,
    ValidId(id): ValidId,
    JsonBody(input): JsonBody<CategoryInput>,
) -> Result<Json<Category>, ApiError> {
    Ok(Json(service.update(id, input).await?))
}

/// DELETE /categories/{id}
async fn delete_category(
    State(service): State<CategoryService>,
    ValidId(id): ValidId,
) -> Result<Json<Value>, ApiError> {
    service.delete(id).await?;
    tracing::info!(id, "category deleted");
    Ok(Json(json!({ "message": "Category berhasil dihapus" })))
}

/// Category routes under `base` (e.g. `/api/categories`).
///
/// The item route captures the whole remainder (and `{base}/` with none), so
/// anything that is not a single integer is a 400 from [`ValidId`].
pub fn router<S>(base: &str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    CategoryService: FromRef<S>,
{
    let item = get(get_category).put(update_category).delete(delete_category);

    Router::new()
        .route(base, get(list_categories).post(create_category))
        .route(&format!("{base}/"), item.clone())
        .route(&format!("{base}/{{*id}}"), item)
}
