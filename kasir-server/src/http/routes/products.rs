//! Product endpoints under `/api/produk`

use axum::{
    extract::{FromRef, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::models::{Product, ProductInput};
use crate::services::ProductService;

/// Optional list filter
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub name: Option<String>,
}

/// GET /api/produk - list products, optionally `?name=` filtered
async fn list_products(
    State(service): State<ProductService>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(service.list(query.name.as_deref()).await?))
}

/// POST /api/produk
async fn create_product(
    State(service): State<ProductService>,
    JsonBody(input): JsonBody<ProductInput>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = service.create(input).await?;
    tracing::info!(id = product.id, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/produk/{id}
async fn get_product(
    State(service): State<ProductService>,
    ValidId(id): ValidId,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(service.get(id).await?))
}

/// PUT /api/produk/{id}
async fn update_product(
    State(service): State<ProductService>,
    ValidId(id): ValidId,
    JsonBody(input): JsonBody<ProductInput>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(service.update(id, input).await?))
}

/// DELETE /api/produk/{id}
async fn delete_product(
    State(service): State<ProductService>,
    ValidId(id): ValidId,
) -> Result<Json<Value>, ApiError> {
    service.delete(id).await?;
    tracing::info!(id, "product deleted");
    Ok(Json(json!({ "message": "Produk berhasil dihapus" })))
}

/// Product routes. Item paths capture the whole remainder; see
/// [`ValidId`] for how it is rejected.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    ProductService: FromRef<S>,
{
    let item = get(get_product).put(update_product).delete(delete_product);

    Router::new()
        .route("/api/produk", get(list_products).post(create_product))
        .route("/api/produk/", item.clone())
        .route("/api/produk/{*id}", item)
}
