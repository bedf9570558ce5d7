//! Product CRUD API handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use stockroom_core::ProductId;

use crate::error::AppError;
use crate::middleware::auth::RequireAdminAuth;
use crate::models::Product;
use crate::state::AppState;
use crate::validation::{ProductDraft, validate_new, validate_patch};

/// `GET /api/products` - full listing, newest first.
#[instrument(skip(state))]
pub async fn list(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.products().list_all().await?;
    Ok(Json(products))
}

/// `GET /api/products/{id}` - single product or 404.
#[instrument(skip(state))]
pub async fn get_one(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, AppError> {
    let product = state.products().get(ProductId::new(id)).await?;
    Ok(Json(product))
}

/// `POST /api/products` - validate, insert, return the stored record.
///
/// Validation failures return 422 with one entry per failing field.
#[instrument(skip(state, draft))]
pub async fn create(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let new = validate_new(&draft).map_err(AppError::Validation)?;
    let product = state.products().create(&new).await?;

    tracing::info!(product_id = %product.id, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// `PUT /api/products/{id}` - partial update; absent fields keep their
/// stored values.
#[instrument(skip(state, draft))]
pub async fn update(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<Product>, AppError> {
    let patch = validate_patch(&draft).map_err(AppError::Validation)?;
    let product = state.products().update(ProductId::new(id), &patch).await?;

    tracing::info!(product_id = %product.id, "product updated");
    Ok(Json(product))
}

/// `DELETE /api/products/{id}` - delete or 404.
#[instrument(skip(state))]
pub async fn delete(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.products().delete(ProductId::new(id)).await?;

    tracing::info!(product_id = %id, "product deleted");
    Ok(Json(json!({ "success": true })))
}
