//! Handlers for the product resource.
//!
//! Each handler validates its input, delegates to the [`ProductStore`]
//! collaborator held in application state, and maps the outcome to an HTTP
//! status. Store failures surface as a generic 500 via `AppError`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use catalog_core::error::CoreError;
use catalog_core::product::{self, CreateProduct, Product, UpdateProduct};
use catalog_core::types::ProductId;
use catalog_store::ProductStore;

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a product exists, returning the full record.
async fn ensure_product_exists(store: &dyn ProductStore, id: ProductId) -> AppResult<Product> {
    store.find_by_id(id).await?.ok_or(AppError::Core(CoreError::NotFound {
        entity: "Product",
        id,
    }))
}

// ---------------------------------------------------------------------------
// GET /products
// ---------------------------------------------------------------------------

/// List all products.
pub async fn list_products(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = state.store.list().await?;
    tracing::debug!(count = items.len(), "Listed products");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /products
// ---------------------------------------------------------------------------

/// Create a new product.
pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    let new = product::validate_new_product(&input)?;

    let created = state.store.create(new).await?;
    tracing::info!(id = %created.id, name = %created.name, "Product created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /products/{id}
// ---------------------------------------------------------------------------

/// Get a single product by ID.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> AppResult<impl IntoResponse> {
    let p = ensure_product_exists(state.store.as_ref(), id).await?;
    Ok(Json(DataResponse { data: p }))
}

// ---------------------------------------------------------------------------
// PUT /products/{id}
// ---------------------------------------------------------------------------

/// Update an existing product. Only the provided fields are applied.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    ApiJson(input): ApiJson<UpdateProduct>,
) -> AppResult<impl IntoResponse> {
    product::validate_product_update(&input)?;

    let updated = state
        .store
        .update(id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    tracing::info!(id = %updated.id, "Product updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /products/{id}
// ---------------------------------------------------------------------------

/// Delete a product by ID.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> AppResult<StatusCode> {
    let deleted = state.store.delete(id).await?;
    if deleted {
        tracing::info!(%id, "Product deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))
    }
}
