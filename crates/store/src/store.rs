//! The narrow contract between the HTTP layer and product storage.

use async_trait::async_trait;

use catalog_core::product::{NewProduct, Product, UpdateProduct};
use catalog_core::types::ProductId;

/// Error from a storage backend.
///
/// Handlers never branch on the contents; every store failure maps to a
/// generic HTTP 500. The message exists for logs only.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// CRUD operations over product records.
///
/// Object-safe so application state can hold an `Arc<dyn ProductStore>`.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// List all products.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    /// Find a product by id, `None` if absent.
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// Insert a new product, assigning its id and timestamps.
    async fn create(&self, input: NewProduct) -> Result<Product, StoreError>;

    /// Apply the provided fields to an existing product, `None` if absent.
    async fn update(
        &self,
        id: ProductId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, StoreError>;

    /// Delete a product by id, returning whether a record was removed.
    async fn delete(&self, id: ProductId) -> Result<bool, StoreError>;
}
