//! In-memory [`ProductStore`] implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use catalog_core::product::{NewProduct, Product, UpdateProduct};
use catalog_core::types::ProductId;

use crate::store::{ProductStore, StoreError};

/// Keeps all products in a `HashMap` behind an async `RwLock`.
///
/// Ids are UUID v4, timestamps are assigned at write time. Listing is
/// ordered by name (then id) for deterministic output.
#[derive(Default)]
pub struct MemoryStore {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let products = self.products.read().await;
        let mut items: Vec<Product> = products.values().cloned().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(items)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn create(&self, input: NewProduct) -> Result<Product, StoreError> {
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: input.name,
            price: input.price,
            category: input.category,
            created_at: now,
            updated_at: now,
        };

        let mut products = self.products.write().await;
        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(
        &self,
        id: ProductId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, StoreError> {
        let mut products = self.products.write().await;
        let Some(product) = products.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(name) = &input.name {
            product.name = name.clone();
        }
        if let Some(price) = input.price {
            product.price = price;
        }
        if let Some(category) = &input.category {
            product.category = category.clone();
        }
        product.updated_at = Utc::now();

        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: ProductId) -> Result<bool, StoreError> {
        let mut products = self.products.write().await;
        Ok(products.remove(&id).is_some())
    }
}
