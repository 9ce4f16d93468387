//! Product store.

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::Utc;

use tavag_core::ProductId;

use super::StoreError;
use crate::models::{CreateProduct, Product, ProductPatch};

/// Repository of per-business products.
pub trait ProductStore: Send + Sync {
    /// Create a product. The caller is responsible for verifying that
    /// `business_id` resolves to a business account.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only for store-level failures.
    fn create(&self, params: CreateProduct) -> Result<Product, StoreError>;

    /// Get a product by ID; a missing product is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only for store-level failures.
    fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// All products owned by one business, in creation order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only for store-level failures.
    fn list_by_business(&self, business_id: &str) -> Result<Vec<Product>, StoreError>;

    /// Apply a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the ID is absent.
    fn update(&self, id: ProductId, patch: ProductPatch) -> Result<Product, StoreError>;

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the ID is absent.
    fn delete(&self, id: ProductId) -> Result<(), StoreError>;
}

/// In-memory [`ProductStore`].
#[derive(Default)]
pub struct MemoryProductStore {
    inner: RwLock<ProductTable>,
}

#[derive(Default)]
struct ProductTable {
    products: BTreeMap<ProductId, Product>,
    next_id: i64,
}

impl MemoryProductStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductStore for MemoryProductStore {
    fn create(&self, params: CreateProduct) -> Result<Product, StoreError> {
        let mut table = self.inner.write().map_err(|_| StoreError::Poisoned)?;

        table.next_id += 1;
        let now = Utc::now();
        let product = Product {
            id: ProductId::new(table.next_id),
            business_id: params.business_id,
            name: params.name,
            description: params.description,
            price: params.price,
            image_url: params.image_url,
            category: params.category,
            available: params.available,
            created_at: now,
            updated_at: now,
        };
        table.products.insert(product.id, product.clone());
        Ok(product)
    }

    fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let table = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.products.get(&id).cloned())
    }

    fn list_by_business(&self, business_id: &str) -> Result<Vec<Product>, StoreError> {
        let table = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table
            .products
            .values()
            .filter(|p| p.business_id == business_id)
            .cloned()
            .collect())
    }

    fn update(&self, id: ProductId, patch: ProductPatch) -> Result<Product, StoreError> {
        let mut table = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let product = table
            .products
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("product", id))?;

        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(description) = patch.description {
            product.description = Some(description);
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(image_url) = patch.image_url {
            product.image_url = Some(image_url);
        }
        if let Some(category) = patch.category {
            product.category = Some(category);
        }
        if let Some(available) = patch.available {
            product.available = available;
        }
        product.updated_at = Utc::now();

        Ok(product.clone())
    }

    fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        let mut table = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        table
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("product", id))
    }
}
