//! Catalog service.
//!
//! Thin pass-through over the backend catalog. Exists so browsing and
//! add-to-cart share one place to fetch the product snapshot from.

use std::sync::Arc;

use floret::product::{ProductId, ProductSummary};

use crate::api::{ApiError, ShopApi};

pub struct CatalogService {
    api: Arc<dyn ShopApi>,
}

impl CatalogService {
    #[must_use]
    pub fn new(api: Arc<dyn ShopApi>) -> Self {
        Self { api }
    }

    /// The storefront catalog.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be reached.
    pub async fn list(&self) -> Result<Vec<ProductSummary>, ApiError> {
        self.api.list_products().await
    }

    /// One product by id.
    ///
    /// # Errors
    ///
    /// Returns an error when the product does not exist or the backend
    /// cannot be reached.
    pub async fn get(&self, id: ProductId) -> Result<ProductSummary, ApiError> {
        self.api.get_product(id).await
    }
}
