//! App Context

use std::{io, path::Path, sync::Arc};

use thiserror::Error;

use crate::{
    api::{HttpShopApi, ShopApi, ShopApiConfig},
    domain::{
        cart::{CartStore, CartStoreError},
        catalog::CatalogService,
        checkout::CheckoutFlow,
        favorites::{FavoritesError, FavoritesStore},
        orders::OrdersService,
        vouchers::VouchersService,
    },
    storage::{FileStore, KeyValueStore},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to open the local data directory")]
    Storage(#[source] io::Error),
}

pub struct AppContext {
    pub api: Arc<dyn ShopApi>,
    pub storage: Arc<dyn KeyValueStore>,
    pub catalog: CatalogService,
    pub vouchers: VouchersService,
    pub orders: OrdersService,
}

impl AppContext {
    /// Build application context from a data directory and API settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the data directory cannot be opened.
    pub fn open(data_dir: &Path, api: ShopApiConfig) -> Result<Self, AppInitError> {
        let storage = FileStore::open(data_dir).map_err(AppInitError::Storage)?;

        Ok(Self::new(
            Arc::new(HttpShopApi::new(api)),
            Arc::new(storage),
        ))
    }

    /// Build application context from already constructed backends.
    #[must_use]
    pub fn new(api: Arc<dyn ShopApi>, storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            catalog: CatalogService::new(api.clone()),
            vouchers: VouchersService::new(api.clone(), storage.clone()),
            orders: OrdersService::new(api.clone()),
            api,
            storage,
        }
    }

    /// Load the persisted cart.
    ///
    /// # Errors
    ///
    /// Returns an error when the cart entry cannot be read.
    pub fn cart(&self) -> Result<CartStore, CartStoreError> {
        CartStore::load(self.storage.clone())
    }

    /// Load the persisted favorites.
    ///
    /// # Errors
    ///
    /// Returns an error when the favorites entry cannot be read.
    pub fn favorites(&self) -> Result<FavoritesStore, FavoritesError> {
        FavoritesStore::load(self.storage.clone())
    }

    /// Start a checkout flow over the persisted cart and vouchers.
    #[must_use]
    pub fn checkout(&self) -> CheckoutFlow {
        CheckoutFlow::new(self.api.clone(), self.storage.clone())
    }
}
