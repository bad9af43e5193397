//! Favorites store.
//!
//! A persisted set of product ids under the `favorites` key, with the same
//! last-writer-wins semantics as the cart.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::warn;

use floret::product::ProductId;

use crate::storage::{KeyValueStore, StorageError, StoreKey};

#[derive(Debug, Error)]
pub enum FavoritesError {
    /// The local store could not be read or written.
    #[error("favorites storage error")]
    Storage(#[from] StorageError),

    /// The favorites could not be encoded for persistence.
    #[error("favorites entry could not be encoded")]
    Encode(#[source] serde_json::Error),
}

pub struct FavoritesStore {
    storage: Arc<dyn KeyValueStore>,
    ids: FxHashSet<ProductId>,
}

impl FavoritesStore {
    /// Load the persisted favorites from `storage`.
    ///
    /// A missing entry yields an empty set. A corrupt entry is logged and
    /// discarded, also yielding an empty set.
    ///
    /// # Errors
    ///
    /// Returns an error when the entry exists but cannot be read.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Result<Self, FavoritesError> {
        let ids = match storage.read(StoreKey::Favorites)? {
            None => FxHashSet::default(),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(ids) => ids,
                Err(error) => {
                    warn!("discarding corrupt favorites entry: {error}");

                    FxHashSet::default()
                }
            },
        };

        Ok(Self { storage, ids })
    }

    /// Flip `product`'s membership and persist. Returns whether the product
    /// is now a favorite.
    ///
    /// # Errors
    ///
    /// Returns an error when persistence fails.
    pub fn toggle(&mut self, product: ProductId) -> Result<bool, FavoritesError> {
        let inserted = self.ids.insert(product);

        if !inserted {
            self.ids.remove(&product);
        }

        self.persist()?;

        Ok(inserted)
    }

    /// Whether `product` is a favorite.
    #[must_use]
    pub fn contains(&self, product: ProductId) -> bool {
        self.ids.contains(&product)
    }

    /// All favorites, sorted by id for stable output.
    #[must_use]
    pub fn all(&self) -> Vec<ProductId> {
        let mut ids: Vec<_> = self.ids.iter().copied().collect();

        ids.sort_unstable();

        ids
    }

    /// Number of favorites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is favorited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn persist(&self) -> Result<(), FavoritesError> {
        // Stored sorted so the entry is stable across runs.
        let encoded = serde_json::to_string(&self.all()).map_err(FavoritesError::Encode)?;

        self.storage.write(StoreKey::Favorites, &encoded)?;

        Ok(())
    }
}
