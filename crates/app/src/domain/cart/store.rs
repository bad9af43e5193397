//! Cart store.
//!
//! Write-through wrapper around the cart model: every mutation synchronously
//! rewrites the `cart` entry in the local store and drops the
//! `appliedVoucher` entry, because a changed cart invalidates any previously
//! validated voucher amounts.

use std::sync::Arc;

use tracing::warn;

use floret::{
    cart::{Cart, CartLine},
    product::{ProductId, ProductSummary},
};

use crate::{
    domain::cart::errors::CartStoreError,
    storage::{KeyValueStore, StoreKey},
};

pub struct CartStore {
    storage: Arc<dyn KeyValueStore>,
    cart: Cart,
}

impl CartStore {
    /// Load the persisted cart from `storage`.
    ///
    /// A missing entry yields an empty cart. A corrupt entry is logged and
    /// discarded, also yielding an empty cart.
    ///
    /// # Errors
    ///
    /// Returns an error when the entry exists but cannot be read.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Result<Self, CartStoreError> {
        let cart = match storage.read(StoreKey::Cart)? {
            None => Cart::new(),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(cart) => cart,
                Err(error) => {
                    warn!("discarding corrupt cart entry: {error}");

                    Cart::new()
                }
            },
        };

        Ok(Self { storage, cart })
    }

    /// The current cart contents.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The current cart lines.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Sum of effective line prices times quantities.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.cart.subtotal()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Add `quantity` units of `product` and persist.
    ///
    /// # Errors
    ///
    /// Returns an error when the quantity is invalid or persistence fails.
    pub fn add(&mut self, product: &ProductSummary, quantity: u32) -> Result<(), CartStoreError> {
        self.cart.add(product, quantity)?;

        self.persist()
    }

    /// Delete the line for `product` and persist. Returns whether a line was
    /// removed; removing nothing leaves the store untouched.
    ///
    /// # Errors
    ///
    /// Returns an error when persistence fails.
    pub fn remove(&mut self, product: ProductId) -> Result<bool, CartStoreError> {
        let removed = self.cart.remove(product);

        if removed {
            self.persist()?;
        }

        Ok(removed)
    }

    /// Set the quantity of the line for `product` and persist. A quantity
    /// below 1 deletes the line. Returns whether anything changed.
    ///
    /// # Errors
    ///
    /// Returns an error when persistence fails.
    pub fn set_quantity(
        &mut self,
        product: ProductId,
        quantity: u32,
    ) -> Result<bool, CartStoreError> {
        let changed = self.cart.set_quantity(product, quantity);

        if changed {
            self.persist()?;
        }

        Ok(changed)
    }

    /// Empty the cart and persist.
    ///
    /// # Errors
    ///
    /// Returns an error when persistence fails.
    pub fn clear(&mut self) -> Result<(), CartStoreError> {
        if self.cart.is_empty() {
            return Ok(());
        }

        self.cart.clear();

        self.persist()
    }

    /// Write the cart entry and drop the applied vouchers. A cart change
    /// invalidates both voucher slots.
    fn persist(&self) -> Result<(), CartStoreError> {
        let encoded = serde_json::to_string(&self.cart).map_err(CartStoreError::Encode)?;

        self.storage.write(StoreKey::Cart, &encoded)?;
        self.storage.remove(StoreKey::AppliedVoucher)?;

        Ok(())
    }
}
