//! Cart
//!
//! An ordered list of lines, unique by product id. Each line snapshots the
//! product's name and prices at the moment it was added, so a later catalog
//! change does not silently reprice the cart.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::product::{ProductId, ProductSummary};

/// Errors related to cart mutations.
#[derive(Debug, Error)]
pub enum CartError {
    /// A quantity of zero was supplied where at least one is required.
    #[error("quantity must be at least 1")]
    InvalidQuantity,
}

/// A single cart line: a product snapshot plus a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product this line refers to.
    pub product_id: ProductId,

    /// Product name at the time the line was created.
    pub name: String,

    /// Regular price at the time the line was created.
    pub price: u64,

    /// Sale price at the time the line was created, if any.
    pub sale_price: Option<u64>,

    /// Thumbnail image URL.
    pub thumbnail: String,

    /// Number of units, always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// The per-unit price the line is charged at: the sale price when present.
    #[must_use]
    pub fn effective_price(&self) -> u64 {
        self.sale_price.unwrap_or(self.price)
    }

    /// The line total, `effective_price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.effective_price()
            .saturating_mul(u64::from(self.quantity))
    }
}

/// A shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `product`.
    ///
    /// Merges into the existing line for the same product (summing
    /// quantities) or appends a new line snapshotting the product's current
    /// name and prices.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] when `quantity` is zero.
    pub fn add(&mut self, product: &ProductSummary, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        if let Some(line) = self.line_mut(product.id) {
            line.quantity = line.quantity.saturating_add(quantity);

            return Ok(());
        }

        self.lines.push(CartLine {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            sale_price: product.sale_price,
            thumbnail: product.thumbnail.clone(),
            quantity,
        });

        Ok(())
    }

    /// Delete the line for `product`. Returns whether a line was removed.
    pub fn remove(&mut self, product: ProductId) -> bool {
        let before = self.lines.len();

        self.lines.retain(|line| line.product_id != product);

        self.lines.len() < before
    }

    /// Set the quantity of the line for `product`.
    ///
    /// A quantity below 1 deletes the line. No upper bound is enforced.
    /// Returns whether a line was updated or removed.
    pub fn set_quantity(&mut self, product: ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(product);
        }

        match self.line_mut(product) {
            Some(line) => {
                line.quantity = quantity;

                true
            }
            None => false,
        }
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up the line for `product`.
    #[must_use]
    pub fn line(&self, product: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product)
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity))
            .sum()
    }

    /// Sum of `effective_price × quantity` over all lines.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.lines
            .iter()
            .fold(0, |total, line| total.saturating_add(line.line_total()))
    }

    fn line_mut(&mut self, product: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product_id == product)
    }
}
