//! Products
//!
//! The slice of the catalog the client actually needs: enough of a product to
//! render a listing and to snapshot into a cart line.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-issued product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Wrap a raw backend id.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw backend id.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A product as listed by the catalog.
///
/// Prices are integer minor units. `sale_price`, when present, is the price a
/// cart line is charged at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// Backend identifier.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Regular price.
    pub price: u64,

    /// Discounted price, if the product is on sale.
    pub sale_price: Option<u64>,

    /// Thumbnail image URL.
    pub thumbnail: String,
}

impl ProductSummary {
    /// The price this product is currently charged at.
    #[must_use]
    pub fn effective_price(&self) -> u64 {
        self.sale_price.unwrap_or(self.price)
    }

    /// Whether the product has a sale price set.
    #[must_use]
    pub fn on_sale(&self) -> bool {
        self.sale_price.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rose() -> ProductSummary {
        ProductSummary {
            id: ProductId::new(1),
            name: "Red Rose Bouquet".to_string(),
            price: 250_000,
            sale_price: None,
            thumbnail: "/images/red-rose.jpg".to_string(),
        }
    }

    #[test]
    fn effective_price_is_regular_price_without_sale() {
        assert_eq!(rose().effective_price(), 250_000);
    }

    #[test]
    fn effective_price_prefers_sale_price() {
        let mut product = rose();
        product.sale_price = Some(199_000);

        assert_eq!(product.effective_price(), 199_000);
        assert!(product.on_sale());
    }

    #[test]
    fn product_id_displays_raw_value() {
        assert_eq!(ProductId::new(42).to_string(), "42");
    }
}
