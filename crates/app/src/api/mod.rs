//! Shop API
//!
//! The HTTP boundary to the storefront backend. Everything the client does
//! remotely goes through the [`ShopApi`] trait; [`HttpShopApi`] is the real
//! implementation and a generated mock stands in for it in tests.

pub mod envelope;
mod errors;
mod http;
mod wire;

pub use errors::ApiError;
pub use http::{HttpShopApi, ShopApiConfig};
pub use wire::{CheckoutRequest, CheckoutResponse};

use async_trait::async_trait;
use mockall::automock;

use floret::{
    cart::CartLine,
    order::{Order, OrderId},
    product::{ProductId, ProductSummary},
    voucher::Voucher,
};

#[automock]
#[async_trait]
pub trait ShopApi: Send + Sync {
    /// List the catalog.
    async fn list_products(&self) -> Result<Vec<ProductSummary>, ApiError>;

    /// Fetch one product by id.
    async fn get_product(&self, id: ProductId) -> Result<ProductSummary, ApiError>;

    /// Replace the server-side cart with the client's lines.
    async fn sync_cart(&self, lines: Vec<CartLine>) -> Result<(), ApiError>;

    /// Place an order from the synced cart and the submitted form.
    async fn submit_checkout(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutResponse, ApiError>;

    /// List the publicly available vouchers.
    async fn list_vouchers(&self) -> Result<Vec<Voucher>, ApiError>;

    /// Fetch a voucher by its code.
    async fn get_voucher(&self, code: String) -> Result<Voucher, ApiError>;

    /// List the customer's saved vouchers.
    async fn my_vouchers(&self) -> Result<Vec<Voucher>, ApiError>;

    /// Save a voucher to the customer's wallet.
    async fn save_voucher(&self, code: String) -> Result<(), ApiError>;

    /// List the customer's orders, newest first.
    async fn my_orders(&self) -> Result<Vec<Order>, ApiError>;

    /// Fetch one order by id.
    async fn get_order(&self, id: OrderId) -> Result<Order, ApiError>;

    /// Ask the backend to cancel an order. Returns the updated order.
    async fn cancel_order(&self, id: OrderId) -> Result<Order, ApiError>;
}
