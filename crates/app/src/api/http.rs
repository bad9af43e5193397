//! HTTP implementation of the shop API.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use floret::{
    cart::CartLine,
    order::{Order, OrderId},
    product::{ProductId, ProductSummary},
    voucher::Voucher,
};

use crate::api::{
    ShopApi,
    envelope::Envelope,
    errors::ApiError,
    wire::{CheckoutRequest, CheckoutResponse, OrderDto, ProductDto, SyncCartRequest, VoucherDto},
};

/// Configuration for connecting to the shop backend.
#[derive(Debug, Clone)]
pub struct ShopApiConfig {
    /// Base URL of the REST API, e.g. `"http://localhost:8080/api"`.
    pub base_url: String,

    /// Optional bearer token. Guests browse and check out without one;
    /// wallet and order endpoints want it.
    pub bearer_token: Option<String>,
}

/// HTTP client for the storefront backend.
#[derive(Debug, Clone)]
pub struct HttpShopApi {
    config: ShopApiConfig,
    http: Client,
}

impl HttpShopApi {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: ShopApiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.config.base_url);
        let request = self.http.request(method, url);

        match &self.config.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send `request` and unwrap the response envelope down to its payload.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a 404, a non-2xx status
    /// (carrying the backend's `message` when one is present) or an envelope
    /// reporting failure.
    async fn payload(request: RequestBuilder) -> Result<Value, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }

        let body = response.text().await?;

        if !status.is_success() {
            // Error replies usually still carry the envelope with the reason
            // in `message`; fall back to the status line when they do not.
            let message = serde_json::from_str::<Envelope>(&body)
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or_else(|| format!("request failed with status {status}"));

            return Err(ApiError::Rejected(message));
        }

        let envelope: Envelope = serde_json::from_str(&body)?;

        envelope.into_payload()
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let payload = Self::payload(self.request(Method::GET, path)).await?;

        Ok(serde_json::from_value(payload)?)
    }
}

#[async_trait]
impl ShopApi for HttpShopApi {
    async fn list_products(&self) -> Result<Vec<ProductSummary>, ApiError> {
        let products: Vec<ProductDto> = self.get_json("/products").await?;

        Ok(products.into_iter().map(ProductSummary::from).collect())
    }

    async fn get_product(&self, id: ProductId) -> Result<ProductSummary, ApiError> {
        let product: ProductDto = self.get_json(&format!("/products/{id}")).await?;

        Ok(product.into())
    }

    async fn sync_cart(&self, lines: Vec<CartLine>) -> Result<(), ApiError> {
        let body = SyncCartRequest::new(&lines);
        let request = self.request(Method::POST, "/cart/sync").json(&body);

        Self::payload(request).await?;

        Ok(())
    }

    async fn submit_checkout(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutResponse, ApiError> {
        let request = self.request(Method::POST, "/orders/checkout").json(&request);
        let payload = Self::payload(request).await?;

        CheckoutResponse::from_payload(&payload)
    }

    async fn list_vouchers(&self) -> Result<Vec<Voucher>, ApiError> {
        let vouchers: Vec<VoucherDto> = self.get_json("/vouchers").await?;

        Ok(vouchers.into_iter().map(Voucher::from).collect())
    }

    async fn get_voucher(&self, code: String) -> Result<Voucher, ApiError> {
        let voucher: VoucherDto = self.get_json(&format!("/vouchers/code/{code}")).await?;

        Ok(voucher.into())
    }

    async fn my_vouchers(&self) -> Result<Vec<Voucher>, ApiError> {
        let vouchers: Vec<VoucherDto> = self.get_json("/vouchers/me").await?;

        Ok(vouchers.into_iter().map(Voucher::from).collect())
    }

    async fn save_voucher(&self, code: String) -> Result<(), ApiError> {
        let request = self.request(Method::POST, &format!("/vouchers/{code}/save"));

        Self::payload(request).await?;

        Ok(())
    }

    async fn my_orders(&self) -> Result<Vec<Order>, ApiError> {
        let orders: Vec<OrderDto> = self.get_json("/orders/me").await?;

        Ok(orders.into_iter().map(Order::from).collect())
    }

    async fn get_order(&self, id: OrderId) -> Result<Order, ApiError> {
        let order: OrderDto = self.get_json(&format!("/orders/{id}")).await?;

        Ok(order.into())
    }

    async fn cancel_order(&self, id: OrderId) -> Result<Order, ApiError> {
        let request = self.request(Method::POST, &format!("/orders/{id}/cancel"));
        let payload = Self::payload(request).await?;

        Ok(serde_json::from_value::<OrderDto>(payload)?.into())
    }
}
