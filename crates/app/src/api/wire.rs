//! Wire representations of backend payloads.
//!
//! The backend speaks camelCase JSON; the domain models do not. Everything
//! that crosses the HTTP boundary goes through one of these types and is
//! converted at the edge.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use floret::{
    cart::CartLine,
    checkout::{CheckoutForm, PaymentMethod},
    order::{Order, OrderId, OrderItem, OrderStatus},
    product::{ProductId, ProductSummary},
    voucher::{AppliedVouchers, Voucher, VoucherTarget, VoucherValue},
};

use crate::api::{envelope, errors::ApiError};

fn default_true() -> bool {
    true
}

fn default_target() -> VoucherTarget {
    VoucherTarget::Order
}

/// A catalog product as served by the backend.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: u64,
    pub name: String,
    pub price: u64,
    #[serde(default)]
    pub sale_price: Option<u64>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl From<ProductDto> for ProductSummary {
    fn from(dto: ProductDto) -> Self {
        Self {
            id: ProductId::new(dto.id),
            name: dto.name,
            price: dto.price,
            sale_price: dto.sale_price,
            thumbnail: dto.thumbnail.unwrap_or_default(),
        }
    }
}

/// A voucher definition as served by the backend.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherDto {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    pub discount_value: u64,
    pub is_percent: bool,
    #[serde(default)]
    pub max_discount: Option<u64>,
    #[serde(default)]
    pub min_order_value: u64,
    #[serde(default = "default_target")]
    pub target: VoucherTarget,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub starts_at: Option<Timestamp>,
    #[serde(default)]
    pub expires_at: Option<Timestamp>,
}

impl From<VoucherDto> for Voucher {
    fn from(dto: VoucherDto) -> Self {
        let value = if dto.is_percent {
            VoucherValue::Percent(dto.discount_value)
        } else {
            VoucherValue::Fixed(dto.discount_value)
        };

        Self {
            code: dto.code,
            description: dto.description,
            value,
            max_discount: dto.max_discount,
            min_order_value: dto.min_order_value,
            target: dto.target,
            active: dto.active,
            starts_at: dto.starts_at,
            expires_at: dto.expires_at,
        }
    }
}

/// One purchased line of an order as served by the backend.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub name: String,
    pub price: u64,
    pub quantity: u32,
}

impl From<OrderItemDto> for OrderItem {
    fn from(dto: OrderItemDto) -> Self {
        Self {
            name: dto.name,
            price: dto.price,
            quantity: dto.quantity,
        }
    }
}

/// An order as served by the backend.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: String,
    pub status: OrderStatus,
    pub total_amount: u64,
    #[serde(default)]
    pub discount_amount: u64,
    #[serde(default)]
    pub shipping_fee: u64,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub items: Vec<OrderItemDto>,
}

impl From<OrderDto> for Order {
    fn from(dto: OrderDto) -> Self {
        Self {
            id: OrderId::new(dto.id),
            status: dto.status,
            total: dto.total_amount,
            discount: dto.discount_amount,
            shipping_fee: dto.shipping_fee,
            payment_method: dto.payment_method,
            created_at: dto.created_at,
            items: dto.items.into_iter().map(OrderItem::from).collect(),
        }
    }
}

/// One cart line in the shape the sync endpoint expects.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineDto {
    pub product_id: u64,
    pub quantity: u32,
}

impl From<&CartLine> for CartLineDto {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id.get(),
            quantity: line.quantity,
        }
    }
}

/// Body of `POST /cart/sync`.
#[derive(Debug, Serialize)]
pub struct SyncCartRequest {
    pub items: Vec<CartLineDto>,
}

impl SyncCartRequest {
    #[must_use]
    pub fn new(lines: &[CartLine]) -> Self {
        Self {
            items: lines.iter().map(CartLineDto::from).collect(),
        }
    }
}

/// Body of `POST /orders/checkout`.
///
/// Line items are not submitted here; the backend reads them from the synced
/// server-side cart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub shipping_address: String,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voucher_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_voucher_code: Option<String>,
}

impl CheckoutRequest {
    /// Assemble the submission body from the form and the applied voucher
    /// slots.
    #[must_use]
    pub fn new(form: &CheckoutForm, applied: &AppliedVouchers) -> Self {
        Self {
            customer_name: form.customer_name.clone(),
            customer_phone: form.customer_phone.clone(),
            customer_email: form.customer_email.clone(),
            shipping_address: form.shipping_address.clone(),
            payment_method: form.payment_method,
            note: form.note.clone(),
            voucher_code: applied.order.as_ref().map(|voucher| voucher.code.clone()),
            shipping_voucher_code: applied
                .shipping
                .as_ref()
                .map(|voucher| voucher.code.clone()),
        }
    }
}

/// What `POST /orders/checkout` resolved to, normalized.
#[derive(Debug, Clone)]
pub struct CheckoutResponse {
    /// The created order, when the backend included a representation of it.
    pub order: Option<Order>,

    /// The payment-gateway redirect URL, when one was offered.
    pub payment_url: Option<String>,
}

impl CheckoutResponse {
    /// Normalize an unwrapped checkout payload.
    ///
    /// The order may arrive nested under an `order` key or as the payload
    /// itself; the payment URL under any of its documented spellings.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when an order representation is present
    /// but malformed, and [`ApiError::UnexpectedResponse`] when the payload
    /// carries neither an order nor a payment URL.
    pub fn from_payload(payload: &Value) -> Result<Self, ApiError> {
        let payment_url = envelope::payment_url(payload).map(ToString::to_string);

        let order_payload = match payload.get("order") {
            Some(nested) => Some(nested),
            None if payload.get("id").is_some() => Some(payload),
            None => None,
        };

        let order = order_payload
            .map(|value| serde_json::from_value::<OrderDto>(value.clone()))
            .transpose()?
            .map(Order::from);

        if order.is_none() && payment_url.is_none() {
            return Err(ApiError::UnexpectedResponse(
                "checkout reply carried neither an order nor a payment URL".to_string(),
            ));
        }

        Ok(Self { order, payment_url })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn products_convert_to_catalog_summaries() -> TestResult {
        let dto: ProductDto = serde_json::from_value(json!({
            "id": 12,
            "name": "White Lily Bundle",
            "price": 180_000,
            "salePrice": 150_000,
            "thumbnail": "https://cdn.example/lily.jpg",
        }))?;

        let product = ProductSummary::from(dto);

        assert_eq!(product.id, ProductId::new(12));
        assert_eq!(product.effective_price(), 150_000);

        Ok(())
    }

    #[test]
    fn voucher_value_follows_the_percent_flag() -> TestResult {
        let percent: VoucherDto = serde_json::from_value(json!({
            "code": "BLOOM20",
            "discountValue": 20,
            "isPercent": true,
            "maxDiscount": 50_000,
            "minOrderValue": 200_000,
        }))?;

        let fixed: VoucherDto = serde_json::from_value(json!({
            "code": "TET50",
            "discountValue": 50_000,
            "isPercent": false,
        }))?;

        let percent = Voucher::from(percent);
        let fixed = Voucher::from(fixed);

        assert_eq!(percent.value, VoucherValue::Percent(20));
        assert_eq!(fixed.value, VoucherValue::Fixed(50_000));
        assert_eq!(fixed.min_order_value, 0);

        Ok(())
    }

    #[test]
    fn voucher_defaults_lean_on_the_backend_omissions() -> TestResult {
        let dto: VoucherDto = serde_json::from_value(json!({
            "code": "FREESHIP",
            "discountValue": 25_000,
            "isPercent": false,
            "target": "SHIPPING",
        }))?;

        let voucher = Voucher::from(dto);

        assert!(voucher.active, "missing active defaults to usable");
        assert_eq!(voucher.target, VoucherTarget::Shipping);
        assert_eq!(voucher.expires_at, None);

        Ok(())
    }

    #[test]
    fn orders_decode_their_wire_statuses() -> TestResult {
        let dto: OrderDto = serde_json::from_value(json!({
            "id": "ord_88",
            "status": "DELIVERING",
            "totalAmount": 420_000,
            "discountAmount": 30_000,
            "shippingFee": 20_000,
            "paymentMethod": "COD",
            "createdAt": "2024-02-14T08:30:00Z",
            "items": [{"name": "Red Rose Box", "price": 400_000, "quantity": 1}],
        }))?;

        let order = Order::from(dto);

        assert_eq!(order.id, OrderId::new("ord_88"));
        assert_eq!(order.status, OrderStatus::Delivering);
        assert_eq!(order.items.len(), 1);
        assert!(!order.is_cancellable(), "delivering orders are locked in");

        Ok(())
    }

    #[test]
    fn checkout_requests_serialize_camel_case() -> TestResult {
        let form = CheckoutForm {
            customer_name: "Lan Nguyen".to_string(),
            customer_phone: "0912345678".to_string(),
            customer_email: "lan@example.com".to_string(),
            shipping_address: "12 Nguyen Trai, Ha Noi".to_string(),
            payment_method: PaymentMethod::Gateway,
            note: None,
        };

        let request = CheckoutRequest::new(&form, &AppliedVouchers::none());
        let body = serde_json::to_value(&request)?;

        assert_eq!(
            body,
            json!({
                "customerName": "Lan Nguyen",
                "customerPhone": "0912345678",
                "customerEmail": "lan@example.com",
                "shippingAddress": "12 Nguyen Trai, Ha Noi",
                "paymentMethod": "GATEWAY",
            })
        );

        Ok(())
    }

    #[test]
    fn checkout_responses_normalize_both_order_shapes() -> TestResult {
        let flat = CheckoutResponse::from_payload(&json!({
            "id": "ord_1",
            "status": "PENDING",
            "totalAmount": 100_000,
            "paymentMethod": "COD",
        }))?;

        let nested = CheckoutResponse::from_payload(&json!({
            "order": {
                "id": "ord_2",
                "status": "PENDING",
                "totalAmount": 100_000,
                "paymentMethod": "GATEWAY",
            },
            "paymentUrl": "https://pay.example/ord_2",
        }))?;

        assert_eq!(flat.order.map(|order| order.id), Some(OrderId::new("ord_1")));
        assert_eq!(flat.payment_url, None);
        assert_eq!(
            nested.payment_url.as_deref(),
            Some("https://pay.example/ord_2")
        );

        Ok(())
    }

    #[test]
    fn a_payload_with_neither_order_nor_url_is_rejected() {
        let result = CheckoutResponse::from_payload(&json!({"ok": true}));

        assert!(
            matches!(result, Err(ApiError::UnexpectedResponse(_))),
            "expected UnexpectedResponse, got {result:?}"
        );
    }

    #[test]
    fn sync_requests_carry_product_ids_and_quantities() -> TestResult {
        let line = CartLine {
            product_id: ProductId::new(5),
            name: "Tulip Mix".to_string(),
            price: 90_000,
            sale_price: None,
            thumbnail: String::new(),
            quantity: 3,
        };

        let body = serde_json::to_value(SyncCartRequest::new(&[line]))?;

        assert_eq!(body, json!({"items": [{"productId": 5, "quantity": 3}]}));

        Ok(())
    }
}
