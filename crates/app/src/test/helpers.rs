//! Builders for common test fixtures.

use floret::{
    checkout::{CheckoutForm, PaymentMethod},
    order::{Order, OrderId, OrderStatus},
    product::{ProductId, ProductSummary},
    voucher::{Voucher, VoucherTarget, VoucherValue},
};

pub(crate) fn product(id: u64, name: &str, price: u64) -> ProductSummary {
    ProductSummary {
        id: ProductId::new(id),
        name: name.to_string(),
        price,
        sale_price: None,
        thumbnail: String::new(),
    }
}

pub(crate) fn percent_voucher(code: &str, percent: u64, max_discount: Option<u64>) -> Voucher {
    Voucher {
        code: code.to_string(),
        description: None,
        value: VoucherValue::Percent(percent),
        max_discount,
        min_order_value: 0,
        target: VoucherTarget::Order,
        active: true,
        starts_at: None,
        expires_at: None,
    }
}

pub(crate) fn fixed_voucher(code: &str, value: u64) -> Voucher {
    Voucher {
        code: code.to_string(),
        description: None,
        value: VoucherValue::Fixed(value),
        max_discount: None,
        min_order_value: 0,
        target: VoucherTarget::Order,
        active: true,
        starts_at: None,
        expires_at: None,
    }
}

pub(crate) fn checkout_form(payment_method: PaymentMethod) -> CheckoutForm {
    CheckoutForm {
        customer_name: "Lan Nguyen".to_string(),
        customer_phone: "0912345678".to_string(),
        customer_email: "lan@example.com".to_string(),
        shipping_address: "12 Nguyen Trai, Ha Noi".to_string(),
        payment_method,
        note: None,
    }
}

pub(crate) fn order(id: &str, status: OrderStatus, total: u64) -> Order {
    Order {
        id: OrderId::new(id),
        status,
        total,
        discount: 0,
        shipping_fee: 0,
        payment_method: PaymentMethod::Cod,
        created_at: None,
        items: Vec::new(),
    }
}
