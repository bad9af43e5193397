//! Integration tests for the checkout flow over a mocked backend.

use std::sync::Arc;

use jiff::Timestamp;
use testresult::TestResult;

use floret::{
    checkout::{CheckoutForm, CheckoutOutcome, CheckoutState, PaymentMethod},
    order::{Order, OrderId, OrderStatus},
    product::{ProductId, ProductSummary},
    voucher::{Voucher, VoucherTarget, VoucherValue},
};
use floret_app::{
    api::{ApiError, CheckoutResponse, MockShopApi},
    context::AppContext,
    domain::checkout::CheckoutError,
    storage::{KeyValueStore, MemoryStore, StoreKey},
};

fn product(id: u64, name: &str, price: u64) -> ProductSummary {
    ProductSummary {
        id: ProductId::new(id),
        name: name.to_string(),
        price,
        sale_price: None,
        thumbnail: String::new(),
    }
}

fn percent_voucher(code: &str, percent: u64, max_discount: u64) -> Voucher {
    Voucher {
        code: code.to_string(),
        description: None,
        value: VoucherValue::Percent(percent),
        max_discount: Some(max_discount),
        min_order_value: 0,
        target: VoucherTarget::Order,
        active: true,
        starts_at: None,
        expires_at: None,
    }
}

fn checkout_form(payment_method: PaymentMethod) -> CheckoutForm {
    CheckoutForm {
        customer_name: "Lan Nguyen".to_string(),
        customer_phone: "0912345678".to_string(),
        customer_email: "lan@example.com".to_string(),
        shipping_address: "12 Nguyen Trai, Ha Noi".to_string(),
        payment_method,
        note: None,
    }
}

fn pending_order(id: &str, total: u64) -> Order {
    Order {
        id: OrderId::new(id),
        status: OrderStatus::Pending,
        total,
        discount: 0,
        shipping_fee: 0,
        payment_method: PaymentMethod::Cod,
        created_at: None,
        items: vec![],
    }
}

#[tokio::test]
async fn a_cod_order_clears_the_cart_and_forwards_the_voucher_code() -> TestResult {
    let mut api = MockShopApi::new();

    api.expect_get_voucher()
        .returning(|_| Ok(percent_voucher("SPRING20", 20, 50_000)));

    api.expect_sync_cart().returning(|_| Ok(()));

    api.expect_submit_checkout()
        .withf(|request| request.voucher_code.as_deref() == Some("SPRING20"))
        .returning(|_| {
            Ok(CheckoutResponse {
                order: Some(pending_order("FS-1009", 450_000)),
                payment_url: None,
            })
        });

    let storage = Arc::new(MemoryStore::new());
    let context = AppContext::new(Arc::new(api), storage.clone());

    let mut cart = context.cart()?;
    cart.add(&product(1, "Peony Bouquet", 250_000), 2)?;

    context
        .vouchers
        .apply("SPRING20", cart.subtotal(), Timestamp::now())
        .await?;

    let mut flow = context.checkout();
    let outcome = flow.submit(&checkout_form(PaymentMethod::Cod)).await?;

    assert!(
        matches!(outcome, CheckoutOutcome::Placed { .. }),
        "expected Placed, got {outcome:?}"
    );
    assert_eq!(flow.state(), CheckoutState::Succeeded);

    assert!(context.cart()?.is_empty(), "the cart is emptied");
    assert!(
        storage.read(StoreKey::AppliedVoucher)?.is_none(),
        "the applied voucher entry is released"
    );

    Ok(())
}

#[tokio::test]
async fn a_gateway_order_keeps_the_cart_until_payment() -> TestResult {
    let mut api = MockShopApi::new();

    api.expect_get_voucher()
        .returning(|_| Ok(percent_voucher("SPRING20", 20, 50_000)));

    api.expect_sync_cart().returning(|_| Ok(()));

    api.expect_submit_checkout().returning(|_| {
        Ok(CheckoutResponse {
            order: None,
            payment_url: Some("https://pay.example.com/session/tx-91".to_string()),
        })
    });

    let storage = Arc::new(MemoryStore::new());
    let context = AppContext::new(Arc::new(api), storage.clone());

    let mut cart = context.cart()?;
    cart.add(&product(2, "Rose Basket", 180_000), 1)?;

    context
        .vouchers
        .apply("SPRING20", cart.subtotal(), Timestamp::now())
        .await?;

    let mut flow = context.checkout();
    let outcome = flow.submit(&checkout_form(PaymentMethod::Gateway)).await?;

    assert!(
        matches!(
            &outcome,
            CheckoutOutcome::RedirectToGateway { url } if url == "https://pay.example.com/session/tx-91"
        ),
        "expected a gateway redirect, got {outcome:?}"
    );
    assert_eq!(flow.state(), CheckoutState::Redirecting);

    assert!(
        !context.cart()?.is_empty(),
        "the cart survives until payment confirmation"
    );
    assert!(
        storage.read(StoreKey::AppliedVoucher)?.is_some(),
        "the applied voucher survives until payment confirmation"
    );

    Ok(())
}

#[tokio::test]
async fn a_failed_cart_sync_does_not_block_the_order() -> TestResult {
    let mut api = MockShopApi::new();

    api.expect_sync_cart()
        .returning(|_| Err(ApiError::UnexpectedResponse("cart sync is down".to_string())));

    api.expect_submit_checkout().returning(|_| {
        Ok(CheckoutResponse {
            order: Some(pending_order("FS-1010", 180_000)),
            payment_url: None,
        })
    });

    let storage = Arc::new(MemoryStore::new());
    let context = AppContext::new(Arc::new(api), storage);

    let mut cart = context.cart()?;
    cart.add(&product(2, "Rose Basket", 180_000), 1)?;

    let mut flow = context.checkout();
    let outcome = flow.submit(&checkout_form(PaymentMethod::Cod)).await?;

    assert!(
        matches!(outcome, CheckoutOutcome::Placed { .. }),
        "expected Placed, got {outcome:?}"
    );

    Ok(())
}

#[tokio::test]
async fn a_rejected_submission_surfaces_the_backend_message() -> TestResult {
    let mut api = MockShopApi::new();

    api.expect_sync_cart().returning(|_| Ok(()));

    api.expect_submit_checkout()
        .returning(|_| Err(ApiError::Rejected("voucher already redeemed".to_string())));

    let storage = Arc::new(MemoryStore::new());
    let context = AppContext::new(Arc::new(api), storage.clone());

    let mut cart = context.cart()?;
    cart.add(&product(3, "Orchid Pot", 320_000), 1)?;

    let mut flow = context.checkout();
    let result = flow.submit(&checkout_form(PaymentMethod::Cod)).await;

    assert!(
        matches!(
            &result,
            Err(CheckoutError::Submission { message }) if message == "voucher already redeemed"
        ),
        "expected the backend message, got {result:?}"
    );
    assert_eq!(flow.state(), CheckoutState::Idle);
    assert!(
        !context.cart()?.is_empty(),
        "a failed submission keeps the cart"
    );

    Ok(())
}
