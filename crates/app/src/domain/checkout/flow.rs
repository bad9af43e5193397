//! Checkout flow.
//!
//! Sequences client-side validation, best-effort cart sync and order
//! submission, and exposes the small state machine the UI observes. There is
//! no rollback and no idempotency key: a failed submission returns to idle
//! with local state intact, and a retry after a transient failure may
//! double-submit on the backend.

use std::sync::Arc;

use reqwest::Url;
use tracing::warn;

use floret::checkout::{CheckoutForm, CheckoutOutcome, CheckoutState};

use crate::{
    api::{ApiError, CheckoutRequest, ShopApi, envelope::DEFAULT_FAILURE_MESSAGE},
    domain::{cart::CartStore, checkout::errors::CheckoutError, vouchers::VouchersService},
    storage::KeyValueStore,
};

pub struct CheckoutFlow {
    api: Arc<dyn ShopApi>,
    storage: Arc<dyn KeyValueStore>,
    state: CheckoutState,
}

impl CheckoutFlow {
    #[must_use]
    pub fn new(api: Arc<dyn ShopApi>, storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            api,
            storage,
            state: CheckoutState::Idle,
        }
    }

    /// The state the flow is observably in.
    #[must_use]
    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Run the submission sequence for `form`.
    ///
    /// Validation failures and an empty cart never leave `Idle`. A placed
    /// cash-on-delivery order clears the local cart and vouchers; a gateway
    /// redirect leaves them in place until payment is confirmed. Any
    /// submission failure returns the flow to `Idle` with local state intact
    /// so the customer can retry.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`]; the `Submission` variant carries the
    /// customer-facing reason.
    pub async fn submit(&mut self, form: &CheckoutForm) -> Result<CheckoutOutcome, CheckoutError> {
        form.validate().map_err(CheckoutError::InvalidForm)?;

        let mut cart = CartStore::load(Arc::clone(&self.storage))?;

        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let vouchers = VouchersService::new(Arc::clone(&self.api), Arc::clone(&self.storage));
        let applied = vouchers.applied()?;

        self.state = CheckoutState::Submitting;

        // Best effort: logged and swallowed, never retried.
        if let Err(error) = self.api.sync_cart(cart.lines().to_vec()).await {
            warn!("cart sync failed before checkout: {error}");
        }

        let request = CheckoutRequest::new(form, &applied);

        let response = match self.api.submit_checkout(request).await {
            Ok(response) => response,
            Err(error) => {
                self.state = CheckoutState::Idle;

                return Err(CheckoutError::Submission {
                    message: user_message(&error),
                });
            }
        };

        if form.payment_method.requires_redirect() {
            if let Some(url) = response.payment_url {
                if Url::parse(&url).is_err() {
                    self.state = CheckoutState::Idle;

                    return Err(CheckoutError::MalformedRedirect);
                }

                self.state = CheckoutState::Redirecting;

                return Ok(CheckoutOutcome::RedirectToGateway { url });
            }
        }

        let Some(order) = response.order else {
            self.state = CheckoutState::Idle;

            return Err(CheckoutError::Submission {
                message: DEFAULT_FAILURE_MESSAGE.to_string(),
            });
        };

        // The order is placed; a cleanup failure must not un-place it.
        if let Err(error) = cart.clear() {
            warn!("failed to clear the cart after checkout: {error}");
        }

        if let Err(error) = vouchers.clear() {
            warn!("failed to clear applied vouchers after checkout: {error}");
        }

        self.state = CheckoutState::Succeeded;

        Ok(CheckoutOutcome::Placed { order })
    }
}

/// What the customer gets told when submission fails: the backend's message
/// when it offered one, a generic fallback for everything else.
fn user_message(error: &ApiError) -> String {
    match error {
        ApiError::Rejected(message) => message.clone(),
        _ => DEFAULT_FAILURE_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use floret::checkout::PaymentMethod;

    use crate::{
        api::{CheckoutResponse, MockShopApi},
        storage::{MemoryStore, StoreKey},
        test::helpers,
    };

    use super::*;

    fn seeded_storage() -> Result<Arc<MemoryStore>, CheckoutError> {
        let storage = Arc::new(MemoryStore::new());
        let mut cart = CartStore::load(storage.clone())?;

        cart.add(&helpers::product(1, "Peony Bouquet", 100_000), 2)?;

        Ok(storage)
    }

    #[tokio::test]
    async fn an_invalid_form_never_reaches_the_backend() -> TestResult {
        // No expectations: any call would panic the mock.
        let api = Arc::new(MockShopApi::new());
        let storage = seeded_storage()?;

        let mut flow = CheckoutFlow::new(api, storage);

        let mut form = helpers::checkout_form(PaymentMethod::Cod);
        form.customer_phone = "12345".to_string();

        let result = flow.submit(&form).await;

        assert!(
            matches!(result, Err(CheckoutError::InvalidForm(_))),
            "expected InvalidForm, got {result:?}"
        );
        assert_eq!(flow.state(), CheckoutState::Idle);

        Ok(())
    }

    #[tokio::test]
    async fn an_empty_cart_never_reaches_the_backend() -> TestResult {
        let api = Arc::new(MockShopApi::new());
        let storage = Arc::new(MemoryStore::new());

        let mut flow = CheckoutFlow::new(api, storage);

        let result = flow.submit(&helpers::checkout_form(PaymentMethod::Cod)).await;

        assert!(
            matches!(result, Err(CheckoutError::EmptyCart)),
            "expected EmptyCart, got {result:?}"
        );
        assert_eq!(flow.state(), CheckoutState::Idle);

        Ok(())
    }

    #[tokio::test]
    async fn a_malformed_gateway_url_fails_the_checkout() -> TestResult {
        let mut api = MockShopApi::new();
        api.expect_sync_cart().returning(|_| Ok(()));
        api.expect_submit_checkout().returning(|_| {
            Ok(CheckoutResponse {
                order: None,
                payment_url: Some("not a url".to_string()),
            })
        });

        let storage = seeded_storage()?;
        let mut flow = CheckoutFlow::new(Arc::new(api), storage.clone());

        let result = flow
            .submit(&helpers::checkout_form(PaymentMethod::Gateway))
            .await;

        assert!(
            matches!(result, Err(CheckoutError::MalformedRedirect)),
            "expected MalformedRedirect, got {result:?}"
        );
        assert_eq!(flow.state(), CheckoutState::Idle);
        assert!(
            storage.read(StoreKey::Cart)?.is_some(),
            "a failed checkout keeps the cart"
        );

        Ok(())
    }

    #[tokio::test]
    async fn a_stray_payment_url_is_ignored_for_cash_on_delivery() -> TestResult {
        let mut api = MockShopApi::new();
        api.expect_sync_cart().returning(|_| Ok(()));
        api.expect_submit_checkout().returning(|_| {
            Ok(CheckoutResponse {
                order: Some(helpers::order(
                    "ord_1",
                    floret::order::OrderStatus::Pending,
                    200_000,
                )),
                payment_url: Some("https://pay.example/stray".to_string()),
            })
        });

        let storage = seeded_storage()?;
        let mut flow = CheckoutFlow::new(Arc::new(api), storage);

        let outcome = flow.submit(&helpers::checkout_form(PaymentMethod::Cod)).await?;

        assert!(
            matches!(outcome, CheckoutOutcome::Placed { .. }),
            "expected Placed, got {outcome:?}"
        );
        assert_eq!(flow.state(), CheckoutState::Succeeded);

        Ok(())
    }
}
