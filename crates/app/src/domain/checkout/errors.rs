//! Checkout errors.

use thiserror::Error;

use floret::checkout::FormError;

use crate::domain::{cart::CartStoreError, vouchers::VoucherError};

#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The form failed client-side validation. Nothing was submitted.
    #[error("the checkout form is not valid")]
    InvalidForm(Vec<FormError>),

    /// There is nothing to order.
    #[error("the cart is empty")]
    EmptyCart,

    /// The backend declined the submission. The message is fit for showing
    /// to the customer.
    #[error("{message}")]
    Submission {
        /// The backend's own message, or a generic fallback.
        message: String,
    },

    /// The gateway's redirect URL did not parse.
    #[error("the payment gateway returned an unusable redirect address")]
    MalformedRedirect,

    /// The local cart could not be read before submission.
    #[error(transparent)]
    Cart(#[from] CartStoreError),

    /// The applied vouchers could not be read before submission.
    #[error(transparent)]
    Vouchers(#[from] VoucherError),
}
