//! Checkout
//!
//! The checkout form, its client-side validation, and the small state machine
//! the submission flow is observed through. Sequencing the actual network
//! calls lives in the app layer; this module only decides whether a form is
//! fit to submit and what the observable states are.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::order::Order;

/// How the customer pays for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Cash on delivery. No gateway involved.
    Cod,

    /// Online payment through the shop's payment gateway.
    Gateway,
}

impl PaymentMethod {
    /// Whether this method settles through an external gateway redirect.
    #[must_use]
    pub fn requires_redirect(self) -> bool {
        matches!(self, Self::Gateway)
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Cod => "cod",
            Self::Gateway => "gateway",
        };

        write!(f, "{label}")
    }
}

/// Everything the customer fills in before placing the order.
///
/// Submitted as one unit and discarded after a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutForm {
    /// Recipient name.
    pub customer_name: String,

    /// Contact phone number, a Vietnamese mobile number.
    pub customer_phone: String,

    /// Contact email address.
    pub customer_email: String,

    /// Delivery address.
    pub shipping_address: String,

    /// Chosen payment method.
    pub payment_method: PaymentMethod,

    /// Optional message to the florist.
    pub note: Option<String>,
}

/// A single field-level validation failure.
///
/// The `Display` text is the message shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The name field is empty.
    #[error("customer name is required")]
    NameRequired,

    /// The phone field is empty.
    #[error("phone number is required")]
    PhoneRequired,

    /// The phone field is not a Vietnamese mobile number.
    #[error("phone number must be a 10-digit number starting with 0")]
    PhoneInvalid,

    /// The email field is empty.
    #[error("email address is required")]
    EmailRequired,

    /// The email field is not shaped like an address.
    #[error("email address is not valid")]
    EmailInvalid,

    /// The address field is empty.
    #[error("shipping address is required")]
    AddressRequired,
}

impl CheckoutForm {
    /// Validate every field and collect the failures.
    ///
    /// Each field reports at most its first failure; failures across fields
    /// are reported together so a form can surface all of them at once.
    ///
    /// # Errors
    ///
    /// Returns every failing field's [`FormError`], in field order.
    pub fn validate(&self) -> Result<(), Vec<FormError>> {
        let mut errors = Vec::new();

        if self.customer_name.trim().is_empty() {
            errors.push(FormError::NameRequired);
        }

        if self.customer_phone.trim().is_empty() {
            errors.push(FormError::PhoneRequired);
        } else if !is_vietnamese_mobile(&self.customer_phone) {
            errors.push(FormError::PhoneInvalid);
        }

        if self.customer_email.trim().is_empty() {
            errors.push(FormError::EmailRequired);
        } else if !is_email_shaped(self.customer_email.trim()) {
            errors.push(FormError::EmailInvalid);
        }

        if self.shipping_address.trim().is_empty() {
            errors.push(FormError::AddressRequired);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// A leading `0` followed by nine more digits, with common separators
/// tolerated.
fn is_vietnamese_mobile(phone: &str) -> bool {
    let digits: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-'))
        .collect();

    digits.len() == 10
        && digits.chars().all(|c| c.is_ascii_digit())
        && digits.starts_with('0')
}

/// Shaped like `local@domain.tld`. Not an RFC validation, the same shallow
/// shape check a storefront form performs.
fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    !local.is_empty() && !host.is_empty() && !tld.is_empty() && !domain.contains('@')
}

/// The observable states of a checkout submission.
///
/// `Idle → Submitting → {Succeeded | Redirecting}`, with any failure during
/// submission returning to `Idle`. There is no cancellation once submission
/// begins and no timeout is modeled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckoutState {
    /// Nothing in flight. The form is editable.
    #[default]
    Idle,

    /// The order has been handed to the server; waiting on the response.
    Submitting,

    /// The order was placed and needs no further payment step.
    Succeeded,

    /// The order was placed and the customer must finish paying at the
    /// gateway.
    Redirecting,
}

/// How a successful submission resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// The order is placed and paid for on delivery. Local cart state has
    /// been cleared.
    Placed {
        /// The order the server created.
        order: Order,
    },

    /// The order is placed but awaits payment at the gateway. Local cart
    /// state is kept until payment is confirmed.
    RedirectToGateway {
        /// Where the customer must be sent to pay.
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            customer_name: "Lan Nguyen".to_string(),
            customer_phone: "0912345678".to_string(),
            customer_email: "lan@example.com".to_string(),
            shipping_address: "12 Nguyen Trai, Ha Noi".to_string(),
            payment_method: PaymentMethod::Cod,
            note: None,
        }
    }

    #[test]
    fn a_complete_form_validates() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn phone_separators_are_tolerated() {
        for phone in ["091 234 5678", "091-234-5678", "091.234.5678"] {
            let mut form = valid_form();
            form.customer_phone = phone.to_string();

            assert_eq!(form.validate(), Ok(()), "{phone} should validate");
        }
    }

    #[test]
    fn phone_must_start_with_zero_and_have_ten_digits() {
        for phone in ["8412345678", "091234567", "09123456789", "09123x5678"] {
            let mut form = valid_form();
            form.customer_phone = phone.to_string();

            assert_eq!(
                form.validate(),
                Err(vec![FormError::PhoneInvalid]),
                "{phone} should be rejected"
            );
        }
    }

    #[test]
    fn email_shape_is_checked_shallowly() {
        for email in ["lan@example.com", "a.b@shop.co.vn"] {
            let mut form = valid_form();
            form.customer_email = email.to_string();

            assert_eq!(form.validate(), Ok(()), "{email} should validate");
        }

        for email in ["lan", "lan@", "@example.com", "lan@example", "a b@c.de"] {
            let mut form = valid_form();
            form.customer_email = email.to_string();

            assert_eq!(
                form.validate(),
                Err(vec![FormError::EmailInvalid]),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn empty_fields_report_required_before_invalid() {
        let mut form = valid_form();
        form.customer_phone = "   ".to_string();
        form.customer_email = String::new();

        assert_eq!(
            form.validate(),
            Err(vec![FormError::PhoneRequired, FormError::EmailRequired])
        );
    }

    #[test]
    fn all_failing_fields_are_reported_together() {
        let form = CheckoutForm {
            customer_name: String::new(),
            customer_phone: String::new(),
            customer_email: String::new(),
            shipping_address: String::new(),
            payment_method: PaymentMethod::Gateway,
            note: None,
        };

        assert_eq!(
            form.validate(),
            Err(vec![
                FormError::NameRequired,
                FormError::PhoneRequired,
                FormError::EmailRequired,
                FormError::AddressRequired,
            ])
        );
    }

    #[test]
    fn field_messages_are_customer_readable() {
        assert_eq!(
            FormError::PhoneInvalid.to_string(),
            "phone number must be a 10-digit number starting with 0"
        );
        assert_eq!(
            FormError::AddressRequired.to_string(),
            "shipping address is required"
        );
    }

    #[test]
    fn payment_methods_use_the_wire_spelling() -> TestResult {
        assert_eq!(serde_json::to_string(&PaymentMethod::Cod)?, r#""COD""#);
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Gateway)?,
            r#""GATEWAY""#
        );

        Ok(())
    }

    #[test]
    fn only_gateway_payments_redirect() {
        assert!(PaymentMethod::Gateway.requires_redirect());
        assert!(!PaymentMethod::Cod.requires_redirect());
    }

    #[test]
    fn checkout_starts_idle() {
        assert_eq!(CheckoutState::default(), CheckoutState::Idle);
    }
}
