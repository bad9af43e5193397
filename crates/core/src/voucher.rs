//! Vouchers
//!
//! A voucher is a discount code with a percentage or fixed-amount value, an
//! optional cap and a minimum order threshold. Two kinds are distinguished by
//! their target: order-discount vouchers reduce the order total, shipping
//! vouchers reduce the shipping fee, and the two occupy independent slots at
//! checkout.
//!
//! Everything here is pure arithmetic over minor units. Fetching vouchers and
//! persisting applied ones belongs to the app layer.

use std::fmt::{self, Display, Formatter};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which checkout amount a voucher discounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoucherTarget {
    /// Reduces the order total.
    Order,

    /// Reduces the shipping fee.
    Shipping,
}

impl Display for VoucherTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Order => "order",
            Self::Shipping => "shipping",
        };

        write!(f, "{label}")
    }
}

/// The value of a voucher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoucherValue {
    /// Percentage off the order total, in whole percent.
    Percent(u64),

    /// Fixed amount off, in minor units.
    Fixed(u64),
}

/// A voucher definition as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voucher {
    /// The code the customer enters.
    pub code: String,

    /// Optional marketing description.
    pub description: Option<String>,

    /// Percentage or fixed value.
    pub value: VoucherValue,

    /// Cap on the discount amount for percentage vouchers.
    pub max_discount: Option<u64>,

    /// Minimum order total required to use the voucher.
    pub min_order_value: u64,

    /// Which checkout amount the voucher discounts.
    pub target: VoucherTarget,

    /// Whether the backend currently lists the voucher as usable.
    pub active: bool,

    /// Start of the validity window, if bounded.
    pub starts_at: Option<Timestamp>,

    /// End of the validity window, if bounded.
    pub expires_at: Option<Timestamp>,
}

/// Why a voucher cannot be used right now.
///
/// The `Display` text is the customer-facing reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoucherRejection {
    /// The validity window has closed.
    #[error("this voucher has expired")]
    Expired,

    /// The voucher is disabled or its validity window has not opened yet.
    #[error("this voucher is not currently active")]
    Inactive,

    /// The order total is below the voucher's minimum.
    #[error("order must reach {minimum} to use this voucher")]
    BelowMinimum {
        /// The voucher's minimum order value.
        minimum: u64,
    },
}

impl Voucher {
    /// Whether the validity window has closed at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at < now)
    }

    /// Whether the validity window has opened at `now`.
    #[must_use]
    pub fn has_started(&self, now: Timestamp) -> bool {
        self.starts_at.is_none_or(|starts_at| starts_at <= now)
    }

    /// Check whether the voucher can be used against `order_total` at `now`.
    ///
    /// Guard clauses run in a fixed order and the first failing guard wins:
    /// expired, then inactive (which also covers a window that has not opened
    /// yet), then below the minimum order value.
    ///
    /// # Errors
    ///
    /// Returns the first applicable [`VoucherRejection`].
    pub fn usability(&self, order_total: u64, now: Timestamp) -> Result<(), VoucherRejection> {
        if self.is_expired(now) {
            return Err(VoucherRejection::Expired);
        }

        if !self.active || !self.has_started(now) {
            return Err(VoucherRejection::Inactive);
        }

        if order_total < self.min_order_value {
            return Err(VoucherRejection::BelowMinimum {
                minimum: self.min_order_value,
            });
        }

        Ok(())
    }

    /// The discount amount this voucher grants against `order_total` at `now`.
    ///
    /// Zero when the voucher is expired or the total is below the minimum.
    /// Percentage vouchers are capped at `max_discount` when set; every
    /// voucher is capped at the order total itself, so the result never
    /// exceeds either bound.
    #[must_use]
    pub fn discount(&self, order_total: u64, now: Timestamp) -> u64 {
        if self.is_expired(now) || order_total < self.min_order_value {
            return 0;
        }

        let amount = match self.value {
            VoucherValue::Percent(percent) => {
                let raw = order_total.saturating_mul(percent) / 100;

                raw.min(self.max_discount.unwrap_or(order_total))
            }
            VoucherValue::Fixed(value) => value,
        };

        amount.min(order_total)
    }

    /// Whether the voucher's value is percentage-based.
    #[must_use]
    pub fn is_percent(&self) -> bool {
        matches!(self.value, VoucherValue::Percent(_))
    }
}

/// The client-side snapshot of a voucher that passed validation.
///
/// Created when a code is applied, destroyed whenever the cart changes or the
/// customer removes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedVoucher {
    /// The applied code.
    pub code: String,

    /// The computed discount amount at application time.
    pub amount: u64,

    /// Whether the underlying voucher was percentage-based.
    pub is_percent: bool,

    /// The underlying voucher's discount cap, if any.
    pub max_discount: Option<u64>,

    /// The underlying voucher's minimum order value.
    pub min_order_value: u64,

    /// Which slot the voucher occupies.
    pub target: VoucherTarget,
}

impl AppliedVoucher {
    /// Snapshot `voucher` with the `amount` it granted.
    #[must_use]
    pub fn from_voucher(voucher: &Voucher, amount: u64) -> Self {
        Self {
            code: voucher.code.clone(),
            amount,
            is_percent: voucher.is_percent(),
            max_discount: voucher.max_discount,
            min_order_value: voucher.min_order_value,
            target: voucher.target,
        }
    }
}

/// The two independent applied-voucher slots: one order discount, one
/// shipping discount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppliedVouchers {
    /// The applied order-discount voucher, if any.
    pub order: Option<AppliedVoucher>,

    /// The applied shipping-discount voucher, if any.
    pub shipping: Option<AppliedVoucher>,
}

impl AppliedVouchers {
    /// No vouchers applied.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Put `voucher` into its slot, replacing any previous occupant.
    pub fn set(&mut self, voucher: AppliedVoucher) {
        match voucher.target {
            VoucherTarget::Order => self.order = Some(voucher),
            VoucherTarget::Shipping => self.shipping = Some(voucher),
        }
    }

    /// The occupant of `target`'s slot.
    #[must_use]
    pub fn get(&self, target: VoucherTarget) -> Option<&AppliedVoucher> {
        match target {
            VoucherTarget::Order => self.order.as_ref(),
            VoucherTarget::Shipping => self.shipping.as_ref(),
        }
    }

    /// Remove and return the occupant of `target`'s slot.
    pub fn take(&mut self, target: VoucherTarget) -> Option<AppliedVoucher> {
        match target {
            VoucherTarget::Order => self.order.take(),
            VoucherTarget::Shipping => self.shipping.take(),
        }
    }

    /// Empty both slots.
    pub fn clear(&mut self) {
        self.order = None;
        self.shipping = None;
    }

    /// Whether both slots are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_none() && self.shipping.is_none()
    }

    /// Sum of the discounts across both slots.
    #[must_use]
    pub fn total_discount(&self) -> u64 {
        let order = self.order.as_ref().map_or(0, |voucher| voucher.amount);
        let shipping = self.shipping.as_ref().map_or(0, |voucher| voucher.amount);

        order.saturating_add(shipping)
    }
}
