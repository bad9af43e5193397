//! Orders
//!
//! Orders are owned by the server; the client only reads them and asks for a
//! cancellation. The status machine lives here so the client can gate its
//! cancel action without a round trip, but the server remains authoritative
//! over every transition.

use std::fmt::{self, Display, Formatter};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::checkout::PaymentMethod;

/// The server-issued identifier of an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Creates a new order id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Where an order is in its lifecycle.
///
/// Transitions only move forward (skipping stages is allowed), except
/// [`Cancelled`](Self::Cancelled), which is reachable from
/// [`Pending`](Self::Pending) and [`Confirmed`](Self::Confirmed) only.
/// [`Completed`](Self::Completed) and [`Cancelled`](Self::Cancelled) are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Placed, not yet acknowledged by the shop.
    Pending,

    /// Acknowledged by the shop.
    Confirmed,

    /// Being arranged.
    Processing,

    /// Out for delivery.
    Delivering,

    /// Delivered.
    Completed,

    /// Cancelled before processing began.
    Cancelled,
}

impl OrderStatus {
    /// Position in the forward lifecycle. `Cancelled` sits outside it.
    fn stage(self) -> Option<u8> {
        match self {
            Self::Pending => Some(0),
            Self::Confirmed => Some(1),
            Self::Processing => Some(2),
            Self::Delivering => Some(3),
            Self::Completed => Some(4),
            Self::Cancelled => None,
        }
    }

    /// Whether the server would accept a transition from `self` to `next`.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        if self.is_terminal() {
            return false;
        }

        if next == Self::Cancelled {
            return self.is_cancellable();
        }

        match (self.stage(), next.stage()) {
            (Some(from), Some(to)) => to > from,
            _ => false,
        }
    }

    /// Whether a cancellation request still makes sense for this status.
    #[must_use]
    pub fn is_cancellable(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    /// Whether the lifecycle has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Processing => "processing",
            Self::Delivering => "delivering",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        };

        write!(f, "{label}")
    }
}

/// One line of a placed order, as reported by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    /// Product name at the time of purchase.
    pub name: String,

    /// Unit price paid, in minor units.
    pub price: u64,

    /// Units purchased.
    pub quantity: u32,
}

/// A placed order, as reported by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Server-issued identifier.
    pub id: OrderId,

    /// Lifecycle position.
    pub status: OrderStatus,

    /// Amount charged, in minor units, after discounts.
    pub total: u64,

    /// Discount granted at checkout, in minor units.
    pub discount: u64,

    /// Shipping fee charged, in minor units.
    pub shipping_fee: u64,

    /// How the order is paid.
    pub payment_method: PaymentMethod,

    /// When the order was placed, when the server reports it.
    pub created_at: Option<Timestamp>,

    /// The purchased lines.
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Whether the client should offer a cancel action for this order.
    #[must_use]
    pub fn is_cancellable(&self) -> bool {
        self.status.is_cancellable()
    }
}
