//! Orders service errors.

use thiserror::Error;

use floret::order::{OrderId, OrderStatus};

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum OrderError {
    /// The order does not exist, or belongs to someone else.
    #[error("order {id} not found")]
    NotFound {
        /// The requested order.
        id: OrderId,
    },

    /// The order has moved past the point of cancellation.
    #[error("a {status} order can no longer be cancelled")]
    NotCancellable {
        /// The status that blocked the cancellation.
        status: OrderStatus,
    },

    /// The backend could not be reached or declined the request.
    #[error(transparent)]
    Api(ApiError),
}
