//! Orders service.

use std::sync::Arc;

use floret::order::{Order, OrderId};

use crate::{
    api::{ApiError, ShopApi},
    domain::orders::errors::OrderError,
};

pub struct OrdersService {
    api: Arc<dyn ShopApi>,
}

impl OrdersService {
    #[must_use]
    pub fn new(api: Arc<dyn ShopApi>) -> Self {
        Self { api }
    }

    /// The customer's orders.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be reached.
    pub async fn list(&self) -> Result<Vec<Order>, OrderError> {
        self.api.my_orders().await.map_err(OrderError::Api)
    }

    /// Fetch one order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotFound`] for an unknown id.
    pub async fn get(&self, id: OrderId) -> Result<Order, OrderError> {
        match self.api.get_order(id.clone()).await {
            Ok(order) => Ok(order),
            Err(ApiError::NotFound) => Err(OrderError::NotFound { id }),
            Err(error) => Err(OrderError::Api(error)),
        }
    }

    /// Cancel an order.
    ///
    /// The status machine is consulted first, so an order that has moved
    /// past `Confirmed` is refused without a round trip. The server remains
    /// authoritative for the transition itself.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotCancellable`] when the current status does
    /// not allow it.
    pub async fn cancel(&self, id: OrderId) -> Result<Order, OrderError> {
        let order = self.get(id.clone()).await?;

        if !order.is_cancellable() {
            return Err(OrderError::NotCancellable {
                status: order.status,
            });
        }

        match self.api.cancel_order(id.clone()).await {
            Ok(order) => Ok(order),
            Err(ApiError::NotFound) => Err(OrderError::NotFound { id }),
            Err(error) => Err(OrderError::Api(error)),
        }
    }
}
