//! Voucher service.
//!
//! Applying a code fetches the voucher, runs the usability guards against the
//! order total the cart has right now, computes the discount and persists the
//! snapshot into its slot. The snapshot stays valid only as long as the cart
//! does not change; the cart store drops it on any mutation.

use std::sync::Arc;

use jiff::Timestamp;
use tracing::{debug, warn};

use floret::voucher::{AppliedVoucher, AppliedVouchers, Voucher, VoucherTarget};

use crate::{
    api::{ApiError, ShopApi},
    domain::vouchers::errors::VoucherError,
    storage::{KeyValueStore, StoreKey},
};

pub struct VouchersService {
    api: Arc<dyn ShopApi>,
    storage: Arc<dyn KeyValueStore>,
}

impl VouchersService {
    #[must_use]
    pub fn new(api: Arc<dyn ShopApi>, storage: Arc<dyn KeyValueStore>) -> Self {
        Self { api, storage }
    }

    /// Validate `code` against `order_total` and persist it into its slot,
    /// replacing any previous occupant.
    ///
    /// # Errors
    ///
    /// Returns an error when the code is unknown, the voucher fails a
    /// usability guard, or the store cannot be updated.
    pub async fn apply(
        &self,
        code: &str,
        order_total: u64,
        now: Timestamp,
    ) -> Result<AppliedVoucher, VoucherError> {
        let voucher = match self.api.get_voucher(code.to_string()).await {
            Ok(voucher) => voucher,
            Err(ApiError::NotFound) => {
                return Err(VoucherError::UnknownCode {
                    code: code.to_string(),
                });
            }
            Err(error) => return Err(error.into()),
        };

        voucher.usability(order_total, now)?;

        let amount = voucher.discount(order_total, now);
        let applied = AppliedVoucher::from_voucher(&voucher, amount);

        let mut slots = self.applied()?;
        slots.set(applied.clone());

        self.persist(&slots)?;

        Ok(applied)
    }

    /// The applied slots as the local store has them right now.
    ///
    /// A corrupt entry is logged and discarded, reading as no vouchers.
    ///
    /// # Errors
    ///
    /// Returns an error when the entry exists but cannot be read.
    pub fn applied(&self) -> Result<AppliedVouchers, VoucherError> {
        let Some(raw) = self.storage.read(StoreKey::AppliedVoucher)? else {
            return Ok(AppliedVouchers::none());
        };

        match serde_json::from_str(&raw) {
            Ok(slots) => Ok(slots),
            Err(error) => {
                warn!("discarding corrupt applied voucher entry: {error}");

                Ok(AppliedVouchers::none())
            }
        }
    }

    /// Remove the voucher in `target`'s slot, returning the removed
    /// snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be updated.
    pub fn remove(&self, target: VoucherTarget) -> Result<Option<AppliedVoucher>, VoucherError> {
        let mut slots = self.applied()?;
        let removed = slots.take(target);

        if removed.is_some() {
            if slots.is_empty() {
                self.storage.remove(StoreKey::AppliedVoucher)?;
            } else {
                self.persist(&slots)?;
            }
        }

        Ok(removed)
    }

    /// Drop both slots.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be updated.
    pub fn clear(&self) -> Result<(), VoucherError> {
        self.storage.remove(StoreKey::AppliedVoucher)?;

        Ok(())
    }

    /// The publicly available vouchers.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be reached.
    pub async fn list(&self) -> Result<Vec<Voucher>, VoucherError> {
        Ok(self.api.list_vouchers().await?)
    }

    /// The customer's saved vouchers. A 404 from the wallet endpoint reads
    /// as an empty wallet.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend fails in any other way.
    pub async fn wallet(&self) -> Result<Vec<Voucher>, VoucherError> {
        match self.api.my_vouchers().await {
            Ok(vouchers) => Ok(vouchers),
            Err(ApiError::NotFound) => {
                debug!("voucher wallet returned 404, treating as empty");

                Ok(Vec::new())
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Save a voucher to the customer's wallet.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend declines.
    pub async fn save(&self, code: &str) -> Result<(), VoucherError> {
        Ok(self.api.save_voucher(code.to_string()).await?)
    }

    fn persist(&self, slots: &AppliedVouchers) -> Result<(), VoucherError> {
        let encoded = serde_json::to_string(slots).map_err(VoucherError::Encode)?;

        self.storage.write(StoreKey::AppliedVoucher, &encoded)?;

        Ok(())
    }
}
