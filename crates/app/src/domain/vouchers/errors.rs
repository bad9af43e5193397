//! Voucher service errors.

use thiserror::Error;

use floret::voucher::VoucherRejection;

use crate::{api::ApiError, storage::StorageError};

#[derive(Debug, Error)]
pub enum VoucherError {
    /// No voucher exists under the given code.
    #[error("no voucher found for code {code}")]
    UnknownCode {
        /// The code the customer entered.
        code: String,
    },

    /// The voucher exists but cannot be used right now.
    #[error(transparent)]
    Rejected(#[from] VoucherRejection),

    /// The backend could not be reached or declined the request.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The local store failed.
    #[error("voucher storage error")]
    Storage(#[from] StorageError),

    /// The applied-voucher entry could not be encoded.
    #[error("applied voucher entry could not be encoded")]
    Encode(#[source] serde_json::Error),
}
