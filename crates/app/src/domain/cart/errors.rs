//! Cart store errors.

use thiserror::Error;

use floret::cart::CartError;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum CartStoreError {
    /// The mutation itself was invalid.
    #[error(transparent)]
    Invalid(#[from] CartError),

    /// The local store could not be read or written.
    #[error("cart storage error")]
    Storage(#[from] StorageError),

    /// The cart could not be encoded for persistence.
    #[error("cart entry could not be encoded")]
    Encode(#[source] serde_json::Error),
}
