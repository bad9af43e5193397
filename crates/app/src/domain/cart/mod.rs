//! Cart

pub mod errors;
pub mod store;

pub use errors::CartStoreError;
pub use store::CartStore;
