//! Checkout

pub mod errors;
pub mod flow;

pub use errors::CheckoutError;
pub use flow::CheckoutFlow;
