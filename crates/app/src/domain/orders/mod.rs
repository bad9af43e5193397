//! Orders

pub mod errors;
pub mod service;

pub use errors::OrderError;
pub use service::OrdersService;
