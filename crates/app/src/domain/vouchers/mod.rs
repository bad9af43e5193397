//! Vouchers

pub mod errors;
pub mod service;

pub use errors::VoucherError;
pub use service::VouchersService;
