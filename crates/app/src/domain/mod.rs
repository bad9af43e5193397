//! Domain services over the API client and the local store.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod favorites;
pub mod orders;
pub mod vouchers;
