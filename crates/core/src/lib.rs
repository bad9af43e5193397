//! Floret
//!
//! Floret is the domain model of a flower-shop storefront client: cart lines
//! and totals, voucher rules and discount arithmetic, the order lifecycle and
//! checkout form validation.
//!
//! Nothing in this crate performs I/O. Persistence and the shop API live in
//! `floret-app`, which composes these types into services.

pub mod cart;
pub mod checkout;
pub mod order;
pub mod product;
pub mod voucher;
