//! Shared storefront domain and persistence modules.

pub mod api;
pub mod context;
pub mod domain;
pub mod storage;

#[cfg(test)]
mod test;
