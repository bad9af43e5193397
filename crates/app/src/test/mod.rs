//! Shared fixtures for module-level tests.

pub(crate) mod helpers;
