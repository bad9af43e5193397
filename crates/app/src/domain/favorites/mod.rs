//! Favorites

pub mod store;

pub use store::{FavoritesError, FavoritesStore};
