//! Business logic services for storefront.
//!
//! # Services
//!
//! - `cart` - Merge additions into the visitor's cart
//! - `favorites` - Toggle products in the visitor's favorites
//!
//! Both are generic over [`KeyValueStore`](crate::storage::KeyValueStore);
//! handlers build them over a [`SessionStorage`](crate::storage::SessionStorage)
//! for the current request.

pub mod cart;
pub mod favorites;

pub use cart::{CartError, CartStore};
pub use favorites::{FavoritesError, FavoritesStore};
