//! Core types for Showcase.
//!
//! This module provides type-safe wrappers for the catalog and cart domain.

pub mod cart;
pub mod favorites;
pub mod id;
pub mod price;
pub mod product;
pub mod quantity;

pub use cart::{Cart, CartEntry};
pub use favorites::Favorites;
pub use id::*;
pub use price::{Price, PriceError};
pub use product::Product;
pub use quantity::Quantity;
