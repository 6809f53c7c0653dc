//! Showcase Core - Shared types library.
//!
//! This crate provides the domain types used by the Showcase storefront:
//! products, prices, cart entries and favorites.
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations on them - no I/O,
//! no storage access, no HTTP. Loading and persisting carts and favorites is
//! the storefront's job; merging an addition into a cart or toggling a
//! favorite is defined here so it can be tested without any backend.
//!
//! # Modules
//!
//! - [`types`] - Product ids, prices, products, carts, favorites and quantities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
