//! VORUS Core - Shared domain types for the VORUS storefront.
//!
//! This crate provides the cart state container used by the storefront
//! server. It contains only types and pure state transitions - no I/O,
//! no HTTP, no async - which keeps it lightweight and trivially testable.
//!
//! # Modules
//!
//! - [`cart`] - The session cart: ordered lines, quantity management, and
//!   derived totals

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;

pub use cart::{Cart, CartLine, CartLineInput};
