//! Integration tests for the VORUS storefront.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the storefront
//! cargo run -p vorus-storefront
//!
//! # Run integration tests (ignored by default)
//! cargo test -p vorus-integration-tests -- --ignored
//! ```
//!
//! The tests talk to a running server over HTTP; set `STOREFRONT_BASE_URL`
//! to point at a non-default instance (default: `http://localhost:5000`).

#![cfg_attr(not(test), forbid(unsafe_code))]
