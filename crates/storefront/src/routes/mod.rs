//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /api/health             - Health check
//!
//! # Catalog (read-only, static content)
//! GET  /api/products           - Product list
//! GET  /api/notes              - Fragrance note list
//! GET  /api/testimonials       - Testimonial list
//!
//! # Cart (session-scoped, JSON)
//! GET  /api/cart               - Current cart view
//! POST /api/cart/add           - Add one unit of a product (opens the cart)
//! POST /api/cart/update        - Adjust a line quantity by a signed delta
//! POST /api/cart/remove        - Remove a line
//! POST /api/cart/open          - Set the cart drawer visibility flag
//!
//! # Newsletter
//! POST /api/subscribe          - Sample Club email signup
//! ```

pub mod api;
pub mod cart;
pub mod newsletter;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/open", post(cart::open))
}

/// Create all API routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(api::health))
        .route("/products", get(api::products))
        .route("/notes", get(api::notes))
        .route("/testimonials", get(api::testimonials))
        .nest("/cart", cart_routes())
        .route("/subscribe", post(newsletter::subscribe))
}
