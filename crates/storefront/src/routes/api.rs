//! Health check and static catalog route handlers.
//!
//! The catalog endpoints serve the fixed content arrays verbatim; the client
//! maps products from here into cart add requests.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::catalog::{FragranceNote, Product, Testimonial};
use crate::state::AppState;

/// Health check response body.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub message: &'static str,
}

/// Health check endpoint.
///
/// Returns a static payload if the server is running; there are no
/// dependencies to probe.
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        message: "VORUS API is running",
    })
}

/// Serve the product list.
pub async fn products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog().products().to_vec())
}

/// Serve the fragrance note list.
pub async fn notes(State(state): State<AppState>) -> Json<Vec<FragranceNote>> {
    Json(state.catalog().notes().to_vec())
}

/// Serve the testimonial list.
pub async fn testimonials(State(state): State<AppState>) -> Json<Vec<Testimonial>> {
    Json(state.catalog().testimonials().to_vec())
}
