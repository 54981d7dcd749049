//! Newsletter subscription route handler.
//!
//! Backs the Sample Club signup form. Subscribers are held in an in-memory
//! set for the life of the process; an email that is already subscribed is
//! reported as a success rather than an error.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Newsletter subscription request body.
#[derive(Debug, Deserialize)]
pub struct SubscribePayload {
    pub email: String,
}

/// Newsletter subscription response body.
#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
    pub status: &'static str,
    pub email: String,
}

/// Subscribe to the Sample Club newsletter.
#[instrument(skip(state), fields(email = %payload.email))]
pub async fn subscribe(
    State(state): State<AppState>,
    Json(payload): Json<SubscribePayload>,
) -> Result<Json<SubscribeResponse>> {
    let email = payload.email.trim().to_lowercase();

    if !is_valid_email(&email) {
        return Err(AppError::BadRequest(
            "Please enter a valid email address".to_string(),
        ));
    }

    if state.add_subscriber(&email) {
        tracing::info!(email = %email, "Newsletter subscription successful");
    } else {
        // Already in the set - treat as success, they are subscribed
        tracing::info!(email = %email, "Email already subscribed");
    }

    Ok(Json(SubscribeResponse {
        status: "subscribed",
        email,
    }))
}

/// Basic email validation.
fn is_valid_email(email: &str) -> bool {
    // Simple validation: contains @, has content before and after @
    let mut parts = email.splitn(2, '@');
    let Some(local) = parts.next() else {
        return false;
    };
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && domain.contains('.')
}
