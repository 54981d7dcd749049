//! Integration tests for the session cart flow.
//!
//! These tests require the storefront server running
//! (cargo run -p vorus-storefront). Each test uses its own cookie-store
//! client, so carts never bleed between tests.
//!
//! Run with: cargo test -p vorus-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

/// Base URL for the storefront API (configurable via environment).
fn base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

/// A client with its own cookie jar, i.e. its own session cart.
fn session_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

async fn get_cart(client: &Client) -> Value {
    client
        .get(format!("{}/api/cart", base_url()))
        .send()
        .await
        .expect("Failed to get cart")
        .json()
        .await
        .expect("Failed to parse cart view")
}

async fn add_to_cart(client: &Client, product_id: &str) -> reqwest::Response {
    client
        .post(format!("{}/api/cart/add", base_url()))
        .json(&json!({ "product_id": product_id }))
        .send()
        .await
        .expect("Failed to post cart add")
}

async fn update_quantity(client: &Client, product_id: &str, delta: i32) -> Value {
    client
        .post(format!("{}/api/cart/update", base_url()))
        .json(&json!({ "product_id": product_id, "delta": delta }))
        .send()
        .await
        .expect("Failed to post cart update")
        .json()
        .await
        .expect("Failed to parse cart view")
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_fresh_session_has_empty_closed_cart() {
    let client = session_client();
    let cart = get_cart(&client).await;

    assert_eq!(cart["lines"], json!([]));
    assert_eq!(cart["item_count"], 0);
    assert_eq!(cart["subtotal"], "0");
    assert_eq!(cart["is_open"], false);
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_add_resolves_catalog_product_and_opens_cart() {
    let client = session_client();

    let resp = add_to_cart(&client, "vorus-noir").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cart: Value = resp.json().await.expect("Failed to parse cart view");

    assert_eq!(cart["item_count"], 1);
    assert_eq!(cart["subtotal"], "185");
    assert_eq!(cart["is_open"], true);
    assert_eq!(cart["lines"][0]["id"], "vorus-noir");
    assert_eq!(cart["lines"][0]["name"], "VORUS Noir");
    assert_eq!(cart["lines"][0]["quantity"], 1);
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_add_unknown_product_is_404() {
    let client = session_client();

    let resp = add_to_cart(&client, "vorus-glacier").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // The cart is untouched by the failed add
    let cart = get_cart(&client).await;
    assert_eq!(cart["item_count"], 0);
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_double_add_merges_lines() {
    let client = session_client();

    add_to_cart(&client, "vorus-midnight").await;
    let resp = add_to_cart(&client, "vorus-midnight").await;
    let cart: Value = resp.json().await.expect("Failed to parse cart view");

    assert_eq!(cart["lines"].as_array().map(Vec::len), Some(1));
    assert_eq!(cart["lines"][0]["quantity"], 2);
    assert_eq!(cart["subtotal"], "420");
    assert_eq!(cart["item_count"], 2);
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_decrement_to_zero_removes_line() {
    let client = session_client();

    add_to_cart(&client, "vorus-ember").await;
    add_to_cart(&client, "vorus-ember").await;

    let cart = update_quantity(&client, "vorus-ember", -1).await;
    assert_eq!(cart["lines"][0]["quantity"], 1);

    let cart = update_quantity(&client, "vorus-ember", -1).await;
    assert_eq!(cart["lines"], json!([]));
    assert_eq!(cart["item_count"], 0);
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_update_unknown_line_is_noop() {
    let client = session_client();

    add_to_cart(&client, "vorus-noir").await;
    let cart = update_quantity(&client, "vorus-midnight", -1).await;

    assert_eq!(cart["item_count"], 1);
    assert_eq!(cart["lines"][0]["id"], "vorus-noir");
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_remove_is_idempotent() {
    let client = session_client();
    add_to_cart(&client, "vorus-noir").await;

    for _ in 0..2 {
        let cart: Value = client
            .post(format!("{}/api/cart/remove", base_url()))
            .json(&json!({ "product_id": "vorus-noir" }))
            .send()
            .await
            .expect("Failed to post cart remove")
            .json()
            .await
            .expect("Failed to parse cart view");
        assert_eq!(cart["lines"], json!([]));
    }
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_open_flag_is_independent_of_lines() {
    let client = session_client();

    add_to_cart(&client, "vorus-noir").await;
    let cart: Value = client
        .post(format!("{}/api/cart/open", base_url()))
        .json(&json!({ "open": false }))
        .send()
        .await
        .expect("Failed to post cart open")
        .json()
        .await
        .expect("Failed to parse cart view");

    assert_eq!(cart["is_open"], false);
    assert_eq!(cart["item_count"], 1);
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_sessions_do_not_share_carts() {
    let first = session_client();
    let second = session_client();

    add_to_cart(&first, "vorus-noir").await;

    let cart = get_cart(&second).await;
    assert_eq!(cart["item_count"], 0);
}
