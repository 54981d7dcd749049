//! Cart route handlers.
//!
//! The cart lives in the session as a serialized [`Cart`]; each handler is a
//! read-modify-write of that value under the session layer, so no locking
//! beyond the session's own is needed. The handlers are the calling code
//! that resolves catalog products into cart line inputs - client-supplied
//! prices are never accepted.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;
use vorus_core::{Cart, CartLine, CartLineInput};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Session key holding the serialized cart.
const CART_KEY: &str = "vorus.cart";

/// Cart line display data for the client.
#[derive(Debug, Clone, Serialize)]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub image: String,
    pub line_total: Decimal,
}

/// Cart display data for the client.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub subtotal: Decimal,
    pub item_count: u32,
    pub is_open: bool,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id.clone(),
            name: line.name.clone(),
            price: line.price,
            quantity: line.quantity,
            image: line.image.clone(),
            line_total: line.total(),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines.iter().map(CartLineView::from).collect(),
            subtotal: cart.subtotal(),
            item_count: cart.item_count(),
            is_open: cart.is_open,
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the cart from the session, defaulting to an empty cart.
async fn get_cart(session: &Session) -> Result<Cart> {
    Ok(session.get::<Cart>(CART_KEY).await?.unwrap_or_default())
}

/// Persist the cart back into the session.
async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(CART_KEY, cart).await?;
    Ok(())
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartPayload {
    pub product_id: String,
}

/// Update quantity request body.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityPayload {
    pub product_id: String,
    pub delta: i32,
}

/// Remove from cart request body.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartPayload {
    pub product_id: String,
}

/// Set cart visibility request body.
#[derive(Debug, Deserialize)]
pub struct SetOpenPayload {
    pub open: bool,
}

/// Current cart view. A fresh session gets an empty, closed cart.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CartView>> {
    let cart = get_cart(&session).await?;
    Ok(Json(CartView::from(&cart)))
}

/// Add one unit of a catalog product to the cart.
///
/// Resolves the product by handle; an unknown handle is a 404 since it means
/// the client is out of sync with the catalog. A successful add also opens
/// the cart drawer (the `Cart::add` combined contract).
#[instrument(skip(state, session), fields(product_id = %payload.product_id))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AddToCartPayload>,
) -> Result<Json<CartView>> {
    let product = state
        .catalog()
        .product(&payload.product_id)
        .ok_or_else(|| AppError::NotFound(payload.product_id.clone()))?;

    let mut cart = get_cart(&session).await?;
    cart.add(CartLineInput {
        id: product.id.clone(),
        name: product.name.clone(),
        price: product.price,
        image: product.image.clone(),
    });
    save_cart(&session, &cart).await?;

    tracing::debug!(item_count = cart.item_count(), "Added product to cart");
    Ok(Json(CartView::from(&cart)))
}

/// Adjust a line quantity by a signed delta.
///
/// Dropping to zero removes the line; an unknown line id leaves the cart
/// unchanged (silent no-op, matching the cart contract).
#[instrument(skip(session), fields(product_id = %payload.product_id, delta = payload.delta))]
pub async fn update(
    session: Session,
    Json(payload): Json<UpdateQuantityPayload>,
) -> Result<Json<CartView>> {
    let mut cart = get_cart(&session).await?;
    cart.update_quantity(&payload.product_id, payload.delta);
    save_cart(&session, &cart).await?;
    Ok(Json(CartView::from(&cart)))
}

/// Remove a line from the cart. No-op for an unknown line id.
#[instrument(skip(session), fields(product_id = %payload.product_id))]
pub async fn remove(
    session: Session,
    Json(payload): Json<RemoveFromCartPayload>,
) -> Result<Json<CartView>> {
    let mut cart = get_cart(&session).await?;
    cart.remove(&payload.product_id);
    save_cart(&session, &cart).await?;
    Ok(Json(CartView::from(&cart)))
}

/// Set the cart drawer visibility flag.
#[instrument(skip(session))]
pub async fn open(session: Session, Json(payload): Json<SetOpenPayload>) -> Result<Json<CartView>> {
    let mut cart = get_cart(&session).await?;
    cart.set_open(payload.open);
    save_cart(&session, &cart).await?;
    Ok(Json(CartView::from(&cart)))
}
