//! The session shopping cart.
//!
//! A [`Cart`] is an ordered list of [`CartLine`]s, unique by product id,
//! plus a visibility flag for the cart drawer. It is created empty at the
//! start of a session, mutated only through the operations on [`Cart`], and
//! discarded with the session - there is no persistence.
//!
//! Every operation is a total function over the cart state: absent targets
//! are silent no-ops rather than errors, and a quantity that would drop to
//! zero removes its line instead of leaving a zero-quantity entry behind.
//!
//! Totals ([`Cart::subtotal`], [`Cart::item_count`]) are derived fresh from
//! the lines on every read, never stored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product entry in the cart with an aggregated quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product handle, unique within the cart (e.g. `vorus-noir`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price. Non-negative by construction of the catalog.
    pub price: Decimal,
    /// Always >= 1 while the line is present.
    pub quantity: u32,
    /// Display asset reference; carried for the UI, not load-bearing.
    pub image: String,
}

impl CartLine {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// A candidate for [`Cart::add`]: a product descriptor without a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineInput {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub image: String,
}

/// In-memory cart state for one session.
///
/// Lines are kept in insertion order and stay in place when their quantity
/// changes. `is_open` is the cart drawer visibility flag; it is independent
/// of the line contents except that [`Cart::add`] sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
    pub is_open: bool,
}

impl Cart {
    /// Create an empty, closed cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            is_open: false,
        }
    }

    /// Add one unit of a product to the cart.
    ///
    /// If a line with the same id already exists its quantity is incremented
    /// in place, preserving its position; otherwise a new line with quantity
    /// 1 is appended.
    ///
    /// As a combined contract this also opens the cart drawer
    /// (`is_open = true`) so the addition is surfaced to the user. Callers
    /// that need a silent add should follow up with [`Cart::set_open`].
    pub fn add(&mut self, input: CartLineInput) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == input.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                id: input.id,
                name: input.name,
                price: input.price,
                quantity: 1,
                image: input.image,
            });
        }
        self.is_open = true;
    }

    /// Adjust the quantity of an existing line by a signed delta.
    ///
    /// The quantity is floored at zero, and a line whose quantity reaches
    /// zero is removed entirely. An unknown id is a silent no-op - absence
    /// of the target is not exceptional.
    pub fn update_quantity(&mut self, id: &str, delta: i32) {
        let Some(index) = self.lines.iter().position(|line| line.id == id) else {
            return;
        };
        let current = self.lines.get(index).map_or(0, |line| line.quantity);
        // Saturating math keeps the floor at zero for any delta.
        let new_quantity = if delta.is_negative() {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta.unsigned_abs())
        };
        if new_quantity == 0 {
            self.lines.remove(index);
        } else if let Some(line) = self.lines.get_mut(index) {
            line.quantity = new_quantity;
        }
    }

    /// Remove any line matching `id`. No-op if absent; idempotent.
    pub fn remove(&mut self, id: &str) {
        self.lines.retain(|line| line.id != id);
    }

    /// Set the cart drawer visibility flag.
    pub const fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    /// Sum of `price * quantity` over all lines, derived fresh on every call.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::total).sum()
    }

    /// Sum of quantities over all lines, derived fresh on every call.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
