//! # Item Record
//!
//! The single record type the register stores, plus the stock actions an
//! operator can apply to it.
//!
//! ## Shape
//! ```text
//! ┌─────────────────┐
//! │      Item       │
//! │  ─────────────  │
//! │  id (business)  │  unique, ordered lexicographically
//! │  name           │  display + search key
//! │  category       │  free text
//! │  quantity (u64) │  only field mutated after creation
//! │  price (Money)  │  unit price in cents
//! └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Item
// =============================================================================

/// A stock item held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Business identifier, e.g. `BRG001`. Unique within a store.
    pub id: String,

    /// Display name, matched by the name search.
    pub name: String,

    /// Free-text category.
    pub category: String,

    /// Units on hand.
    pub quantity: u64,

    /// Price per unit.
    pub price: Money,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: u64,
        price: Money,
    ) -> Self {
        Item {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            quantity,
            price,
        }
    }

    /// Value of the stock on hand (unit price × quantity).
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Stock Action
// =============================================================================

/// Direction of a stock update.
///
/// The console numbers these `1` (in) and `2` (out); any other number is
/// rejected with [`CoreError::InvalidSelector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockAction {
    /// Goods received: quantity goes up.
    In,
    /// Goods issued: quantity goes down, never below zero.
    Out,
}

impl StockAction {
    /// Signed quantity change for a non-negative `amount`.
    pub fn delta(self, amount: u64) -> i64 {
        let amount = i64::try_from(amount).unwrap_or(i64::MAX);
        match self {
            StockAction::In => amount,
            StockAction::Out => -amount,
        }
    }
}

impl TryFrom<i64> for StockAction {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(StockAction::In),
            2 => Ok(StockAction::Out),
            _ => Err(CoreError::InvalidSelector { value }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
