use serde::{Deserialize, Serialize};
use std::fmt;

use super::Side;
use crate::values::{Price, Quantity, Sequence};

/// Caller-supplied order identifier
/// Opaque to the engine; uniqueness is the caller's responsibility
pub type OrderId = String;

/// Limit order, either incoming or resting in the book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    /// Limit price in ticks
    pub price: Price,
    /// Open quantity, decremented as the order is matched
    pub quantity: Quantity,
    /// Arrival sequence, 0 until the engine accepts the order
    #[serde(default)]
    pub sequence: Sequence,
}

impl Order {
    pub fn new(id: impl Into<OrderId>, side: Side, price: Price, quantity: Quantity) -> Self {
        Self {
            id: id.into(),
            side,
            price,
            quantity,
            sequence: 0,
        }
    }

    pub fn buy(id: impl Into<OrderId>, price: Price, quantity: Quantity) -> Self {
        Self::new(id, Side::Buy, price, quantity)
    }

    pub fn sell(id: impl Into<OrderId>, price: Price, quantity: Quantity) -> Self {
        Self::new(id, Side::Sell, price, quantity)
    }

    pub fn with_sequence(mut self, sequence: Sequence) -> Self {
        self.sequence = sequence;
        self
    }

    /// Check the order can be submitted at all
    pub fn validate(&self) -> Result<(), String> {
        if self.price < 0 {
            return Err(format!(
                "order #{} has negative price {}",
                self.id, self.price
            ));
        }
        if self.quantity < 0 {
            return Err(format!(
                "order #{} has negative quantity {}",
                self.id, self.quantity
            ));
        }
        Ok(())
    }

    /// Determine if this order crosses a resting order on the opposite side
    pub fn crosses(&self, resting: &Order) -> bool {
        match (self.side, resting.side) {
            (Side::Buy, Side::Sell) => self.price >= resting.price,
            (Side::Sell, Side::Buy) => self.price <= resting.price,
            _ => false,
        }
    }

    /// Returns true once nothing is left to match
    pub fn is_filled(&self) -> bool {
        self.quantity <= 0
    }

    /// Reduce the open quantity by a matched amount
    pub fn fill(&mut self, quantity: Quantity) {
        debug_assert!(quantity <= self.quantity, "fill exceeds open quantity");
        self.quantity -= quantity;
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}@{} #{}",
            self.side.as_keyword(),
            self.quantity,
            self.price,
            self.id
        )
    }
}
