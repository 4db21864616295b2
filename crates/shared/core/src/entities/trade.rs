use serde::{Deserialize, Serialize};
use std::fmt;

use super::OrderId;
use crate::values::{Price, Quantity};

/// Trade resulting from matching an active order against a passive one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// The incoming order
    pub active_order_id: OrderId,
    /// The resting order it matched against
    pub passive_order_id: OrderId,
    /// Always the passive order's price
    pub price: Price,
    pub quantity: Quantity,
}

impl Trade {
    pub fn new(
        active_order_id: impl Into<OrderId>,
        passive_order_id: impl Into<OrderId>,
        price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            active_order_id: active_order_id.into(),
            passive_order_id: passive_order_id.into(),
            price,
            quantity,
        }
    }

    /// Returns the notional value of the trade (price * quantity)
    pub fn notional(&self) -> i128 {
        i128::from(self.price) * i128::from(self.quantity)
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{} (#{}/#{})",
            self.quantity, self.price, self.active_order_id, self.passive_order_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let trade = Trade::new("B1", "S1", 100, 5);
        assert_eq!(trade.to_string(), "5@100 (#B1/#S1)");
    }

    #[test]
    fn test_notional_does_not_overflow() {
        let trade = Trade::new("B1", "S1", i64::MAX, 2);
        assert_eq!(trade.notional(), i128::from(i64::MAX) * 2);
    }
}
