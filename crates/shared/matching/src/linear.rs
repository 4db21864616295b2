use log::{debug, warn};
use ordermatch_core::{Order, Price, Sequence, Side, Trade};
use ordermatch_ports::{MatchingError, MatchingResult, OrderMatcher};

/// Reference matching engine over a single unsorted list
///
/// Every match scans all resting orders for the best crossable candidate,
/// so cost grows linearly with book size. Kept as an oracle for the
/// indexed engine and for small books where simplicity wins.
#[derive(Debug, Default)]
pub struct LinearMatchingEngine {
    /// Resting orders of both sides in arrival order
    orders: Vec<Order>,
    sequence: Sequence,
}

/// Sort key giving price-time priority within one side
fn priority(order: &Order) -> (Price, Sequence) {
    match order.side {
        Side::Buy => (-order.price, order.sequence),
        Side::Sell => (order.price, order.sequence),
    }
}

impl LinearMatchingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the best resting order the incoming order can trade with
    fn best_candidate(&self, incoming: &Order) -> Option<usize> {
        self.orders
            .iter()
            .enumerate()
            .filter(|(_, resting)| incoming.crosses(resting))
            .min_by_key(|(_, resting)| priority(resting))
            .map(|(idx, _)| idx)
    }
}

impl OrderMatcher for LinearMatchingEngine {
    fn submit(&mut self, mut order: Order) -> MatchingResult<Vec<Trade>> {
        if let Err(reason) = order.validate() {
            warn!("Rejected order: {}", reason);
            return Err(MatchingError::InvalidOrder(reason));
        }
        if order.is_filled() {
            debug!("Ignoring order #{} with zero quantity", order.id);
            return Ok(Vec::new());
        }

        self.sequence += 1;
        order.sequence = self.sequence;

        let mut trades = Vec::new();
        while !order.is_filled() {
            let Some(idx) = self.best_candidate(&order) else {
                break;
            };
            let resting = &mut self.orders[idx];
            let fill_qty = order.quantity.min(resting.quantity);
            order.fill(fill_qty);
            resting.fill(fill_qty);
            let trade = Trade::new(order.id.clone(), resting.id.clone(), resting.price, fill_qty);
            debug!(
                "Trade {} {}@{} against #{}",
                order.id, trade.quantity, trade.price, trade.passive_order_id
            );
            trades.push(trade);
            if resting.is_filled() {
                // Preserve arrival order for the remaining entries
                self.orders.remove(idx);
            }
        }

        if !order.is_filled() {
            debug!("Resting {} #{} (seq {})", order.side, order.id, order.sequence);
            self.orders.push(order);
        }

        Ok(trades)
    }

    fn query(&self, side: Side) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|o| o.side == side)
            .cloned()
            .collect();
        orders.sort_by_key(priority);
        orders
    }

    fn name(&self) -> &str {
        "Price-Time (linear)"
    }
}
