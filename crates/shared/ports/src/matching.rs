use ordermatch_core::{Order, Side, Trade};

use crate::error::MatchingResult;

/// Port for a single-instrument matching engine
///
/// Implementations differ only in how they index resting orders:
/// - Price-level buckets with FIFO queues
/// - Linear scan over one list
///
/// Observable behavior (trades, prices, final book ordering) must be
/// identical across implementations.
pub trait OrderMatcher: Send + Sync {
    /// Match an incoming order against the book and rest any residual
    ///
    /// Returns only the trades generated by this call, in priority order.
    fn submit(&mut self, order: Order) -> MatchingResult<Vec<Trade>>;

    /// Resting orders for one side in priority order
    ///
    /// Buy: highest price first. Sell: lowest price first.
    /// Ties are broken by ascending sequence.
    fn query(&self, side: Side) -> Vec<Order>;

    /// Get the name of the implementation
    fn name(&self) -> &str;
}

impl<M: OrderMatcher + ?Sized> OrderMatcher for Box<M> {
    fn submit(&mut self, order: Order) -> MatchingResult<Vec<Trade>> {
        (**self).submit(order)
    }

    fn query(&self, side: Side) -> Vec<Order> {
        (**self).query(side)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
