use parking_lot::RwLock;
use std::sync::Arc;

use ordermatch_core::{Order, Side, Trade};
use ordermatch_ports::{MatchingResult, OrderMatcher};

use crate::PriceTimeMatchingEngine;

/// Thread-safe handle to one matching engine
///
/// `submit` holds the write lock for the whole match so no reader ever
/// sees a half-applied book. Queries share the read lock.
/// Can be cloned and shared across threads.
pub struct SharedMatchingEngine<M = PriceTimeMatchingEngine> {
    engine: Arc<RwLock<M>>,
}

impl<M> Clone for SharedMatchingEngine<M> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

impl<M: OrderMatcher> SharedMatchingEngine<M> {
    pub fn new(engine: M) -> Self {
        Self {
            engine: Arc::new(RwLock::new(engine)),
        }
    }

    pub fn submit(&self, order: Order) -> MatchingResult<Vec<Trade>> {
        self.engine.write().submit(order)
    }

    pub fn query(&self, side: Side) -> Vec<Order> {
        self.engine.read().query(side)
    }

    /// Run a read-only closure against a consistent view of the engine
    pub fn with_engine<R>(&self, f: impl FnOnce(&M) -> R) -> R {
        let engine = self.engine.read();
        f(&*engine)
    }
}

impl Default for SharedMatchingEngine<PriceTimeMatchingEngine> {
    fn default() -> Self {
        Self::new(PriceTimeMatchingEngine::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_one_book() {
        let shared: SharedMatchingEngine = SharedMatchingEngine::default();
        let other = shared.clone();

        shared.submit(Order::sell("S1", 100, 10)).unwrap();
        let trades = other.submit(Order::buy("B1", 100, 4)).unwrap();

        assert_eq!(trades, vec![Trade::new("B1", "S1", 100, 4)]);
        assert_eq!(shared.query(Side::Sell)[0].quantity, 6);
        assert_eq!(shared.with_engine(|e| e.order_count()), 1);
    }

    #[test]
    fn test_concurrent_submitters_conserve_quantity() {
        let shared: SharedMatchingEngine = SharedMatchingEngine::default();
        for i in 0..4 {
            shared
                .submit(Order::sell(format!("S{}", i), 100, 250))
                .unwrap();
        }

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let engine = shared.clone();
                thread::spawn(move || {
                    let mut filled = 0;
                    for i in 0..50 {
                        let trades = engine
                            .submit(Order::buy(format!("B{}-{}", t, i), 100, 5))
                            .unwrap();
                        filled += trades.iter().map(|trade| trade.quantity).sum::<i64>();
                    }
                    filled
                })
            })
            .collect();

        let total: i64 = handles.into_iter().map(|h| h.join().unwrap()).sum();

        assert_eq!(total, 1000);
        assert!(shared.query(Side::Sell).is_empty());
        assert!(shared.query(Side::Buy).is_empty());
    }
}
