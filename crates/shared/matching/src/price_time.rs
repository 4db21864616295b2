use log::{debug, warn};
use ordermatch_core::{Order, Price, Sequence, Side, Trade};
use ordermatch_ports::{MatchingError, MatchingResult, OrderMatcher};

use crate::book::{OrderBook, PriceLevel};

/// Standard price-time priority matching engine (FIFO)
///
/// Orders are matched based on:
/// 1. Best price (highest bid, lowest ask)
/// 2. Time priority (first in, first out at same price)
///
/// The resting (older) order always sets the trade price.
#[derive(Debug, Default)]
pub struct PriceTimeMatchingEngine {
    book: OrderBook,
    /// Last sequence handed out; the next accepted order gets `sequence + 1`
    sequence: Sequence,
}

impl PriceTimeMatchingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_sequence(&mut self) -> Sequence {
        self.sequence += 1;
        self.sequence
    }

    /// Sequence assigned to the most recently accepted order
    pub fn last_sequence(&self) -> Sequence {
        self.sequence
    }

    /// Best bid price (highest buy order)
    pub fn best_bid(&self) -> Option<Price> {
        self.book.best_price(Side::Buy)
    }

    /// Best ask price (lowest sell order)
    pub fn best_ask(&self) -> Option<Price> {
        self.book.best_price(Side::Sell)
    }

    /// Spread between best ask and best bid
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Aggregated price levels for a side, best first
    pub fn depth(&self, side: Side) -> Vec<PriceLevel> {
        self.book.depth(side)
    }

    /// Number of orders in the book
    pub fn order_count(&self) -> usize {
        self.book.order_count()
    }

    pub fn is_empty(&self) -> bool {
        self.book.is_empty()
    }

    /// Walk the opposite side while the incoming order crosses
    fn match_order(&mut self, order: &mut Order) -> Vec<Trade> {
        let mut trades = Vec::new();
        let opposite = order.side.opposite();

        while !order.is_filled() {
            let Some(resting) = self.book.best_order_mut(opposite) else {
                break;
            };

            if !order.crosses(resting) {
                break;
            }

            let fill_qty = order.quantity.min(resting.quantity);
            order.fill(fill_qty);
            resting.fill(fill_qty);

            let trade = Trade::new(order.id.clone(), resting.id.clone(), resting.price, fill_qty);
            debug!(
                "Trade {} {}@{} against #{}",
                order.id, trade.quantity, trade.price, trade.passive_order_id
            );

            if resting.is_filled() {
                self.book.pop_best(opposite);
            }
            trades.push(trade);
        }

        trades
    }
}

impl OrderMatcher for PriceTimeMatchingEngine {
    fn submit(&mut self, mut order: Order) -> MatchingResult<Vec<Trade>> {
        if let Err(reason) = order.validate() {
            warn!("Rejected order: {}", reason);
            return Err(MatchingError::InvalidOrder(reason));
        }

        if order.is_filled() {
            debug!("Ignoring order #{} with zero quantity", order.id);
            return Ok(Vec::new());
        }

        order.sequence = self.next_sequence();
        let trades = self.match_order(&mut order);

        if !order.is_filled() {
            debug!(
                "Resting {} {}@{} #{} (seq {})",
                order.side, order.quantity, order.price, order.id, order.sequence
            );
            self.book.insert(order);
        }

        Ok(trades)
    }

    fn query(&self, side: Side) -> Vec<Order> {
        self.book.iter(side).cloned().collect()
    }

    fn name(&self) -> &str {
        "Price-Time (indexed)"
    }
}
