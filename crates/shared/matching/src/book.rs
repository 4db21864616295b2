//! Priority index for resting orders
//!
//! Each side keeps a `BTreeMap` of price levels; every level is a FIFO of
//! slots into a shared arena. Iterating the map front to back and each
//! queue front to back yields price-time priority order.

use std::collections::{BTreeMap, VecDeque};

use ordermatch_core::{Order, Price, Side};

/// Aggregated quantity resting at one price
///
/// The total is widened so a level of large orders cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceLevel {
    pub price: Price,
    pub quantity: i128,
    pub order_count: usize,
}

/// Price key for BTreeMap ordering
/// For bids: reversed so the highest price sorts first
/// For asks: natural order (ascending)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PriceKey {
    price: Price,
    is_bid: bool,
}

impl PriceKey {
    fn for_side(side: Side, price: Price) -> Self {
        PriceKey {
            price,
            is_bid: side.is_buy(),
        }
    }
}

impl Ord for PriceKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.is_bid {
            other.price.cmp(&self.price)
        } else {
            self.price.cmp(&other.price)
        }
    }
}

impl PartialOrd for PriceKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

type Slot = usize;

/// Storage for resting orders, addressed by slot
/// Freed slots are reused so the arena does not grow with churn
#[derive(Debug, Default)]
struct OrderArena {
    slots: Vec<Option<Order>>,
    free: Vec<Slot>,
    live: usize,
}

impl OrderArena {
    fn insert(&mut self, order: Order) -> Slot {
        self.live += 1;
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(order);
                slot
            }
            None => {
                self.slots.push(Some(order));
                self.slots.len() - 1
            }
        }
    }

    fn get(&self, slot: Slot) -> Option<&Order> {
        self.slots.get(slot)?.as_ref()
    }

    fn get_mut(&mut self, slot: Slot) -> Option<&mut Order> {
        self.slots.get_mut(slot)?.as_mut()
    }

    fn remove(&mut self, slot: Slot) -> Option<Order> {
        let order = self.slots.get_mut(slot)?.take()?;
        self.free.push(slot);
        self.live -= 1;
        Some(order)
    }
}

/// Both sides of a single-instrument book
#[derive(Debug, Default)]
pub struct OrderBook {
    bids: BTreeMap<PriceKey, VecDeque<Slot>>,
    asks: BTreeMap<PriceKey, VecDeque<Slot>>,
    arena: OrderArena,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    fn levels(&self, side: Side) -> &BTreeMap<PriceKey, VecDeque<Slot>> {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    fn levels_mut(&mut self, side: Side) -> &mut BTreeMap<PriceKey, VecDeque<Slot>> {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// Rest an order at the back of its price level
    ///
    /// Callers must only insert orders with open quantity and increasing
    /// sequence numbers, otherwise FIFO order within a level breaks.
    pub fn insert(&mut self, order: Order) {
        debug_assert!(!order.is_filled(), "filled orders must not rest");
        let key = PriceKey::for_side(order.side, order.price);
        let side = order.side;
        let slot = self.arena.insert(order);
        self.levels_mut(side).entry(key).or_default().push_back(slot);
    }

    /// Best price on a side (highest bid, lowest ask)
    pub fn best_price(&self, side: Side) -> Option<Price> {
        self.levels(side).first_key_value().map(|(key, _)| key.price)
    }

    /// Highest-priority resting order on a side
    pub fn best_order(&self, side: Side) -> Option<&Order> {
        let slot = *self.levels(side).first_key_value()?.1.front()?;
        self.arena.get(slot)
    }

    /// Mutable access to the highest-priority resting order on a side
    pub fn best_order_mut(&mut self, side: Side) -> Option<&mut Order> {
        let slot = *self.levels(side).first_key_value()?.1.front()?;
        self.arena.get_mut(slot)
    }

    /// Remove the highest-priority resting order, dropping its level if empty
    pub fn pop_best(&mut self, side: Side) -> Option<Order> {
        let slot = {
            let mut entry = self.levels_mut(side).first_entry()?;
            let slot = entry.get_mut().pop_front()?;
            if entry.get().is_empty() {
                entry.remove();
            }
            slot
        };
        self.arena.remove(slot)
    }

    /// Resting orders on a side in priority order
    pub fn iter(&self, side: Side) -> impl Iterator<Item = &Order> + '_ {
        let arena = &self.arena;
        self.levels(side)
            .values()
            .flat_map(|queue| queue.iter())
            .filter_map(move |slot| arena.get(*slot))
    }

    /// Aggregated price levels on a side, best first
    pub fn depth(&self, side: Side) -> Vec<PriceLevel> {
        self.levels(side)
            .iter()
            .map(|(key, queue)| PriceLevel {
                price: key.price,
                quantity: queue
                    .iter()
                    .filter_map(|slot| self.arena.get(*slot))
                    .map(|order| i128::from(order.quantity))
                    .sum(),
                order_count: queue.len(),
            })
            .collect()
    }

    /// Number of resting orders across both sides
    pub fn order_count(&self) -> usize {
        self.arena.live
    }

    pub fn is_empty(&self) -> bool {
        self.arena.live == 0
    }
}
