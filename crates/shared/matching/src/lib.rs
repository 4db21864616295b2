//! Ordermatch Matching Engines
//!
//! Implementations of price-time priority matching for a single book.

mod book;
mod linear;
mod price_time;
mod shared;

pub use book::{OrderBook, PriceLevel};
pub use linear::LinearMatchingEngine;
pub use price_time::PriceTimeMatchingEngine;
pub use shared::SharedMatchingEngine;

// Re-export the trait from ports for convenience
pub use ordermatch_ports::{MatchingError, MatchingResult, OrderMatcher};

/// Factory function to create matching engines by name
pub fn create_matching_engine(engine_type: &str) -> Box<dyn OrderMatcher> {
    match engine_type.to_lowercase().as_str() {
        "linear" | "reference" => Box::new(LinearMatchingEngine::new()),
        _ => Box::new(PriceTimeMatchingEngine::new()), // Default
    }
}
