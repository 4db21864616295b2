//! Ordermatch Core Domain
//!
//! Pure domain types for the ordermatch engine.
//! This crate contains no I/O and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Order, OrderId, Side, Trade};
pub use values::{Price, Quantity, Sequence};
