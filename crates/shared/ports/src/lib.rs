//! Ordermatch Ports
//!
//! Port definitions (traits) for the ordermatch engine.
//! These define the boundary between the matching core and its adapters.

mod error;
mod matching;

pub use error::{MatchingError, MatchingResult};
pub use matching::OrderMatcher;
