//! Ordermatch Console
//!
//! Line-oriented adapter around the matching engine. Text never reaches the
//! engine: lines are parsed into [`Command`] values first, and only
//! well-formed orders are submitted.

pub mod command;
pub mod config;
pub mod error;
pub mod session;

pub use command::{Command, CommandParser};
pub use config::{ConsoleConfig, SeedOrderConfig};
pub use error::{ConfigError, ConsoleError, ParseError};
pub use session::{Console, Flow};
