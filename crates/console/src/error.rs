//! Error types for the console crate

use ordermatch_matching::MatchingError;
use thiserror::Error;

/// Rejection of a command line before it reaches the engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("missing <quantity>@<price>")]
    MissingTerms,

    #[error("expected <quantity>@<price>, got '{0}'")]
    MissingPrice(String),

    #[error("invalid quantity '{0}': must be a non-negative integer")]
    InvalidQuantity(String),

    #[error("invalid price '{0}': must be a non-negative integer")]
    InvalidPrice(String),

    #[error("invalid order id '{0}': expected #<id>")]
    InvalidId(String),

    #[error("unexpected trailing input '{0}'")]
    TrailingInput(String),
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid seed order: {0}")]
    InvalidSeedOrder(String),
}

/// Top-level console errors
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Matching error: {0}")]
    Matching(#[from] MatchingError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
