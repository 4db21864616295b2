//! Configuration loading for the console
//!
//! Supports JSON configuration files for:
//! - Engine selection (indexed or linear)
//! - Seed orders for initial liquidity
//! - Trade output format

use ordermatch_core::{Order, Price, Quantity, Side};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Environment variable overriding the configured engine
pub const ENGINE_ENV_VAR: &str = "ORDERMATCH_ENGINE";

/// Root configuration for the console
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Matching engine: "price-time" or "linear"
    #[serde(default = "default_engine")]
    pub engine: String,

    /// Orders submitted before the prompt opens
    #[serde(default)]
    pub seed_orders: Vec<SeedOrderConfig>,

    /// Print trades as JSON lines instead of `qty@price (#active/#passive)`
    #[serde(default)]
    pub echo_trades_as_json: bool,
}

fn default_engine() -> String {
    "price-time".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            seed_orders: Vec::new(),
            echo_trades_as_json: false,
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply `ORDERMATCH_ENGINE` if it is set
    pub fn with_env_overrides(self) -> Self {
        let engine = std::env::var(ENGINE_ENV_VAR).ok();
        self.with_engine_override(engine)
    }

    fn with_engine_override(mut self, engine: Option<String>) -> Self {
        if let Some(engine) = engine.filter(|e| !e.trim().is_empty()) {
            self.engine = engine;
        }
        self
    }

    /// Convert seed orders to domain orders, naming unnamed ones `seed-<n>`
    pub fn seed_orders(&self) -> Result<Vec<Order>, ConfigError> {
        self.seed_orders
            .iter()
            .enumerate()
            .map(|(idx, seed)| seed.to_order(idx + 1))
            .collect()
    }
}

/// Seed order configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedOrderConfig {
    pub side: Side,
    pub quantity: Quantity,
    pub price: Price,
    #[serde(default)]
    pub id: Option<String>,
}

impl SeedOrderConfig {
    fn to_order(&self, position: usize) -> Result<Order, ConfigError> {
        let id = self
            .id
            .clone()
            .unwrap_or_else(|| format!("seed-{}", position));
        let order = Order::new(id, self.side, self.price, self.quantity);
        order.validate().map_err(ConfigError::InvalidSeedOrder)?;
        Ok(order)
    }
}
