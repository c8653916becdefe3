//! Configuration types for lazy-stream construction

use serde::{Deserialize, Serialize};

use crate::error::StreamResult;

/// Construction parameters shared by every stream variant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Upper bound on the number of pulls that reach the producer.
    /// `None` leaves the stream unbounded.
    pub max: Option<usize>,
    /// Starting state for the pseudo-random producer
    pub seed: u64,
}

impl StreamConfig {
    /// Create a new, unbounded configuration with seed 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of elements
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Remove any bound
    pub fn unbounded(mut self) -> Self {
        self.max = None;
        self
    }

    /// Set the pseudo-random seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Parse a configuration from JSON, e.g. `{"max": 10, "seed": 7}`.
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> StreamResult<Self> {
        let config = serde_json::from_str(json)?;
        log::debug!("Loaded stream configuration: {:?}", config);
        Ok(config)
    }

    /// Serialize this configuration to JSON
    pub fn to_json(&self) -> StreamResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
