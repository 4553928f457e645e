//! Lock thresholds and weights for the façade.

use serde::{Deserialize, Serialize};

use crate::network::{NetworkConfig, MAX_WEIGHT};
use crate::{Error, Result};

/// Weight conventions layered on top of the network.
///
/// A corridor heavier than `lock_threshold` is a locked door: still a
/// finite edge that Dijkstra may route through, just an expensive one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub lock_threshold: f64,
    /// Weight given by `add_locked_corridor`.
    pub locked_weight: f64,
    /// Weight given by `open_passage`.
    pub open_weight: f64,
    pub initial_capacity: usize,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            lock_threshold: 100.0,
            locked_weight: 1000.0,
            open_weight: 1.0,
            initial_capacity: NetworkConfig::default().initial_capacity,
        }
    }
}

impl MazeConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Weights must lie in `0.0..=MAX_WEIGHT`, and an opened passage must
    /// not itself count as locked.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("lock_threshold", self.lock_threshold),
            ("locked_weight", self.locked_weight),
            ("open_weight", self.open_weight),
        ] {
            if !(0.0..=MAX_WEIGHT).contains(&value) {
                return Err(Error::Config(format!(
                    "{name} must lie between 0 and {MAX_WEIGHT}, got {value}"
                )));
            }
        }
        if self.open_weight > self.lock_threshold {
            return Err(Error::Config(format!(
                "open_weight {} exceeds lock_threshold {}",
                self.open_weight, self.lock_threshold
            )));
        }
        if self.locked_weight <= self.lock_threshold {
            return Err(Error::Config(format!(
                "locked_weight {} must exceed lock_threshold {}",
                self.locked_weight, self.lock_threshold
            )));
        }
        Ok(())
    }

    pub fn network_config(&self) -> NetworkConfig {
        NetworkConfig { initial_capacity: self.initial_capacity }
    }
}
