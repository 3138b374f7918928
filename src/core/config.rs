//! Agent configuration with documented constants
//!
//! All tuning constants of the decision core are collected here with
//! explanations of their purpose and how they interact with each other.

use crate::core::error::{AgentError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for the decision core and the cycle loop
///
/// The default values reproduce the reference arena scenario: an 800x600
/// walled pen seeded with jewels, food and three leaflets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    // === PERCEPTION ===
    /// Distance (world units) under which a brick counts as a wall ahead
    ///
    /// Bricks farther than this are visible but do not trigger the
    /// rotate-avoidance behavior.
    pub wall_detect_range: f32,

    /// Distance (world units) under which items enter the sorted item list
    ///
    /// Items beyond this radius are ignored entirely for targeting.
    pub item_consider_range: f32,

    /// Number of leaflets the creature must fully satisfy before stopping
    ///
    /// The world server hands out this many leaflets at creature creation.
    /// The stop condition counts satisfied leaflets against this value
    /// rather than against however many leaflets happen to be attached.
    pub required_leaflet_count: usize,

    // === PREFERENCE CASCADE ===
    /// Reach (world units) for sacking/eating when no wall is ahead
    pub sack_distance_clear: f32,

    /// Reach (world units) for sacking/eating when a wall is ahead
    ///
    /// The cascade only evaluates reach after ruling out a wall ahead, so
    /// this arm never resolves in practice. It is kept because the source
    /// behavior reads the wall flag here, and it is pinned by a test.
    pub sack_distance_walled: f32,

    /// Distance (world units) under which a non-jewel item is worth
    /// approaching
    pub approach_distance: f32,

    /// Fuel level above which the creature spends energy approaching jewels
    ///
    /// Below this reserve, distant jewels are not chased and the creature
    /// falls back to wall-avoidance wandering.
    pub fuel_reserve: f32,

    // === CYCLE LOOP ===
    /// Delay between cognitive cycles in milliseconds (0 = no pacing)
    pub pace_ms: u64,

    /// Maximum number of cognitive cycles (None = run until aborted)
    pub max_cycles: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            wall_detect_range: 70.0,
            item_consider_range: 500.0,
            required_leaflet_count: 3,
            sack_distance_clear: 40.0,
            sack_distance_walled: 70.0,
            approach_distance: 170.0,
            fuel_reserve: 400.0,
            pace_ms: 0,
            max_cycles: None,
        }
    }
}

impl AgentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pacing delay between cycles, if any
    pub fn pace(&self) -> Option<Duration> {
        (self.pace_ms > 0).then(|| Duration::from_millis(self.pace_ms))
    }

    /// Load a configuration from a TOML file and validate it
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: AgentConfig = toml::from_str(&text)
            .map_err(|e| AgentError::InvalidConfiguration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.wall_detect_range <= 0.0 || self.item_consider_range <= 0.0 {
            return Err(AgentError::InvalidConfiguration(
                "detection ranges must be positive".into(),
            ));
        }

        if self.sack_distance_clear <= 0.0 || self.sack_distance_walled <= 0.0 {
            return Err(AgentError::InvalidConfiguration(
                "sack distances must be positive".into(),
            ));
        }

        // Reach beyond the consideration radius would target invisible items
        if self.sack_distance_clear > self.item_consider_range
            || self.approach_distance > self.item_consider_range
        {
            return Err(AgentError::InvalidConfiguration(format!(
                "sack/approach distances ({}, {}) must be <= item_consider_range ({})",
                self.sack_distance_clear, self.approach_distance, self.item_consider_range
            )));
        }

        if self.required_leaflet_count == 0 {
            return Err(AgentError::InvalidConfiguration(
                "required_leaflet_count must be at least 1".into(),
            ));
        }

        if self.max_cycles == Some(0) {
            return Err(AgentError::InvalidConfiguration(
                "max_cycles must be None or positive".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AgentConfig::default().validate().is_ok());
    }

    #[test]
    fn test_reference_constants() {
        let config = AgentConfig::default();
        assert_eq!(config.wall_detect_range, 70.0);
        assert_eq!(config.item_consider_range, 500.0);
        assert_eq!(config.required_leaflet_count, 3);
        assert_eq!(config.sack_distance_clear, 40.0);
        assert_eq!(config.sack_distance_walled, 70.0);
        assert_eq!(config.approach_distance, 170.0);
        assert_eq!(config.fuel_reserve, 400.0);
    }

    #[test]
    fn test_rejects_excessive_reach() {
        let mut config = AgentConfig::default();
        config.approach_distance = 900.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_leaflet_count() {
        let mut config = AgentConfig::default();
        config.required_leaflet_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_pace_zero_means_unpaced() {
        let mut config = AgentConfig::default();
        assert!(config.pace().is_none());
        config.pace_ms = 50;
        assert_eq!(config.pace(), Some(Duration::from_millis(50)));
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_text = "wall_detect_range = 80.0\npace_ms = 10\n";
        let config: AgentConfig = toml::from_str(toml_text).unwrap();
        assert_eq!(config.wall_detect_range, 80.0);
        assert_eq!(config.pace_ms, 10);
        // Unspecified fields keep their defaults
        assert_eq!(config.item_consider_range, 500.0);
    }
}
