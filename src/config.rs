//! Door timing parameters.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Tick period of the simple door's motion timer.
pub const DOOR_TICK_PERIOD_MS: u64 = 10;

/// Tick period of the garage door's motion timer.
pub const GARAGE_TICK_PERIOD_MS: u64 = 30;

/// Shortest tick period a controller will run with.
pub const MIN_TICK_PERIOD_MS: u64 = 1;

/// Errors raised while reading a [`DoorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse door configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Tick period must be greater than zero")]
    InvalidTickPeriod,
}

/// Parameters of one simulated door.
///
/// # Example
///
/// ```rust
/// use actuate::DoorConfig;
/// use std::time::Duration;
///
/// let config = DoorConfig::from_toml_str("tick_period_ms = 5").unwrap();
/// assert_eq!(config.tick_period(), Duration::from_millis(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorConfig {
    /// Milliseconds between motion ticks; each tick moves the door one percent
    pub tick_period_ms: u64,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self::door()
    }
}

impl DoorConfig {
    /// Timing of the simple door.
    pub fn door() -> Self {
        Self {
            tick_period_ms: DOOR_TICK_PERIOD_MS,
        }
    }

    /// Timing of the garage door, which moves three times slower.
    pub fn garage() -> Self {
        Self {
            tick_period_ms: GARAGE_TICK_PERIOD_MS,
        }
    }

    /// Set the tick period, rounded up to whole milliseconds (at least one).
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        let millis = period.as_nanos().div_ceil(1_000_000).max(1);
        self.tick_period_ms = u64::try_from(millis).unwrap_or(u64::MAX);
        self
    }

    /// Period between motion ticks. A zero `tick_period_ms` counts as one millisecond.
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms.max(MIN_TICK_PERIOD_MS))
    }

    /// Parse a configuration from TOML; missing keys take the simple door's defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_period_ms == 0 {
            return Err(ConfigError::InvalidTickPeriod);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_door_kinds() {
        assert_eq!(DoorConfig::default(), DoorConfig::door());
        assert_eq!(DoorConfig::door().tick_period(), Duration::from_millis(10));
        assert_eq!(DoorConfig::garage().tick_period(), Duration::from_millis(30));
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = DoorConfig::from_toml_str("").unwrap();
        assert_eq!(config, DoorConfig::door());
    }

    #[test]
    fn zero_period_is_rejected() {
        let result = DoorConfig::from_toml_str("tick_period_ms = 0");
        assert!(matches!(result, Err(ConfigError::InvalidTickPeriod)));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let result = DoorConfig::from_toml_str("tick_period_ms = \"fast\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn with_tick_period_rounds_up_to_millis() {
        let config = DoorConfig::garage().with_tick_period(Duration::from_micros(2500));
        assert_eq!(config.tick_period_ms, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn sub_millisecond_period_stays_valid() {
        let config = DoorConfig::door().with_tick_period(Duration::from_micros(500));
        assert_eq!(config.tick_period_ms, 1);
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_period(), Duration::from_millis(1));

        let config = DoorConfig::door().with_tick_period(Duration::ZERO);
        assert_eq!(config.tick_period(), Duration::from_millis(1));
    }

    #[test]
    fn zero_field_never_yields_zero_period() {
        let config = DoorConfig { tick_period_ms: 0 };
        assert!(config.validate().is_err());
        assert_eq!(config.tick_period(), Duration::from_millis(MIN_TICK_PERIOD_MS));
    }
}
