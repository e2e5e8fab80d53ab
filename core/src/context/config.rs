//! Widget configuration
//!
//! Re-exports the shared config type from stopwatch-types and adds
//! validation. Loading and saving through confy need the `persist` feature.

pub use stopwatch_types::{ClockFormat, StopwatchConfig, WidgetVariant};

use crate::error::ConfigError;

#[cfg(feature = "persist")]
const APP_NAME: &str = "stopwatch";
#[cfg(feature = "persist")]
const CONFIG_NAME: &str = "config";

// ─────────────────────────────────────────────────────────────────────────────
// StopwatchConfig Extensions
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for StopwatchConfig validation and persistence
pub trait StopwatchConfigExt: Sized {
    /// Reject values the timing engine cannot run with
    fn validate(&self) -> Result<(), ConfigError>;

    /// Load from the platform config directory, creating defaults if missing
    #[cfg(feature = "persist")]
    fn load() -> Result<Self, ConfigError>;

    #[cfg(feature = "persist")]
    fn save(&self) -> Result<(), ConfigError>;
}

impl StopwatchConfigExt for StopwatchConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                reason: "tick_interval_ms must be greater than zero".to_string(),
            });
        }
        if self.double_click_window_ms == 0 {
            return Err(ConfigError::Invalid {
                reason: "double_click_window_ms must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    #[cfg(feature = "persist")]
    fn load() -> Result<Self, ConfigError> {
        let config: Self = confy::load(APP_NAME, CONFIG_NAME).map_err(ConfigError::Load)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "persist")]
    fn save(&self) -> Result<(), ConfigError> {
        self.validate()?;
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)?;
        tracing::info!(config = ?self, "Configuration saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(StopwatchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_values_rejected() {
        let config = StopwatchConfig {
            tick_interval_ms: 0,
            ..StopwatchConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));

        let config = StopwatchConfig {
            double_click_window_ms: 0,
            ..StopwatchConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("double_click_window_ms"));
    }

    #[cfg(feature = "persist")]
    #[test]
    fn test_save_rejects_invalid_before_touching_disk() {
        let config = StopwatchConfig {
            tick_interval_ms: 0,
            ..StopwatchConfig::default()
        };
        assert!(matches!(config.save(), Err(ConfigError::Invalid { .. })));
    }
}
