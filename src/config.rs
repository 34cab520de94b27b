use serde::{Deserialize, Serialize};

use crate::DEFAULT_DRAG_THRESHOLD;

/// Tunables for a [`CalendarView`](crate::CalendarView).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    /// Drag displacement (in layout units) that must be exceeded to switch
    /// between month and week display.
    #[serde(default = "default_drag_threshold")]
    pub drag_threshold: f32,
}

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Threshold must be a positive, finite distance.
    #[error("Invalid drag threshold: {0} (must be positive and finite)")]
    InvalidDragThreshold(f32),
}

const fn default_drag_threshold() -> f32 {
    DEFAULT_DRAG_THRESHOLD
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            drag_threshold: default_drag_threshold(),
        }
    }
}

impl CalendarConfig {
    /// Checks that every field is usable.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidDragThreshold` for a zero, negative, NaN or
    /// infinite threshold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.drag_threshold.is_finite() || self.drag_threshold <= 0.0 {
            return Err(ConfigError::InvalidDragThreshold(self.drag_threshold));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = CalendarConfig::default();
        assert!((config.drag_threshold - 15.0).abs() < f32::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_thresholds() {
        for value in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = CalendarConfig {
                drag_threshold: value,
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidDragThreshold(_))),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: CalendarConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CalendarConfig::default());

        let config: CalendarConfig = serde_json::from_str(r#"{"drag_threshold": 24.0}"#).unwrap();
        assert!((config.drag_threshold - 24.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result: Result<CalendarConfig, _> = serde_json::from_str(r#"{"threshold": 1.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_message() {
        let err = ConfigError::InvalidDragThreshold(-2.0);
        assert!(err.to_string().contains("Invalid drag threshold: -2"));
    }
}
