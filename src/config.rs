// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Workout configuration.
//!
//! This module defines the [`GymConfig`] struct, which holds the joint angle
//! thresholds that drive the repetition counter, the overlay line width and
//! the bound on tracked identities.

use crate::error::{GymError, Result};

/// Default upper bound on track ids. Ids at or above it are ignored.
pub const DEFAULT_MAX_IDENTITIES: usize = 10_000;

/// Configuration for the workout counter.
///
/// Uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use ultralytics_aigym::GymConfig;
///
/// let config = GymConfig::new()
///     .with_up_angle(150.0)
///     .with_down_angle(100.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GymConfig {
    /// Joint angle (degrees) above which a person is in the "up" position.
    pub up_angle: f32,
    /// Joint angle (degrees) below which a person is in the "down" position.
    /// Must be lower than `up_angle`.
    pub down_angle: f32,
    /// Line width used for overlay annotations. Highlighted joints are drawn
    /// with a radius of three times this value, saturating at `u32::MAX`.
    pub line_width: u32,
    /// Track ids must be lower than this. Observing id `n` allocates state for
    /// every id up to `n`, so this bounds registry memory.
    pub max_identities: usize,
}

impl Default for GymConfig {
    fn default() -> Self {
        Self {
            up_angle: 160.0,
            down_angle: 90.0,
            line_width: 2,
            max_identities: DEFAULT_MAX_IDENTITIES,
        }
    }
}

impl GymConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the "up" angle threshold.
    ///
    /// # Arguments
    ///
    /// * `angle` - Threshold in degrees.
    ///
    /// # Returns
    ///
    /// * The modified `GymConfig`.
    #[must_use]
    pub const fn with_up_angle(mut self, angle: f32) -> Self {
        self.up_angle = angle;
        self
    }

    /// Set the "down" angle threshold.
    ///
    /// # Arguments
    ///
    /// * `angle` - Threshold in degrees.
    ///
    /// # Returns
    ///
    /// * The modified `GymConfig`.
    #[must_use]
    pub const fn with_down_angle(mut self, angle: f32) -> Self {
        self.down_angle = angle;
        self
    }

    /// Set the overlay line width.
    #[must_use]
    pub const fn with_line_width(mut self, width: u32) -> Self {
        self.line_width = width;
        self
    }

    /// Set the exclusive upper bound on track ids.
    #[must_use]
    pub const fn with_max_identities(mut self, max: usize) -> Self {
        self.max_identities = max;
        self
    }

    /// Check that the thresholds form a valid hysteresis band.
    ///
    /// # Errors
    ///
    /// Returns [`GymError::ConfigError`] if either threshold is not finite,
    /// if `down_angle` is not strictly lower than `up_angle`, or if
    /// `max_identities` is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.up_angle.is_finite() || !self.down_angle.is_finite() {
            return Err(GymError::ConfigError(format!(
                "angle thresholds must be finite, got up_angle={} down_angle={}",
                self.up_angle, self.down_angle
            )));
        }
        if self.down_angle >= self.up_angle {
            return Err(GymError::ConfigError(format!(
                "down_angle ({}) must be lower than up_angle ({})",
                self.down_angle, self.up_angle
            )));
        }
        if self.max_identities == 0 {
            return Err(GymError::ConfigError(
                "max_identities must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = GymConfig::default();
        assert!((config.up_angle - 160.0).abs() < f32::EPSILON);
        assert!((config.down_angle - 90.0).abs() < f32::EPSILON);
        assert_eq!(config.line_width, 2);
        assert_eq!(config.max_identities, DEFAULT_MAX_IDENTITIES);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = GymConfig::new()
            .with_up_angle(150.0)
            .with_down_angle(70.0)
            .with_line_width(4)
            .with_max_identities(8);

        assert!((config.up_angle - 150.0).abs() < f32::EPSILON);
        assert!((config.down_angle - 70.0).abs() < f32::EPSILON);
        assert_eq!(config.line_width, 4);
        assert_eq!(config.max_identities, 8);
    }

    #[test]
    fn test_config_rejects_inverted_band() {
        let config = GymConfig::new().with_up_angle(90.0).with_down_angle(90.0);
        assert!(matches!(config.validate(), Err(GymError::ConfigError(_))));

        let config = GymConfig::new().with_up_angle(80.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_nan() {
        let config = GymConfig::new().with_down_angle(f32::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_zero_identities() {
        let config = GymConfig::new().with_max_identities(0);
        assert!(matches!(config.validate(), Err(GymError::ConfigError(_))));

        let config = GymConfig::new().with_line_width(u32::MAX).with_max_identities(1);
        assert!(config.validate().is_ok());
    }
}
