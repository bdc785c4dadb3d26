use crate::error::{ConfigError, Result};
use crate::math::{CHANGE_TOLERANCE, DEGENERATE_EPSILON};

/// Tolerances controlling how markers snap and when they are replaced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapConfig {
    change_tolerance: f64,
    degenerate_epsilon: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            change_tolerance: CHANGE_TOLERANCE,
            degenerate_epsilon: DEGENERATE_EPSILON,
        }
    }
}

impl SnapConfig {
    /// Creates a new snap configuration.
    ///
    /// `change_tolerance` is the per-axis distance a marker must move before
    /// it is replaced. `degenerate_epsilon` is the squared edge length at or
    /// below which an edge collapses to its start vertex.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidConfig` if either value is negative or
    /// not finite.
    pub fn new(change_tolerance: f64, degenerate_epsilon: f64) -> Result<Self> {
        check_non_negative("change_tolerance", change_tolerance)?;
        check_non_negative("degenerate_epsilon", degenerate_epsilon)?;
        Ok(Self {
            change_tolerance,
            degenerate_epsilon,
        })
    }

    /// Returns the per-axis change tolerance.
    #[must_use]
    pub fn change_tolerance(&self) -> f64 {
        self.change_tolerance
    }

    /// Returns the degenerate-edge epsilon.
    #[must_use]
    pub fn degenerate_epsilon(&self) -> f64 {
        self.degenerate_epsilon
    }
}

fn check_non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidConfig(format!(
            "{name} must be finite and non-negative, got {value}"
        ))
        .into())
    }
}
