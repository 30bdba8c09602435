//! Annealing configuration.

use crate::error::{Result, ScheduleError};

/// Configuration for an annealing run.
///
/// # Examples
///
/// ```
/// use match_schedule::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(500.0)
///     .with_max_steps(20_000)
///     .with_history_interval(1_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealConfig {
    /// Starting temperature. Zero makes the run a pure descent.
    pub initial_temperature: f64,

    /// Number of swap steps. Zero leaves the schedule untouched.
    pub max_steps: usize,

    /// Record the best cost every this many steps. 0 = only first and last.
    pub history_interval: usize,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            max_steps: 10_000,
            history_interval: 100,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::Configuration`] if the temperature is negative or
    /// not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.initial_temperature.is_finite() {
            return Err(ScheduleError::configuration(format!(
                "initial_temperature must be finite, got {}",
                self.initial_temperature
            )));
        }
        if self.initial_temperature < 0.0 {
            return Err(ScheduleError::configuration(format!(
                "initial_temperature must be non-negative, got {}",
                self.initial_temperature
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert!((config.initial_temperature - 1000.0).abs() < 1e-10);
        assert_eq!(config.max_steps, 10_000);
        assert_eq!(config.history_interval, 100);
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate().is_ok());
        assert!(AnnealConfig::default()
            .with_initial_temperature(0.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_negative_temperature() {
        let config = AnnealConfig::default().with_initial_temperature(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_non_finite_temperature() {
        assert!(AnnealConfig::default()
            .with_initial_temperature(f64::NAN)
            .validate()
            .is_err());
        assert!(AnnealConfig::default()
            .with_initial_temperature(f64::INFINITY)
            .validate()
            .is_err());
    }
}
