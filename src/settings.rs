use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Averaging method applied over the value window.
///
/// This is a closed enumeration: unknown method names are rejected at the
/// string boundary (`FromStr`) and cannot be represented afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AverageMethod {
    /// Uniform mean over present values
    Arithmetic,
    /// Per-position weights, oldest → newest
    WeightedArithmetic,
}

impl FromStr for AverageMethod {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "arithmetic" => Ok(AverageMethod::Arithmetic),
            "weighted_arithmetic" => Ok(AverageMethod::WeightedArithmetic),
            other => Err(ConfigError::UnknownMethod(other.to_string())),
        }
    }
}

impl fmt::Display for AverageMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AverageMethod::Arithmetic => write!(f, "arithmetic"),
            AverageMethod::WeightedArithmetic => write!(f, "weighted_arithmetic"),
        }
    }
}

/// Configuration for a [`SlidingAverager`](crate::SlidingAverager).
///
/// Settings are mutated through setters before a processing run and checked
/// as a whole by [`validate`](AveragerSettings::validate); individual
/// setters do not enforce cross-field constraints (delay ≤ period is only
/// meaningful once both are known).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AveragerSettings {
    method: AverageMethod,
    period: usize,
    delay: usize,
    weights: Vec<f64>,
}

impl AveragerSettings {
    /// Creates settings with the default window: period 1, delay 0,
    /// uniform weights.
    pub fn new(method: AverageMethod) -> Self {
        let mut settings = AveragerSettings {
            method,
            period: 1,
            delay: 0,
            weights: Vec::new(),
        };
        settings.set_period(1);
        settings
    }

    /// Sets the window capacity. When no weights are configured yet, fills
    /// them with `period` copies of 1.0 so the weighted method degenerates
    /// to the arithmetic one until real weights are supplied.
    pub fn set_period(&mut self, period: usize) {
        self.period = period;
        if self.weights.is_empty() {
            self.set_uniform_weights(1.0);
        }
    }

    /// Sets the output delay. The delay ≤ period constraint is checked by
    /// [`validate`](AveragerSettings::validate), not here.
    pub fn set_delay(&mut self, delay: usize) {
        self.delay = delay;
    }

    /// Replaces the weight sequence outright (oldest → newest). The caller
    /// is responsible for matching the period; mismatches are caught by
    /// [`validate`](AveragerSettings::validate).
    pub fn set_weights(&mut self, weights: Vec<f64>) {
        self.weights = weights;
    }

    /// Fills the weights with `period` copies of `weight`.
    pub fn set_uniform_weights(&mut self, weight: f64) {
        self.weights = vec![weight; self.period];
    }

    /// Restores the defaults: period 1, delay 0, weights empty. Note that
    /// empty weights leave the settings invalid until `set_period` or
    /// `set_weights` re-establishes them.
    pub fn reset(&mut self) {
        self.period = 1;
        self.delay = 0;
        self.weights.clear();
    }

    pub fn method(&self) -> AverageMethod {
        self.method
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn delay(&self) -> usize {
        self.delay
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Returns true iff period ≥ 1, delay ≤ period, and the weight count
    /// matches the period.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks the full configuration, failing on the first violation.
    /// Must pass before any processing run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.period < 1 {
            debug!(period = self.period, "invalid period");
            return Err(ConfigError::InvalidPeriod(self.period));
        }

        if self.delay > self.period {
            debug!(delay = self.delay, period = self.period, "delay exceeds period");
            return Err(ConfigError::DelayExceedsPeriod {
                delay: self.delay,
                period: self.period,
            });
        }

        if self.weights.len() != self.period {
            debug!(
                expected = self.period,
                actual = self.weights.len(),
                "weight count mismatch"
            );
            return Err(ConfigError::WeightCountMismatch {
                expected: self.period,
                actual: self.weights.len(),
            });
        }

        Ok(())
    }
}

/// Errors for invalid averager configuration.
///
/// Always surfaced to the caller before processing begins; never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Method name not recognized when constructing from a string
    UnknownMethod(String),
    /// Period below the minimum of 1
    InvalidPeriod(usize),
    /// Delay larger than the window capacity
    DelayExceedsPeriod { delay: usize, period: usize },
    /// Weight sequence length does not match the period
    WeightCountMismatch { expected: usize, actual: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownMethod(name) => {
                write!(f, "Unknown averaging method: {}", name)
            }
            ConfigError::InvalidPeriod(period) => {
                write!(f, "Period must be at least 1, got {}", period)
            }
            ConfigError::DelayExceedsPeriod { delay, period } => {
                write!(f, "Delay {} exceeds period {}", delay, period)
            }
            ConfigError::WeightCountMismatch { expected, actual } => {
                write!(
                    f,
                    "Expected {} weights to match the period, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_settings_are_valid() {
        let settings = AveragerSettings::new(AverageMethod::Arithmetic);

        assert_eq!(settings.period(), 1);
        assert_eq!(settings.delay(), 0);
        assert_eq!(settings.weights(), &[1.0]);
        assert!(settings.is_valid());
    }

    #[test]
    fn test_set_period_auto_fills_uniform_weights() {
        let mut settings = AveragerSettings::new(AverageMethod::WeightedArithmetic);
        settings.reset();
        settings.set_period(4);

        assert_eq!(settings.weights(), &[1.0, 1.0, 1.0, 1.0]);
        assert!(settings.is_valid());
    }

    #[test]
    fn test_set_period_keeps_explicit_weights() {
        let mut settings = AveragerSettings::new(AverageMethod::WeightedArithmetic);
        settings.set_weights(vec![1.0, 2.0, 3.0]);
        settings.set_period(3);

        assert_eq!(settings.weights(), &[1.0, 2.0, 3.0]);
        assert!(settings.is_valid());
    }

    #[test]
    fn test_validate_rejects_zero_period() {
        let mut settings = AveragerSettings::new(AverageMethod::Arithmetic);
        settings.set_weights(vec![]);
        settings.set_period(0);

        // set_period(0) refills zero weights, so the period check trips first
        assert_eq!(settings.validate(), Err(ConfigError::InvalidPeriod(0)));
    }

    #[test]
    fn test_validate_rejects_delay_over_period() {
        let mut settings = AveragerSettings::new(AverageMethod::Arithmetic);
        settings.set_period(3);
        settings.set_delay(4);

        assert_eq!(
            settings.validate(),
            Err(ConfigError::DelayExceedsPeriod {
                delay: 4,
                period: 3
            })
        );
    }

    #[test]
    fn test_validate_rejects_weight_count_mismatch() {
        let mut settings = AveragerSettings::new(AverageMethod::WeightedArithmetic);
        settings.set_period(3);
        settings.set_weights(vec![1.0, 2.0]);

        assert_eq!(
            settings.validate(),
            Err(ConfigError::WeightCountMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_reset_leaves_settings_invalid_until_reconfigured() {
        let mut settings = AveragerSettings::new(AverageMethod::Arithmetic);
        settings.set_period(5);
        settings.reset();

        assert_eq!(settings.period(), 1);
        assert_eq!(settings.delay(), 0);
        assert!(!settings.is_valid());

        settings.set_period(1);
        assert!(settings.is_valid());
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!(
            "arithmetic".parse::<AverageMethod>(),
            Ok(AverageMethod::Arithmetic)
        );
        assert_eq!(
            "weighted_arithmetic".parse::<AverageMethod>(),
            Ok(AverageMethod::WeightedArithmetic)
        );
        assert_eq!(
            "geometric".parse::<AverageMethod>(),
            Err(ConfigError::UnknownMethod("geometric".to_string()))
        );
    }

    #[test]
    fn test_method_display_round_trip() {
        for method in [AverageMethod::Arithmetic, AverageMethod::WeightedArithmetic] {
            let parsed: AverageMethod = method.to_string().parse().unwrap();
            assert_eq!(parsed, method);
        }
    }

    #[test]
    fn test_settings_serde_round_trip() {
        let mut settings = AveragerSettings::new(AverageMethod::WeightedArithmetic);
        settings.set_period(3);
        settings.set_weights(vec![1.0, 2.0, 3.0]);
        settings.set_delay(1);

        let json = serde_json::to_string(&settings).unwrap();
        let decoded: AveragerSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, settings);
    }
}
