//! Core sliding averager.
//!
//! Owns the two bounded FIFO windows (recent values, delayed output keys)
//! and the per-observation computation step. The batch and stream entry
//! points in [`crate::adapters`] drive this one observation at a time and
//! contain no averaging logic of their own.

use crate::series_key::SeriesKey;
use crate::settings::{AverageMethod, AveragerSettings, ConfigError};
use crate::window::SlidingWindow;
use std::fmt;
use tracing::trace;

/// Streaming moving-average calculator.
///
/// Maintains a sliding window of the most recent `period` observations and
/// emits, for each input, the window average paired with a possibly-delayed
/// output key. Absent observations (`None`) occupy a window slot without
/// contributing to the average; they age real data out of the window during
/// the end-of-stream drain.
///
/// The averager is stateful and single-pass: one instance processes one
/// logical stream at a time, through an exclusive reference. Reuse for a
/// second stream requires [`clear`](SlidingAverager::clear).
///
/// # Examples
/// ```
/// use sliding_average::{AverageMethod, SeriesKey, SlidingAverager};
///
/// let mut averager = SlidingAverager::new(AverageMethod::Arithmetic);
/// averager.set_period(3);
///
/// let ready = averager
///     .calculate_next(Some(20.0), SeriesKey::from("13:30"))
///     .unwrap();
/// assert_eq!(ready, Some((SeriesKey::from("13:30"), 20.0)));
/// ```
#[derive(Debug, Clone)]
pub struct SlidingAverager {
    settings: AveragerSettings,
    values: SlidingWindow<Option<f64>>,
    delayed_keys: SlidingWindow<SeriesKey>,
}

impl SlidingAverager {
    /// Creates an averager with the default window (period 1, delay 0,
    /// uniform weights). Both windows start empty.
    pub fn new(method: AverageMethod) -> Self {
        let settings = AveragerSettings::new(method);
        let values = SlidingWindow::new(settings.period());
        let delayed_keys = SlidingWindow::new(settings.delay());
        SlidingAverager {
            settings,
            values,
            delayed_keys,
        }
    }

    /// Creates an averager from a method name ("arithmetic" or
    /// "weighted_arithmetic").
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownMethod` for any other name.
    pub fn from_method_name(name: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(name.parse()?))
    }

    /// Returns the current configuration.
    pub fn settings(&self) -> &AveragerSettings {
        &self.settings
    }

    /// Sets the window capacity, rebuilding the (empty) value window.
    /// Auto-fills uniform weights when none are configured yet.
    pub fn set_period(&mut self, period: usize) {
        self.settings.set_period(period);
        self.values = SlidingWindow::new(period);
    }

    /// Sets the output delay, rebuilding the (empty) key-delay window.
    pub fn set_delay(&mut self, delay: usize) {
        self.settings.set_delay(delay);
        self.delayed_keys = SlidingWindow::new(delay);
    }

    /// Replaces the weight sequence outright (oldest → newest).
    pub fn set_weights(&mut self, weights: Vec<f64>) {
        self.settings.set_weights(weights);
    }

    /// Fills the weights with `period` copies of `weight`.
    pub fn set_uniform_weights(&mut self, weight: f64) {
        self.settings.set_uniform_weights(weight);
    }

    /// Returns true iff the configuration passes validation.
    pub fn is_valid(&self) -> bool {
        self.settings.is_valid()
    }

    /// Checks the configuration, failing on the first violation. Every
    /// processing entry point calls this before consuming input.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.settings.validate()
    }

    /// Clears both windows, leaving the configuration untouched. Required
    /// between two independent runs on the same instance.
    pub fn clear(&mut self) {
        self.values.clear();
        self.delayed_keys.clear();
    }

    /// Clears both windows and restores the default configuration
    /// (period 1, delay 0, weights empty).
    pub fn reset(&mut self) {
        self.settings.reset();
        self.values = SlidingWindow::new(self.settings.period());
        self.delayed_keys = SlidingWindow::new(self.settings.delay());
    }

    /// Advances the averager by one observation.
    ///
    /// Pushes `value` into the value window (evicting the oldest slot once
    /// over capacity), computes the average of the current window contents,
    /// then pushes `key` into the key-delay window. When the key window was
    /// already at capacity the oldest key pops out as the key whose average
    /// is now ready; the returned pair carries that key with the average
    /// computed in *this* call. Below capacity the output is still delayed
    /// and `None` is returned.
    ///
    /// # Errors
    /// `AverageError::DivisionByZero` when no present value (arithmetic) or
    /// no applicable weight (weighted) remains in the window.
    pub fn calculate_next(
        &mut self,
        value: Option<f64>,
        key: SeriesKey,
    ) -> Result<Option<(SeriesKey, f64)>, AverageError> {
        self.values.push(value);

        let average = match self.settings.method() {
            AverageMethod::Arithmetic => self.arithmetic_average()?,
            AverageMethod::WeightedArithmetic => self.weighted_average()?,
        };

        trace!(%key, average, window_len = self.values.len(), "calculated next average");

        Ok(self.delayed_keys.push(key).map(|ready| (ready, average)))
    }

    /// Flushes the delayed outputs after the last real observation.
    ///
    /// Runs the core step exactly `delay` more times, pushing the absence
    /// marker as the value (so the window ages out real data naturally) and
    /// a synthetic key tagged with the remaining delay count. Ready pairs
    /// come out in decreasing-remaining-delay order.
    pub fn drain(&mut self) -> Result<Vec<(SeriesKey, f64)>, AverageError> {
        let delay = self.settings.delay();
        let mut flushed = Vec::with_capacity(delay);

        for remaining in (1..=delay).rev() {
            if let Some(pair) = self.calculate_next(None, SeriesKey::Drain(remaining))? {
                flushed.push(pair);
            }
        }

        Ok(flushed)
    }

    /// Uniform mean over present values; absent slots contribute nothing to
    /// either side of the division.
    fn arithmetic_average(&self) -> Result<f64, AverageError> {
        let mut sum = 0.0;
        let mut count = 0_usize;

        for value in self.values.iter().flatten() {
            sum += value;
            count += 1;
        }

        if count == 0 {
            return Err(AverageError::DivisionByZero);
        }

        Ok(sum / count as f64)
    }

    /// Weighted mean over present values. While the window is warming up
    /// the weights are right-aligned to the current fill level, so the
    /// newest value always carries the last configured weight.
    fn weighted_average(&self) -> Result<f64, AverageError> {
        let weights = self.settings.weights();
        let offset = weights.len().saturating_sub(self.values.len());

        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for (position, value) in self.values.iter().enumerate() {
            if let Some(value) = value {
                let weight = *weights.get(offset + position).ok_or_else(|| {
                    AverageError::Config(ConfigError::WeightCountMismatch {
                        expected: self.settings.period(),
                        actual: weights.len(),
                    })
                })?;
                numerator += value * weight;
                denominator += weight;
            }
        }

        if denominator == 0.0 {
            return Err(AverageError::DivisionByZero);
        }

        Ok(numerator / denominator)
    }
}

/// Errors raised while processing observations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AverageError {
    /// Configuration rejected before or during processing
    Config(ConfigError),
    /// The average denominator (count of present values, or sum of
    /// applicable weights) is zero. A data condition, not a configuration
    /// error; propagates uncaught so a data problem is never masked by a
    /// substituted value.
    DivisionByZero,
}

impl fmt::Display for AverageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AverageError::Config(err) => write!(f, "Invalid configuration: {}", err),
            AverageError::DivisionByZero => {
                write!(f, "Average denominator is zero: window holds no present values")
            }
        }
    }
}

impl std::error::Error for AverageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AverageError::Config(err) => Some(err),
            AverageError::DivisionByZero => None,
        }
    }
}

impl From<ConfigError> for AverageError {
    fn from(err: ConfigError) -> Self {
        AverageError::Config(err)
    }
}
