//! Processing entry points.
//!
//! Four thin adapters over [`SlidingAverager::calculate_next`], one per
//! eager/lazy input × output combination. Each validates the settings
//! before consuming any input, feeds the averager one observation at a
//! time, forwards ready pairs, and drains the remaining delayed outputs
//! once the input is exhausted.

use crate::averager::{AverageError, SlidingAverager};
use crate::series::AverageSeries;
use crate::series_key::SeriesKey;
use crate::settings::ConfigError;
use async_stream::try_stream;
use futures::{pin_mut, Stream, StreamExt};
use tracing::debug;

impl SlidingAverager {
    /// Eager in, eager out: consumes the whole sequence and returns the
    /// ready pairs as an insertion-ordered series.
    pub fn compute_from_sequence<I>(&mut self, source: I) -> Result<AverageSeries, AverageError>
    where
        I: IntoIterator<Item = (SeriesKey, Option<f64>)>,
    {
        self.validate()?;
        debug!(
            period = self.settings().period(),
            delay = self.settings().delay(),
            method = %self.settings().method(),
            "computing averages from sequence"
        );

        let mut output = AverageSeries::new();
        for (key, value) in source {
            if let Some((ready, average)) = self.calculate_next(value, key)? {
                output.insert(ready, average);
            }
        }
        for (ready, average) in self.drain()? {
            output.insert(ready, average);
        }
        Ok(output)
    }

    /// Eager in, lazy out: pairs are yielded in the order their keys become
    /// ready. The stream is finite and single-pass; restarting a run
    /// requires [`clear`](SlidingAverager::clear) first.
    pub fn stream_from_sequence<I>(
        &mut self,
        source: I,
    ) -> Result<impl Stream<Item = Result<(SeriesKey, f64), AverageError>> + '_, ConfigError>
    where
        I: IntoIterator<Item = (SeriesKey, Option<f64>)>,
    {
        self.validate()?;
        let source: Vec<_> = source.into_iter().collect();

        Ok(try_stream! {
            for (key, value) in source {
                if let Some(pair) = self.calculate_next(value, key)? {
                    yield pair;
                }
            }
            for pair in self.drain()? {
                yield pair;
            }
        })
    }

    /// Lazy in, eager out: pulls the source stream to completion and
    /// returns the ready pairs as an insertion-ordered series.
    pub async fn compute_from_stream<S>(&mut self, source: S) -> Result<AverageSeries, AverageError>
    where
        S: Stream<Item = (SeriesKey, Option<f64>)>,
    {
        self.validate()?;
        debug!(
            period = self.settings().period(),
            delay = self.settings().delay(),
            method = %self.settings().method(),
            "computing averages from stream"
        );

        pin_mut!(source);
        let mut output = AverageSeries::new();
        while let Some((key, value)) = source.next().await {
            if let Some((ready, average)) = self.calculate_next(value, key)? {
                output.insert(ready, average);
            }
        }
        for (ready, average) in self.drain()? {
            output.insert(ready, average);
        }
        Ok(output)
    }

    /// Lazy in, lazy out: suspends at each pulled element and resumes on
    /// the next poll; a pure data-transform stream with no shared state.
    pub fn stream_from_stream<'a, S>(
        &'a mut self,
        source: S,
    ) -> Result<impl Stream<Item = Result<(SeriesKey, f64), AverageError>> + 'a, ConfigError>
    where
        S: Stream<Item = (SeriesKey, Option<f64>)> + 'a,
    {
        self.validate()?;

        Ok(try_stream! {
            pin_mut!(source);
            while let Some((key, value)) = source.next().await {
                if let Some(pair) = self.calculate_next(value, key)? {
                    yield pair;
                }
            }
            for pair in self.drain()? {
                yield pair;
            }
        })
    }
}
