//! Streaming moving-average calculation over keyed observation series.
//!
//! A [`SlidingAverager`] maintains a bounded FIFO window of the most recent
//! observations and emits, for each input, a computed average associated
//! with a possibly-delayed output key. Supports uniform (arithmetic) and
//! per-position (weighted-arithmetic) averaging, warm-up handling while the
//! window fills, and an end-of-stream drain that flushes delayed outputs.
//!
//! Four entry points adapt the core to eager and lazy inputs and outputs:
//! [`compute_from_sequence`](SlidingAverager::compute_from_sequence),
//! [`stream_from_sequence`](SlidingAverager::stream_from_sequence),
//! [`compute_from_stream`](SlidingAverager::compute_from_stream), and
//! [`stream_from_stream`](SlidingAverager::stream_from_stream).

pub mod averager;
pub mod series;
pub mod series_key;
pub mod settings;
pub mod window;

mod adapters;

pub use averager::{AverageError, SlidingAverager};
pub use series::AverageSeries;
pub use series_key::SeriesKey;
pub use settings::{AverageMethod, AveragerSettings, ConfigError};
pub use window::SlidingWindow;
