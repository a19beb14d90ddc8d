//! Streams minute-keyed readings through a delayed averager and prints
//! each pair as its key becomes ready, including the end-of-stream drain.
//!
//! Run with: `cargo run --example delayed_stream`

use futures::{pin_mut, stream, StreamExt};
use sliding_average::{AverageMethod, SeriesKey, SlidingAverager};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let readings = vec![
        ("13:30", 20.0),
        ("13:31", 18.0),
        ("13:32", 24.0),
        ("13:33", 21.0),
        ("13:34", 19.0),
        ("13:35", 22.0),
    ];
    let source = stream::iter(
        readings
            .into_iter()
            .map(|(key, value)| (SeriesKey::from(key), Some(value))),
    );

    let mut averager = SlidingAverager::new(AverageMethod::Arithmetic);
    averager.set_period(3);
    averager.set_delay(1);

    println!("3-point centered average, delay 1:");
    let output = averager.stream_from_stream(source)?;
    pin_mut!(output);
    while let Some(pair) = output.next().await {
        let (key, average) = pair?;
        println!("  {} -> {:.3}", key, average);
    }

    Ok(())
}
