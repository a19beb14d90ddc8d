//! Compares arithmetic and recency-weighted averages over the same input,
//! showing how the weight slice right-aligns while the window warms up.
//!
//! Run with: `cargo run --example weighted_warmup`

use sliding_average::{AverageMethod, SeriesKey, SlidingAverager};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let readings = [20.0, 18.0, 24.0, 21.0, 19.0];
    let input: Vec<_> = readings
        .iter()
        .enumerate()
        .map(|(i, value)| (SeriesKey::from(i as i64), Some(*value)))
        .collect();

    let mut uniform = SlidingAverager::new(AverageMethod::Arithmetic);
    uniform.set_period(3);
    let plain = uniform.compute_from_sequence(input.clone())?;

    let mut weighted = SlidingAverager::new(AverageMethod::WeightedArithmetic);
    weighted.set_period(3);
    weighted.set_weights(vec![1.0, 2.0, 3.0]);
    let recency = weighted.compute_from_sequence(input)?;

    println!("{:>6} {:>10} {:>10} {:>10}", "key", "value", "uniform", "weighted");
    for (i, value) in readings.iter().enumerate() {
        let key = SeriesKey::from(i as i64);
        println!(
            "{:>6} {:>10.2} {:>10.3} {:>10.3}",
            key.to_string(),
            value,
            plain.get(&key).unwrap_or(f64::NAN),
            recency.get(&key).unwrap_or(f64::NAN),
        );
    }

    Ok(())
}
