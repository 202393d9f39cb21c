mod cumulative;
mod density;
mod sampling;

use randvar_maths::{catalog, Distribution, Variant};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn from_catalog(variant: Variant) -> Distribution {
    catalog::build()
        .into_iter()
        .find(|d| d.variant() == variant)
        .unwrap()
}

/// Evenly spaced points covering `[low, high]`.
fn grid(low: f64, high: f64, points: usize) -> impl Iterator<Item = f64> {
    let step = (high - low) / (points - 1) as f64;
    (0..points).map(move |i| low + step * i as f64)
}

/// Midpoint rule over `[low, high]`.
fn integrate<F: Fn(f64) -> f64>(f: F, low: f64, high: f64, step: f64) -> f64 {
    let n = ((high - low) / step).ceil() as usize;
    let h = (high - low) / n as f64;
    (0..n).map(|i| f(low + h * (i as f64 + 0.5)) * h).sum()
}
