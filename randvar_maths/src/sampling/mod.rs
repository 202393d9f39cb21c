//! Draw sample sets from a distribution.

use itertools::Itertools;

use crate::dists::Distribution;
use crate::err::DistError;
use crate::rng::UniformSource;

/// Draws `n` variates from `dist` and returns them in ascending order.
///
/// Repeated values, common for discrete distributions, are kept.
///
/// # Errors
/// Returns [`DistError::InvalidArgument`] if `n` is zero.
pub fn collect<R: UniformSource + ?Sized>(
    dist: &Distribution,
    n: usize,
    rng: &mut R,
) -> Result<Vec<f64>, DistError> {
    if n == 0 {
        return Err(DistError::InvalidArgument(
            "sample size must be positive".to_owned(),
        ));
    }
    let samples: Vec<f64> = (0..n)
        .map(|_| dist.sample(&mut *rng))
        .sorted_by(|a, b| a.total_cmp(b))
        .collect();
    log::debug!(
        "collected {} samples from {} in [{}, {}]",
        n,
        dist.name(),
        samples[0],
        samples[n - 1]
    );
    Ok(samples)
}
