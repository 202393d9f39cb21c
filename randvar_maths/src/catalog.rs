//! The fixed set of distributions offered to the embedding application.

use crate::dists::{Cauchy, DistKind, Distribution, Laplace, Normal, Poisson, Uniform};

/// One instance of every supported family with its default parameters,
/// in display order:
///
/// | name    | parameters            |
/// |---------|-----------------------|
/// | Normal  | mu = 0, sigma = 1     |
/// | Cauchy  | mu = 0, lambda = 1    |
/// | Laplace | mu = 0, lambda = 2^-½ |
/// | Poisson | mu = 10               |
/// | Uniform | a = -√3, b = √3       |
pub fn build() -> Vec<Distribution> {
    let sqrt3 = 3f64.sqrt();
    let dists = vec![
        Distribution::named("Normal", DistKind::Normal(Normal::from_parts(0.0, 1.0))),
        Distribution::named("Cauchy", DistKind::Cauchy(Cauchy::from_parts(0.0, 1.0))),
        Distribution::named(
            "Laplace",
            DistKind::Laplace(Laplace::from_parts(0.0, 2f64.powf(-0.5))),
        ),
        Distribution::named("Poisson", DistKind::Poisson(Poisson::from_parts(10.0))),
        Distribution::named(
            "Uniform",
            DistKind::Uniform(Uniform::from_parts(-sqrt3, sqrt3)),
        ),
    ];
    log::debug!("built catalog with {} distributions", dists.len());
    dists
}
