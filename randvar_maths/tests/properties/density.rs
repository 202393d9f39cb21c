use randvar_maths::{catalog, Variant};

use super::{from_catalog, integrate, init_logger};

#[test]
fn continuous_densities_integrate_to_one() {
    init_logger();
    for dist in catalog::build() {
        let (low, high, step, tol) = match dist.variant() {
            Variant::Normal => (-10.0, 10.0, 1e-3, 1e-6),
            // heavy tails hold 2 atan(1/1e4) / pi ~ 6.4e-5 of the mass
            Variant::Cauchy => (-1.0e4, 1.0e4, 1e-2, 1e-3),
            Variant::Laplace => (-60.0, 60.0, 1e-3, 1e-5),
            Variant::Uniform => (-3.0, 3.0, 1e-4, 1e-3),
            Variant::Poisson => continue,
        };
        let total = integrate(|x| dist.density(x), low, high, step);
        assert!((total - 1.0).abs() < tol, "{} integrates to {}", dist, total);
    }
}

#[test]
fn poisson_mass_sums_to_one() {
    let poisson = from_catalog(Variant::Poisson);
    let total: f64 = (0..=100).map(|k| poisson.density(k as f64)).sum();
    assert!((total - 1.0).abs() < 1e-12);
}

#[test]
fn poisson_mass_constant_between_integers() {
    let poisson = from_catalog(Variant::Poisson);
    for k in 0..30 {
        let at = poisson.density(k as f64);
        for frac in &[0.1, 0.5, 0.99] {
            assert_eq!(poisson.density(k as f64 + frac), at);
        }
    }
}

#[test]
fn uniform_flat_density() {
    let uniform = from_catalog(Variant::Uniform);
    assert_eq!(uniform.density(0.0), 1.0 / (2.0 * 3f64.sqrt()));
}

#[test]
fn normal_keeps_unsquared_sigma() {
    let normal = from_catalog(Variant::Normal);
    let peak = 1.0 / (2.0 * std::f64::consts::PI).sqrt();
    assert!((normal.density(0.0) - peak).abs() < 1e-15);
    assert_eq!(normal.cumulative(1.0), 0.0);
}
