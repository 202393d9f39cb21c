use randvar_maths::{catalog, Variant};

use super::{from_catalog, grid, init_logger};

#[test]
fn non_decreasing_within_unit_interval() {
    init_logger();
    for dist in catalog::build() {
        let interval = dist.support_interval();
        let margin = 10.0 * interval.width();
        let mut prev = 0.0;
        for x in grid(interval.low - margin, interval.high + margin, 20_001) {
            let c = dist.cumulative(x);
            assert!((0.0..=1.0).contains(&c), "{} at {}: {}", dist, x, c);
            assert!(c >= prev, "{} decreases at {}", dist, x);
            prev = c;
        }
    }
}

#[test]
fn zero_below_domain() {
    let poisson = from_catalog(Variant::Poisson);
    assert_eq!(poisson.cumulative(-1.0), 0.0);
    assert_eq!(poisson.density(-1.0), 0.0);

    let uniform = from_catalog(Variant::Uniform);
    assert_eq!(uniform.cumulative(-10.0), 0.0);
    assert_eq!(uniform.density(-10.0), 0.0);
    assert_eq!(uniform.cumulative(10.0), 1.0);
}

#[test]
fn laplace_half_at_location() {
    let laplace = from_catalog(Variant::Laplace);
    assert_eq!(laplace.cumulative(0.0), 0.5);
}

#[test]
fn uniform_bounds() {
    let uniform = from_catalog(Variant::Uniform);
    let interval = uniform.support_interval();
    let sqrt3 = 3f64.sqrt();
    assert_eq!((interval.low, interval.high), (-sqrt3, sqrt3));
    assert_eq!(uniform.cumulative(interval.low), 0.0);
    assert_eq!(uniform.cumulative(interval.high), 1.0);
}

#[test]
fn cauchy_matches_closed_form() {
    let cauchy = from_catalog(Variant::Cauchy);
    assert_eq!(cauchy.cumulative(0.0), 0.5);
    assert!((cauchy.cumulative(1.0) - 0.75).abs() < 1e-12);
    assert!((cauchy.cumulative(-1.0) - 0.25).abs() < 1e-12);
}
