use randvar_maths::sampling::collect;
use randvar_maths::{catalog, DistError, Distribution, MilliRng, ReplaySource, Variant};

use super::{from_catalog, init_logger};

#[test]
fn collect_sorts_every_variant() {
    init_logger();
    let mut rng = MilliRng::seeded(2021);
    for dist in catalog::build() {
        let samples = collect(&dist, 5, &mut rng).unwrap();
        assert_eq!(samples.len(), 5);
        assert!(samples.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn collect_rejects_empty_request() {
    let mut rng = MilliRng::seeded(0);
    for dist in catalog::build() {
        assert!(matches!(
            collect(&dist, 0, &mut rng),
            Err(DistError::InvalidArgument(_))
        ));
    }
}

#[test]
fn uniform_samples_stay_in_bounds() {
    let uniform = from_catalog(Variant::Uniform);
    let interval = uniform.support_interval();
    let mut rng = MilliRng::seeded(3);
    let samples = collect(&uniform, 10_000, &mut rng).unwrap();
    assert!(samples.iter().all(|x| interval.contains(*x)));
}

#[test]
fn poisson_empirical_mean() {
    let poisson = from_catalog(Variant::Poisson);
    let mut rng = MilliRng::seeded(11);
    let samples = collect(&poisson, 10_000, &mut rng).unwrap();
    assert!(samples.iter().all(|x| x.fract() == 0.0 && *x >= 0.0));
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    assert!((mean - 10.0).abs() < 1.0, "mean {}", mean);
}

#[test]
fn normal_samples_center_on_mu() {
    let normal = from_catalog(Variant::Normal);
    let mut rng = MilliRng::seeded(5);
    let samples = collect(&normal, 10_000, &mut rng).unwrap();
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    assert!(mean.abs() < 0.1, "mean {}", mean);
    // twelve draws of at most 0.999 bound every variate
    assert!(samples.iter().all(|x| x.abs() < 6.0));
}

#[test]
fn cauchy_redraws_at_asymptote() {
    let cauchy = from_catalog(Variant::Cauchy);
    for forced in &[0.25, 0.75] {
        let mut rng = ReplaySource::new(vec![*forced, 0.5]);
        let x = cauchy.sample(&mut rng);
        assert_eq!(rng.draws(), 2);
        assert!(x.abs() < 1e-12);
    }
}

#[test]
fn distributions_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Distribution>();

    let dists = catalog::build();
    std::thread::scope(|s| {
        for dist in &dists {
            s.spawn(move || {
                let mut rng = MilliRng::seeded(9);
                collect(dist, 100, &mut rng).unwrap()
            });
        }
    });
}

#[test]
fn laplace_finite_with_zero_draws() {
    let laplace = from_catalog(Variant::Laplace);
    let mut rng = ReplaySource::new(vec![0.0, 0.5, 0.0, 0.0, 0.9]);
    let samples = collect(&laplace, 50, &mut rng).unwrap();
    assert!(samples.iter().all(|x| x.is_finite()));
}
