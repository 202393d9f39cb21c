use std::f64::consts::PI;

use super::{Cdf, Params, Sample, SupportInterval, Variant, LAMBDA, MU};
use crate::err::DistError;
use crate::rng::UniformSource;

/// Draws closer than this to 0.25 or 0.75 hit the tangent asymptotes and are redrawn.
const ASYMPTOTE_TOL: f64 = 0.0001;

#[derive(Debug, Clone, PartialEq)]
pub struct Cauchy {
    mu: f64,
    lambda: f64,
}

impl Cauchy {
    pub fn new(mu: f64, lambda: f64) -> Result<Cauchy, DistError> {
        if !mu.is_finite() || !lambda.is_finite() || lambda <= 0.0 {
            return Err(DistError::InvalidArgument(format!(
                "Cauchy requires a finite mu and lambda > 0, got mu={}, lambda={}",
                mu, lambda
            )));
        }
        Ok(Cauchy { mu, lambda })
    }

    pub(crate) fn from_parts(mu: f64, lambda: f64) -> Cauchy {
        Cauchy { mu, lambda }
    }

    pub(super) fn from_params(params: &Params) -> Result<Cauchy, DistError> {
        let mu = params.require(Variant::Cauchy, MU)?;
        let lambda = params.require(Variant::Cauchy, LAMBDA)?;
        Cauchy::new(mu, lambda)
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    #[inline]
    pub fn pdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return 0.0;
        }
        let d = x - self.mu;
        self.lambda / (PI * (self.lambda * self.lambda + d * d))
    }

    /// `mu ± sqrt(lambda (300 - lambda))`, collapses to `mu` once lambda exceeds 300.
    pub fn interval(&self) -> SupportInterval {
        let radius = (self.lambda * (300.0 - self.lambda)).max(0.0).sqrt();
        SupportInterval::around(self.mu, radius)
    }

    pub(super) fn params(&self) -> Params {
        Params::new().with(MU, self.mu).with(LAMBDA, self.lambda)
    }
}

impl Sample for Cauchy {
    /// Inverse transform on `tan(2 pi y)`.
    ///
    /// Loops until a draw lands away from both asymptotes. Every draw of the
    /// default source is accepted with probability close to 1, yet a source
    /// that keeps returning 0.25 or 0.75 would never terminate.
    fn sample<R: UniformSource + ?Sized>(&self, rng: &mut R) -> f64 {
        loop {
            let y = rng.next();
            if (y - 0.25).abs() > ASYMPTOTE_TOL && (y - 0.75).abs() > ASYMPTOTE_TOL {
                return self.mu + self.lambda * (2.0 * PI * y).tan();
            }
            log::trace!("cauchy: redrawing {} next to a tangent asymptote", y);
        }
    }
}

impl Cdf for Cauchy {
    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return 0.0;
        }
        0.5 + ((x - self.mu) / self.lambda).atan() / PI
    }
}
