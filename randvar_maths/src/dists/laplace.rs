use super::{Cdf, Params, Sample, SupportInterval, Variant, LAMBDA, MU};
use crate::err::DistError;
use crate::rng::UniformSource;

/// Density level at which the support interval is cut.
const INTERVAL_DENSITY: f64 = 0.002;

#[derive(Debug, Clone, PartialEq)]
pub struct Laplace {
    mu: f64,
    lambda: f64,
}

impl Laplace {
    pub fn new(mu: f64, lambda: f64) -> Result<Laplace, DistError> {
        if !mu.is_finite() || !lambda.is_finite() || lambda <= 0.0 {
            return Err(DistError::InvalidArgument(format!(
                "Laplace requires a finite mu and lambda > 0, got mu={}, lambda={}",
                mu, lambda
            )));
        }
        Ok(Laplace { mu, lambda })
    }

    pub(crate) fn from_parts(mu: f64, lambda: f64) -> Laplace {
        Laplace { mu, lambda }
    }

    pub(super) fn from_params(params: &Params) -> Result<Laplace, DistError> {
        let mu = params.require(Variant::Laplace, MU)?;
        let lambda = params.require(Variant::Laplace, LAMBDA)?;
        Laplace::new(mu, lambda)
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
        0.5 * self.lambda * (-self.lambda * (x - self.mu).abs()).exp()
    }

    /// `mu ± -ln(0.002 / lambda) / lambda`, never narrower than the mode itself.
    pub fn interval(&self) -> SupportInterval {
        let radius = (-(INTERVAL_DENSITY / self.lambda).ln() / self.lambda).max(0.0);
        SupportInterval::around(self.mu, radius)
    }

    pub(super) fn params(&self) -> Params {
        Params::new().with(MU, self.mu).with(LAMBDA, self.lambda)
    }
}

impl Sample for Laplace {
    /// The log-ratio of two independent uniforms is a standard Laplace variate.
    ///
    /// Both draws must be positive for the logarithm to stay finite.
    #[inline]
    fn sample<R: UniformSource + ?Sized>(&self, rng: &mut R) -> f64 {
        let num = rng.next_pos();
        let den = rng.next_pos();
        self.mu + (num / den).ln() / self.lambda
    }
}

impl Cdf for Laplace {
    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            0.0
        } else if x < self.mu {
            0.5 * (self.lambda * (x - self.mu)).exp()
        } else {
            1.0 - 0.5 * (-self.lambda * (x - self.mu)).exp()
        }
    }
}
