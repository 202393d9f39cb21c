use super::{Cdf, Params, Sample, SupportInterval, Variant, MU};
use crate::err::DistError;
use crate::rng::UniformSource;

/// Largest mean whose `exp(-mu)` is still a normal double; the mass
/// recurrences start from that term.
const MAX_MU: f64 = 700.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Poisson {
    mu: f64,
}

impl Poisson {
    pub fn new(mu: f64) -> Result<Poisson, DistError> {
        if !mu.is_finite() || !(0.0..=MAX_MU).contains(&mu) {
            return Err(DistError::InvalidArgument(format!(
                "Poisson requires 0 <= mu <= {}, got mu={}",
                MAX_MU, mu
            )));
        }
        Ok(Poisson { mu })
    }

    pub(crate) fn from_parts(mu: f64) -> Poisson {
        Poisson { mu }
    }

    pub(super) fn from_params(params: &Params) -> Result<Poisson, DistError> {
        let mu = params.require(Variant::Poisson, MU)?;
        Poisson::new(mu)
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Probability mass at `floor(x)`, 0 for negative `x`.
    pub fn pmf(&self, x: f64) -> f64 {
        if x.is_nan() || x < 0.0 || x.is_infinite() {
            return 0.0;
        }
        let n = x.floor() as u64;
        let mut v = (-self.mu).exp();
        for i in 1..=n {
            v *= self.mu / i as f64;
            if v == 0.0 {
                break;
            }
        }
        v
    }

    pub fn interval(&self) -> SupportInterval {
        SupportInterval::new(0.0, 3.0 * self.mu)
    }

    pub(super) fn params(&self) -> Params {
        Params::new().with(MU, self.mu)
    }
}

impl Sample for Poisson {
    /// Inverse transform over the mass function, accumulated term by term
    /// until the uniform draw is exhausted.
    fn sample<R: UniformSource + ?Sized>(&self, rng: &mut R) -> f64 {
        let mut p = (-self.mu).exp();
        let mut r = rng.next() - p;
        let mut x = 0u64;
        while r > 0.0 {
            x += 1;
            p *= self.mu / x as f64;
            if p == 0.0 {
                break;
            }
            r -= p;
        }
        x as f64
    }
}

impl Cdf for Poisson {
    /// Sums the mass of every count below `ceil(x)`, and at least the mass at 0.
    ///
    /// For a positive integer `x` the mass at `x` itself is left out.
    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() || x < 0.0 {
            return 0.0;
        }
        if x.is_infinite() {
            return 1.0;
        }
        let k = x.ceil() as u64;
        let mut v = (-self.mu).exp();
        let mut s = v;
        for i in 1..k {
            v *= self.mu / i as f64;
            if v == 0.0 {
                break;
            }
            s += v;
        }
        s.min(1.0)
    }
}
