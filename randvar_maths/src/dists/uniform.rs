use super::{Cdf, Params, Sample, SupportInterval, Variant, A, B};
use crate::err::DistError;
use crate::rng::UniformSource;

/// Continuous uniform distribution on `[a, b]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Uniform {
    a: f64,
    b: f64,
}

impl Uniform {
    pub fn new(a: f64, b: f64) -> Result<Uniform, DistError> {
        if !a.is_finite() || !b.is_finite() || a >= b {
            return Err(DistError::InvalidArgument(format!(
                "Uniform requires a < b, got a={}, b={}",
                a, b
            )));
        }
        Ok(Uniform { a, b })
    }

    pub(crate) fn from_parts(a: f64, b: f64) -> Uniform {
        Uniform { a, b }
    }

    pub(super) fn from_params(params: &Params) -> Result<Uniform, DistError> {
        let a = params.require(Variant::Uniform, A)?;
        let b = params.require(Variant::Uniform, B)?;
        Uniform::new(a, b)
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    #[inline]
    pub fn pdf(&self, x: f64) -> f64 {
        if x.is_nan() || x < self.a || x > self.b {
            0.0
        } else {
            1.0 / (self.b - self.a)
        }
    }

    pub fn interval(&self) -> SupportInterval {
        SupportInterval::new(self.a, self.b)
    }

    pub(super) fn params(&self) -> Params {
        Params::new().with(A, self.a).with(B, self.b)
    }
}

impl Sample for Uniform {
    #[inline]
    fn sample<R: UniformSource + ?Sized>(&self, rng: &mut R) -> f64 {
        self.a + (self.b - self.a) * rng.next()
    }
}

impl Cdf for Uniform {
    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() || x < self.a {
            0.0
        } else if x > self.b {
            1.0
        } else {
            (x - self.a) / (self.b - self.a)
        }
    }
}
