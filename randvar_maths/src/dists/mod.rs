//! The closed family of distributions and the handle used to evaluate them.
//!
//! A [`Distribution`] pairs a display name with a [`DistKind`], a sum type over
//! the five supported variants. All operations dispatch on the kind.

mod cauchy;
mod laplace;
mod normal;
mod poisson;
mod uniform;

use std::collections::BTreeMap;
use std::fmt;
use std::iter::FromIterator;
use std::str::FromStr;

use crate::err::DistError;
use crate::rng::UniformSource;

pub use self::cauchy::Cauchy;
pub use self::laplace::Laplace;
pub use self::normal::Normal;
pub use self::poisson::Poisson;
pub use self::uniform::Uniform;

pub const MU: &str = "mu";
pub const SIGMA: &str = "sigma";
pub const LAMBDA: &str = "lambda";
pub const A: &str = "a";
pub const B: &str = "b";

/// Draw a random variate from a distribution.
pub trait Sample {
    fn sample<R: UniformSource + ?Sized>(&self, rng: &mut R) -> f64;
}

/// Compute the probability `P(X <= x)`.
pub trait Cdf {
    fn cdf(&self, x: f64) -> f64;
}

/// Tag of each supported distribution family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    Normal,
    Cauchy,
    Laplace,
    Poisson,
    Uniform,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Normal,
        Variant::Cauchy,
        Variant::Laplace,
        Variant::Poisson,
        Variant::Uniform,
    ];

    /// Parameter symbols that must be present to build this variant.
    pub fn required(self) -> &'static [&'static str] {
        match self {
            Variant::Normal => &[MU, SIGMA],
            Variant::Cauchy | Variant::Laplace => &[MU, LAMBDA],
            Variant::Poisson => &[MU],
            Variant::Uniform => &[A, B],
        }
    }

    pub fn is_discrete(self) -> bool {
        matches!(self, Variant::Poisson)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Variant::Normal => "Normal",
            Variant::Cauchy => "Cauchy",
            Variant::Laplace => "Laplace",
            Variant::Poisson => "Poisson",
            Variant::Uniform => "Uniform",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Variant {
    type Err = DistError;

    fn from_str(s: &str) -> Result<Variant, DistError> {
        Variant::ALL
            .iter()
            .copied()
            .find(|v| v.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DistError::UnknownVariant(s.to_owned()))
    }
}

/// Named parameter values used to build a distribution.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Params(BTreeMap<String, f64>);

impl Params {
    pub fn new() -> Params {
        Params(BTreeMap::new())
    }

    pub fn with(mut self, key: &str, value: f64) -> Params {
        self.0.insert(key.to_owned(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Fetch a required, finite parameter.
    pub(crate) fn require(&self, variant: Variant, key: &'static str) -> Result<f64, DistError> {
        let value = self
            .get(key)
            .ok_or(DistError::MissingParameter { variant, key })?;
        if !value.is_finite() {
            return Err(DistError::InvalidArgument(format!(
                "parameter `{}` of the {} distribution must be finite, got {}",
                key, variant, value
            )));
        }
        Ok(value)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Params {
        Params(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Finite window where the probability mass of a distribution is concentrated.
///
/// Used to frame plots and histograms, samples may still fall outside of it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SupportInterval {
    pub low: f64,
    pub high: f64,
}

impl SupportInterval {
    /// Callers guarantee `low <= high`.
    pub(crate) fn new(low: f64, high: f64) -> SupportInterval {
        debug_assert!(low <= high);
        SupportInterval { low, high }
    }

    /// Symmetric window of half-width `radius` around `center`.
    pub(crate) fn around(center: f64, radius: f64) -> SupportInterval {
        SupportInterval::new(center - radius, center + radius)
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.low && x <= self.high
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

impl From<SupportInterval> for (f64, f64) {
    fn from(interval: SupportInterval) -> (f64, f64) {
        (interval.low, interval.high)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DistKind {
    Normal(Normal),
    Cauchy(Cauchy),
    Laplace(Laplace),
    Poisson(Poisson),
    Uniform(Uniform),
}

impl DistKind {
    pub fn from_params(variant: Variant, params: &Params) -> Result<DistKind, DistError> {
        let kind = match variant {
            Variant::Normal => DistKind::Normal(Normal::from_params(params)?),
            Variant::Cauchy => DistKind::Cauchy(Cauchy::from_params(params)?),
            Variant::Laplace => DistKind::Laplace(Laplace::from_params(params)?),
            Variant::Poisson => DistKind::Poisson(Poisson::from_params(params)?),
            Variant::Uniform => DistKind::Uniform(Uniform::from_params(params)?),
        };
        Ok(kind)
    }

    pub fn variant(&self) -> Variant {
        match self {
            DistKind::Normal(_) => Variant::Normal,
            DistKind::Cauchy(_) => Variant::Cauchy,
            DistKind::Laplace(_) => Variant::Laplace,
            DistKind::Poisson(_) => Variant::Poisson,
            DistKind::Uniform(_) => Variant::Uniform,
        }
    }
}

/// A named, parameterized distribution.
///
/// Parameters are fixed at construction, the value can be shared freely
/// between threads; only the uniform source passed to [`Distribution::sample`]
/// is mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    name: String,
    kind: DistKind,
}

impl Distribution {
    /// Builds a distribution of the given variant, validating every required
    /// parameter up front.
    pub fn new<N: Into<String>>(
        name: N,
        variant: Variant,
        params: &Params,
    ) -> Result<Distribution, DistError> {
        let kind = DistKind::from_params(variant, params)?;
        Distribution::with_kind(name, kind)
    }

    pub fn with_kind<N: Into<String>>(name: N, kind: DistKind) -> Result<Distribution, DistError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DistError::InvalidArgument(
                "distribution name must not be empty".to_owned(),
            ));
        }
        Ok(Distribution { name, kind })
    }

    pub(crate) fn named(name: &'static str, kind: DistKind) -> Distribution {
        Distribution {
            name: name.to_owned(),
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &DistKind {
        &self.kind
    }

    pub fn variant(&self) -> Variant {
        self.kind.variant()
    }

    pub fn parameters(&self) -> Params {
        match &self.kind {
            DistKind::Normal(d) => d.params(),
            DistKind::Cauchy(d) => d.params(),
            DistKind::Laplace(d) => d.params(),
            DistKind::Poisson(d) => d.params(),
            DistKind::Uniform(d) => d.params(),
        }
    }

    /// Draws one variate, consuming as many uniform values as the family's
    /// algorithm needs.
    pub fn sample<R: UniformSource + ?Sized>(&self, rng: &mut R) -> f64 {
        match &self.kind {
            DistKind::Normal(d) => d.sample(rng),
            DistKind::Cauchy(d) => d.sample(rng),
            DistKind::Laplace(d) => d.sample(rng),
            DistKind::Poisson(d) => d.sample(rng),
            DistKind::Uniform(d) => d.sample(rng),
        }
    }

    /// Probability density, or probability mass for discrete variants.
    pub fn density(&self, x: f64) -> f64 {
        match &self.kind {
            DistKind::Normal(d) => d.pdf(x),
            DistKind::Cauchy(d) => d.pdf(x),
            DistKind::Laplace(d) => d.pdf(x),
            DistKind::Poisson(d) => d.pmf(x),
            DistKind::Uniform(d) => d.pdf(x),
        }
    }

    pub fn cumulative(&self, x: f64) -> f64 {
        match &self.kind {
            DistKind::Normal(d) => d.cdf(x),
            DistKind::Cauchy(d) => d.cdf(x),
            DistKind::Laplace(d) => d.cdf(x),
            DistKind::Poisson(d) => d.cdf(x),
            DistKind::Uniform(d) => d.cdf(x),
        }
    }

    pub fn support_interval(&self) -> SupportInterval {
        match &self.kind {
            DistKind::Normal(d) => d.interval(),
            DistKind::Cauchy(d) => d.interval(),
            DistKind::Laplace(d) => d.interval(),
            DistKind::Poisson(d) => d.interval(),
            DistKind::Uniform(d) => d.interval(),
        }
    }

    pub fn is_discrete(&self) -> bool {
        self.variant().is_discrete()
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, (key, value)) in self.parameters().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        write!(f, ")")
    }
}
