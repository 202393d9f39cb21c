//! Uniform variates, the only source of randomness the samplers draw from.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;

/// Produces values uniformly distributed in `[0, 1)`.
///
/// Each call must return a fresh value independent of the previous ones.
pub trait UniformSource {
    fn next(&mut self) -> f64;

    /// A draw in `(0, 1)`, zeros are discarded and drawn again.
    ///
    /// Does not return for a source that only ever yields 0.
    fn next_pos(&mut self) -> f64 {
        loop {
            let v = self.next();
            if v > 0.0 {
                return v;
            }
            log::trace!("discarding zero uniform draw");
        }
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next(&mut self) -> f64 {
        (**self).next()
    }

    #[inline]
    fn next_pos(&mut self) -> f64 {
        (**self).next_pos()
    }
}

/// Number of equally likely increments the default source picks from.
const RESOLUTION: u32 = 1000;

/// Default source: returns `k / 1000` for `k` drawn uniformly from `1..1000`.
///
/// Zero is never produced, so samplers taking logarithms of a draw stay finite.
/// The source is not synchronized, use one instance per thread.
#[derive(Clone)]
pub struct MilliRng {
    inner: StdRng,
    cnt: usize,
}

impl MilliRng {
    /// A source seeded from the operating system entropy.
    pub fn new() -> MilliRng {
        MilliRng {
            inner: StdRng::from_entropy(),
            cnt: 0,
        }
    }

    /// A deterministic source, the sequence is fixed for a given seed.
    pub fn seeded(seed: u64) -> MilliRng {
        MilliRng {
            inner: StdRng::seed_from_u64(seed),
            cnt: 0,
        }
    }

    /// Uses the `RANDVAR_SEED` environment variable when it holds a valid seed.
    pub fn from_config() -> MilliRng {
        match Config::get().seed {
            Some(seed) => {
                log::debug!("seeding uniform source from config: {}", seed);
                MilliRng::seeded(seed)
            }
            None => MilliRng::new(),
        }
    }

    /// Number of values produced so far.
    pub fn draws(&self) -> usize {
        self.cnt
    }
}

impl Default for MilliRng {
    fn default() -> MilliRng {
        MilliRng::from_config()
    }
}

impl UniformSource for MilliRng {
    #[inline]
    fn next(&mut self) -> f64 {
        self.cnt += 1;
        f64::from(self.inner.gen_range(1..RESOLUTION)) / f64::from(RESOLUTION)
    }
}

impl fmt::Debug for MilliRng {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MilliRng {{ draws: {} }}", self.cnt)
    }
}

/// Replays a fixed list of draws in a loop.
///
/// Makes sampling fully deterministic, e.g. to force a sampler through a
/// particular branch.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    values: Vec<f64>,
    pos: usize,
    cnt: usize,
}

impl ReplaySource {
    /// Values outside `[0, 1)` are clamped into it; an empty list replays `0.0`.
    pub fn new<I: IntoIterator<Item = f64>>(values: I) -> ReplaySource {
        let values = values
            .into_iter()
            .map(|v| {
                if v.is_nan() || v < 0.0 {
                    0.0
                } else if v >= 1.0 {
                    1.0 - f64::EPSILON
                } else {
                    v
                }
            })
            .collect();
        ReplaySource {
            values,
            pos: 0,
            cnt: 0,
        }
    }

    pub fn draws(&self) -> usize {
        self.cnt
    }
}

impl UniformSource for ReplaySource {
    fn next(&mut self) -> f64 {
        self.cnt += 1;
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.pos];
        self.pos = (self.pos + 1) % self.values.len();
        v
    }
}
