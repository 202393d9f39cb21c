//! Probability distributions, their samplers and evaluation functions for the `randvar` crate.
//!
//! Every sampler consumes draws from a [`UniformSource`]; pass a seeded
//! [`MilliRng`] for reproducible runs.

pub mod catalog;
pub mod dists;
pub mod sampling;

mod config;
mod err;
mod rng;

pub use crate::dists::{DistKind, Distribution, Params, SupportInterval, Variant};
pub use crate::err::DistError;
pub use crate::rng::{MilliRng, ReplaySource, UniformSource};

#[cfg(test)]
const FLOAT_EQ_ULPS: i64 = 2;
