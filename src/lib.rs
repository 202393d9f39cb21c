//! Named probability distributions with samplers, density and cumulative
//! evaluation, and plotting windows.
//!
//! ```
//! use randvar::{catalog, sampling, MilliRng};
//!
//! let mut rng = MilliRng::seeded(7);
//! for dist in catalog::build() {
//!     let samples = sampling::collect(&dist, 100, &mut rng).unwrap();
//!     let window = dist.support_interval();
//!     println!("{}: {} samples, window [{}, {}]", dist, samples.len(), window.low, window.high);
//! }
//! ```

pub use randvar_maths::*;
