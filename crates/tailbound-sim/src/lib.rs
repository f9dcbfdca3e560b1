//! # tailbound-sim
//!
//! Empirical sampler for sums of fair coin flips, plus histogram binning
//! over the sample window. Produces the "ground truth" the bound
//! evaluator compares against.

pub mod histogram;
pub mod sampler;

pub use histogram::{Bin, Histogram};
pub use sampler::CoinFlipSampler;
