use crate::sample::SampleSet;

/// Source of simulated coin-flip trials.
///
/// The evaluation engine depends on this seam so tests can inject
/// deterministic samplers.
pub trait ISampler: Send + Sync {
    /// Run `trials` independent trials of `coins` fair flips each and
    /// return the sorted outcomes. `coins = 0` yields all-zero sums.
    fn sample(&self, coins: u32, trials: usize) -> SampleSet;
}
