use rand::Rng;

use tailbound_core::traits::ISampler;
use tailbound_core::SampleSet;

/// Samples sums of N independent fair coin flips with the thread-local RNG.
///
/// Each trial is a sum of N Bernoulli(½) draws, so long-run frequencies
/// converge to the binomial(N, ½) distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoinFlipSampler;

impl CoinFlipSampler {
    pub fn new() -> Self {
        CoinFlipSampler
    }
}

impl ISampler for CoinFlipSampler {
    fn sample(&self, coins: u32, trials: usize) -> SampleSet {
        let mut rng = rand::rng();
        let mut outcomes = Vec::with_capacity(trials);
        for _ in 0..trials {
            let mut sum = 0u32;
            for _ in 0..coins {
                if rng.random_bool(0.5) {
                    sum += 1;
                }
            }
            outcomes.push(sum);
        }
        SampleSet::new(outcomes)
    }
}
