use tracing::{debug, trace};

use tailbound_core::constants::DEFAULT_TRIAL_COUNT;
use tailbound_core::traits::ISampler;
use tailbound_core::{ExperimentParams, SampleSet, TailboundResult};
use tailbound_sim::{CoinFlipSampler, Histogram};

use crate::catalog::BoundKind;
use crate::formula;
use crate::looseness::{Looseness, Verdict};
use crate::report::{BoundReport, Report};

/// Evaluation engine: owns the sampler and the current sample set.
///
/// The sample is regenerated only when `coins` or `roll` changes;
/// threshold and knowledge changes reuse it, so dragging the deviation
/// slider never re-rolls the experiment.
pub struct EvalEngine {
    sampler: Box<dyn ISampler>,
    trial_count: usize,
    cached: Option<CachedSample>,
}

struct CachedSample {
    coins: u32,
    roll: u64,
    sample: SampleSet,
}

impl EvalEngine {
    /// Engine with the coin-flip sampler and the default trial count.
    pub fn new() -> Self {
        Self::with_sampler(Box::new(CoinFlipSampler::new()))
    }

    /// Engine with a custom sampler (deterministic ones in tests).
    pub fn with_sampler(sampler: Box<dyn ISampler>) -> Self {
        EvalEngine {
            sampler,
            trial_count: DEFAULT_TRIAL_COUNT,
            cached: None,
        }
    }

    /// Override the trials per sample set.
    pub fn with_trial_count(mut self, trial_count: usize) -> Self {
        self.trial_count = trial_count;
        self
    }

    pub fn trial_count(&self) -> usize {
        self.trial_count
    }

    /// Evaluate the experiment: resample if needed, then compute the
    /// empirical tail, the histogram, and every bound's report.
    pub fn evaluate(&mut self, params: &ExperimentParams) -> TailboundResult<Report> {
        params.validate()?;
        let stats = params.derived();

        let stale = self
            .cached
            .as_ref()
            .map_or(true, |c| c.coins != params.coins || c.roll != params.roll);
        if stale {
            self.cached = None;
        }
        let sampler = &self.sampler;
        let trial_count = self.trial_count;
        let cached = self.cached.get_or_insert_with(|| {
            debug!(
                coins = params.coins,
                roll = params.roll,
                trials = trial_count,
                "regenerating sample set"
            );
            CachedSample {
                coins: params.coins,
                roll: params.roll,
                sample: sampler.sample(params.coins, trial_count),
            }
        });
        let sample = &cached.sample;

        let tail_count = sample.tail_count(stats.threshold);
        let empirical_tail = sample.empirical_tail(stats.threshold);
        let histogram = Histogram::build(sample, &stats, params.coins);

        let bounds = BoundKind::ALL
            .iter()
            .map(|&kind| {
                let value = formula::evaluate(kind, params.coins, stats.threshold);
                let active = params.knowledge.covers(kind.requires());
                let (looseness, verdict) = if active {
                    let looseness = Looseness::compare(value, empirical_tail);
                    (Some(looseness), Some(Verdict::classify(kind, looseness)))
                } else {
                    (None, None)
                };
                trace!(?kind, value, active, "bound evaluated");
                BoundReport {
                    kind,
                    value,
                    active,
                    looseness,
                    verdict,
                    working: formula::working(kind, params.coins, stats.threshold),
                }
            })
            .collect();

        Ok(Report {
            stats,
            trials: sample.len(),
            tail_count,
            empirical_tail,
            histogram,
            sample: sample.clone(),
            bounds,
        })
    }
}

impl Default for EvalEngine {
    fn default() -> Self {
        Self::new()
    }
}
