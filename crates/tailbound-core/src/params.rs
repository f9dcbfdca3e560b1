use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{MAX_COINS, MAX_SIGMA_MULTIPLIER, MIN_COINS, MIN_SIGMA_MULTIPLIER};
use crate::errors::{TailboundError, TailboundResult};
use crate::knowledge::Knowledge;

/// Immutable experiment parameters passed into the pure core.
///
/// The presentation layer owns all mutable state; any change is expressed
/// as a fresh `ExperimentParams` value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ExperimentParams {
    /// Number of fair coins flipped per trial (N).
    pub coins: u32,
    /// Deviation threshold in units of σ above the mean (k ≥ 0).
    pub sigma_multiplier: f64,
    /// Opaque re-roll counter; bump to force a fresh sample set at the same N.
    pub roll: u64,
    /// Facts currently assumed known.
    pub knowledge: Knowledge,
}

impl Default for ExperimentParams {
    fn default() -> Self {
        ExperimentParams {
            coins: 100,
            sigma_multiplier: 2.0,
            roll: 0,
            knowledge: Knowledge::default(),
        }
    }
}

impl ExperimentParams {
    /// Check the UI-constrained ranges.
    pub fn validate(&self) -> TailboundResult<()> {
        if !(MIN_COINS..=MAX_COINS).contains(&self.coins) {
            return Err(TailboundError::CoinsOutOfRange {
                coins: self.coins,
                min: MIN_COINS,
                max: MAX_COINS,
            });
        }
        if !self.sigma_multiplier.is_finite() {
            return Err(TailboundError::SigmaMultiplierNotFinite {
                value: self.sigma_multiplier,
            });
        }
        if !(MIN_SIGMA_MULTIPLIER..=MAX_SIGMA_MULTIPLIER).contains(&self.sigma_multiplier) {
            return Err(TailboundError::SigmaMultiplierOutOfRange {
                value: self.sigma_multiplier,
                min: MIN_SIGMA_MULTIPLIER,
                max: MAX_SIGMA_MULTIPLIER,
            });
        }
        Ok(())
    }

    /// Statistics of the binomial(N, ½) sum, plus the derived threshold.
    pub fn derived(&self) -> DerivedStats {
        let n = f64::from(self.coins);
        let mean = n / 2.0;
        let variance = n / 4.0;
        let sigma = variance.sqrt();
        let delta = self.sigma_multiplier * sigma;
        DerivedStats {
            mean,
            variance,
            sigma,
            delta,
            threshold: mean + delta,
        }
    }
}

/// Closed-form statistics for a sum of N fair coin flips.
///
/// Invariant: `threshold == mean + delta` and `delta == k·sigma` with k ≥ 0,
/// so the threshold never falls below the mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DerivedStats {
    /// μ = N/2.
    pub mean: f64,
    /// σ² = N/4.
    pub variance: f64,
    /// σ = √N / 2.
    pub sigma: f64,
    /// δ = k·σ, the deviation above the mean.
    pub delta: f64,
    /// t = μ + δ.
    pub threshold: f64,
}
