use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tailbound_core::constants::HISTOGRAM_WINDOW_SIGMAS;
use tailbound_core::{DerivedStats, SampleSet};

/// One integer-valued histogram bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Bin {
    /// The outcome (number of heads) this bin counts.
    pub value: u32,
    pub count: usize,
}

/// Histogram of trial outcomes over a μ ± 4.5σ window, clipped to [0, N].
///
/// Bins cover every integer in the window; outcomes outside it (a handful
/// per ten thousand trials at most) are not binned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Histogram {
    pub bins: Vec<Bin>,
    pub window_min: u32,
    pub window_max: u32,
    /// Largest single-bin count, for vertical scaling.
    pub max_count: usize,
}

impl Histogram {
    /// Bin a sample over the window around the mean.
    pub fn build(sample: &SampleSet, stats: &DerivedStats, coins: u32) -> Self {
        let half_width = HISTOGRAM_WINDOW_SIGMAS * stats.sigma;
        let window_min = (stats.mean - half_width).floor().max(0.0) as u32;
        let window_max = (((stats.mean + half_width).ceil()).max(0.0) as u32)
            .min(coins)
            .max(window_min);

        let mut bins: Vec<Bin> = (window_min..=window_max)
            .map(|value| Bin { value, count: 0 })
            .collect();
        for &outcome in sample.values() {
            if (window_min..=window_max).contains(&outcome) {
                bins[(outcome - window_min) as usize].count += 1;
            }
        }
        let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0);

        Histogram {
            bins,
            window_min,
            window_max,
            max_count,
        }
    }

    /// Total outcomes binned; at most the sample size.
    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}
