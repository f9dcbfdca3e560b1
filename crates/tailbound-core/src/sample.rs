use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Sorted outcomes of repeated coin-flip trials.
///
/// Immutable once produced; a change of N or a re-roll replaces the whole
/// set rather than mutating it in place. Values are ascending, which makes
/// tail counting a binary search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SampleSet {
    values: Vec<u32>,
}

impl SampleSet {
    /// Build a sample set from raw trial outcomes, sorting ascending.
    pub fn new(mut values: Vec<u32>) -> Self {
        values.sort_unstable();
        SampleSet { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The sorted outcomes.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Number of outcomes at or above `threshold` (inclusive).
    pub fn tail_count(&self, threshold: f64) -> usize {
        let below = self.values.partition_point(|&v| f64::from(v) < threshold);
        self.values.len() - below
    }

    /// Fraction of outcomes at or above `threshold`, in [0, 1].
    /// An empty set has an empirical tail of 0.
    pub fn empirical_tail(&self, threshold: f64) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.tail_count(threshold) as f64 / self.values.len() as f64
    }
}
