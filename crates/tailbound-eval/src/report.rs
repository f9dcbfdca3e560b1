use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tailbound_core::{DerivedStats, SampleSet};
use tailbound_sim::Histogram;

use crate::catalog::BoundKind;
use crate::looseness::{Looseness, Verdict};

/// One bound's evaluation against the current experiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BoundReport {
    pub kind: BoundKind,
    /// Guaranteed upper bound on the tail probability, in [0, 1].
    pub value: f64,
    /// Whether the current knowledge covers this bound's requirements.
    pub active: bool,
    /// Comparison against the empirical tail; only computed when active.
    pub looseness: Option<Looseness>,
    pub verdict: Option<Verdict>,
    /// Instantiated arithmetic, e.g. "E[S]/t = 50/60".
    pub working: String,
}

/// Full evaluation output: everything the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Report {
    pub stats: DerivedStats,
    /// Trials in the sample set (constant across re-rolls).
    pub trials: usize,
    /// Trials at or above the threshold.
    pub tail_count: usize,
    /// Empirical tail fraction, in [0, 1].
    pub empirical_tail: f64,
    pub histogram: Histogram,
    /// The sorted sample, for histogram-adjacent rendering.
    pub sample: SampleSet,
    /// One entry per bound kind, in `BoundKind::ALL` order.
    pub bounds: Vec<BoundReport>,
}
