use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::BoundKind;

/// How a bound's guarantee compares to the empirical truth.
///
/// No bound is ever "violated": all four are valid upper bounds of the
/// true binomial tail, so the comparison is purely diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "ratio", rename_all = "lowercase")]
#[ts(export)]
pub enum Looseness {
    /// bound / empirical tail, when the empirical tail is positive.
    Ratio(f64),
    /// Positive bound against an empirical tail of zero.
    Infinite,
    /// Bound and empirical tail both zero: the guarantee is exact.
    Exact,
}

impl Looseness {
    /// Compare a bound value against the empirical tail fraction.
    pub fn compare(bound: f64, empirical_tail: f64) -> Self {
        if empirical_tail > 0.0 {
            Looseness::Ratio(bound / empirical_tail)
        } else if bound > 0.0 {
            Looseness::Infinite
        } else {
            Looseness::Exact
        }
    }

    /// The ratio as a float: `Infinite` maps to `f64::INFINITY`, `Exact` to 1.
    pub fn as_f64(self) -> f64 {
        match self {
            Looseness::Ratio(r) => r,
            Looseness::Infinite => f64::INFINITY,
            Looseness::Exact => 1.0,
        }
    }
}

/// Qualitative tightness classification, tiered per bound.
///
/// Each inequality gets its own cutoffs: a 20× Markov bound is business as
/// usual while a 20× Chernoff bound is a disappointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Verdict {
    Tight,
    Useful,
    Loose,
}

impl Verdict {
    /// Per-bound (useful, loose) ratio cutoffs.
    fn cutoffs(kind: BoundKind) -> (f64, f64) {
        match kind {
            BoundKind::Markov => (5.0, 50.0),
            BoundKind::Chebyshev => (3.0, 20.0),
            BoundKind::ChernoffHoeffding => (2.0, 10.0),
            BoundKind::Talagrand => (3.0, 20.0),
        }
    }

    /// Classify a looseness measurement for the given bound.
    pub fn classify(kind: BoundKind, looseness: Looseness) -> Self {
        match looseness {
            Looseness::Exact => Verdict::Tight,
            Looseness::Infinite => Verdict::Loose,
            Looseness::Ratio(ratio) => {
                let (useful, loose) = Verdict::cutoffs(kind);
                if ratio > loose {
                    Verdict::Loose
                } else if ratio > useful {
                    Verdict::Useful
                } else {
                    Verdict::Tight
                }
            }
        }
    }
}

/// Tiered commentary for the presentation layer.
pub fn insight(kind: BoundKind, verdict: Verdict) -> &'static str {
    match (kind, verdict) {
        (BoundKind::Markov, Verdict::Loose) => {
            "Essentially useless: might as well say 'it could happen.'"
        }
        (BoundKind::Markov, Verdict::Useful) => {
            "Very loose. A valid guarantee, but not a useful one."
        }
        (BoundKind::Markov, Verdict::Tight) => {
            "Surprisingly decent here, but only because the threshold is close to the mean."
        }
        (BoundKind::Chebyshev, Verdict::Loose) => {
            "Still quite loose. Variance alone doesn't capture the full shape."
        }
        (BoundKind::Chebyshev, Verdict::Useful) => {
            "Respectable. Often 'good enough' for a quick argument."
        }
        (BoundKind::Chebyshev, Verdict::Tight) => {
            "Surprisingly tight! The distribution isn't far from Chebyshev's worst case."
        }
        (BoundKind::ChernoffHoeffding, Verdict::Loose) => {
            "Loose here, likely because the deviation is small relative to N."
        }
        (BoundKind::ChernoffHoeffding, Verdict::Useful) => {
            "Within an order of magnitude. A genuinely useful guarantee."
        }
        (BoundKind::ChernoffHoeffding, Verdict::Tight) => {
            "Very tight! For sums of independent bounded variables, Chernoff is hard to beat."
        }
        (BoundKind::Talagrand, Verdict::Loose) => {
            "Loose for sums, but Talagrand isn't designed for sums; it handles far richer quantities."
        }
        (BoundKind::Talagrand, Verdict::Useful) => {
            "Decent, considering this bound works for any Lipschitz function, not just sums."
        }
        (BoundKind::Talagrand, Verdict::Tight) => {
            "Tight! A case where the sum structure doesn't help much beyond Lipschitz."
        }
    }
}
