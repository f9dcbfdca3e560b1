use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tailbound_core::KnowledgeFact;

/// The four tail inequalities, ordered by how much knowledge they consume.
///
/// A fixed strategy table: each kind carries static metadata and a pure
/// evaluation formula (see [`crate::formula`]), iterated generically by
/// the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum BoundKind {
    Markov,
    Chebyshev,
    ChernoffHoeffding,
    Talagrand,
}

impl BoundKind {
    pub const ALL: [BoundKind; 4] = [
        BoundKind::Markov,
        BoundKind::Chebyshev,
        BoundKind::ChernoffHoeffding,
        BoundKind::Talagrand,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            BoundKind::Markov => "Markov",
            BoundKind::Chebyshev => "Chebyshev",
            BoundKind::ChernoffHoeffding => "Chernoff–Hoeffding",
            BoundKind::Talagrand => "Talagrand",
        }
    }

    /// Year the inequality was published.
    pub fn year(self) -> u16 {
        match self {
            BoundKind::Markov => 1889,
            BoundKind::Chebyshev => 1867,
            BoundKind::ChernoffHoeffding => 1952,
            BoundKind::Talagrand => 1995,
        }
    }

    /// The inequality as stated.
    pub fn statement(self) -> &'static str {
        match self {
            BoundKind::Markov => "P(S ≥ t) ≤ E[S] / t",
            BoundKind::Chebyshev => "P(|S−μ| ≥ δ) ≤ σ² / δ²",
            BoundKind::ChernoffHoeffding => "P(S−μ ≥ δ) ≤ exp(−2δ²/N)",
            BoundKind::Talagrand => "P(f−E[f] ≥ δ) ≤ 4·exp(−δ²/N)",
        }
    }

    /// What the prover must assume for the bound to apply.
    pub fn assumptions(self) -> &'static str {
        match self {
            BoundKind::Markov => "Non-negative random variable, known mean",
            BoundKind::Chebyshev => "Known mean and variance",
            BoundKind::ChernoffHoeffding => "Independent summands, each bounded in [0,1]",
            BoundKind::Talagrand => "Product space, 1-Lipschitz function (not just sums)",
        }
    }

    /// What the bound teaches: why it gives the guarantee it does.
    pub fn explanation(self) -> &'static str {
        match self {
            BoundKind::Markov => {
                "Knows only the expected value. Cannot distinguish a concentrated \
                 distribution from a spread-out one. Gives polynomial 1/t decay."
            }
            BoundKind::Chebyshev => {
                "Adding variance knowledge gives quadratic decay. Still works for ANY \
                 distribution with finite variance, even heavy-tailed ones where \
                 Chernoff fails."
            }
            BoundKind::ChernoffHoeffding => {
                "The qualitative leap: exponential decay. By knowing the random choices \
                 are independent and bounded, the tail probability drops exponentially \
                 in δ². This is the workhorse of algorithm analysis."
            }
            BoundKind::Talagrand => {
                "For simple sums, Talagrand is looser than Chernoff; that's expected. \
                 Its power is that it works for ANY well-behaved function of many \
                 variables, not just sums. When you can't decompose your quantity as a \
                 sum, Talagrand is your tool."
            }
        }
    }

    /// Facts that must all be known for this bound to be active.
    pub fn requires(self) -> &'static [KnowledgeFact] {
        match self {
            BoundKind::Markov => &[KnowledgeFact::Mean],
            BoundKind::Chebyshev => &[KnowledgeFact::Mean, KnowledgeFact::Variance],
            BoundKind::ChernoffHoeffding => &[KnowledgeFact::Mean, KnowledgeFact::Independence],
            BoundKind::Talagrand => &[
                KnowledgeFact::Mean,
                KnowledgeFact::Independence,
                KnowledgeFact::Lipschitz,
            ],
        }
    }
}
