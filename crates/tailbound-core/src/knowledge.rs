use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::params::DerivedStats;

/// A fact the prover is assumed to know about the random sum.
/// Each bound is unlocked by a specific subset of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum KnowledgeFact {
    Mean,
    Variance,
    Independence,
    Lipschitz,
}

impl KnowledgeFact {
    pub const ALL: [KnowledgeFact; 4] = [
        KnowledgeFact::Mean,
        KnowledgeFact::Variance,
        KnowledgeFact::Independence,
        KnowledgeFact::Lipschitz,
    ];

    /// Short label for toggles.
    pub fn label(self) -> &'static str {
        match self {
            KnowledgeFact::Mean => "Mean",
            KnowledgeFact::Variance => "Variance",
            KnowledgeFact::Independence => "Independence",
            KnowledgeFact::Lipschitz => "Lipschitz structure",
        }
    }

    /// Caption instantiated with the current statistics, e.g. "E[S] = 50".
    pub fn detail(self, stats: &DerivedStats) -> String {
        match self {
            KnowledgeFact::Mean => format!("E[S] = {:.0}", stats.mean),
            KnowledgeFact::Variance => format!("σ² = {:.1}", stats.variance),
            KnowledgeFact::Independence => "Flips are independent".to_string(),
            KnowledgeFact::Lipschitz => "Sum is 1-Lipschitz".to_string(),
        }
    }

    /// Which bound this fact is the distinguishing requirement for,
    /// as shown in the toggle captions ("powers ...").
    pub fn unlocks(self) -> &'static str {
        match self {
            KnowledgeFact::Mean => "All",
            KnowledgeFact::Variance => "Chebyshev",
            KnowledgeFact::Independence => "Chernoff",
            KnowledgeFact::Lipschitz => "Talagrand",
        }
    }
}

/// Which facts the user currently "has".
/// A bound is active only when all of its required facts are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Knowledge {
    pub mean: bool,
    pub variance: bool,
    pub independence: bool,
    pub lipschitz: bool,
}

impl Knowledge {
    /// No facts known; every bound is unavailable.
    pub const NONE: Knowledge = Knowledge {
        mean: false,
        variance: false,
        independence: false,
        lipschitz: false,
    };

    pub fn knows(self, fact: KnowledgeFact) -> bool {
        match fact {
            KnowledgeFact::Mean => self.mean,
            KnowledgeFact::Variance => self.variance,
            KnowledgeFact::Independence => self.independence,
            KnowledgeFact::Lipschitz => self.lipschitz,
        }
    }

    /// True when every fact in `facts` is known.
    pub fn covers(self, facts: &[KnowledgeFact]) -> bool {
        facts.iter().all(|&f| self.knows(f))
    }

    /// Copy with one fact toggled to `known`.
    pub fn with(self, fact: KnowledgeFact, known: bool) -> Self {
        let mut next = self;
        match fact {
            KnowledgeFact::Mean => next.mean = known,
            KnowledgeFact::Variance => next.variance = known,
            KnowledgeFact::Independence => next.independence = known,
            KnowledgeFact::Lipschitz => next.lipschitz = known,
        }
        next
    }
}

impl Default for Knowledge {
    /// All facts known.
    fn default() -> Self {
        Knowledge {
            mean: true,
            variance: true,
            independence: true,
            lipschitz: true,
        }
    }
}
