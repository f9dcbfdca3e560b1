use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tailbound_core::traits::ISampler;
use tailbound_core::{ExperimentParams, Knowledge, KnowledgeFact, SampleSet};
use tailbound_eval::{BoundKind, EvalEngine, Looseness, Verdict};

/// Deterministic sampler: always returns the same outcomes, counting calls.
struct FixedSampler {
    outcomes: Vec<u32>,
    calls: Arc<AtomicUsize>,
}

impl FixedSampler {
    fn new(outcomes: Vec<u32>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            FixedSampler {
                outcomes,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl ISampler for FixedSampler {
    fn sample(&self, _coins: u32, _trials: usize) -> SampleSet {
        self.calls.fetch_add(1, Ordering::SeqCst);
        SampleSet::new(self.outcomes.clone())
    }
}

fn engine_over(outcomes: Vec<u32>) -> (EvalEngine, Arc<AtomicUsize>) {
    let trials = outcomes.len();
    let (sampler, calls) = FixedSampler::new(outcomes);
    let engine = EvalEngine::with_sampler(Box::new(sampler)).with_trial_count(trials);
    (engine, calls)
}

// ── Report assembly ──────────────────────────────────────────────────────

#[test]
fn report_combines_sample_statistics_and_bounds() {
    // 10 outcomes, 2 of them ≥ 60.
    let (mut engine, _) = engine_over(vec![40, 45, 48, 50, 50, 52, 55, 58, 61, 70]);
    let params = ExperimentParams {
        coins: 100,
        sigma_multiplier: 2.0,
        ..ExperimentParams::default()
    };
    let report = engine.evaluate(&params).unwrap();

    assert_eq!(report.stats.threshold, 60.0);
    assert_eq!(report.trials, 10);
    assert_eq!(report.tail_count, 2);
    assert_eq!(report.empirical_tail, 0.2);
    assert_eq!(report.sample.len(), 10);

    let kinds: Vec<BoundKind> = report.bounds.iter().map(|b| b.kind).collect();
    assert_eq!(kinds, BoundKind::ALL.to_vec());

    let markov = &report.bounds[0];
    assert!(markov.active);
    assert!((markov.value - 50.0 / 60.0).abs() < 1e-12);
    assert_eq!(
        markov.looseness,
        Some(Looseness::Ratio(markov.value / 0.2))
    );
    assert_eq!(markov.verdict, Some(Verdict::Tight));
    assert_eq!(markov.working, "E[S]/t = 50/60");
}

#[test]
fn invalid_params_are_rejected_before_sampling() {
    let (mut engine, calls) = engine_over(vec![50; 10]);
    let params = ExperimentParams {
        coins: 5,
        ..ExperimentParams::default()
    };
    assert!(engine.evaluate(&params).is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

// ── Knowledge gating ─────────────────────────────────────────────────────

#[test]
fn no_knowledge_deactivates_every_bound() {
    let (mut engine, _) = engine_over(vec![40, 50, 60, 70]);
    let params = ExperimentParams {
        knowledge: Knowledge::NONE,
        ..ExperimentParams::default()
    };
    let report = engine.evaluate(&params).unwrap();
    for bound in &report.bounds {
        assert!(!bound.active);
        assert_eq!(bound.looseness, None);
        assert_eq!(bound.verdict, None);
        // The value itself is still computed for display.
        assert!((0.0..=1.0).contains(&bound.value));
    }
}

#[test]
fn mean_alone_activates_only_markov() {
    let (mut engine, _) = engine_over(vec![40, 50, 60, 70]);
    let params = ExperimentParams {
        knowledge: Knowledge::NONE.with(KnowledgeFact::Mean, true),
        ..ExperimentParams::default()
    };
    let report = engine.evaluate(&params).unwrap();
    let active: Vec<BoundKind> = report
        .bounds
        .iter()
        .filter(|b| b.active)
        .map(|b| b.kind)
        .collect();
    assert_eq!(active, vec![BoundKind::Markov]);
}

#[test]
fn dropping_independence_deactivates_chernoff_and_talagrand() {
    let (mut engine, _) = engine_over(vec![40, 50, 60, 70]);
    let params = ExperimentParams {
        knowledge: Knowledge::default().with(KnowledgeFact::Independence, false),
        ..ExperimentParams::default()
    };
    let report = engine.evaluate(&params).unwrap();
    let active: Vec<BoundKind> = report
        .bounds
        .iter()
        .filter(|b| b.active)
        .map(|b| b.kind)
        .collect();
    assert_eq!(active, vec![BoundKind::Markov, BoundKind::Chebyshev]);
}

// ── Empty tail ───────────────────────────────────────────────────────────

#[test]
fn zero_empirical_tail_reports_infinite_looseness() {
    let (mut engine, _) = engine_over(vec![40, 45, 50, 55]);
    let params = ExperimentParams::default(); // threshold 60, nothing above
    let report = engine.evaluate(&params).unwrap();
    assert_eq!(report.empirical_tail, 0.0);
    for bound in report.bounds.iter().filter(|b| b.active) {
        assert_eq!(bound.looseness, Some(Looseness::Infinite));
        assert_eq!(bound.verdict, Some(Verdict::Loose));
    }
}

// ── Sample caching ───────────────────────────────────────────────────────

#[test]
fn first_evaluation_populates_the_cache_and_samples_once() {
    let (mut engine, calls) = engine_over(vec![40, 50, 60, 70]);
    let report = engine.evaluate(&ExperimentParams::default()).unwrap();
    assert_eq!(report.trials, 4);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn threshold_and_knowledge_changes_reuse_the_sample() {
    let (mut engine, calls) = engine_over(vec![40, 50, 60, 70]);
    let params = ExperimentParams::default();
    engine.evaluate(&params).unwrap();
    engine
        .evaluate(&ExperimentParams {
            sigma_multiplier: 3.5,
            knowledge: Knowledge::NONE,
            ..params
        })
        .unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn re_roll_and_coin_changes_resample() {
    let (mut engine, calls) = engine_over(vec![40, 50, 60, 70]);
    let params = ExperimentParams::default();
    engine.evaluate(&params).unwrap();
    engine
        .evaluate(&ExperimentParams {
            roll: params.roll + 1,
            ..params
        })
        .unwrap();
    engine
        .evaluate(&ExperimentParams {
            coins: 120,
            roll: params.roll + 1,
            ..params
        })
        .unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

// ── Serialization boundary ───────────────────────────────────────────────

#[test]
fn report_serializes_for_the_presentation_layer() {
    let (mut engine, _) = engine_over(vec![40, 50, 60, 70]);
    let report = engine.evaluate(&ExperimentParams::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["trials"], 4);
    assert_eq!(json["bounds"][0]["kind"], "markov");
    assert_eq!(json["bounds"][2]["kind"], "chernoff-hoeffding");
    assert!(json["histogram"]["bins"].is_array());
}
