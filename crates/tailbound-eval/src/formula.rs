use crate::catalog::BoundKind;

/// Evaluate a bound for a sum of `coins` fair flips at `threshold`.
///
/// With μ = N/2, σ² = N/4 and δ = t − μ:
///
/// ```text
/// Markov:             min(1, μ/t)            for t > 0
/// Chebyshev:          min(1, σ²/δ²)
/// Chernoff–Hoeffding: min(1, exp(−2δ²/N))
/// Talagrand:          min(1, 4·exp(−δ²/N))
/// ```
///
/// Every result lies in [0, 1]. When δ ≤ 0 (threshold at or below the
/// mean) the guarantee is vacuous and the bound is 1. For plain sums
/// Talagrand is looser than Chernoff; its strength is that it applies to
/// any 1-Lipschitz function on a product space, not only sums.
pub fn evaluate(kind: BoundKind, coins: u32, threshold: f64) -> f64 {
    let n = f64::from(coins);
    let mean = n / 2.0;
    let delta = threshold - mean;

    match kind {
        BoundKind::Markov => {
            if threshold > 0.0 {
                (mean / threshold).min(1.0)
            } else {
                1.0
            }
        }
        BoundKind::Chebyshev => {
            let variance = n / 4.0;
            if delta > 0.0 {
                (variance / (delta * delta)).min(1.0)
            } else {
                1.0
            }
        }
        BoundKind::ChernoffHoeffding => {
            if delta > 0.0 {
                (-2.0 * delta * delta / n).exp().min(1.0)
            } else {
                1.0
            }
        }
        BoundKind::Talagrand => {
            if delta > 0.0 {
                (4.0 * (-delta * delta / n).exp()).min(1.0)
            } else {
                1.0
            }
        }
    }
}

/// The instantiated arithmetic behind a bound value, for display:
/// e.g. `"E[S]/t = 50/60"` or `"exp(−2·100/100)"`.
pub fn working(kind: BoundKind, coins: u32, threshold: f64) -> String {
    let n = f64::from(coins);
    let mean = n / 2.0;
    let delta = threshold - mean;
    let delta_sq = delta * delta;

    match kind {
        BoundKind::Markov => format!("E[S]/t = {mean:.0}/{threshold:.0}"),
        BoundKind::Chebyshev => format!("σ²/δ² = {:.0}/{delta_sq:.0}", n / 4.0),
        BoundKind::ChernoffHoeffding => format!("exp(−2·{delta_sq:.0}/{coins})"),
        BoundKind::Talagrand => format!("4·exp(−{delta_sq:.0}/{coins})"),
    }
}
