/// Tailbound system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of simulated trials per sample set. Constant across re-rolls.
pub const DEFAULT_TRIAL_COUNT: usize = 12_000;

/// Smallest coin count the presentation layer offers.
pub const MIN_COINS: u32 = 10;
/// Largest coin count the presentation layer offers.
pub const MAX_COINS: u32 = 200;

/// Deviation-multiplier slider range, in units of σ above the mean.
pub const MIN_SIGMA_MULTIPLIER: f64 = 0.5;
pub const MAX_SIGMA_MULTIPLIER: f64 = 4.5;

/// Histogram window half-width, in units of σ around the mean.
pub const HISTOGRAM_WINDOW_SIGMAS: f64 = 4.5;
