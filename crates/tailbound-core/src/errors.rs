/// Workspace-wide result alias.
pub type TailboundResult<T> = Result<T, TailboundError>;

/// Errors produced by parameter validation.
///
/// The evaluation core itself has no fault paths: degenerate numerics
/// (threshold at or below the mean, empty tail) are handled by definition.
#[derive(Debug, thiserror::Error)]
pub enum TailboundError {
    #[error("coin count {coins} outside supported range [{min}, {max}]")]
    CoinsOutOfRange { coins: u32, min: u32, max: u32 },

    #[error("sigma multiplier {value} outside supported range [{min}, {max}]")]
    SigmaMultiplierOutOfRange { value: f64, min: f64, max: f64 },

    #[error("sigma multiplier must be finite, got {value}")]
    SigmaMultiplierNotFinite { value: f64 },
}
