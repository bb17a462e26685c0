use thiserror::Error;

/// Errors surfaced by the analytics pipeline.
///
/// Every numerical edge case (empty series, zero volatility, misaligned
/// date indexes) is reported as a specific kind at the point of
/// computation instead of letting NaN or infinity flow into downstream
/// comparisons.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
  /// Not enough observations to estimate statistics for an asset.
  #[error(
    "insufficient data for {ticker}: {observations} return observation(s), at least {required} required"
  )]
  InsufficientData {
    ticker: String,
    observations: usize,
    required: usize,
  },

  /// Volatility is zero or not well-defined, so a Sharpe ratio cannot be computed.
  #[error("degenerate volatility ({value}) for {context}")]
  DegenerateVolatility { context: String, value: f64 },

  /// Return series do not share a common date index.
  #[error("misaligned return series: {detail}")]
  MisalignedSeries { detail: String },

  /// Invalid engine or simulation configuration.
  #[error("invalid configuration: {0}")]
  InvalidConfiguration(String),

  /// A price series violates its ordering or positivity invariants.
  #[error("malformed price series for {ticker}: {detail}")]
  MalformedSeries { ticker: String, detail: String },
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
