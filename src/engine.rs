//! # Analytics Engine
//!
//! $$
//! \text{prices}\;\to\; r \;\to\; (\mu, \Sigma) \;\to\; \text{simulate}
//! \;\to\; \mathbf{w}^\*
//! $$
//!
//! High-level orchestration of the full analysis pipeline.

use ndarray::Array2;
use tracing::debug;

use crate::covariance::annualized_covariance;
use crate::covariance::correlation_from_covariance;
use crate::error::AnalyticsError;
use crate::error::Result;
use crate::frontier::OptimalPortfolio;
use crate::frontier::max_sharpe;
use crate::market::PriceSeries;
use crate::returns::ReturnSeries;
use crate::simulation::DEFAULT_NUM_PORTFOLIOS;
use crate::simulation::DEFAULT_SEED;
use crate::simulation::SimulationConfig;
use crate::simulation::SimulationResult;
use crate::simulation::simulate_portfolios;
use crate::stats::AssetStats;
use crate::stats::TRADING_DAYS_PER_YEAR;

/// Runtime configuration for [`AnalyticsEngine`].
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsConfig {
  /// Number of random portfolios per run.
  pub num_portfolios: usize,
  /// Base seed of the simulation random streams.
  pub seed: u64,
  /// Annualization constant (trading periods per year).
  pub periods_per_year: f64,
}

impl Default for AnalyticsConfig {
  fn default() -> Self {
    Self {
      num_portfolios: DEFAULT_NUM_PORTFOLIOS,
      seed: DEFAULT_SEED,
      periods_per_year: TRADING_DAYS_PER_YEAR,
    }
  }
}

/// Everything one analysis session derives from a price series.
///
/// Plain read-only data for a presentation layer to render; nothing here is
/// mutated after construction.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
  pub returns: ReturnSeries,
  pub stats: AssetStats,
  pub covariance: Array2<f64>,
  pub correlation: Array2<f64>,
  pub simulation: SimulationResult,
  pub optimal: OptimalPortfolio,
}

/// Single entry point running prices through returns, statistics, covariance,
/// Monte Carlo simulation and the max-Sharpe scan.
#[derive(Debug, Clone)]
pub struct AnalyticsEngine {
  config: AnalyticsConfig,
}

impl AnalyticsEngine {
  pub fn new(config: AnalyticsConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &AnalyticsConfig {
    &self.config
  }

  /// Run the full pipeline for one price series.
  pub fn analyze(&self, prices: &PriceSeries) -> Result<AnalysisReport> {
    if prices.is_empty() {
      return Err(AnalyticsError::InvalidConfiguration(
        "asset list is empty".to_string(),
      ));
    }

    debug!(
      assets = prices.len(),
      num_portfolios = self.config.num_portfolios,
      "running portfolio analysis"
    );

    let returns = ReturnSeries::from_prices(prices);
    let stats = AssetStats::estimate(&returns, self.config.periods_per_year)?;
    let covariance = annualized_covariance(&returns, self.config.periods_per_year)?;
    let correlation = correlation_from_covariance(&covariance);

    let simulation = simulate_portfolios(
      &stats,
      &covariance,
      &SimulationConfig {
        num_portfolios: self.config.num_portfolios,
        seed: self.config.seed,
      },
    )?;
    let optimal = max_sharpe(&simulation)?;

    debug!(
      index = optimal.index,
      sharpe = optimal.sharpe,
      "selected maximum-Sharpe portfolio"
    );

    Ok(AnalysisReport {
      returns,
      stats,
      covariance,
      correlation,
      simulation,
      optimal,
    })
  }
}
