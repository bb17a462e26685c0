//! # Portfolio Simulation
//!
//! $$
//! w_i = \frac{u_i}{\sum_j u_j},\quad u_i \sim \mathcal U[0,1),\qquad
//! \mu_p = \mathbf{w}^\top\mu,\quad \sigma_p = \sqrt{\mathbf{w}^\top\Sigma\,\mathbf{w}}
//! $$
//!
//! Monte Carlo sampling of long-only weight vectors over the nonnegative
//! simplex, with a deterministic per-iteration random stream.

use ndarray::Array1;
use ndarray::Array2;
use ndarray_rand::RandomExt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::Uniform;
use rayon::prelude::*;
use tracing::debug;

use crate::error::AnalyticsError;
use crate::error::Result;
use crate::stats::AssetStats;

/// Default number of random portfolios per simulation run.
pub const DEFAULT_NUM_PORTFOLIOS: usize = 5_000;

/// Default base seed of the simulation random streams.
pub const DEFAULT_SEED: u64 = 42;

/// Volatility at or below this is treated as degenerate for Sharpe purposes.
pub(crate) const VOL_TOLERANCE: f64 = 1e-12;

/// Configuration of one simulation run.
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
  /// Number of random weight vectors to draw.
  pub num_portfolios: usize,
  /// Base seed; each iteration derives its own disjoint stream from it.
  pub seed: u64,
}

impl Default for SimulationConfig {
  fn default() -> Self {
    Self {
      num_portfolios: DEFAULT_NUM_PORTFOLIOS,
      seed: DEFAULT_SEED,
    }
  }
}

/// One simulated portfolio: weights and metrics travel together.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedPortfolio {
  /// Non-negative weights summing to 1, in asset order.
  pub weights: Array1<f64>,
  /// Annualized expected portfolio return, `w · mu`.
  pub expected_return: f64,
  /// Annualized portfolio volatility, `sqrt(w' Sigma w)`.
  pub volatility: f64,
  /// `expected_return / volatility`, risk-free rate zero.
  pub sharpe: f64,
}

/// Ordered, immutable collection of simulated portfolios from one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
  tickers: Vec<String>,
  portfolios: Vec<SimulatedPortfolio>,
}

impl SimulationResult {
  /// Assemble a result from its parts; weight vectors index into `tickers`.
  pub fn from_parts(tickers: Vec<String>, portfolios: Vec<SimulatedPortfolio>) -> Self {
    Self { tickers, portfolios }
  }

  pub fn tickers(&self) -> &[String] {
    &self.tickers
  }

  pub fn portfolios(&self) -> &[SimulatedPortfolio] {
    &self.portfolios
  }

  /// Number of simulated portfolios.
  pub fn len(&self) -> usize {
    self.portfolios.len()
  }

  pub fn is_empty(&self) -> bool {
    self.portfolios.is_empty()
  }
}

/// RNG of one iteration, derived from the base seed and the iteration index.
///
/// Streams are disjoint and order-independent, so sequential and parallel
/// execution of the same run produce bit-identical portfolios without
/// touching any global generator state.
fn iteration_rng(seed: u64, index: usize) -> StdRng {
  StdRng::seed_from_u64(seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Draw a random point on the nonnegative simplex by sum-normalizing
/// independent uniforms.
fn random_simplex_weights(n: usize, rng: &mut StdRng) -> Array1<f64> {
  let raw = Array1::random_using(n, Uniform::new(0.0, 1.0), rng);
  let sum = raw.sum();

  if sum < 1e-300 {
    Array1::from_elem(n, 1.0 / n as f64)
  } else {
    raw / sum
  }
}

/// Evaluate (return, volatility, Sharpe) of a weight vector against
/// annualized expected returns and covariance.
///
/// Fails with [`AnalyticsError::DegenerateVolatility`] instead of dividing
/// by a numerically zero volatility.
pub fn evaluate_portfolio(
  weights: &Array1<f64>,
  mu: &Array1<f64>,
  cov: &Array2<f64>,
  context: &str,
) -> Result<(f64, f64, f64)> {
  let expected_return = weights.dot(mu);
  let variance = weights.dot(&cov.dot(weights));
  let volatility = variance.max(0.0).sqrt();

  if volatility <= VOL_TOLERANCE {
    return Err(AnalyticsError::DegenerateVolatility {
      context: context.to_string(),
      value: volatility,
    });
  }

  Ok((expected_return, volatility, expected_return / volatility))
}

/// Simulate `config.num_portfolios` random long-only portfolios.
///
/// The iterations are embarrassingly parallel and run on rayon; index-order
/// collection plus per-iteration streams keep the output reproducible for a
/// fixed (assets, count, seed) triple.
pub fn simulate_portfolios(
  stats: &AssetStats,
  cov: &Array2<f64>,
  config: &SimulationConfig,
) -> Result<SimulationResult> {
  if config.num_portfolios == 0 {
    return Err(AnalyticsError::InvalidConfiguration(
      "num_portfolios must be positive".to_string(),
    ));
  }

  let n = stats.len();
  if n == 0 {
    return Err(AnalyticsError::InvalidConfiguration(
      "asset list is empty".to_string(),
    ));
  }

  if cov.nrows() != n || cov.ncols() != n {
    return Err(AnalyticsError::InvalidConfiguration(format!(
      "covariance matrix is {}x{}, expected {n}x{n}",
      cov.nrows(),
      cov.ncols()
    )));
  }

  for stat in stats.stats() {
    if stat.volatility <= VOL_TOLERANCE {
      return Err(AnalyticsError::DegenerateVolatility {
        context: stat.ticker.clone(),
        value: stat.volatility,
      });
    }
  }

  let mu = stats.expected_returns();

  debug!(
    num_portfolios = config.num_portfolios,
    assets = n,
    seed = config.seed,
    "simulating random portfolios"
  );

  let portfolios = (0..config.num_portfolios)
    .into_par_iter()
    .map(|i| {
      let mut rng = iteration_rng(config.seed, i);
      let weights = random_simplex_weights(n, &mut rng);
      let (expected_return, volatility, sharpe) =
        evaluate_portfolio(&weights, &mu, cov, &format!("simulated portfolio {i}"))?;

      Ok(SimulatedPortfolio {
        weights,
        expected_return,
        volatility,
        sharpe,
      })
    })
    .collect::<Result<Vec<_>>>()?;

  Ok(SimulationResult {
    tickers: stats.tickers(),
    portfolios,
  })
}
