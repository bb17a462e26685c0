//! # Efficient Frontier
//!
//! $$
//! \mathbf{w}^\* = \arg\max_k \frac{\mu_{p,k}}{\sigma_{p,k}}
//! $$

use ndarray::Array1;

use crate::error::AnalyticsError;
use crate::error::Result;
use crate::simulation::SimulationResult;

/// The maximum-Sharpe portfolio of a simulation run, weights included.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimalPortfolio {
  /// Generation-order index of the winning draw.
  pub index: usize,
  /// Asset order the weights refer to.
  pub tickers: Vec<String>,
  pub weights: Array1<f64>,
  pub expected_return: f64,
  pub volatility: f64,
  pub sharpe: f64,
}

impl OptimalPortfolio {
  /// Weights paired with their tickers, in asset order.
  pub fn weights_by_ticker(&self) -> Vec<(&str, f64)> {
    self
      .tickers
      .iter()
      .map(String::as_str)
      .zip(self.weights.iter().copied())
      .collect()
  }
}

/// Scan a simulation result for the maximum-Sharpe portfolio.
///
/// Ties break to the first record in generation order; the scan is a single
/// pass over stored records, never a seeded replay. An empty result fails
/// with [`AnalyticsError::InvalidConfiguration`].
pub fn max_sharpe(result: &SimulationResult) -> Result<OptimalPortfolio> {
  let mut best: Option<usize> = None;

  for (i, portfolio) in result.portfolios().iter().enumerate() {
    match best {
      None => best = Some(i),
      Some(b) if portfolio.sharpe > result.portfolios()[b].sharpe => best = Some(i),
      _ => {}
    }
  }

  let index = best.ok_or_else(|| {
    AnalyticsError::InvalidConfiguration("simulation result is empty".to_string())
  })?;
  let winner = &result.portfolios()[index];

  Ok(OptimalPortfolio {
    index,
    tickers: result.tickers().to_vec(),
    weights: winner.weights.clone(),
    expected_return: winner.expected_return,
    volatility: winner.volatility,
    sharpe: winner.sharpe,
  })
}

#[cfg(test)]
mod tests {
  use ndarray::array;

  use super::max_sharpe;
  use crate::error::AnalyticsError;
  use crate::simulation::SimulatedPortfolio;
  use crate::simulation::SimulationResult;

  fn record(w: f64, ret: f64, vol: f64) -> SimulatedPortfolio {
    SimulatedPortfolio {
      weights: array![w, 1.0 - w],
      expected_return: ret,
      volatility: vol,
      sharpe: ret / vol,
    }
  }

  fn result(records: Vec<SimulatedPortfolio>) -> SimulationResult {
    SimulationResult::from_parts(vec!["A".to_string(), "B".to_string()], records)
  }

  #[test]
  fn picks_the_maximum_sharpe_record() {
    let res = result(vec![
      record(0.2, 0.08, 0.20),
      record(0.5, 0.12, 0.15),
      record(0.8, 0.10, 0.25),
    ]);

    let best = max_sharpe(&res).unwrap();
    assert_eq!(best.index, 1);
    for p in res.portfolios() {
      assert!(best.sharpe >= p.sharpe);
    }
  }

  #[test]
  fn ties_break_to_first_in_generation_order() {
    let res = result(vec![
      record(0.3, 0.10, 0.20),
      record(0.7, 0.10, 0.20),
      record(0.5, 0.05, 0.20),
    ]);

    let best = max_sharpe(&res).unwrap();
    assert_eq!(best.index, 0);
    assert_eq!(best.weights, res.portfolios()[0].weights);
  }

  #[test]
  fn winner_carries_full_weight_vector() {
    let res = result(vec![record(0.25, 0.10, 0.20)]);
    let best = max_sharpe(&res).unwrap();

    assert_eq!(best.weights.len(), 2);
    assert_eq!(
      best.weights_by_ticker(),
      vec![("A", 0.25), ("B", 0.75)]
    );
  }

  #[test]
  fn empty_result_is_rejected() {
    let res = result(Vec::new());
    let err = max_sharpe(&res).unwrap_err();
    assert!(matches!(err, AnalyticsError::InvalidConfiguration(_)));
  }
}
