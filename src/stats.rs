//! # Asset Statistics
//!
//! $$
//! \mu_a = 252\,\bar r_a,\qquad \sigma_a = \sqrt{252}\,s_{r_a}
//! $$
//!
//! Annualized expected return and volatility estimated from daily returns.

use ndarray::Array1;

use crate::error::AnalyticsError;
use crate::error::Result;
use crate::returns::ReturnSeries;

/// Conventional number of trading days per year used for annualization.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

pub(crate) fn sample_mean(xs: &[f64]) -> f64 {
  if xs.is_empty() {
    0.0
  } else {
    xs.iter().sum::<f64>() / xs.len() as f64
  }
}

pub(crate) fn sample_variance(xs: &[f64], mean: f64) -> f64 {
  if xs.len() < 2 {
    return 0.0;
  }

  let mut acc = 0.0;
  for &x in xs {
    let d = x - mean;
    acc += d * d;
  }
  acc / (xs.len() - 1) as f64
}

/// Annualized risk/return statistics of one asset.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetStat {
  pub ticker: String,
  /// Mean daily return scaled by the annualization constant.
  pub expected_return: f64,
  /// Sample standard deviation of daily returns scaled by the square root of
  /// the annualization constant.
  pub volatility: f64,
}

/// Per-asset annualized statistics, in the asset order of the source series.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetStats {
  stats: Vec<AssetStat>,
}

impl AssetStats {
  /// Estimate annualized expected return and volatility per asset.
  ///
  /// An asset with zero defined return observations fails with
  /// [`AnalyticsError::InsufficientData`] instead of emitting NaN.
  pub fn estimate(returns: &ReturnSeries, periods_per_year: f64) -> Result<Self> {
    if !(periods_per_year > 0.0) {
      return Err(AnalyticsError::InvalidConfiguration(format!(
        "periods_per_year must be positive, got {periods_per_year}"
      )));
    }

    let mut stats = Vec::with_capacity(returns.len());

    for asset in returns.assets() {
      let values = asset.values();
      if values.is_empty() {
        return Err(AnalyticsError::InsufficientData {
          ticker: asset.ticker.clone(),
          observations: 0,
          required: 1,
        });
      }

      let mean = sample_mean(&values);
      let std = sample_variance(&values, mean).sqrt();

      stats.push(AssetStat {
        ticker: asset.ticker.clone(),
        expected_return: mean * periods_per_year,
        volatility: std * periods_per_year.sqrt(),
      });
    }

    Ok(Self { stats })
  }

  pub fn stats(&self) -> &[AssetStat] {
    &self.stats
  }

  /// Number of assets.
  pub fn len(&self) -> usize {
    self.stats.len()
  }

  pub fn is_empty(&self) -> bool {
    self.stats.is_empty()
  }

  pub fn tickers(&self) -> Vec<String> {
    self.stats.iter().map(|s| s.ticker.clone()).collect()
  }

  pub fn get(&self, ticker: &str) -> Option<&AssetStat> {
    self.stats.iter().find(|s| s.ticker == ticker)
  }

  /// Annualized expected returns as a vector, in asset order.
  pub fn expected_returns(&self) -> Array1<f64> {
    Array1::from_iter(self.stats.iter().map(|s| s.expected_return))
  }

  /// Annualized volatilities as a vector, in asset order.
  pub fn volatilities(&self) -> Array1<f64> {
    Array1::from_iter(self.stats.iter().map(|s| s.volatility))
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::AssetStats;
  use super::TRADING_DAYS_PER_YEAR;
  use super::sample_mean;
  use super::sample_variance;
  use crate::error::AnalyticsError;
  use crate::market::PriceBar;
  use crate::market::PriceSeries;
  use crate::returns::ReturnSeries;

  fn series(ticker: &str, closes: &[f64]) -> PriceSeries {
    let bars = closes
      .iter()
      .enumerate()
      .map(|(i, &p)| {
        PriceBar::new(
          NaiveDate::from_ymd_opt(2024, 1, i as u32 + 1).unwrap(),
          ticker,
          p,
        )
      })
      .collect::<Vec<_>>();
    PriceSeries::from_bars(bars).unwrap()
  }

  #[test]
  fn constant_prices_give_zero_stats() {
    let prices = series("FLAT", &[100.0, 100.0, 100.0, 100.0]);
    let returns = ReturnSeries::from_prices(&prices);
    let stats = AssetStats::estimate(&returns, TRADING_DAYS_PER_YEAR).unwrap();

    let flat = stats.get("FLAT").unwrap();
    assert_eq!(flat.expected_return, 0.0);
    assert_eq!(flat.volatility, 0.0);
  }

  #[test]
  fn annualization_matches_hand_computation() {
    let prices = series("X", &[100.0, 102.0, 101.0, 105.0]);
    let returns = ReturnSeries::from_prices(&prices);
    let stats = AssetStats::estimate(&returns, TRADING_DAYS_PER_YEAR).unwrap();

    let daily = returns.values("X").unwrap();
    let mean = sample_mean(&daily);
    let std = sample_variance(&daily, mean).sqrt();

    let x = stats.get("X").unwrap();
    assert!((x.expected_return - mean * 252.0).abs() < 1e-12);
    assert!((x.volatility - std * 252.0_f64.sqrt()).abs() < 1e-12);
  }

  #[test]
  fn zero_return_observations_fail_explicitly() {
    let prices = series("ONE", &[100.0]);
    let returns = ReturnSeries::from_prices(&prices);
    let err = AssetStats::estimate(&returns, TRADING_DAYS_PER_YEAR).unwrap_err();

    match err {
      AnalyticsError::InsufficientData { ticker, observations, .. } => {
        assert_eq!(ticker, "ONE");
        assert_eq!(observations, 0);
      }
      other => panic!("unexpected error: {other:?}"),
    }
  }

  #[test]
  fn expected_returns_vector_preserves_asset_order() {
    let mut bars = Vec::new();
    for (i, closes) in [[10.0, 11.0], [20.0, 19.0]].iter().enumerate() {
      for (d, &p) in closes.iter().enumerate() {
        bars.push(PriceBar::new(
          NaiveDate::from_ymd_opt(2024, 1, d as u32 + 1).unwrap(),
          if i == 0 { "UP" } else { "DOWN" },
          p,
        ));
      }
    }
    let prices = PriceSeries::from_bars(bars).unwrap();
    let returns = ReturnSeries::from_prices(&prices);
    let stats = AssetStats::estimate(&returns, TRADING_DAYS_PER_YEAR).unwrap();

    assert_eq!(stats.tickers(), vec!["UP", "DOWN"]);
    let mu = stats.expected_returns();
    assert!(mu[0] > 0.0);
    assert!(mu[1] < 0.0);
  }
}
