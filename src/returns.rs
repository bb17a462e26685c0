//! # Periodic Returns
//!
//! $$
//! r_t = \frac{p_t}{p_{t-1}} - 1
//! $$

use chrono::NaiveDate;

use crate::market::PriceSeries;

/// A single dated fractional return.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnPoint {
  pub date: NaiveDate,
  pub value: f64,
}

/// Return history of one asset, dated by the later observation of each pair.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetReturns {
  pub ticker: String,
  pub points: Vec<ReturnPoint>,
}

impl AssetReturns {
  pub fn values(&self) -> Vec<f64> {
    self.points.iter().map(|p| p.value).collect()
  }

  pub fn dates(&self) -> Vec<NaiveDate> {
    self.points.iter().map(|p| p.date).collect()
  }
}

/// Per-asset simple periodic returns derived from a [`PriceSeries`].
///
/// Each asset has one fewer return than price observations; the value at the
/// series start is absent, never zero-filled. An asset with fewer than two
/// prices yields an empty return series, not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReturnSeries {
  assets: Vec<AssetReturns>,
}

impl ReturnSeries {
  /// Derive simple percentage changes between consecutive same-asset
  /// observations, in date order. Pure; asset order follows the price series.
  pub fn from_prices(prices: &PriceSeries) -> Self {
    let assets = prices
      .assets()
      .iter()
      .map(|asset| {
        let points = asset
          .points
          .windows(2)
          .map(|pair| ReturnPoint {
            date: pair[1].date,
            value: pair[1].adj_close / pair[0].adj_close - 1.0,
          })
          .collect();

        AssetReturns {
          ticker: asset.ticker.clone(),
          points,
        }
      })
      .collect();

    Self { assets }
  }

  pub fn assets(&self) -> &[AssetReturns] {
    &self.assets
  }

  /// Number of assets in the series.
  pub fn len(&self) -> usize {
    self.assets.len()
  }

  pub fn is_empty(&self) -> bool {
    self.assets.is_empty()
  }

  pub fn values(&self, ticker: &str) -> Option<Vec<f64>> {
    self
      .assets
      .iter()
      .find(|a| a.ticker == ticker)
      .map(AssetReturns::values)
  }
}
