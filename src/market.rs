//! # Market Data
//!
//! $$
//! P_a = \{(t_i, p_i)\}_{i=1}^{n},\qquad t_i < t_{i+1},\qquad p_i > 0
//! $$
//!
//! Validated price history containers supplied by an upstream data source.

use chrono::NaiveDate;

use crate::error::AnalyticsError;
use crate::error::Result;

/// One (date, ticker, adjusted close) row as delivered by a market-data feed.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
  pub date: NaiveDate,
  pub ticker: String,
  pub adj_close: f64,
}

impl PriceBar {
  pub fn new(date: NaiveDate, ticker: impl Into<String>, adj_close: f64) -> Self {
    Self {
      date,
      ticker: ticker.into(),
      adj_close,
    }
  }
}

/// A single dated adjusted-close observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
  pub date: NaiveDate,
  pub adj_close: f64,
}

/// Price history of one asset, in strictly increasing date order.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPrices {
  pub ticker: String,
  pub points: Vec<PricePoint>,
}

/// Price histories for a set of assets.
///
/// Asset order is first-appearance order of the input rows and is preserved
/// through every downstream structure; simulated weight vectors index into it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
  assets: Vec<AssetPrices>,
}

impl PriceSeries {
  /// Group raw bars into per-asset histories, validating the series invariants.
  ///
  /// Fails with [`AnalyticsError::MalformedSeries`] on a non-positive or
  /// non-finite price, or when dates for one asset are not strictly
  /// increasing.
  pub fn from_bars<I>(bars: I) -> Result<Self>
  where
    I: IntoIterator<Item = PriceBar>,
  {
    let mut assets: Vec<AssetPrices> = Vec::new();

    for bar in bars {
      if !bar.adj_close.is_finite() || bar.adj_close <= 0.0 {
        return Err(AnalyticsError::MalformedSeries {
          ticker: bar.ticker,
          detail: format!("non-positive price {} on {}", bar.adj_close, bar.date),
        });
      }

      let point = PricePoint {
        date: bar.date,
        adj_close: bar.adj_close,
      };

      match assets.iter_mut().find(|a| a.ticker == bar.ticker) {
        Some(asset) => {
          if let Some(last) = asset.points.last() {
            if point.date <= last.date {
              return Err(AnalyticsError::MalformedSeries {
                ticker: bar.ticker,
                detail: format!(
                  "dates must be strictly increasing, got {} after {}",
                  point.date, last.date
                ),
              });
            }
          }
          asset.points.push(point);
        }
        None => assets.push(AssetPrices {
          ticker: bar.ticker,
          points: vec![point],
        }),
      }
    }

    Ok(Self { assets })
  }

  pub fn assets(&self) -> &[AssetPrices] {
    &self.assets
  }

  pub fn tickers(&self) -> Vec<String> {
    self.assets.iter().map(|a| a.ticker.clone()).collect()
  }

  /// Number of assets in the series.
  pub fn len(&self) -> usize {
    self.assets.len()
  }

  pub fn is_empty(&self) -> bool {
    self.assets.is_empty()
  }

  /// Adjusted closes of one asset in date order, if present.
  pub fn closes(&self, ticker: &str) -> Option<Vec<f64>> {
    self
      .assets
      .iter()
      .find(|a| a.ticker == ticker)
      .map(|a| a.points.iter().map(|p| p.adj_close).collect())
  }
}

/// Rolling arithmetic mean over `window` observations (e.g. 50- and 200-day
/// moving averages).
///
/// Returns one value per full window, so the output holds
/// `closes.len() - window + 1` entries and is empty when the series is
/// shorter than the window.
///
/// # Panics
/// Panics if `window` is zero.
pub fn moving_average(closes: &[f64], window: usize) -> Vec<f64> {
  assert!(window >= 1, "window must be positive");

  if closes.len() < window {
    return Vec::new();
  }

  let mut out = Vec::with_capacity(closes.len() - window + 1);
  let mut acc: f64 = closes[..window].iter().sum();
  out.push(acc / window as f64);

  for i in window..closes.len() {
    acc += closes[i] - closes[i - window];
    out.push(acc / window as f64);
  }

  out
}
