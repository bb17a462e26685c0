//! # Covariance
//!
//! $$
//! \Sigma = 252\,\operatorname{Cov}(r),\qquad \Sigma_{ii} = \sigma_i^2
//! $$

use ndarray::Array2;

use crate::error::AnalyticsError;
use crate::error::Result;
use crate::returns::ReturnSeries;
use crate::stats::sample_mean;

/// Annualized sample covariance matrix across assets.
///
/// Covariance is only defined over a shared date index: all return series
/// must carry identical dates, otherwise the computation fails with
/// [`AnalyticsError::MisalignedSeries`] rather than silently inner-joining.
/// Any asset with fewer than two return observations fails with
/// [`AnalyticsError::InsufficientData`].
pub fn annualized_covariance(returns: &ReturnSeries, periods_per_year: f64) -> Result<Array2<f64>> {
  if !(periods_per_year > 0.0) {
    return Err(AnalyticsError::InvalidConfiguration(format!(
      "periods_per_year must be positive, got {periods_per_year}"
    )));
  }

  let assets = returns.assets();
  if assets.is_empty() {
    return Err(AnalyticsError::InvalidConfiguration(
      "asset list is empty".to_string(),
    ));
  }

  for asset in assets {
    if asset.points.len() < 2 {
      return Err(AnalyticsError::InsufficientData {
        ticker: asset.ticker.clone(),
        observations: asset.points.len(),
        required: 2,
      });
    }
  }

  let reference = assets[0].dates();
  for asset in &assets[1..] {
    let dates = asset.dates();
    if dates != reference {
      return Err(AnalyticsError::MisalignedSeries {
        detail: format!(
          "{} has {} return date(s) not matching the index of {}",
          asset.ticker,
          dates.len(),
          assets[0].ticker
        ),
      });
    }
  }

  let n = assets.len();
  let periods = reference.len();

  // demeaned daily returns, one row per asset
  let mut demeaned = vec![vec![0.0; periods]; n];
  for (i, asset) in assets.iter().enumerate() {
    let values = asset.values();
    let mean = sample_mean(&values);
    for (t, v) in values.iter().enumerate() {
      demeaned[i][t] = v - mean;
    }
  }

  let mut cov = Array2::<f64>::zeros((n, n));
  let denom = (periods - 1) as f64;

  for i in 0..n {
    for j in i..n {
      let mut acc = 0.0;
      for t in 0..periods {
        acc += demeaned[i][t] * demeaned[j][t];
      }
      let c = acc / denom * periods_per_year;
      cov[[i, j]] = c;
      cov[[j, i]] = c;
    }
  }

  Ok(cov)
}

/// Pearson correlation matrix derived from a covariance matrix.
///
/// Diagonal entries are 1; off-diagonal entries fall back to 0 when either
/// variance is numerically zero.
pub fn correlation_from_covariance(cov: &Array2<f64>) -> Array2<f64> {
  let n = cov.nrows();
  let mut corr = Array2::<f64>::zeros((n, n));

  for i in 0..n {
    let si = cov[[i, i]].max(0.0).sqrt();

    for j in 0..n {
      let sj = cov[[j, j]].max(0.0).sqrt();
      let denom = si * sj;

      corr[[i, j]] = if i == j {
        1.0
      } else if denom > 1e-15 {
        (cov[[i, j]] / denom).clamp(-1.0, 1.0)
      } else {
        0.0
      };
    }
  }

  corr
}
