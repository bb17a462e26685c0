use std::hint::black_box;

use chrono::NaiveDate;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use frontier_rs::covariance::annualized_covariance;
use frontier_rs::market::PriceBar;
use frontier_rs::market::PriceSeries;
use frontier_rs::returns::ReturnSeries;
use frontier_rs::simulation::SimulationConfig;
use frontier_rs::simulation::simulate_portfolios;
use frontier_rs::stats::AssetStats;
use frontier_rs::stats::TRADING_DAYS_PER_YEAR;

fn synthetic_prices(assets: usize, days: usize) -> PriceSeries {
  let mut bars = Vec::with_capacity(assets * days);
  for a in 0..assets {
    let mut price = 100.0 + a as f64 * 10.0;
    for d in 0..days {
      // deterministic wobble, no RNG needed for fixture data
      price *= 1.0 + 0.002 * ((a + 1) as f64 * (d + 1) as f64).sin();
      bars.push(PriceBar::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(d as u64),
        format!("T{a}"),
        price,
      ));
    }
  }
  PriceSeries::from_bars(bars).unwrap()
}

fn bench_simulation(c: &mut Criterion) {
  let prices = synthetic_prices(4, 252);
  let returns = ReturnSeries::from_prices(&prices);
  let stats = AssetStats::estimate(&returns, TRADING_DAYS_PER_YEAR).unwrap();
  let cov = annualized_covariance(&returns, TRADING_DAYS_PER_YEAR).unwrap();

  let mut group = c.benchmark_group("simulate_portfolios");
  for k in [1_000usize, 5_000, 20_000] {
    group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
      let cfg = SimulationConfig {
        num_portfolios: k,
        seed: 42,
      };
      b.iter(|| {
        let result = simulate_portfolios(&stats, &cov, &cfg).unwrap();
        black_box(result);
      });
    });
  }
  group.finish();
}

criterion_group!(benches, bench_simulation);
criterion_main!(benches);
