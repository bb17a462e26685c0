//! # frontier-rs
//!
//! $$
//! \mathbf{w}^\* = \arg\max_{\mathbf{w}\in\Delta^{N-1}}
//! \frac{\mathbf{w}^\top\mu}{\sqrt{\mathbf{w}^\top\Sigma\,\mathbf{w}}}
//! $$
//!
//! Portfolio analytics over historical price series: per-asset annualized
//! risk/return estimation, annualized covariance, Monte Carlo sampling of
//! long-only weight allocations, and selection of the maximum-Sharpe-ratio
//! portfolio as an approximation of the mean-variance efficient frontier.
//!
//! The pipeline is pure and flows strictly downward:
//! prices → returns → (stats, covariance) → simulated portfolios → optimum.
//! Market-data acquisition and rendering are external collaborators; this
//! crate only consumes and exposes in-memory data structures.

pub mod covariance;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod market;
pub mod returns;
pub mod simulation;
pub mod stats;

pub use covariance::annualized_covariance;
pub use covariance::correlation_from_covariance;
pub use engine::AnalysisReport;
pub use engine::AnalyticsConfig;
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use frontier::OptimalPortfolio;
pub use frontier::max_sharpe;
pub use market::PriceBar;
pub use market::PriceSeries;
pub use returns::ReturnSeries;
pub use simulation::SimulatedPortfolio;
pub use simulation::SimulationConfig;
pub use simulation::SimulationResult;
pub use simulation::simulate_portfolios;
pub use stats::AssetStats;
pub use stats::TRADING_DAYS_PER_YEAR;
