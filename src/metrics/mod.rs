// src/metrics/mod.rs
//! Derived statistics.
//!
//! Absent values (`None`) come from zero denominators and are skipped by
//! every mean; they are never treated as 0. Season shooting percentages are
//! ratios of summed totals, not means of per-game ratios.

mod game;
mod season;
mod splits;
pub mod stats;

pub use game::{derive_metrics, DerivedGameMetrics};
pub use season::{summarize_overall, BoxLine, SeasonSummary, ShootingTotals};
pub use splits::{summarize_splits, SplitLine, SplitSummary};
