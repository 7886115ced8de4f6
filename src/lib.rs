// src/lib.rs
//! Scrape a player's latest-season game log from USBasket, derive advanced
//! metrics and render a CSV export plus a standalone HTML summary.
//!
//! Pipeline: `core::net` → `scrape` (locate + rows) → `records::normalize`
//! → `metrics` → `csv` / `report`. `runner::analyze` wires the whole thing.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod csv;
pub mod file;
pub mod metrics;
pub mod progress;
pub mod records;
pub mod report;
pub mod runner;
pub mod scrape;
pub mod table;

pub use error::{Result, ScrapeError};
pub use metrics::{derive_metrics, summarize_overall, summarize_splits};
pub use records::{normalize, GameRecord};
pub use report::render_report;
pub use scrape::scrape;
pub use table::GameLogTable;
