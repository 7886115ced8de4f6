// src/error.rs
use thiserror::Error;

/// Everything that can stop an analysis run.
///
/// Name lookup misses are not here: they come back as `None` from
/// [`crate::core::net::PageFetcher::lookup_by_name`].
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("network error: {0}")]
    Network(String),

    #[error("invalid player URL: {0}")]
    InvalidUrl(String),

    #[error("could not find a game-log stats table on this page (no table with {0} headers)")]
    TableNotFound(String),

    #[error("no data rows found in the selected game-log table")]
    EmptyTable,

    #[error("could not find any consistently-sized rows to form a table")]
    NoConsistentRows,

    #[error("unexpected game-log layout: {0}")]
    Schema(String),

    #[error("CSV export failed: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
