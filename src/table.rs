// src/table.rs
use std::collections::HashMap;

use crate::error::{Result, ScrapeError};

/// The located game-log table as text: one header row, then data rows of the
/// same width. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameLogTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl GameLogTable {
    /// Shape raw scraped rows into a table.
    ///
    /// - Rows with at most one non-empty cell are spacers and dropped.
    /// - Only rows of the most common width survive (ties go to the wider
    ///   width); everything else is discarded silently.
    /// - The first survivor is the header.
    pub fn from_rows(raw: Vec<Vec<String>>) -> Result<Self> {
        let rows: Vec<Vec<String>> = raw
            .into_iter()
            .filter(|r| r.iter().filter(|c| !c.trim().is_empty()).count() > 1)
            .collect();
        if rows.is_empty() {
            return Err(ScrapeError::EmptyTable);
        }

        let width = modal_width(&rows).ok_or(ScrapeError::NoConsistentRows)?;
        let before = rows.len();
        let mut kept = rows.into_iter().filter(|r| r.len() == width);

        let headers: Vec<String> = kept
            .next()
            .ok_or(ScrapeError::NoConsistentRows)?
            .into_iter()
            .map(|h| h.trim().to_string())
            .collect();
        let rows: Vec<Vec<String>> = kept.collect();

        let dropped = before - rows.len() - 1;
        if dropped > 0 {
            logd!("Game log: dropped {dropped} row(s) not {width} cells wide");
        }
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] { &self.headers }
    pub fn rows(&self) -> &[Vec<String>] { &self.rows }
    pub fn width(&self) -> usize { self.headers.len() }

    /// Position of a header, exact match after trimming.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name.trim())
    }
}

fn modal_width(rows: &[Vec<String>]) -> Option<usize> {
    let mut counts: HashMap<usize, usize> = HashMap::new();
    for r in rows {
        *counts.entry(r.len()).or_default() += 1;
    }
    counts
        .into_iter()
        .max_by_key(|&(width, n)| (n, width))
        .map(|(width, _)| width)
}
