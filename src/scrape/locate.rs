// src/scrape/locate.rs
use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};

use crate::error::{Result, ScrapeError};
use crate::specs::TableSource;

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").expect("year regex"));

/// First 4-digit run in a season heading: `"2024-2025 Regular Season"` → 2024.
pub fn season_year(heading: &str) -> Option<u32> {
    YEAR.find(heading).and_then(|m| m.as_str().parse().ok())
}

/// Highest year wins; `None` ranks below every year; on ties the earliest
/// item keeps its place.
pub fn pick_latest<T>(items: impl IntoIterator<Item = (Option<u32>, T)>) -> Option<T> {
    let mut best: Option<(Option<u32>, T)> = None;
    for (year, item) in items {
        let better = match &best {
            Some((best_year, _)) => year > *best_year,
            None => true,
        };
        if better {
            best = Some((year, item));
        }
    }
    best.map(|(_, item)| item)
}

/// Choose the latest-season game-log table on the page.
pub fn locate<'a>(doc: &'a Html, source: &dyn TableSource) -> Result<ElementRef<'a>> {
    let candidates = source.candidates(doc);
    logd!("Game log: {} candidate table(s)", candidates.len());

    let tagged: Vec<(Option<u32>, ElementRef<'a>)> = candidates
        .into_iter()
        .map(|c| (c.heading.as_deref().and_then(season_year), c.table))
        .collect();
    if let Some(year) = tagged.iter().filter_map(|(y, _)| *y).max() {
        logd!("Game log: latest season {year}");
    }

    pick_latest(tagged).ok_or_else(|| ScrapeError::TableNotFound(source.describe()))
}
