// src/scrape/page.rs
use std::time::Instant;

use scraper::{ElementRef, Html};

use crate::config::SiteConfig;
use crate::core::html::{cell_text, selector};
use crate::core::PageFetcher;
use crate::error::Result;
use crate::specs::{GameLogSpec, TableSource};
use crate::table::GameLogTable;

use super::locate::locate;

/// Fetch a player page and return its latest-season game log as text rows.
pub fn scrape(url: &str, config: &SiteConfig, fetcher: &dyn PageFetcher) -> Result<GameLogTable> {
    let html_doc = fetcher.fetch(url)?;
    let spec = GameLogSpec::new(&config.markup)?;
    let t = Instant::now();
    let out = parse_doc(&html_doc, &spec);
    logd!("Game log: parsed page in {:?}", t.elapsed());
    out
}

/// Split out for offline tests and benches.
pub fn parse_doc(html_doc: &str, source: &dyn TableSource) -> Result<GameLogTable> {
    let doc = Html::parse_document(html_doc);
    let table = locate(&doc, source)?;
    GameLogTable::from_rows(extract_rows(table)?)
}

/// Every `<tr>` of the table, each as its `<td>`/`<th>` texts.
pub fn extract_rows(table: ElementRef<'_>) -> Result<Vec<Vec<String>>> {
    let rows = selector("tr")?;
    let cells = selector("td, th")?;
    Ok(table
        .select(&rows)
        .map(|tr| tr.select(&cells).map(cell_text).collect())
        .collect())
}
