// src/specs/game_log.rs
//! USBasket game-log markup.
//!
//! A player page carries many `<table class="my_Title">` blocks (career
//! totals, averages, one game log per season, ...). Game logs are the ones
//! with a `<tr class="my_Headers">` row naming `Date`, `Against Team` and
//! `Result`. Each table sits under an `<h4 class="plstats-head">` heading
//! holding the season, e.g. `2024-2025 Regular Season`.

use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};

use crate::config::MarkupConfig;
use crate::core::html::{cell_text, joined_text, selector};
use crate::error::Result;
use super::{Candidate, TableSource};

pub struct GameLogSpec {
    tables: Selector,
    header_rows: Selector,
    cells: Selector,
    season_heading: Selector,
    required: Vec<String>,
}

impl GameLogSpec {
    pub fn new(markup: &MarkupConfig) -> Result<Self> {
        Ok(Self {
            tables: selector(&format!("table.{}", markup.title_table_class))?,
            header_rows: selector(&format!("tr.{}", markup.header_row_class))?,
            cells: selector("th, td")?,
            season_heading: selector(&format!(
                "{}.{}",
                markup.season_heading_tag, markup.season_heading_class
            ))?,
            required: markup.required_headers.iter().map(|h| h.trim().to_lowercase()).collect(),
        })
    }

    /// True when any header row names every required column.
    fn is_game_log(&self, table: ElementRef<'_>) -> bool {
        table.select(&self.header_rows).any(|tr| {
            let labels: Vec<String> = tr
                .select(&self.cells)
                .map(|c| cell_text(c).to_lowercase())
                .collect();
            self.required.iter().all(|r| labels.contains(r))
        })
    }
}

impl TableSource for GameLogSpec {
    fn candidates<'a>(&self, doc: &'a Html) -> Vec<Candidate<'a>> {
        let keep: HashSet<_> = doc
            .select(&self.tables)
            .filter(|t| self.is_game_log(*t))
            .map(|t| t.id())
            .collect();
        if keep.is_empty() {
            return Vec::new();
        }

        // One pre-order walk: the last season heading seen before a table
        // is its nearest preceding one.
        let mut heading: Option<ElementRef<'a>> = None;
        let mut out = Vec::with_capacity(keep.len());
        for node in doc.root_element().descendants() {
            let Some(el) = ElementRef::wrap(node) else { continue };
            if keep.contains(&el.id()) {
                out.push(Candidate { table: el, heading: heading.map(joined_text) });
            } else if self.season_heading.matches(&el) {
                heading = Some(el);
            }
        }
        out
    }

    fn describe(&self) -> String {
        let quoted: Vec<String> = self.required.iter().map(|r| format!("'{r}'")).collect();
        quoted.join(" / ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> GameLogSpec {
        GameLogSpec::new(&MarkupConfig::default()).unwrap()
    }

    #[test]
    fn header_match_is_case_insensitive_and_needs_all_three() {
        let doc = Html::parse_document(r#"
            <h4 class="plstats-head">2024 Season</h4>
            <table class="my_Title">
              <tr class="my_Headers"><td>DATE</td><td>Against team</td><td> result </td></tr>
            </table>
            <table class="my_Title">
              <tr class="my_Headers"><td>Date</td><td>Against Team</td><td>PTS</td></tr>
            </table>
        "#);
        let got = spec().candidates(&doc);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].heading.as_deref(), Some("2024 Season"));
    }

    #[test]
    fn header_cells_must_sit_in_a_header_classed_row() {
        let doc = Html::parse_document(r#"
            <table class="my_Title">
              <tr><td>Date</td><td>Against Team</td><td>Result</td></tr>
            </table>
        "#);
        assert!(spec().candidates(&doc).is_empty());
    }

    #[test]
    fn tables_without_title_class_are_ignored() {
        let doc = Html::parse_document(r#"
            <table class="other">
              <tr class="my_Headers"><td>Date</td><td>Against Team</td><td>Result</td></tr>
            </table>
        "#);
        assert!(spec().candidates(&doc).is_empty());
    }

    #[test]
    fn nearest_preceding_heading_wins() {
        let doc = Html::parse_document(r#"
            <h4 class="plstats-head">2022-2023</h4>
            <h4 class="plstats-head">2023-2024</h4>
            <div><h4 class="other">2030</h4></div>
            <table class="my_Title">
              <tr class="my_Headers"><th>Date</th><th>Against Team</th><th>Result</th></tr>
            </table>
        "#);
        let got = spec().candidates(&doc);
        assert_eq!(got[0].heading.as_deref(), Some("2023-2024"));
    }

    #[test]
    fn table_before_any_heading_has_none() {
        let doc = Html::parse_document(r#"
            <table class="my_Title">
              <tr class="my_Headers"><th>Date</th><th>Against Team</th><th>Result</th></tr>
            </table>
            <h4 class="plstats-head">2024</h4>
        "#);
        let got = spec().candidates(&doc);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].heading, None);
    }
}
