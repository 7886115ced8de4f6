// src/core/html.rs
//! Thin helpers over `scraper` shared by the page specs.

use scraper::{ElementRef, Selector};

use crate::error::{Result, ScrapeError};
use super::sanitize::normalize_ws;

/// Compile a CSS selector built from configuration.
pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ScrapeError::Schema(format!("invalid CSS selector '{css}': {e}")))
}

/// Cell text: every text node trimmed, empties dropped, then concatenated.
/// `<td> 7 <b>-</b> 13 </td>` reads as `7-13`.
pub fn cell_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Heading text: text nodes joined by single spaces.
pub fn joined_text(el: ElementRef<'_>) -> String {
    let parts: Vec<&str> = el.text().map(str::trim).filter(|t| !t.is_empty()).collect();
    normalize_ws(&parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn cell_text_concatenates_trimmed_fragments() {
        let doc = Html::parse_fragment("<table><tr><td> 7 <b>-</b> 13\n</td></tr></table>");
        let td = doc.select(&selector("td").unwrap()).next().unwrap();
        assert_eq!(cell_text(td), "7-13");
    }

    #[test]
    fn joined_text_keeps_word_breaks() {
        let doc = Html::parse_fragment(r#"<h4 class="plstats-head"><span>2024-2025</span>Regular   Season</h4>"#);
        let h4 = doc.select(&selector("h4").unwrap()).next().unwrap();
        assert_eq!(joined_text(h4), "2024-2025 Regular Season");
    }

    #[test]
    fn bad_selector_is_a_schema_error() {
        assert!(matches!(selector("table..x"), Err(ScrapeError::Schema(_))));
    }
}
