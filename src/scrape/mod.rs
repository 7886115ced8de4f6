// src/scrape/mod.rs
mod locate;
mod page;

pub use locate::{locate, pick_latest, season_year};
pub use page::{extract_rows, parse_doc, scrape};
