// src/specs/mod.rs
//! # Page specs
//!
//! The site-specific knowledge lives here: *which elements* on a player page
//! are game-log candidates, and what a valid player URL looks like.
//!
//! The rest of the pipeline only sees the [`TableSource`] capability, so a
//! markup change on the site means swapping the implementation, not touching
//! the locator or the numeric code.
//!
//! ## Conventions
//! - Candidates come back in document order; the locator's tie-break relies
//!   on it.
//! - Specs do no I/O. Fetching is `core::net`; choosing a table is
//!   `scrape::locate`.
use scraper::{ElementRef, Html};

pub mod game_log;
pub mod player_url;

pub use game_log::GameLogSpec;
pub use player_url::canonical_player_url;

/// A table that passed the structural game-log test, plus the text of the
/// nearest season heading before it (if any).
#[derive(Clone, Debug)]
pub struct Candidate<'a> {
    pub table: ElementRef<'a>,
    pub heading: Option<String>,
}

/// Given a parsed document, return the elements that look like game logs.
pub trait TableSource {
    fn candidates<'a>(&self, doc: &'a Html) -> Vec<Candidate<'a>>;

    /// Human-readable description of what qualifies, for error messages.
    fn describe(&self) -> String;
}
