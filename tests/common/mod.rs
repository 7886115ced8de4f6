// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::RefCell;

use bb_gamelog::core::PageFetcher;
use bb_gamelog::progress::Progress;
use bb_gamelog::{Result, ScrapeError};

pub const GAME_LOG_PAGE: &str = include_str!("../fixtures/game_log.html");

/// Serves one canned page and a canned lookup answer; remembers what was fetched.
pub struct FixtureFetcher {
    pub page: Option<String>,
    pub lookup: Option<String>,
    pub fetched: RefCell<Vec<String>>,
}

impl FixtureFetcher {
    pub fn serving(page: &str) -> Self {
        Self { page: Some(page.to_string()), lookup: None, fetched: RefCell::new(Vec::new()) }
    }

    pub fn with_lookup(mut self, url: &str) -> Self {
        self.lookup = Some(url.to_string());
        self
    }
}

impl PageFetcher for FixtureFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        self.fetched.borrow_mut().push(url.to_string());
        self.page
            .clone()
            .ok_or_else(|| ScrapeError::Network(format!("HTTP 404 Not Found for {url}")))
    }

    fn lookup_by_name(&self, name: &str) -> Option<String> {
        if name.trim().is_empty() { None } else { self.lookup.clone() }
    }
}

/// Records every progress callback as a short event string.
#[derive(Default)]
pub struct RecordingProgress {
    pub events: Vec<String>,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) {
        self.events.push(format!("begin {total}"));
    }
    fn log(&mut self, msg: &str) {
        self.events.push(format!("log {msg}"));
    }
    fn step_done(&mut self, step: &str) {
        self.events.push(format!("done {step}"));
    }
    fn finish(&mut self) {
        self.events.push("finish".to_string());
    }
}
