// src/specs/player_url.rs
//! Player-page URLs.
//!
//! The same player is reachable under several path shapes, e.g.
//!
//! ```text
//! https://basketball.eurobasket.com/player/LeBron-James/NBA/Cleveland-Cavaliers/52424
//! https://basketball.usbasket.com/player/LeBron-James/52424
//! ```
//!
//! Both collapse to `{canonical_base}/player/{slug}/{id}`.

use reqwest::Url;

use crate::config::NetConfig;
use crate::error::{Result, ScrapeError};

pub fn canonical_player_url(url: &str, net: &NetConfig) -> Result<String> {
    let raw = url.trim();
    let with_scheme = if raw.contains("://") { s!(raw) } else { join!("https://", raw) };
    let parsed = Url::parse(&with_scheme)
        .map_err(|e| ScrapeError::InvalidUrl(format!("{raw}: {e}")))?;

    let parts: Vec<&str> = parsed
        .path()
        .trim_matches('/')
        .split('/')
        .filter(|p| !p.is_empty())
        .collect();

    let [first, slug, .., id] = parts.as_slice() else {
        return Err(invalid(raw, "expected /player/<slug>/.../<id>"));
    };
    if !first.eq_ignore_ascii_case(&net.player_segment) {
        return Err(invalid(raw, &format!("path must start with /{}/", net.player_segment)));
    }
    if !id.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid(raw, "last path segment must be a numeric player id"));
    }

    Ok(format!(
        "{}/{}/{slug}/{id}",
        net.canonical_base.trim_end_matches('/'),
        net.player_segment
    ))
}

fn invalid(url: &str, why: &str) -> ScrapeError {
    ScrapeError::InvalidUrl(format!("{url} ({why})"))
}
