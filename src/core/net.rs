// src/core/net.rs
//! Blocking HTTP for the two requests a run makes: the player page GET and
//! the name-lookup POST.

use std::time::Instant;

use reqwest::blocking::Client;
use reqwest::header::{ORIGIN, REFERER};

use crate::config::NetConfig;
use crate::error::{Result, ScrapeError};
use super::sanitize::strip_query_fragment;

/// The network side of the pipeline.
///
/// `fetch` failures are fatal for the run. `lookup_by_name` never fails: any
/// problem (empty name, request error, unexpected landing page) is `None`.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String>;
    fn lookup_by_name(&self, name: &str) -> Option<String>;
}

/// Live fetcher over `reqwest::blocking`. No retries.
pub struct HttpFetcher {
    client: Client,
    net: NetConfig,
}

impl HttpFetcher {
    pub fn new(net: &NetConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(net.user_agent.as_str())
            .build()
            .map_err(|e| ScrapeError::Network(format!("failed to build http client: {e}")))?;
        Ok(Self { client, net: net.clone() })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let t = Instant::now();
        let resp = self.client
            .get(url)
            .timeout(self.net.fetch_timeout)
            .send()
            .map_err(|e| ScrapeError::Network(format!("GET {url}: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Network(format!("HTTP {status} for {url}")));
        }
        let body = resp
            .text()
            .map_err(|e| ScrapeError::Network(format!("reading body of {url}: {e}")))?;

        logd!("Fetched {} bytes from {url} in {:?}", body.len(), t.elapsed());
        Ok(body)
    }

    fn lookup_by_name(&self, name: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        // form() sets the urlencoded Content-Type; redirects are followed.
        let form = [
            (self.net.search_text_field.as_str(), name),
            (self.net.search_type_field.as_str(), self.net.search_type.as_str()),
        ];
        let sent = self.client
            .post(&self.net.search_url)
            .timeout(self.net.lookup_timeout)
            .header(ORIGIN, self.net.origin.as_str())
            .header(REFERER, self.net.referer.as_str())
            .form(&form)
            .send();

        let resp = match sent {
            Ok(r) => r,
            Err(e) => {
                loge!("Lookup for '{name}' failed: {e}");
                return None;
            }
        };
        if !resp.status().is_success() {
            loge!("Lookup for '{name}' returned HTTP {}", resp.status());
            return None;
        }

        let found = accept_lookup_url(resp.url().as_str(), &self.net.player_url_pattern);
        match &found {
            Some(url) => logf!("Lookup '{name}' → {url}"),
            None => logf!("Lookup '{name}' landed on {} (no player page)", resp.url()),
        }
        found
    }
}

/// The search endpoint redirects straight to the player page on a hit; any
/// other landing page means "not found".
pub fn accept_lookup_url(final_url: &str, pattern: &str) -> Option<String> {
    if final_url.contains(pattern) {
        Some(strip_query_fragment(final_url).to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::PLAYER_URL_PATTERN;

    #[test]
    fn player_landing_page_is_accepted_and_cleaned() {
        let got = accept_lookup_url(
            "https://basketball.usbasket.com/player/LeBron-James/52424?Women=0#stats",
            PLAYER_URL_PATTERN,
        );
        assert_eq!(got.as_deref(), Some("https://basketball.usbasket.com/player/LeBron-James/52424"));
    }

    #[test]
    fn search_results_page_is_not_found() {
        let got = accept_lookup_url(
            "https://www.eurobasket.com/basketball-search.aspx?q=nobody",
            PLAYER_URL_PATTERN,
        );
        assert_eq!(got, None);
    }

    #[test]
    fn blank_name_skips_the_request() {
        let fetcher = HttpFetcher::new(&NetConfig::default()).unwrap();
        assert_eq!(fetcher.lookup_by_name("   "), None);
    }
}
