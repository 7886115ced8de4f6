// src/runner.rs
use crate::{
    config::SiteConfig,
    core::PageFetcher,
    csv::to_csv,
    error::Result,
    metrics::{derive_metrics, summarize_overall, summarize_splits, SeasonSummary, SplitSummary},
    progress::Progress,
    records::{normalize, GameRecord},
    report::render_report,
    scrape::scrape,
    specs::canonical_player_url,
    table::GameLogTable,
};

/// What the user asked for: a page address or a name to look up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerInput {
    Url(String),
    Name(String),
}

/// Everything one run produces.
#[derive(Clone, Debug)]
pub struct Analysis {
    pub url: String,
    pub table: GameLogTable,
    pub records: Vec<GameRecord>,
    pub summary: SeasonSummary,
    pub splits: SplitSummary,
    pub csv: String,
    pub report: String,
}

/// Resolve the input to a canonical player URL.
/// `Ok(None)` means the name lookup found nobody.
pub fn resolve_url(
    input: &PlayerInput,
    config: &SiteConfig,
    fetcher: &dyn PageFetcher,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Option<String>> {
    let raw = match input {
        PlayerInput::Url(url) => s!(url.as_str()),
        PlayerInput::Name(name) => {
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Looking up \"{}\"", name.trim()));
            }
            let Some(url) = fetcher.lookup_by_name(name) else {
                return Ok(None);
            };
            url
        }
    };
    canonical_player_url(&raw, &config.net).map(Some)
}

/// The whole pipeline. `Ok(None)` only when a name lookup found nobody; any
/// other failure is an error and nothing partial is returned.
pub fn analyze(
    input: &PlayerInput,
    config: &SiteConfig,
    fetcher: &dyn PageFetcher,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Option<Analysis>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(3);
    }
    let out = run_steps(input, config, fetcher, progress.as_deref_mut());
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    out
}

fn run_steps(
    input: &PlayerInput,
    config: &SiteConfig,
    fetcher: &dyn PageFetcher,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Option<Analysis>> {
    let Some(url) = resolve_url(input, config, fetcher, progress.as_deref_mut())? else {
        return Ok(None);
    };
    step(&mut progress, "resolve");

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching {url}"));
    }
    let table = scrape(&url, config, fetcher)?;
    step(&mut progress, "scrape");

    let mut records = normalize(&table, &config.columns)?;
    derive_metrics(&mut records);
    let summary = summarize_overall(&records);
    let splits = summarize_splits(&records);
    let csv = to_csv(table.headers(), &records)?;
    let report = render_report(&url, &summary, &splits);
    step(&mut progress, "analyze");

    logf!("Analyzed {} game(s) from {url}", records.len());
    Ok(Some(Analysis { url, table, records, summary, splits, csv, report }))
}

fn step(progress: &mut Option<&mut (dyn Progress + '_)>, name: &str) {
    if let Some(p) = progress.as_deref_mut() {
        p.step_done(name);
    }
}
