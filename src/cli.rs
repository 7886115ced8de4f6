// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgGroup, Parser};
use color_eyre::eyre::{eyre, WrapErr};

use crate::config::{ExportOptions, SiteConfig, consts::DEFAULT_OUT_DIR};
use crate::core::HttpFetcher;
use crate::file::write_exports;
use crate::progress::Progress;
use crate::runner::{analyze, resolve_url, Analysis, PlayerInput};

#[derive(Parser, Debug)]
#[command(name = "bb_gamelog")]
#[command(about = "Scrape a player's latest-season game log and write advanced metrics", long_about = None)]
#[command(group(ArgGroup::new("player").required(true).args(["url", "name"])))]
pub struct Args {
    /// Player page URL
    #[arg(long)]
    pub url: Option<String>,

    /// Player name to look up
    #[arg(long)]
    pub name: Option<String>,

    /// Output directory
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    /// Override the User-Agent header
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Page fetch timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Skip the CSV export
    #[arg(long)]
    pub no_csv: bool,

    /// Skip the HTML report
    #[arg(long)]
    pub no_html: bool,

    /// Resolve and print the canonical player URL, then exit
    #[arg(long)]
    pub print_url: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    fn input(&self) -> Option<PlayerInput> {
        match (&self.url, &self.name) {
            (Some(url), _) => Some(PlayerInput::Url(url.clone())),
            (None, Some(name)) => Some(PlayerInput::Name(name.clone())),
            (None, None) => None,
        }
    }

    fn site_config(&self) -> SiteConfig {
        let mut config = SiteConfig::default();
        if let Some(ua) = &self.user_agent {
            config.net.user_agent = ua.clone();
        }
        if let Some(secs) = self.timeout {
            config.net.fetch_timeout = Duration::from_secs(secs);
        }
        config
    }

    fn export_options(&self) -> ExportOptions {
        ExportOptions {
            out_dir: self.out.clone(),
            write_csv: !self.no_csv,
            write_html: !self.no_html,
            ..ExportOptions::default()
        }
    }
}

/// Status lines on stderr.
struct StderrProgress {
    total: usize,
    done: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn step_done(&mut self, step: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {step} done", self.done, self.total);
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose);

    let input = args.input().ok_or_else(|| eyre!("pass either --url or --name"))?;
    let config = args.site_config();
    let fetcher = HttpFetcher::new(&config.net)?;

    if args.print_url {
        return match resolve_url(&input, &config, &fetcher, None)? {
            Some(url) => {
                println!("{url}");
                Ok(())
            }
            None => Err(not_found(&input)),
        };
    }

    let mut progress = StderrProgress { total: 0, done: 0 };
    let Some(analysis) = analyze(&input, &config, &fetcher, Some(&mut progress))? else {
        return Err(not_found(&input));
    };

    let export = args.export_options();
    let written = write_exports(&export, &analysis)
        .wrap_err_with(|| format!("writing exports to {}", export.out_dir.display()))?;

    print_summary(&analysis);
    for path in written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn not_found(input: &PlayerInput) -> color_eyre::Report {
    match input {
        PlayerInput::Name(name) => eyre!(
            "No player page found for \"{}\". Try a different spelling or pass --url.",
            name.trim()
        ),
        PlayerInput::Url(url) => eyre!("No player page found for {url}"),
    }
}

fn print_summary(a: &Analysis) {
    let pct = |v: Option<f64>| v.map_or_else(|| s!("n/a"), |x| format!("{x:.3}"));
    println!("Player page: {}", a.url);
    println!("Games: {}  Minutes: {}", a.summary.games, a.summary.total_minutes);
    println!("Season eFG%: {}  TS%: {}", pct(a.summary.efg), pct(a.summary.ts));
    if let Some(pg) = &a.summary.per_game {
        let line: Vec<String> = pg.entries().iter().map(|(l, v)| format!("{l} {v:.2}")).collect();
        println!("Per game: {}", line.join("  "));
    }
}
