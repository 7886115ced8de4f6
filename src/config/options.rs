// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// Everything the pipeline needs to know about the remote site.
/// Built once by the caller and passed down; components never read globals.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SiteConfig {
    pub net: NetConfig,
    pub markup: MarkupConfig,
    pub columns: ColumnNames,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetConfig {
    pub user_agent: String,
    pub fetch_timeout: Duration,
    pub lookup_timeout: Duration,
    pub search_url: String,
    pub search_text_field: String,
    pub search_type_field: String,
    pub search_type: String,
    pub origin: String,
    pub referer: String,
    /// Substring the lookup's final URL must contain to count as a hit.
    pub player_url_pattern: String,
    pub canonical_base: String,
    pub player_segment: String,
}

impl Default for NetConfig {
    fn default() -> Self {
        Self {
            user_agent: s!(USER_AGENT),
            fetch_timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            lookup_timeout: Duration::from_secs(LOOKUP_TIMEOUT_SECS),
            search_url: s!(SEARCH_URL),
            search_text_field: s!(SEARCH_TEXT_FIELD),
            search_type_field: s!(SEARCH_TYPE_FIELD),
            search_type: s!(SEARCH_TYPE_PLAYER),
            origin: s!(SEARCH_ORIGIN),
            referer: s!(SEARCH_REFERER),
            player_url_pattern: s!(PLAYER_URL_PATTERN),
            canonical_base: s!(CANONICAL_BASE),
            player_segment: s!(PLAYER_SEGMENT),
        }
    }
}

/// Class names and labels the table locator matches on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkupConfig {
    pub title_table_class: String,
    pub header_row_class: String,
    pub season_heading_tag: String,
    pub season_heading_class: String,
    /// Header labels a game-log table must carry (compared lowercased).
    pub required_headers: Vec<String>,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            title_table_class: s!(TITLE_TABLE_CLASS),
            header_row_class: s!(HEADER_ROW_CLASS),
            season_heading_tag: s!(SEASON_HEADING_TAG),
            season_heading_class: s!(SEASON_HEADING_CLASS),
            required_headers: vec![s!(COL_DATE), s!(COL_OPPONENT), s!(COL_RESULT)],
        }
    }
}

/// Column names of the game-log table as the site prints them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnNames {
    pub date: String,
    pub team: String,
    pub opponent: String,
    pub result: String,
    pub minutes: String,
    pub points: String,
    pub two_pt: String,
    pub three_pt: String,
    pub free_throws: String,
    pub reb_off: String,
    pub reb_def: String,
    pub reb_total: String,
    pub assists: String,
    pub steals: String,
    pub blocks: String,
    pub turnovers: String,
    pub fouls: String,
    /// Coerced to integers in the exported cells.
    pub numeric: Vec<String>,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            date: s!(COL_DATE),
            team: s!(COL_TEAM),
            opponent: s!(COL_OPPONENT),
            result: s!(COL_RESULT),
            minutes: s!(COL_MINUTES),
            points: s!(COL_POINTS),
            two_pt: s!(COL_TWO_PT),
            three_pt: s!(COL_THREE_PT),
            free_throws: s!(COL_FREE_THROWS),
            reb_off: s!(COL_REB_OFF),
            reb_def: s!(COL_REB_DEF),
            reb_total: s!(COL_REB_TOTAL),
            assists: s!(COL_ASSISTS),
            steals: s!(COL_STEALS),
            blocks: s!(COL_BLOCKS),
            turnovers: s!(COL_TURNOVERS),
            fouls: s!(COL_FOULS),
            numeric: NUMERIC_COLUMNS.iter().map(|c| s!(*c)).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub csv_stem: String,
    pub html_stem: String,
    pub write_csv: bool,
    pub write_html: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            csv_stem: s!(DEFAULT_CSV_STEM),
            html_stem: s!(DEFAULT_HTML_STEM),
            write_csv: true,
            write_html: true,
        }
    }
}

impl ExportOptions {
    pub fn csv_path(&self) -> PathBuf {
        self.out_dir.join(join!(&self.csv_stem, ".csv"))
    }

    pub fn html_path(&self) -> PathBuf {
        self.out_dir.join(join!(&self.html_stem, ".html"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_land_in_out_dir() {
        let opts = ExportOptions::default();
        assert_eq!(opts.csv_path(), PathBuf::from("out").join("player_game_log_advanced.csv"));
        assert_eq!(opts.html_path(), PathBuf::from("out").join("player_summary.html"));
    }

    #[test]
    fn default_markup_requires_the_three_game_log_headers() {
        let m = MarkupConfig::default();
        assert_eq!(m.required_headers, vec!["Date", "Against Team", "Result"]);
    }
}
