// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/127.0.0.0 Safari/537.36";
pub const FETCH_TIMEOUT_SECS: u64 = 15;
pub const LOOKUP_TIMEOUT_SECS: u64 = 10;

// Name lookup (third-party search, answers with a redirect)
pub const SEARCH_URL: &str = "https://www.eurobasket.com/basketball-search.aspx";
pub const SEARCH_TEXT_FIELD: &str = "txtSearch";
pub const SEARCH_TYPE_FIELD: &str = "SearchType";
pub const SEARCH_TYPE_PLAYER: &str = "Player";
pub const SEARCH_ORIGIN: &str = "https://basketball.usbasket.com";
pub const SEARCH_REFERER: &str = "https://basketball.usbasket.com/";
pub const PLAYER_URL_PATTERN: &str = "basketball.usbasket.com/player/";

// Canonical player pages: {CANONICAL_BASE}/{PLAYER_SEGMENT}/{slug}/{id}
pub const CANONICAL_BASE: &str = "https://basketball.usbasket.com";
pub const PLAYER_SEGMENT: &str = "player";

// Markup
pub const TITLE_TABLE_CLASS: &str = "my_Title";
pub const HEADER_ROW_CLASS: &str = "my_Headers";
pub const SEASON_HEADING_TAG: &str = "h4";
pub const SEASON_HEADING_CLASS: &str = "plstats-head";

// Game-log columns
pub const COL_DATE: &str = "Date";
pub const COL_TEAM: &str = "Team";
pub const COL_OPPONENT: &str = "Against Team";
pub const COL_RESULT: &str = "Result";
pub const COL_MINUTES: &str = "MIN";
pub const COL_POINTS: &str = "PTS";
pub const COL_TWO_PT: &str = "2FGP";
pub const COL_THREE_PT: &str = "3FGP";
pub const COL_FREE_THROWS: &str = "FT";
pub const COL_REB_OFF: &str = "RO";
pub const COL_REB_DEF: &str = "RD";
pub const COL_REB_TOTAL: &str = "RT";
pub const COL_ASSISTS: &str = "AS";
pub const COL_STEALS: &str = "ST";
pub const COL_BLOCKS: &str = "BS";
pub const COL_TURNOVERS: &str = "TO";
pub const COL_FOULS: &str = "PF";
pub const COL_RANK: &str = "RNK";

/// Columns coerced to integers in place (0 when unparseable).
pub const NUMERIC_COLUMNS: [&str; 10] = [
    COL_MINUTES, COL_POINTS, COL_REB_OFF, COL_REB_DEF, COL_ASSISTS,
    COL_FOULS, COL_BLOCKS, COL_STEALS, COL_TURNOVERS, COL_RANK,
];

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_CSV_STEM: &str = "player_game_log_advanced";
pub const DEFAULT_HTML_STEM: &str = "player_summary";
