// src/records.rs
//! Typed game records from the text table.
//!
//! Cell coercion never fails: unparseable numbers become 0. Only a missing
//! *column* the metrics depend on is an error.

use crate::config::ColumnNames;
use crate::error::{Result, ScrapeError};
use crate::metrics::DerivedGameMetrics;
use crate::table::GameLogTable;

/// One game of the season, in table order.
#[derive(Clone, Debug, PartialEq)]
pub struct GameRecord {
    pub date: String,
    pub team: String,
    pub opponent: String,
    pub result: String,

    pub minutes: i32,
    pub points: i32,
    pub reb_off: i32,
    pub reb_def: i32,
    pub rebounds: i32,
    pub assists: i32,
    pub steals: i32,
    pub blocks: i32,
    pub turnovers: i32,
    pub fouls: i32,

    pub two_made: i32,
    pub two_att: i32,
    pub three_made: i32,
    pub three_att: i32,
    pub ft_made: i32,
    pub ft_att: i32,

    pub team_score: i32,
    pub opp_score: i32,

    /// The parsed row in header order, numeric columns coerced.
    pub cells: Vec<String>,

    /// Filled by [`crate::metrics::derive_metrics`].
    pub metrics: Option<DerivedGameMetrics>,
}

impl GameRecord {
    pub fn fgm(&self) -> i32 { self.two_made + self.three_made }
    pub fn fga(&self) -> i32 { self.two_att + self.three_att }

    /// Derived metrics, computed on the spot if `derive_metrics` hasn't run.
    pub fn derived(&self) -> DerivedGameMetrics {
        self.metrics.unwrap_or_else(|| DerivedGameMetrics::from_record(self))
    }
}

/// Integer coercion for box-score cells: `"12"` → 12, `"31.5"` → 31,
/// anything else → 0.
pub fn coerce_int(cell: &str) -> i32 {
    let t = cell.trim();
    if let Ok(v) = t.parse::<i64>() {
        return v.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
    }
    match t.parse::<f64>() {
        Ok(v) if v.is_finite() => v.trunc().clamp(i32::MIN as f64, i32::MAX as f64) as i32,
        _ => 0,
    }
}

/// `"7-13"` → (7, 13). Splits on the first hyphen; each side that is missing
/// or not a number is 0.
pub fn split_made_attempts(cell: &str) -> (i32, i32) {
    match cell.split_once('-') {
        Some((made, att)) => (coerce_int(made), coerce_int(att)),
        None => (coerce_int(cell), 0),
    }
}

/// Resolved column positions for one table.
struct Columns {
    date: Option<usize>,
    team: Option<usize>,
    opponent: usize,
    result: usize,
    minutes: Option<usize>,
    points: Option<usize>,
    two_pt: usize,
    three_pt: usize,
    free_throws: usize,
    reb_off: Option<usize>,
    reb_def: Option<usize>,
    rebounds: Rebounds,
    assists: Option<usize>,
    steals: Option<usize>,
    blocks: Option<usize>,
    turnovers: Option<usize>,
    fouls: Option<usize>,
    numeric: Vec<usize>,
}

/// The two rebound layouts the site uses.
enum Rebounds {
    Total(usize),
    Split(usize, usize),
}

impl Columns {
    fn resolve(table: &GameLogTable, names: &ColumnNames) -> Result<Self> {
        let find = |name: &str| table.column(name);
        let need = |name: &str| {
            table.column(name).ok_or_else(|| {
                ScrapeError::Schema(format!("game log has no '{name}' column"))
            })
        };

        let reb_off = find(&names.reb_off);
        let reb_def = find(&names.reb_def);
        let rebounds = match (find(&names.reb_total), reb_off, reb_def) {
            (Some(rt), _, _) => Rebounds::Total(rt),
            (None, Some(ro), Some(rd)) => Rebounds::Split(ro, rd),
            _ => {
                return Err(ScrapeError::Schema(format!(
                    "game log has neither '{}' nor '{}' + '{}' rebound columns",
                    names.reb_total, names.reb_off, names.reb_def
                )))
            }
        };

        Ok(Self {
            date: find(&names.date),
            team: find(&names.team),
            opponent: need(&names.opponent)?,
            result: need(&names.result)?,
            minutes: find(&names.minutes),
            points: find(&names.points),
            two_pt: need(&names.two_pt)?,
            three_pt: need(&names.three_pt)?,
            free_throws: need(&names.free_throws)?,
            reb_off,
            reb_def,
            rebounds,
            assists: find(&names.assists),
            steals: find(&names.steals),
            blocks: find(&names.blocks),
            turnovers: find(&names.turnovers),
            fouls: find(&names.fouls),
            numeric: names.numeric.iter().filter_map(|n| find(n)).collect(),
        })
    }
}

/// Turn the text table into records. Row order is preserved.
pub fn normalize(table: &GameLogTable, names: &ColumnNames) -> Result<Vec<GameRecord>> {
    let cols = Columns::resolve(table, names)?;
    Ok(table.rows().iter().map(|row| build_record(row, &cols)).collect())
}

fn build_record(row: &[String], cols: &Columns) -> GameRecord {
    let text = |ix: usize| row.get(ix).map(|c| c.trim().to_string()).unwrap_or_default();
    let opt_text = |ix: Option<usize>| ix.map(text).unwrap_or_default();
    let int = |ix: Option<usize>| ix.and_then(|i| row.get(i)).map_or(0, |c| coerce_int(c));

    let (two_made, two_att) = split_made_attempts(&text(cols.two_pt));
    let (three_made, three_att) = split_made_attempts(&text(cols.three_pt));
    let (ft_made, ft_att) = split_made_attempts(&text(cols.free_throws));
    let result = text(cols.result);
    let (team_score, opp_score) = split_made_attempts(&result);

    let reb_off = int(cols.reb_off);
    let reb_def = int(cols.reb_def);
    let rebounds = match cols.rebounds {
        Rebounds::Total(rt) => int(Some(rt)),
        Rebounds::Split(ro, rd) => int(Some(ro)) + int(Some(rd)),
    };

    let mut cells = row.to_vec();
    for &ix in &cols.numeric {
        if let Some(c) = cells.get_mut(ix) {
            *c = coerce_int(c).to_string();
        }
    }

    GameRecord {
        date: opt_text(cols.date),
        team: opt_text(cols.team),
        opponent: text(cols.opponent),
        result,
        minutes: int(cols.minutes),
        points: int(cols.points),
        reb_off,
        reb_def,
        rebounds,
        assists: int(cols.assists),
        steals: int(cols.steals),
        blocks: int(cols.blocks),
        turnovers: int(cols.turnovers),
        fouls: int(cols.fouls),
        two_made,
        two_att,
        three_made,
        three_att,
        ft_made,
        ft_att,
        team_score,
        opp_score,
        cells,
        metrics: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: [&str; 16] = [
        "Date", "Team", "Against Team", "Result", "MIN", "PTS", "2FGP", "3FGP",
        "FT", "RO", "RD", "AS", "ST", "BS", "TO", "PF",
    ];

    fn table(header: &[&str], rows: &[&[&str]]) -> GameLogTable {
        let mut raw = vec![header.iter().map(|c| s!(*c)).collect::<Vec<_>>()];
        raw.extend(rows.iter().map(|r| r.iter().map(|c| s!(*c)).collect()));
        GameLogTable::from_rows(raw).unwrap()
    }

    #[test]
    fn made_attempts_split_on_first_hyphen() {
        assert_eq!(split_made_attempts("7-13"), (7, 13));
        assert_eq!(split_made_attempts(" 0-0 "), (0, 0));
        assert_eq!(split_made_attempts("7-"), (7, 0));
        assert_eq!(split_made_attempts("-13"), (0, 13));
        assert_eq!(split_made_attempts("x-y"), (0, 0));
        assert_eq!(split_made_attempts("1-2-3"), (1, 0));
        assert_eq!(split_made_attempts(""), (0, 0));
    }

    #[test]
    fn coerce_int_degrades_to_zero() {
        assert_eq!(coerce_int("31"), 31);
        assert_eq!(coerce_int(" 31.9 "), 31);
        assert_eq!(coerce_int("DNP"), 0);
        assert_eq!(coerce_int(""), 0);
        assert_eq!(coerce_int("inf"), 0);
    }

    #[test]
    fn builds_record_from_sixteen_column_row() {
        let t = table(&HEADER, &[&[
            "1/1", "A", "B", "50-40", "30", "20", "6-10", "2-5", "4-4", "2", "3", "5", "1", "0", "2", "1",
        ]]);
        let recs = normalize(&t, &ColumnNames::default()).unwrap();
        assert_eq!(recs.len(), 1);
        let r = &recs[0];
        assert_eq!(r.opponent, "B");
        assert_eq!((r.team_score, r.opp_score), (50, 40));
        assert_eq!((r.fgm(), r.fga()), (8, 15));
        assert_eq!((r.ft_made, r.ft_att), (4, 4));
        assert_eq!(r.rebounds, 5);
        assert_eq!(r.minutes, 30);
        assert!(r.metrics.is_none());
    }

    #[test]
    fn total_rebound_column_wins_over_split() {
        let t = table(
            &["Against Team", "Result", "2FGP", "3FGP", "FT", "RO", "RD", "RT"],
            &[&["B", "1-2", "0-0", "0-0", "0-0", "1", "1", "9"]],
        );
        let r = &normalize(&t, &ColumnNames::default()).unwrap()[0];
        assert_eq!(r.rebounds, 9);
        assert_eq!((r.reb_off, r.reb_def), (1, 1));
    }

    #[test]
    fn no_rebound_columns_is_schema_error() {
        let t = table(
            &["Against Team", "Result", "2FGP", "3FGP", "FT", "RO"],
            &[&["B", "1-2", "0-0", "0-0", "0-0", "1"]],
        );
        assert!(matches!(normalize(&t, &ColumnNames::default()), Err(ScrapeError::Schema(_))));
    }

    #[test]
    fn missing_shooting_column_is_schema_error() {
        let t = table(&["Against Team", "Result", "2FGP", "FT", "RT"], &[&["B", "1-2", "0-0", "0-0", "1"]]);
        let err = normalize(&t, &ColumnNames::default()).unwrap_err();
        assert!(err.to_string().contains("3FGP"));
    }

    #[test]
    fn numeric_cells_are_coerced_for_export() {
        let t = table(&HEADER, &[&[
            "1/1", "A", "B", "50-40", "DNP", "20", "6-10", "2-5", "4-4", "2", "3", "5", "1", "0", "2", "1",
        ]]);
        let r = &normalize(&t, &ColumnNames::default()).unwrap()[0];
        assert_eq!(r.minutes, 0);
        assert_eq!(r.cells[4], "0");
        // shooting columns keep their text
        assert_eq!(r.cells[6], "6-10");
    }
}
