// src/csv.rs
use ::csv::WriterBuilder;

use crate::error::Result;
use crate::records::GameRecord;

/// Columns appended after the parsed ones, in order.
pub const DERIVED_COLUMNS: [&str; 18] = [
    "two_made", "two_att", "three_made", "three_att", "ft_made", "ft_att",
    "fgm", "fga", "team_score", "opp_score", "margin", "win", "reb",
    "efg", "ts", "game_score", "pts_per_36", "fga_per_36",
];

/* ---------------- cell formatting ---------------- */

fn opt(v: Option<f64>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

fn flag(b: bool) -> String {
    s!(if b { "True" } else { "False" })
}

/// The derived cells of one record, aligned with [`DERIVED_COLUMNS`].
pub fn derived_cells(r: &GameRecord) -> Vec<String> {
    let d = r.derived();
    vec![
        r.two_made.to_string(),
        r.two_att.to_string(),
        r.three_made.to_string(),
        r.three_att.to_string(),
        r.ft_made.to_string(),
        r.ft_att.to_string(),
        r.fgm().to_string(),
        r.fga().to_string(),
        r.team_score.to_string(),
        r.opp_score.to_string(),
        d.margin.to_string(),
        flag(d.win),
        r.rebounds.to_string(),
        opt(d.efg),
        opt(d.ts),
        d.game_score.to_string(),
        opt(d.pts_per_36),
        opt(d.fga_per_36),
    ]
}

/* ---------------- writing ---------------- */

/// Flat CSV of every record: the table's headers, then the derived columns.
pub fn to_csv(headers: &[String], records: &[GameRecord]) -> Result<String> {
    let mut w = WriterBuilder::new().flexible(false).from_writer(Vec::new());

    let header = headers
        .iter()
        .map(String::as_str)
        .chain(DERIVED_COLUMNS.iter().copied());
    w.write_record(header)?;

    for r in records {
        let mut row = r.cells.clone();
        row.extend(derived_cells(r));
        w.write_record(&row)?;
    }

    let bytes = w.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColumnNames;
    use crate::records::normalize;
    use crate::table::GameLogTable;

    fn records(rows: &[&[&str]]) -> (Vec<String>, Vec<GameRecord>) {
        let header = ["Against Team", "Result", "MIN", "PTS", "2FGP", "3FGP", "FT", "RT"];
        let mut raw = vec![header.iter().map(|c| s!(*c)).collect::<Vec<_>>()];
        raw.extend(rows.iter().map(|r| r.iter().map(|c| s!(*c)).collect()));
        let t = GameLogTable::from_rows(raw).unwrap();
        (t.headers().to_vec(), normalize(&t, &ColumnNames::default()).unwrap())
    }

    #[test]
    fn header_is_parsed_then_derived() {
        let (h, recs) = records(&[]);
        let out = to_csv(&h, &recs).unwrap();
        let first = out.lines().next().unwrap();
        assert!(first.starts_with("Against Team,Result,MIN,PTS,2FGP,3FGP,FT,RT,two_made,"));
        assert!(first.ends_with(",game_score,pts_per_36,fga_per_36"));
        assert_eq!(first.split(',').count(), 8 + DERIVED_COLUMNS.len());
    }

    #[test]
    fn absent_values_are_empty_fields() {
        let (h, recs) = records(&[&["B", "40-50", "0", "0", "0-0", "0-0", "0-0", "0"]]);
        let out = to_csv(&h, &recs).unwrap();
        let row = out.lines().nth(1).unwrap();
        // ... margin, win, reb, efg, ts, game_score, pts_per_36, fga_per_36
        assert!(row.ends_with(",-10,False,0,,,0,,"), "{row}");
    }

    #[test]
    fn win_flag_and_rates() {
        let (h, recs) = records(&[&["B", "50-40", "20", "10", "4-8", "0-2", "2-2", "3"]]);
        let out = to_csv(&h, &recs).unwrap();
        let cells: Vec<&str> = out.lines().nth(1).unwrap().split(',').collect();
        let at = |name: &str| cells[8 + DERIVED_COLUMNS.iter().position(|c| *c == name).unwrap()];
        assert_eq!(at("win"), "True");
        assert_eq!(at("margin"), "10");
        assert_eq!(at("fga"), "10");
        assert_eq!(at("efg"), "0.4");
        assert_eq!(at("pts_per_36"), "18");
    }

    #[test]
    fn cells_with_commas_are_quoted() {
        let (h, recs) = records(&[&["Team, The", "1-2", "0", "0", "0-0", "0-0", "0-0", "0"]]);
        let out = to_csv(&h, &recs).unwrap();
        assert!(out.lines().nth(1).unwrap().starts_with("\"Team, The\",1-2,"));
    }
}
