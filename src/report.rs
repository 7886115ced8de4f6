// src/report.rs
//! Self-contained HTML summary of a season.
//!
//! All rounding happens here, at display time. Absent values print as `n/a`.

use std::fmt::Write;

use chrono::{Local, NaiveDateTime};

use crate::core::sanitize::escape_html;
use crate::metrics::{BoxLine, SeasonSummary, SplitLine, SplitSummary};

const NA: &str = "n/a";

const STYLE: &str = "\
body{font-family:system-ui,-apple-system,'Segoe UI',sans-serif;margin:2rem;color:#1d2330;background:#fafbfc}
h1{font-size:1.5rem;margin-bottom:.25rem}
h2{font-size:1.15rem;margin-top:2rem}
.meta{color:#5a6275;font-size:.9rem}
.cards{display:flex;flex-wrap:wrap;gap:1rem;margin:1.5rem 0}
.card{background:#fff;border:1px solid #dde1e8;border-radius:6px;padding:.75rem 1.25rem;min-width:8rem}
.card .label{font-size:.8rem;color:#5a6275;text-transform:uppercase}
.card .value{font-size:1.4rem;font-weight:600}
table{border-collapse:collapse;background:#fff;margin-bottom:1rem}
th,td{border:1px solid #dde1e8;padding:.35rem .7rem;text-align:right}
th{background:#eef1f6}
td:first-child,th:first-child{text-align:left}";

/* ---------------- formatting ---------------- */

fn fixed(v: Option<f64>, places: usize) -> String {
    match v {
        Some(x) => format!("{x:.places$}"),
        None => s!(NA),
    }
}

fn card(out: &mut String, label: &str, value: &str) {
    let _ = write!(
        out,
        "<div class=\"card\"><div class=\"label\">{}</div><div class=\"value\">{}</div></div>",
        escape_html(label),
        escape_html(value)
    );
}

/// One table with a header row and `(label, cells)` rows.
fn table(out: &mut String, title: &str, head: &[&str], rows: &[(String, Vec<String>)]) {
    let _ = write!(out, "<h2>{}</h2>\n<table>\n<tr>", escape_html(title));
    for h in head {
        let _ = write!(out, "<th>{}</th>", escape_html(h));
    }
    out.push_str("</tr>\n");
    for (label, cells) in rows {
        let _ = write!(out, "<tr><td>{}</td>", escape_html(label));
        for c in cells {
            let _ = write!(out, "<td>{}</td>", escape_html(c));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n");
}

/// Single-row table of a float box line; `n/a` throughout when absent.
fn box_table(out: &mut String, title: &str, line: Option<&BoxLine<f64>>) {
    let labels = BoxLine::<f64>::default().entries().map(|(l, _)| l);
    let cells: Vec<String> = match line {
        Some(l) => l.entries().iter().map(|(_, v)| fixed(Some(*v), 2)).collect(),
        None => vec![s!(NA); labels.len()],
    };
    let mut head = vec![""];
    head.extend(labels);
    table(out, title, &head, &[(s!("Season"), cells)]);
}

fn split_rows<K>(groups: &[(K, SplitLine)], label: impl Fn(&K) -> String) -> Vec<(String, Vec<String>)> {
    groups
        .iter()
        .map(|(k, line)| {
            let mut vals = line.values().into_iter();
            // game count is an integer
            let games = vals.next().flatten().map_or_else(|| s!(NA), |g| format!("{g:.0}"));
            let mut cells = vec![games];
            cells.extend(vals.map(|v| fixed(v, 2)));
            (label(k), cells)
        })
        .collect()
}

/* ---------------- rendering ---------------- */

/// Render the report, stamped with the current local time.
pub fn render_report(url: &str, summary: &SeasonSummary, splits: &SplitSummary) -> String {
    render_report_at(url, summary, splits, Local::now().naive_local())
}

pub fn render_report_at(
    url: &str,
    summary: &SeasonSummary,
    splits: &SplitSummary,
    generated: NaiveDateTime,
) -> String {
    let mut out = String::with_capacity(8 * 1024);
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Player season summary</title>\n<style>\n{STYLE}\n</style>\n</head>\n<body>\n\
         <h1>Player season summary</h1>\n\
         <p class=\"meta\">Generated {}<br>Source: <a href=\"{url}\">{url}</a></p>\n",
        generated.format("%Y-%m-%d %H:%M:%S"),
        url = escape_html(url),
    );

    out.push_str("<div class=\"cards\">");
    card(&mut out, "Games", &summary.games.to_string());
    card(&mut out, "Total minutes", &summary.total_minutes.to_string());
    card(&mut out, "Season eFG%", &fixed(summary.efg, 3));
    card(&mut out, "Season TS%", &fixed(summary.ts, 3));
    card(&mut out, "Avg game score", &fixed(summary.avg_game_score, 2));
    out.push_str("</div>\n");

    box_table(&mut out, "Per game", summary.per_game.as_ref());
    box_table(&mut out, "Per 36 minutes", summary.per_36.as_ref());

    let totals = summary.totals.entries();
    let mut head = vec![""];
    head.extend(totals.iter().map(|(l, _)| *l));
    let cells: Vec<String> = totals.iter().map(|(_, v)| v.to_string()).collect();
    table(&mut out, "Season totals", &head, &[(s!("Season"), cells)]);

    let shooting = summary.shooting.entries();
    let mut head = vec![""];
    head.extend(shooting.iter().map(|(l, _)| *l));
    let cells: Vec<String> = shooting.iter().map(|(_, v)| v.to_string()).collect();
    table(&mut out, "Shooting totals", &head, &[(s!("Season"), cells)]);

    let mut head = vec![""];
    head.extend(SplitLine::LABELS);
    let by_result = split_rows(&splits.by_result, |win| s!(if *win { "Win" } else { "Loss" }));
    table(&mut out, "Win / Loss", &head, &by_result);
    let mut head = vec!["Opponent"];
    head.extend(SplitLine::LABELS);
    let by_opponent = split_rows(&splits.by_opponent, |opp| opp.clone());
    table(&mut out, "By opponent", &head, &by_opponent);

    table(
        &mut out,
        "Correlations",
        &["Pair", "Pearson r"],
        &[
            (s!("MIN vs PTS"), vec![fixed(splits.corr_min_pts, 3)]),
            (s!("MIN vs game score"), vec![fixed(splits.corr_min_game_score, 3)]),
        ],
    );

    out.push_str("</body>\n</html>\n");
    out
}
