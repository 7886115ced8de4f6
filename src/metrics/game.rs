// src/metrics/game.rs
use crate::records::GameRecord;
use super::stats::ratio;

/// Per-game advanced metrics. Percentages and rates are `None` when their
/// denominator is zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedGameMetrics {
    pub efg: Option<f64>,
    pub ts: Option<f64>,
    pub game_score: f64,
    pub pts_per_36: Option<f64>,
    pub fga_per_36: Option<f64>,
    pub margin: i32,
    pub win: bool,
}

impl DerivedGameMetrics {
    pub fn from_record(r: &GameRecord) -> Self {
        let fgm = r.fgm() as f64;
        let fga = r.fga() as f64;
        let pts = r.points as f64;
        let minutes = r.minutes as f64;
        let margin = r.team_score - r.opp_score;

        Self {
            efg: ratio(fgm + 0.5 * r.three_made as f64, fga),
            ts: ratio(pts, 2.0 * (fga + 0.44 * r.ft_att as f64)),
            game_score: game_score(r),
            pts_per_36: ratio(pts, minutes).map(|v| v * 36.0),
            fga_per_36: ratio(fga, minutes).map(|v| v * 36.0),
            margin,
            win: margin > 0,
        }
    }
}

/// Hollinger game score.
fn game_score(r: &GameRecord) -> f64 {
    r.points as f64
        + 0.4 * r.fgm() as f64
        - 0.7 * r.fga() as f64
        - 0.4 * (r.ft_att - r.ft_made) as f64
        + 0.7 * r.reb_off as f64
        + 0.3 * r.reb_def as f64
        + r.steals as f64
        + 0.7 * r.assists as f64
        + 0.7 * r.blocks as f64
        - 0.4 * r.fouls as f64
        - r.turnovers as f64
}

/// Fill in the derived metrics of every record, in place.
pub fn derive_metrics(records: &mut [GameRecord]) {
    for r in records.iter_mut() {
        r.metrics = Some(DerivedGameMetrics::from_record(r));
    }
}
