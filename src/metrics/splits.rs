// src/metrics/splits.rs
use std::collections::BTreeMap;

use crate::records::GameRecord;
use super::stats::{mean, mean_present, pearson};

/// Group means for one split bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitLine {
    pub games: usize,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    pub ts: Option<f64>,
    pub efg: Option<f64>,
    pub game_score: f64,
}

impl SplitLine {
    /// Column labels matching [`SplitLine::values`].
    pub const LABELS: [&'static str; 10] =
        ["G", "PTS", "REB", "AS", "ST", "BS", "TO", "TS%", "eFG%", "GmSc"];

    /// `games` first, then the means. Only `ts`/`efg` can be absent.
    pub fn values(&self) -> [Option<f64>; 10] {
        [
            Some(self.games as f64),
            Some(self.points),
            Some(self.rebounds),
            Some(self.assists),
            Some(self.steals),
            Some(self.blocks),
            Some(self.turnovers),
            self.ts,
            self.efg,
            Some(self.game_score),
        ]
    }

    fn of(group: &[&GameRecord]) -> Self {
        let avg = |f: fn(&GameRecord) -> i32| {
            mean(group.iter().map(|r| f(r) as f64)).unwrap_or_default()
        };
        let derived: Vec<_> = group.iter().map(|r| r.derived()).collect();
        Self {
            games: group.len(),
            points: avg(|r| r.points),
            rebounds: avg(|r| r.rebounds),
            assists: avg(|r| r.assists),
            steals: avg(|r| r.steals),
            blocks: avg(|r| r.blocks),
            turnovers: avg(|r| r.turnovers),
            ts: mean_present(derived.iter().map(|d| d.ts)),
            efg: mean_present(derived.iter().map(|d| d.efg)),
            game_score: mean(derived.iter().map(|d| d.game_score)).unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SplitSummary {
    /// `(win, line)`, losses first.
    pub by_result: Vec<(bool, SplitLine)>,
    /// `(opponent, line)`, sorted by opponent name.
    pub by_opponent: Vec<(String, SplitLine)>,
    pub corr_min_pts: Option<f64>,
    pub corr_min_game_score: Option<f64>,
}

pub fn summarize_splits(records: &[GameRecord]) -> SplitSummary {
    let mut by_result: BTreeMap<bool, Vec<&GameRecord>> = BTreeMap::new();
    let mut by_opponent: BTreeMap<&str, Vec<&GameRecord>> = BTreeMap::new();
    for r in records {
        by_result.entry(r.derived().win).or_default().push(r);
        by_opponent.entry(r.opponent.as_str()).or_default().push(r);
    }

    let minutes: Vec<f64> = records.iter().map(|r| r.minutes as f64).collect();
    let points: Vec<f64> = records.iter().map(|r| r.points as f64).collect();
    let game_score: Vec<f64> = records.iter().map(|r| r.derived().game_score).collect();

    SplitSummary {
        by_result: by_result
            .into_iter()
            .map(|(win, g)| (win, SplitLine::of(&g)))
            .collect(),
        by_opponent: by_opponent
            .into_iter()
            .map(|(opp, g)| (s!(opp), SplitLine::of(&g)))
            .collect(),
        corr_min_pts: pearson(&minutes, &points),
        corr_min_game_score: pearson(&minutes, &game_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::game::tests::record;
    use approx::assert_relative_eq;

    fn game(opp: &str, minutes: i32, points: i32, us: i32, them: i32) -> GameRecord {
        let mut r = record(opp, minutes, points);
        r.team_score = us;
        r.opp_score = them;
        r
    }

    #[test]
    fn groups_by_result_losses_first() {
        let recs = vec![
            game("B", 30, 20, 80, 70),
            game("C", 20, 10, 60, 70),
            game("B", 34, 30, 90, 70),
        ];
        let s = summarize_splits(&recs);
        assert_eq!(s.by_result.len(), 2);
        let (loss, loss_line) = &s.by_result[0];
        let (win, win_line) = &s.by_result[1];
        assert!(!loss && *win);
        assert_eq!(loss_line.games, 1);
        assert_relative_eq!(loss_line.points, 10.0);
        assert_eq!(win_line.games, 2);
        assert_relative_eq!(win_line.points, 25.0);
    }

    #[test]
    fn groups_by_opponent_sorted() {
        let recs = vec![game("Zeta", 30, 20, 1, 0), game("Alpha", 30, 10, 1, 0), game("Zeta", 30, 0, 0, 1)];
        let s = summarize_splits(&recs);
        let names: Vec<&str> = s.by_opponent.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["Alpha", "Zeta"]);
        assert_relative_eq!(s.by_opponent[1].1.points, 10.0);
    }

    #[test]
    fn shooting_means_skip_absent_games() {
        let mut shot = game("B", 30, 10, 1, 0);
        shot.two_made = 5; shot.two_att = 10;
        let idle = game("B", 0, 0, 1, 0);
        let s = summarize_splits(&[shot, idle]);
        let line = &s.by_opponent[0].1;
        assert_eq!(line.games, 2);
        assert_relative_eq!(line.efg.unwrap(), 0.5);
        assert_relative_eq!(line.points, 5.0);
    }

    #[test]
    fn all_absent_group_mean_is_absent() {
        let s = summarize_splits(&[game("B", 0, 0, 0, 1)]);
        assert_eq!(s.by_result[0].1.ts, None);
        assert_eq!(s.by_result[0].1.efg, None);
    }

    #[test]
    fn constant_minutes_have_no_correlation() {
        let recs = vec![game("B", 30, 20, 1, 0), game("C", 30, 10, 1, 0), game("D", 30, 5, 1, 0)];
        let s = summarize_splits(&recs);
        assert_eq!(s.corr_min_pts, None);
        assert_eq!(s.corr_min_game_score, None);
    }

    #[test]
    fn constant_fractional_game_score_has_no_correlation() {
        // one assist and nothing else: game score 0.7 every game
        let recs: Vec<GameRecord> = [10, 20, 30, 25]
            .into_iter()
            .map(|min| {
                let mut r = game("B", min, 0, 1, 0);
                r.assists = 1;
                r
            })
            .collect();
        let s = summarize_splits(&recs);
        assert_relative_eq!(recs[0].derived().game_score, 0.7, epsilon = 1e-12);
        assert_eq!(s.corr_min_game_score, None);
        assert_eq!(s.corr_min_pts, None);
    }

    #[test]
    fn minutes_track_points() {
        let recs = vec![game("B", 10, 5, 1, 0), game("C", 20, 10, 1, 0), game("D", 30, 15, 1, 0)];
        let s = summarize_splits(&recs);
        assert_relative_eq!(s.corr_min_pts.unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(s.corr_min_game_score.unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_season_has_no_groups() {
        let s = summarize_splits(&[]);
        assert!(s.by_result.is_empty() && s.by_opponent.is_empty());
        assert_eq!(s.corr_min_pts, None);
    }
}
