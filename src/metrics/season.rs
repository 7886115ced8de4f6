// src/metrics/season.rs
use crate::records::GameRecord;
use super::stats::{mean, ratio};

/// The box-score categories summarized for a season.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BoxLine<T> {
    pub points: T,
    pub rebounds: T,
    pub assists: T,
    pub steals: T,
    pub blocks: T,
    pub turnovers: T,
    pub fouls: T,
}

impl<T: Copy> BoxLine<T> {
    /// Labelled values in report order.
    pub fn entries(&self) -> [(&'static str, T); 7] {
        [
            ("PTS", self.points),
            ("REB", self.rebounds),
            ("AS", self.assists),
            ("ST", self.steals),
            ("BS", self.blocks),
            ("TO", self.turnovers),
            ("PF", self.fouls),
        ]
    }

    fn map<U>(&self, f: impl Fn(T) -> U) -> BoxLine<U> {
        BoxLine {
            points: f(self.points),
            rebounds: f(self.rebounds),
            assists: f(self.assists),
            steals: f(self.steals),
            blocks: f(self.blocks),
            turnovers: f(self.turnovers),
            fouls: f(self.fouls),
        }
    }
}

impl BoxLine<i64> {
    fn of(r: &GameRecord) -> Self {
        Self {
            points: r.points as i64,
            rebounds: r.rebounds as i64,
            assists: r.assists as i64,
            steals: r.steals as i64,
            blocks: r.blocks as i64,
            turnovers: r.turnovers as i64,
            fouls: r.fouls as i64,
        }
    }

    fn add(self, o: Self) -> Self {
        Self {
            points: self.points + o.points,
            rebounds: self.rebounds + o.rebounds,
            assists: self.assists + o.assists,
            steals: self.steals + o.steals,
            blocks: self.blocks + o.blocks,
            turnovers: self.turnovers + o.turnovers,
            fouls: self.fouls + o.fouls,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ShootingTotals {
    pub two_made: i64,
    pub two_att: i64,
    pub three_made: i64,
    pub three_att: i64,
    pub ft_made: i64,
    pub ft_att: i64,
}

impl ShootingTotals {
    pub fn fgm(&self) -> i64 { self.two_made + self.three_made }
    pub fn fga(&self) -> i64 { self.two_att + self.three_att }

    pub fn entries(&self) -> [(&'static str, i64); 8] {
        [
            ("2FGM", self.two_made),
            ("2FGA", self.two_att),
            ("3FGM", self.three_made),
            ("3FGA", self.three_att),
            ("FTM", self.ft_made),
            ("FTA", self.ft_att),
            ("FGM", self.fgm()),
            ("FGA", self.fga()),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeasonSummary {
    pub games: usize,
    pub total_minutes: i64,
    /// `None` for an empty season.
    pub per_game: Option<BoxLine<f64>>,
    /// Per-game means scaled by mean minutes; `None` if no minutes were played.
    pub per_36: Option<BoxLine<f64>>,
    pub totals: BoxLine<i64>,
    pub shooting: ShootingTotals,
    pub efg: Option<f64>,
    pub ts: Option<f64>,
    pub avg_game_score: Option<f64>,
}

pub fn summarize_overall(records: &[GameRecord]) -> SeasonSummary {
    let games = records.len();
    let total_minutes: i64 = records.iter().map(|r| r.minutes as i64).sum();

    let totals = records
        .iter()
        .map(BoxLine::of)
        .fold(BoxLine::default(), BoxLine::add);

    let shooting = records.iter().fold(ShootingTotals::default(), |mut s, r| {
        s.two_made += r.two_made as i64;
        s.two_att += r.two_att as i64;
        s.three_made += r.three_made as i64;
        s.three_att += r.three_att as i64;
        s.ft_made += r.ft_made as i64;
        s.ft_att += r.ft_att as i64;
        s
    });

    let per_game = (games > 0).then(|| totals.map(|t| t as f64 / games as f64));
    // mean(stat) / mean(minutes), not a mean of per-game rates
    let mean_minutes = total_minutes as f64 / games.max(1) as f64;
    let per_36 = per_game
        .filter(|_| mean_minutes > 0.0)
        .map(|pg| pg.map(|v| v / mean_minutes * 36.0));

    let fga = shooting.fga() as f64;
    let efg = ratio(shooting.fgm() as f64 + 0.5 * shooting.three_made as f64, fga);
    let ts = ratio(totals.points as f64, 2.0 * (fga + 0.44 * shooting.ft_att as f64));

    SeasonSummary {
        games,
        total_minutes,
        per_game,
        per_36,
        totals,
        shooting,
        efg,
        ts,
        avg_game_score: mean(records.iter().map(|r| r.derived().game_score)),
    }
}
