// File: crates/idle-data/src/series.rs
// Summary: Reshapes a PlayerDataset into per-player level and remaining-time series.

use chrono::{DateTime, Utc};

use crate::model::PlayerDataset;

pub const SECONDS_PER_DAY: f64 = 24.0 * 60.0 * 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    Level,
    /// Remaining time in days.
    RemainingTime,
}

impl SeriesKind {
    pub fn label(self) -> &'static str {
        match self {
            SeriesKind::Level => "level",
            SeriesKind::RemainingTime => "remaining time",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartPoint {
    pub x: DateTime<Utc>,
    pub y: f64,
}

/// One plotted line. Each series owns its player name.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub kind: SeriesKind,
    pub player: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// "level alice", "remaining time alice"
    pub fn legend_name(&self) -> String {
        format!("{} {}", self.kind.label(), self.player)
    }
}

/// Two series per player, in dataset order: level first, then remaining time in days.
/// Events keep their delivered order; nothing is sorted, merged or validated.
pub fn build_series(dataset: &PlayerDataset) -> Vec<ChartSeries> {
    let mut out = Vec::with_capacity(dataset.len() * 2);
    for (player, record) in dataset.iter() {
        let mut level = ChartSeries {
            kind: SeriesKind::Level,
            player: player.to_owned(),
            points: Vec::with_capacity(record.events.len()),
        };
        let mut remaining = ChartSeries {
            kind: SeriesKind::RemainingTime,
            player: player.to_owned(),
            points: Vec::with_capacity(record.events.len()),
        };
        for event in &record.events {
            let x = event.timestamp;
            level.points.push(ChartPoint { x, y: event.level });
            remaining.points.push(ChartPoint { x, y: event.remaining_time / SECONDS_PER_DAY });
        }
        out.push(level);
        out.push(remaining);
    }
    out
}
