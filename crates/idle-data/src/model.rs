// File: crates/idle-data/src/model.rs
// Summary: JSON shape served at /api/players: player name -> { events: [{timestamp, level, remaining_time}] }.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::parser::LogEvent;

/// All tracked players. Keys iterate in sorted order, which is also the order the server emits.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerDataset {
    players: BTreeMap<String, PlayerRecord>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Chronological as delivered; never re-sorted.
    #[serde(default)]
    pub events: Vec<Event>,
}

/// One observation of a player's progression.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(with = "timestamp_format")]
    pub timestamp: DateTime<Utc>,
    pub level: f64,
    /// Seconds until the next level.
    pub remaining_time: f64,
}

impl PlayerDataset {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.players.len() }

    pub fn is_empty(&self) -> bool { self.players.is_empty() }

    pub fn get(&self, player: &str) -> Option<&PlayerRecord> { self.players.get(player) }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlayerRecord)> {
        self.players.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn insert(&mut self, player: impl Into<String>, record: PlayerRecord) {
        self.players.insert(player.into(), record);
    }

    /// Append an event to `player`, creating the record on first sight.
    pub fn push_event(&mut self, player: &str, event: Event) {
        self.players.entry(player.to_owned()).or_default().events.push(event);
    }

    /// Group parsed log lines per player, keeping log order within each player.
    pub fn from_log_events<I>(events: I) -> Self
    where
        I: IntoIterator<Item = LogEvent>,
    {
        let mut dataset = Self::new();
        for e in events {
            let event = Event {
                timestamp: e.timestamp,
                level: f64::from(e.level),
                remaining_time: e.remaining_secs as f64,
            };
            dataset.push_event(&e.player, event);
        }
        dataset
    }

    pub fn event_count(&self) -> usize {
        self.players.values().map(|r| r.events.len()).sum()
    }
}

/// Read a timestamp string in any of the forms the data source has used:
/// RFC 3339, RFC 2822 / HTTP-date (`Tue, 14 Nov 2023 22:13:20 GMT`), or a naive
/// `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DDTHH:MM:SS` taken as UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Epoch milliseconds on the wire; numbers or strings accepted on read.
mod timestamp_format {
    use chrono::{DateTime, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(dt.timestamp_millis())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Millis(ms) if ms.is_finite() => DateTime::from_timestamp_millis(ms.trunc() as i64)
                .ok_or_else(|| D::Error::custom(format!("timestamp {ms} out of range"))),
            Raw::Millis(ms) => Err(D::Error::custom(format!("timestamp {ms} is not finite"))),
            Raw::Text(s) => super::parse_timestamp(&s)
                .ok_or_else(|| D::Error::custom(format!("unrecognized timestamp {s:?}"))),
        }
    }
}
