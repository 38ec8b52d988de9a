// File: crates/idle-data/src/parser.rs
// Summary: Extracts level announcements from an IRC idle-RPG log.
//
// Lines of interest look like:
//   2023-11-14 22:13:20 @hal solene, the level 42 Elven Mage, is #3! Next level in 4 days, 01:02:03.
// Everything else is skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::error::ParseError;
use crate::model::PlayerDataset;

static LEVEL_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<timestamp>\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2})\s+@?hal\s+(?P<player>[^\s,]+), the level (?P<level>\d+)(?:\s[a-zA-Z]+)+, is #\d+! Next level in (?P<days>\d+) days?, (?P<hours>\d{2}):(?P<minutes>\d{2}):(?P<seconds>\d{2})\.$",
    )
    .expect("level line pattern compiles")
});

/// A parsed level announcement.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub player: String,
    pub level: u32,
    pub remaining_secs: u64,
}

/// Parse one log line. Trailing newlines are ignored.
pub fn parse_line(line: &str) -> Result<LogEvent, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let caps = LEVEL_LINE.captures(line).ok_or(ParseError::NoMatch)?;
    let invalid = |field| ParseError::InvalidField { field, line: line.to_owned() };

    let timestamp = NaiveDateTime::parse_from_str(&caps["timestamp"], "%Y-%m-%d %H:%M:%S")
        .map_err(|_| invalid("timestamp"))?
        .and_utc();
    let level = caps["level"].parse::<u32>().map_err(|_| invalid("level"))?;

    let field = |name: &'static str| caps[name].parse::<u64>().map_err(|_| invalid(name));
    let (days, hours, minutes, seconds) = (field("days")?, field("hours")?, field("minutes")?, field("seconds")?);
    if hours > 23 || minutes > 59 || seconds > 59 {
        return Err(invalid("remaining time"));
    }
    let remaining_secs = days
        .checked_mul(86_400)
        .and_then(|d| d.checked_add(hours * 3600 + minutes * 60 + seconds))
        .ok_or_else(|| invalid("days"))?;

    Ok(LogEvent { timestamp, player: caps["player"].to_owned(), level, remaining_secs })
}

/// Parse every line of `reader`, skipping lines that are not level announcements.
/// Read errors are passed through.
pub fn parse_stream<R: BufRead>(reader: R) -> impl Iterator<Item = Result<LogEvent, ParseError>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) => match parse_line(&line) {
            Ok(event) => Some(Ok(event)),
            Err(err) => {
                trace!(%err, "skipping log line");
                None
            }
        },
        Err(e) => Some(Err(ParseError::Io(e))),
    })
}

/// Read the whole log at `path` into a dataset.
pub fn load_log_file(path: impl AsRef<Path>) -> Result<PlayerDataset, ParseError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let events = parse_stream(BufReader::new(file)).collect::<Result<Vec<_>, _>>()?;
    let dataset = PlayerDataset::from_log_events(events);
    debug!(path = %path.display(), players = dataset.len(), events = dataset.event_count(), "loaded idle log");
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const LINE: &str =
        "2023-11-14 22:13:20 @hal solene, the level 42 Elven Mage, is #3! Next level in 4 days, 01:02:03.";

    #[test]
    fn parses_level_announcement() {
        let e = parse_line(LINE).expect("matches");
        assert_eq!(e.player, "solene");
        assert_eq!(e.level, 42);
        assert_eq!(e.timestamp.timestamp(), 1_700_000_000);
        assert_eq!(e.remaining_secs, 4 * 86_400 + 3600 + 2 * 60 + 3);
    }

    #[test]
    fn accepts_missing_at_sign_and_trailing_newline() {
        let line = "2023-11-14 22:13:20  hal killruana, the level 7 Hacker, is #1! Next level in 0 days, 00:10:00.\r\n";
        let e = parse_line(line).expect("matches");
        assert_eq!(e.player, "killruana");
        assert_eq!(e.remaining_secs, 600);
    }

    #[test]
    fn rejects_chatter() {
        assert!(matches!(parse_line("2023-11-14 22:13:20 <bob> hello"), Err(ParseError::NoMatch)));
        assert!(matches!(parse_line(""), Err(ParseError::NoMatch)));
    }

    #[test]
    fn rejects_impossible_clock() {
        let line = "2023-11-14 22:13:20 @hal solene, the level 42 Mage, is #3! Next level in 4 days, 25:02:03.";
        assert!(matches!(parse_line(line), Err(ParseError::InvalidField { .. })));
    }

    #[test]
    fn stream_skips_noise_and_keeps_order() {
        let log = format!(
            "{LINE}\nnoise\n2023-11-15 22:13:20 @hal solene, the level 43 Elven Mage, is #3! Next level in 5 days, 00:00:00.\n"
        );
        let events = parse_stream(Cursor::new(log)).collect::<Result<Vec<_>, _>>().expect("stream");
        assert_eq!(events.iter().map(|e| e.level).collect::<Vec<_>>(), vec![42, 43]);

        let dataset = PlayerDataset::from_log_events(events);
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.get("solene").map(|r| r.events.len()), Some(2));
    }
}
