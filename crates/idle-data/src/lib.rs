// File: crates/idle-data/src/lib.rs
// Summary: Player progression data: JSON model, idle log parsing, and the level / remaining-time series builder.

pub mod error;
pub mod model;
pub mod parser;
pub mod series;

pub use error::ParseError;
pub use model::{parse_timestamp, Event, PlayerDataset, PlayerRecord};
pub use parser::{load_log_file, parse_line, parse_stream, LogEvent};
pub use series::{build_series, ChartPoint, ChartSeries, SeriesKind, SECONDS_PER_DAY};
