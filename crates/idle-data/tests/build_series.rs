// File: crates/idle-data/tests/build_series.rs
// Purpose: Series builder properties and the documented end-to-end datasets.

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use idle_data::{build_series, PlayerDataset, SeriesKind, SECONDS_PER_DAY};

fn dataset(json: &str) -> Result<PlayerDataset> {
    Ok(serde_json::from_str(json)?)
}

fn three_players() -> Result<PlayerDataset> {
    dataset(
        r#"{
            "solene": {"events": [
                {"timestamp": 1700003600000, "level": 42, "remaining_time": 3600},
                {"timestamp": 1700000000000, "level": 41, "remaining_time": 172800},
                {"timestamp": 1700007200000, "level": 42, "remaining_time": 0}
            ]},
            "killruana": {"events": [
                {"timestamp": "Tue, 14 Nov 2023 22:13:20 GMT", "level": 7, "remaining_time": 43200}
            ]},
            "idle": {"events": []}
        }"#,
    )
}

#[test]
fn two_series_per_player() -> Result<()> {
    let d = three_players()?;
    let series = build_series(&d);
    assert_eq!(series.len(), 2 * d.len());
    for pair in series.chunks(2) {
        assert_eq!(pair[0].kind, SeriesKind::Level);
        assert_eq!(pair[1].kind, SeriesKind::RemainingTime);
        assert_eq!(pair[0].player, pair[1].player);
    }
    Ok(())
}

#[test]
fn series_align_with_events() -> Result<()> {
    let d = three_players()?;
    let series = build_series(&d);
    for pair in series.chunks(2) {
        let record = d.get(&pair[0].player).expect("player exists");
        assert_eq!(pair[0].points.len(), record.events.len());
        assert_eq!(pair[1].points.len(), record.events.len());
        for ((lvl, rem), ev) in pair[0].points.iter().zip(&pair[1].points).zip(&record.events) {
            assert_eq!(lvl.x, ev.timestamp);
            assert_eq!(rem.x, ev.timestamp);
            assert_eq!(lvl.y, ev.level);
            assert_eq!(rem.y, ev.remaining_time / SECONDS_PER_DAY);
        }
    }
    Ok(())
}

#[test]
fn event_order_is_preserved() -> Result<()> {
    let d = three_players()?;
    let series = build_series(&d);
    let solene = series
        .iter()
        .find(|s| s.player == "solene" && s.kind == SeriesKind::Level)
        .expect("solene level series");
    let xs: Vec<i64> = solene.points.iter().map(|p| p.x.timestamp()).collect();
    // Out of chronological order on purpose: the builder must not sort.
    assert_eq!(xs, vec![1_700_003_600, 1_700_000_000, 1_700_007_200]);
    Ok(())
}

#[test]
fn builder_is_pure() -> Result<()> {
    let d = three_players()?;
    let before = d.clone();
    let first = build_series(&d);
    let second = build_series(&d);
    assert_eq!(first, second);
    assert_eq!(d, before);
    Ok(())
}

#[test]
fn legend_names_follow_player() -> Result<()> {
    let series = build_series(&three_players()?);
    let names: Vec<String> = series.iter().map(|s| s.legend_name()).collect();
    assert_eq!(
        names,
        vec![
            "level idle",
            "remaining time idle",
            "level killruana",
            "remaining time killruana",
            "level solene",
            "remaining time solene",
        ]
    );
    Ok(())
}

#[test]
fn scenario_single_event() -> Result<()> {
    let d = dataset(r#"{"alice": {"events": [{"timestamp": 1700000000000, "level": 5, "remaining_time": 86400}]}}"#)?;
    let series = build_series(&d);
    assert_eq!(series.len(), 2);

    let expected_x: DateTime<Utc> = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).single().expect("valid date");
    let level = &series[0];
    assert_eq!(level.kind, SeriesKind::Level);
    assert_eq!(level.player, "alice");
    assert_eq!(level.points.len(), 1);
    assert_eq!(level.points[0].x, expected_x);
    assert_eq!(level.points[0].y, 5.0);

    let remaining = &series[1];
    assert_eq!(remaining.kind, SeriesKind::RemainingTime);
    assert_eq!(remaining.points.len(), 1);
    assert_eq!(remaining.points[0].x, expected_x);
    assert_eq!(remaining.points[0].y, 1.0);
    Ok(())
}

#[test]
fn scenario_no_players() -> Result<()> {
    let d = dataset("{}")?;
    assert!(build_series(&d).is_empty());
    Ok(())
}
