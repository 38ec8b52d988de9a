// File: crates/idle-chart/src/grid.rs
// Summary: Tick layout helpers for numeric and time axes.

use chrono::DateTime;

use crate::axis::TickFormat;

/// Round `x` to 1, 2, 5 or 10 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    let exp = raw.log10().floor();
    let base = 10f64.powf(exp);
    let f = raw / base;
    let nice = if f <= 1.0 { 1.0 } else if f <= 2.0 { 2.0 } else if f <= 5.0 { 5.0 } else { 10.0 };
    nice * base
}

/// Ticks at "nice" multiples inside [min, max], at most about `max_ticks` of them.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min || max_ticks < 2 {
        return Vec::new();
    }
    let step = nice_step((max - min) / (max_ticks as f64 - 1.0));
    let first = (min / step).ceil() * step;
    stepped(first, max + step * 1e-9, step, max_ticks)
        .into_iter()
        // snap -0.0 and float dust to clean values
        .map(|v| if v.abs() < step * 1e-9 { 0.0 } else { v })
        .collect()
}

/// `first, first + step, ..` up to `last`, at most `4 * max_ticks` values.
/// Empty when `step` vanishes at the magnitude of `first`.
fn stepped(first: f64, last: f64, step: f64, max_ticks: usize) -> Vec<f64> {
    if step.is_nan() || step <= 0.0 || !first.is_finite() || first + step == first || first > last {
        return Vec::new();
    }
    let n = (((last - first) / step).floor() as usize + 1).min(max_ticks.max(2) * 4);
    let mut out: Vec<f64> = Vec::with_capacity(n);
    for i in 0..n {
        let v = first + i as f64 * step;
        if out.last().is_some_and(|&prev| v <= prev) {
            break;
        }
        out.push(v);
    }
    out
}

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3600.0;
const DAY: f64 = 86_400.0;

const TIME_STEPS: [f64; 16] = [
    MINUTE, 5.0 * MINUTE, 15.0 * MINUTE, 30.0 * MINUTE,
    HOUR, 3.0 * HOUR, 6.0 * HOUR, 12.0 * HOUR,
    DAY, 2.0 * DAY, 7.0 * DAY, 14.0 * DAY,
    30.0 * DAY, 90.0 * DAY, 180.0 * DAY, 365.0 * DAY,
];

/// Tick step (seconds) for a time range in epoch seconds.
pub fn time_step(min: f64, max: f64, max_ticks: usize) -> f64 {
    let span = (max - min).max(1.0);
    let budget = max_ticks.max(2) as f64;
    TIME_STEPS
        .iter()
        .copied()
        .find(|step| span / step <= budget)
        .unwrap_or_else(|| nice_step(span / budget / DAY) * DAY)
}

/// Ticks aligned to whole minutes/hours/days (UTC) inside [min, max] epoch seconds.
pub fn time_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return Vec::new();
    }
    let step = time_step(min, max, max_ticks);
    stepped((min / step).ceil() * step, max, step, max_ticks)
}

/// Ticks suited to an axis format.
pub fn ticks_for(format: TickFormat, min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    match format {
        TickFormat::Number => nice_ticks(min, max, max_ticks),
        TickFormat::DateTime => time_ticks(min, max, max_ticks),
    }
}

/// Print a tick value; `step` picks the precision.
pub fn format_tick(value: f64, format: TickFormat, step: f64) -> String {
    match format {
        TickFormat::Number => {
            if step >= 1.0 || step <= 0.0 {
                format!("{:.0}", value)
            } else {
                let decimals = (-step.log10().floor()) as usize;
                format!("{:.*}", decimals, value)
            }
        }
        TickFormat::DateTime => match DateTime::from_timestamp(value.floor() as i64, 0) {
            Some(dt) if step >= DAY => dt.format("%Y-%m-%d").to_string(),
            Some(dt) => dt.format("%m-%d %H:%M").to_string(),
            None => String::new(),
        },
    }
}
