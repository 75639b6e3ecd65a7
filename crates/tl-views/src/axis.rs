//! Time axis tick generation and labels

use chrono::{TimeZone, Utc};
use tl_core::{Domain, DurationMillis, TimeMillis};

const SECOND: f64 = 1000.0;
const MINUTE: f64 = 60.0 * SECOND;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const WEEK: f64 = 7.0 * DAY;
const MONTH: f64 = 30.0 * DAY;
const YEAR: f64 = 365.0 * DAY;
const FIFTY_YEARS: f64 = 50.0 * YEAR;

/// Candidate tick steps, finest first
const STEPS: &[f64] = &[
    SECOND,
    5.0 * SECOND,
    15.0 * SECOND,
    MINUTE,
    5.0 * MINUTE,
    15.0 * MINUTE,
    HOUR,
    3.0 * HOUR,
    6.0 * HOUR,
    12.0 * HOUR,
    DAY,
    WEEK,
    MONTH,
    3.0 * MONTH,
    YEAR,
    5.0 * YEAR,
    10.0 * YEAR,
    FIFTY_YEARS,
];

/// One axis tick
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub time: TimeMillis,
    pub label: String,
}

/// Ticks for `domain` rendered over `width_px` pixels
///
/// Picks the finest step that keeps ticks at least `min_spacing_px` apart,
/// then emits every multiple of that step inside the domain.
pub fn ticks(domain: Domain, width_px: f32, min_spacing_px: f32) -> Vec<Tick> {
    let domain = domain.normalized();
    let width = domain.width();
    if width <= 0.0 || width_px <= 0.0 {
        return Vec::new();
    }
    let min_spacing = f64::from(min_spacing_px.max(1.0));
    let px_per_milli = f64::from(width_px) / width;
    let step = STEPS
        .iter()
        .copied()
        .find(|step| step * px_per_milli >= min_spacing)
        .unwrap_or(FIFTY_YEARS);

    let mut ticks = Vec::new();
    let mut t = (domain.start / step).ceil() * step;
    while t <= domain.end {
        ticks.push(Tick {
            time: t,
            label: label_for(t, step),
        });
        t += step;
    }
    ticks
}

/// Full timestamp for readouts, second precision
pub fn format_timestamp(t: TimeMillis) -> String {
    match Utc.timestamp_millis_opt(t as i64).single() {
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => format!("{t} ms"),
    }
}

fn label_for(t: TimeMillis, step: DurationMillis) -> String {
    let Some(datetime) = Utc.timestamp_millis_opt(t as i64).single() else {
        return String::new();
    };
    let format = if step >= YEAR {
        "%Y"
    } else if step >= MONTH {
        "%b %Y"
    } else if step >= DAY {
        "%b %d"
    } else if step >= MINUTE {
        "%H:%M"
    } else {
        "%H:%M:%S"
    };
    datetime.format(format).to_string()
}
