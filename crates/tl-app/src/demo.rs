//! Synthetic demo events

use chrono::{TimeZone, Utc};
use tl_core::{Bounds, TimelineEvent};
use uuid::Uuid;

/// splitmix64, so the demo looks the same on every run
struct SplitMix {
    state: u64,
}

impl SplitMix {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Four years of demo data
pub fn demo_bounds() -> Bounds {
    let start = Utc
        .with_ymd_and_hms(2020, 1, 1, 0, 0, 0)
        .single()
        .map(|d| d.timestamp_millis())
        .unwrap_or(0);
    let end = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .map(|d| d.timestamp_millis())
        .unwrap_or(0);
    Bounds::new(start as f64, end as f64)
}

/// A mix of point and interval events spread over the bounds
pub fn demo_events(bounds: &Bounds, lanes: usize) -> Vec<TimelineEvent> {
    let mut rng = SplitMix::new(0x7fe1_1e5e_ed01);
    let span = bounds.span();
    let mut events = Vec::with_capacity(240);
    for i in 0..240u32 {
        let start = bounds.start + rng.next_f64() * span;
        let id = Uuid::from_u128(u128::from(i) + 1);
        let event = if rng.next_f64() < 0.45 {
            TimelineEvent::point(id, start)
        } else {
            let length = span * (0.002 + rng.next_f64() * 0.03);
            TimelineEvent::interval(id, start, (start + length).min(bounds.end))
        };
        events.push(
            event
                .with_lane(i as usize % lanes.max(1))
                .selected(i % 37 == 0)
                .pinned(i % 53 == 0),
        );
    }
    events.sort_by(|a, b| a.start_millis.total_cmp(&b.start_millis));
    events
}
