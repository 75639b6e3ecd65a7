//! The event entity drawn on the timeline

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::TimeMillis;

/// A single mark on the timeline
///
/// Events without an end time are instantaneous and drawn as an icon;
/// events with an end time span an interval and are drawn as a bar. The
/// selection and pin flags are consulted only by the event renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: Uuid,
    pub start_millis: TimeMillis,
    pub end_millis: Option<TimeMillis>,
    pub is_selected: bool,
    pub is_pinned: bool,
    /// Vertical lane the event is stacked into
    pub lane: usize,
}

impl TimelineEvent {
    /// An instantaneous event
    pub fn point(id: Uuid, start_millis: TimeMillis) -> Self {
        Self {
            id,
            start_millis,
            end_millis: None,
            is_selected: false,
            is_pinned: false,
            lane: 0,
        }
    }

    /// An event spanning an interval
    pub fn interval(id: Uuid, start_millis: TimeMillis, end_millis: TimeMillis) -> Self {
        Self {
            id,
            start_millis,
            end_millis: Some(end_millis),
            is_selected: false,
            is_pinned: false,
            lane: 0,
        }
    }

    pub fn with_lane(mut self, lane: usize) -> Self {
        self.lane = lane;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.is_pinned = pinned;
        self
    }

    pub fn is_point(&self) -> bool {
        self.end_millis.is_none()
    }

    /// End of the drawn extent; the start itself for point events
    pub fn effective_end(&self) -> TimeMillis {
        self.end_millis.unwrap_or(self.start_millis)
    }
}
