//! egui views for the timeline widget
//!
//! [`TimelineView`] is the widget itself: it paints the axis, lanes and
//! events, and turns pointer gestures into zoom commands for the core's
//! controller. [`TimelineContext`] carries the live cursor state shared
//! with any side panels.

mod axis;
mod timeline_view;

pub use axis::{format_timestamp, ticks, Tick};
pub use timeline_view::{TimelineConfig, TimelineResponse, TimelineView};

use parking_lot::RwLock;
use std::sync::Arc;
use tl_core::TimeMillis;

/// Live cursor state published by the widget each frame
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorState {
    /// Time under the pointer while hovering
    pub hovered_time: Option<TimeMillis>,
    /// Drag-select span while a rubber-band drag is in progress
    pub preview: Option<(TimeMillis, TimeMillis)>,
}

/// Shared state handed to the widget and any side panels
#[derive(Clone, Default)]
pub struct TimelineContext {
    pub cursor: Arc<RwLock<CursorState>>,
}

impl TimelineContext {
    pub fn new() -> Self {
        Self::default()
    }
}
