//! Core domain and zoom logic for the timeline widget
//!
//! This crate provides the pure state machinery of the timeline: the visible
//! time window, the discrete zoom ladder, the time/pixel mapping, and the
//! controller that turns user gestures into new windows. It has no UI
//! dependency; the host owns the committed state and receives proposals
//! through callbacks.

pub mod domain;
pub mod event;
pub mod scale;
pub mod zoom;

// Re-export commonly used types
pub use domain::{Bounds, Domain, DurationMillis, TimeMillis};
pub use event::TimelineEvent;
pub use scale::TimeScale;
pub use zoom::{
    apply, LadderError, ZoomCommand, ZoomController, ZoomLadder, ZoomLevel, ZoomNeighbors,
    ZoomOutcome, ZoomScale, ZoomState,
};
