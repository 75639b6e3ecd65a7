//! Discrete zoom ladder and the zoom state machine
//!
//! Zooming does not scale freely: ladder operations snap the visible window
//! to an ordered ladder of fixed span widths. The drag-select path is the
//! one exception and commits arbitrary spans.

mod controller;
mod ladder;
mod neighbors;

pub use controller::{apply, ZoomCommand, ZoomController, ZoomOutcome, ZoomState};
pub use ladder::{LadderError, ZoomLadder, ZoomLevel, ZoomScale};
pub use neighbors::ZoomNeighbors;
