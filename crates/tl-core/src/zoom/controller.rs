//! The zoom state machine
//!
//! A transition is a pure function over a snapshot of the view state: it
//! consumes a [`ZoomState`] and a [`ZoomCommand`] and yields at most one
//! [`ZoomOutcome`]. [`ZoomController`] is the thin adapter that feeds
//! outcomes into the host's callbacks; the host stays the owner of the
//! committed domain, and the controller keeps no state of its own.

use tracing::{debug, trace};

use crate::domain::{Bounds, Domain, DurationMillis, TimeMillis};
use crate::scale::TimeScale;

use super::ladder::{ZoomLadder, ZoomScale};
use super::neighbors::ZoomNeighbors;

/// Snapshot of everything one zoom transition depends on
///
/// `change_possible` is the host-managed gate: hosts set it false while an
/// animated transition is in flight so a second commit cannot interrupt it.
/// The machine trusts the flag and tracks no in-progress state itself.
#[derive(Debug, Clone, Copy)]
pub struct ZoomState<'a> {
    pub domain: Domain,
    pub bounds: Bounds,
    pub ladder: &'a ZoomLadder,
    pub change_possible: bool,
    pub time_scale: TimeScale,
}

impl<'a> ZoomState<'a> {
    pub fn new(
        domain: Domain,
        bounds: Bounds,
        ladder: &'a ZoomLadder,
        change_possible: bool,
        time_scale: TimeScale,
    ) -> Self {
        Self {
            domain,
            bounds,
            ladder,
            change_possible,
            time_scale,
        }
    }

    pub fn neighbors(&self) -> ZoomNeighbors {
        ZoomNeighbors::of(self.domain, self.ladder)
    }

    /// Whether a zoom-in step has a finer rung to land on
    pub fn is_zoom_in_possible(&self) -> bool {
        self.neighbors().next_smaller != ZoomScale::Minimum
    }

    /// Whether the view shows less than the full bound span
    pub fn is_zoom_out_possible(&self) -> bool {
        self.domain.width() < self.bounds.span()
    }

    /// Span width of one zoom-in step, for UI affordances
    pub fn zoom_width(&self) -> Option<DurationMillis> {
        self.ladder.width_of(self.neighbors().next_smaller)
    }
}

/// A single user gesture, reduced to its inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomCommand {
    /// Step to the next finer rung, keeping `focal` fixed
    /// (the domain midpoint when none is given)
    ZoomIn { focal: Option<TimeMillis> },
    /// Step to the next coarser rung, keeping `focal` fixed
    ZoomOut { focal: Option<TimeMillis> },
    /// Return to the full bound span
    Reset,
    /// Drag-select zoom: commit the span between two pixel positions.
    /// Not snapped to the ladder, and not reordered: a right-to-left drag
    /// yields an inverted domain the host must tolerate or normalize.
    ZoomCustom { start_px: f32, end_px: f32 },
    /// Live report of the drag-select span while the drag is in progress
    ZoomCustomPreview { start_px: f32, end_px: f32 },
}

/// What a transition produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomOutcome {
    /// A new domain for the host to commit, with the animation intent flag
    Commit { domain: Domain, animated: bool },
    /// Non-committing cursor report: time at the cursor plus the range so far
    Preview {
        cursor: TimeMillis,
        start: TimeMillis,
        end: TimeMillis,
    },
}

/// Applies one command to a state snapshot
///
/// Returns `None` when the gate is closed, or when a ladder step cannot
/// supply a width (empty ladder). All no-ops are silent.
pub fn apply(state: &ZoomState<'_>, command: ZoomCommand) -> Option<ZoomOutcome> {
    if !state.change_possible {
        return None;
    }
    match command {
        ZoomCommand::ZoomIn { focal } => snap_to(state, state.neighbors().next_smaller, focal),
        ZoomCommand::ZoomOut { focal } => snap_to(state, state.neighbors().next_bigger, focal),
        ZoomCommand::Reset => Some(ZoomOutcome::Commit {
            domain: state.bounds.as_domain(),
            animated: true,
        }),
        ZoomCommand::ZoomCustom { start_px, end_px } => {
            let start = state.time_scale.to_time(start_px);
            let end = state.time_scale.to_time(end_px);
            Some(ZoomOutcome::Commit {
                domain: Domain::new(start, end),
                animated: true,
            })
        }
        ZoomCommand::ZoomCustomPreview { start_px, end_px } => {
            let start = state.time_scale.to_time(start_px);
            let end = state.time_scale.to_time(end_px);
            Some(ZoomOutcome::Preview {
                cursor: end,
                start,
                end,
            })
        }
    }
}

/// Center-and-clamp onto the given rung's width
fn snap_to(
    state: &ZoomState<'_>,
    scale: ZoomScale,
    focal: Option<TimeMillis>,
) -> Option<ZoomOutcome> {
    let width = state.ladder.width_of(scale)?;
    let focal = focal.unwrap_or_else(|| state.domain.midpoint());
    Some(ZoomOutcome::Commit {
        domain: state.bounds.domain_centered_on(focal, width),
        animated: true,
    })
}

type DomainChangeFn = Box<dyn FnMut(Domain, bool)>;
type CursorMoveFn = Box<dyn FnMut(TimeMillis, TimeMillis, TimeMillis)>;

/// Adapter delivering zoom outcomes to the host's callbacks
///
/// Commits go to `on_domain_change(new_domain, animated)`. Previews go to
/// the optional `on_cursor_move(cursor, start, end)` and are dropped
/// silently when no consumer is registered.
pub struct ZoomController {
    on_domain_change: DomainChangeFn,
    on_cursor_move: Option<CursorMoveFn>,
}

impl ZoomController {
    pub fn new(on_domain_change: impl FnMut(Domain, bool) + 'static) -> Self {
        Self {
            on_domain_change: Box::new(on_domain_change),
            on_cursor_move: None,
        }
    }

    pub fn with_cursor_move(
        mut self,
        on_cursor_move: impl FnMut(TimeMillis, TimeMillis, TimeMillis) + 'static,
    ) -> Self {
        self.on_cursor_move = Some(Box::new(on_cursor_move));
        self
    }

    /// Runs one command against the snapshot and delivers the outcome
    ///
    /// Returns the delivered outcome, or `None` when the command was a
    /// no-op (gated off, empty ladder, or a preview with no consumer).
    pub fn handle(&mut self, state: &ZoomState<'_>, command: ZoomCommand) -> Option<ZoomOutcome> {
        let outcome = apply(state, command)?;
        match outcome {
            ZoomOutcome::Commit { domain, animated } => {
                debug!(start = domain.start, end = domain.end, animated, "zoom commit");
                (self.on_domain_change)(domain, animated);
            }
            ZoomOutcome::Preview { cursor, start, end } => {
                let on_cursor_move = self.on_cursor_move.as_mut()?;
                trace!(cursor, "zoom preview");
                on_cursor_move(cursor, start, end);
            }
        }
        Some(outcome)
    }

    pub fn zoom_in(
        &mut self,
        state: &ZoomState<'_>,
        focal: Option<TimeMillis>,
    ) -> Option<ZoomOutcome> {
        self.handle(state, ZoomCommand::ZoomIn { focal })
    }

    pub fn zoom_out(
        &mut self,
        state: &ZoomState<'_>,
        focal: Option<TimeMillis>,
    ) -> Option<ZoomOutcome> {
        self.handle(state, ZoomCommand::ZoomOut { focal })
    }

    pub fn zoom_reset(&mut self, state: &ZoomState<'_>) -> Option<ZoomOutcome> {
        self.handle(state, ZoomCommand::Reset)
    }

    pub fn zoom_custom(
        &mut self,
        state: &ZoomState<'_>,
        start_px: f32,
        end_px: f32,
    ) -> Option<ZoomOutcome> {
        self.handle(state, ZoomCommand::ZoomCustom { start_px, end_px })
    }

    pub fn zoom_custom_in_progress(
        &mut self,
        state: &ZoomState<'_>,
        start_px: f32,
        end_px: f32,
    ) -> Option<ZoomOutcome> {
        self.handle(state, ZoomCommand::ZoomCustomPreview { start_px, end_px })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zoom::ladder::ZoomLevel;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn three_rungs() -> ZoomLadder {
        ZoomLadder::new(vec![
            ZoomLevel::new("minimum", 1_000.0),
            ZoomLevel::new("L1", 10_000.0),
            ZoomLevel::new("maximum", 100_000.0),
        ])
        .unwrap()
    }

    fn state<'a>(domain: Domain, ladder: &'a ZoomLadder, change_possible: bool) -> ZoomState<'a> {
        let bounds = Bounds::new(0.0, 100_000.0);
        // Linear mapping: pixel 0 -> time 0, pixel 100 -> time 100_000.
        let time_scale = TimeScale::new(bounds.as_domain(), 0.0, 100.0);
        ZoomState::new(domain, bounds, ladder, change_possible, time_scale)
    }

    #[test]
    fn zoom_in_without_cursor_centers_on_the_midpoint() {
        let ladder = three_rungs();
        let s = state(Domain::new(40_000.0, 50_000.0), &ladder, true);
        let outcome = apply(&s, ZoomCommand::ZoomIn { focal: None });
        assert_eq!(
            outcome,
            Some(ZoomOutcome::Commit {
                domain: Domain::new(44_500.0, 45_500.0),
                animated: true,
            })
        );
    }

    #[test]
    fn zoom_out_returns_to_the_coarser_rung() {
        let ladder = three_rungs();
        let s = state(Domain::new(44_500.0, 45_500.0), &ladder, true);
        let outcome = apply(&s, ZoomCommand::ZoomOut { focal: None });
        assert_eq!(
            outcome,
            Some(ZoomOutcome::Commit {
                domain: Domain::new(40_000.0, 50_000.0),
                animated: true,
            })
        );
    }

    #[test]
    fn zoom_in_then_out_round_trips_the_width() {
        let ladder = three_rungs();
        let original = Domain::new(40_000.0, 50_000.0);
        let s = state(original, &ladder, true);
        let Some(ZoomOutcome::Commit { domain: zoomed, .. }) =
            apply(&s, ZoomCommand::ZoomIn { focal: Some(45_000.0) })
        else {
            panic!("zoom in produced no commit");
        };
        let s = state(zoomed, &ladder, true);
        let Some(ZoomOutcome::Commit { domain: back, .. }) =
            apply(&s, ZoomCommand::ZoomOut { focal: Some(45_000.0) })
        else {
            panic!("zoom out produced no commit");
        };
        assert_eq!(back.width(), original.width());
    }

    #[test]
    fn zoom_in_at_cursor_keeps_the_focal_time() {
        let ladder = three_rungs();
        let s = state(Domain::new(40_000.0, 50_000.0), &ladder, true);
        let outcome = apply(&s, ZoomCommand::ZoomIn { focal: Some(48_000.0) });
        assert_eq!(
            outcome,
            Some(ZoomOutcome::Commit {
                domain: Domain::new(47_500.0, 48_500.0),
                animated: true,
            })
        );
    }

    #[test]
    fn reset_commits_the_full_bounds() {
        let ladder = three_rungs();
        let s = state(Domain::new(40_000.0, 50_000.0), &ladder, true);
        assert_eq!(
            apply(&s, ZoomCommand::Reset),
            Some(ZoomOutcome::Commit {
                domain: Domain::new(0.0, 100_000.0),
                animated: true,
            })
        );
    }

    #[test]
    fn custom_zoom_commits_the_unsnapped_pixel_span() {
        let ladder = three_rungs();
        let s = state(Domain::new(0.0, 100_000.0), &ladder, true);
        let outcome = apply(
            &s,
            ZoomCommand::ZoomCustom {
                start_px: 10.0,
                end_px: 50.0,
            },
        );
        assert_eq!(
            outcome,
            Some(ZoomOutcome::Commit {
                domain: Domain::new(10_000.0, 50_000.0),
                animated: true,
            })
        );
    }

    #[test]
    fn inverted_drag_propagates_an_inverted_domain() {
        let ladder = three_rungs();
        let s = state(Domain::new(0.0, 100_000.0), &ladder, true);
        let Some(ZoomOutcome::Commit { domain, .. }) = apply(
            &s,
            ZoomCommand::ZoomCustom {
                start_px: 50.0,
                end_px: 10.0,
            },
        ) else {
            panic!("custom zoom produced no commit");
        };
        assert!(domain.is_inverted());
        assert_eq!(domain.normalized(), Domain::new(10_000.0, 50_000.0));
    }

    #[test]
    fn preview_reports_cursor_then_range() {
        let ladder = three_rungs();
        let s = state(Domain::new(0.0, 100_000.0), &ladder, true);
        let outcome = apply(
            &s,
            ZoomCommand::ZoomCustomPreview {
                start_px: 10.0,
                end_px: 50.0,
            },
        );
        assert_eq!(
            outcome,
            Some(ZoomOutcome::Preview {
                cursor: 50_000.0,
                start: 10_000.0,
                end: 50_000.0,
            })
        );
    }

    #[test]
    fn every_command_is_gated() {
        let ladder = three_rungs();
        let s = state(Domain::new(40_000.0, 50_000.0), &ladder, false);
        for command in [
            ZoomCommand::ZoomIn { focal: None },
            ZoomCommand::ZoomOut { focal: Some(1.0) },
            ZoomCommand::Reset,
            ZoomCommand::ZoomCustom {
                start_px: 0.0,
                end_px: 10.0,
            },
            ZoomCommand::ZoomCustomPreview {
                start_px: 0.0,
                end_px: 10.0,
            },
        ] {
            assert_eq!(apply(&s, command), None, "{command:?} was not gated");
        }
    }

    #[test]
    fn empty_ladder_makes_ladder_steps_noops() {
        let ladder = ZoomLadder::empty();
        let s = state(Domain::new(40_000.0, 50_000.0), &ladder, true);
        assert_eq!(apply(&s, ZoomCommand::ZoomIn { focal: None }), None);
        assert_eq!(apply(&s, ZoomCommand::ZoomOut { focal: None }), None);
        assert!(!s.is_zoom_in_possible());
        // Reset and custom zoom do not depend on the ladder.
        assert!(apply(&s, ZoomCommand::Reset).is_some());
    }

    #[test]
    fn enablement_flags_follow_domain_and_ladder() {
        let ladder = three_rungs();
        let mid = state(Domain::new(40_000.0, 50_000.0), &ladder, true);
        assert!(mid.is_zoom_in_possible());
        assert!(mid.is_zoom_out_possible());
        assert_eq!(mid.zoom_width(), Some(1_000.0));

        // At the finest rung there is nothing smaller to land on.
        let finest = state(Domain::new(44_500.0, 45_500.0), &ladder, true);
        assert!(!finest.is_zoom_in_possible());
        assert_eq!(finest.zoom_width(), Some(1_000.0));

        // Showing the full bounds leaves nothing to zoom out to.
        let full = state(Domain::new(0.0, 100_000.0), &ladder, true);
        assert!(!full.is_zoom_out_possible());

        let degenerate = ZoomState::new(
            Domain::new(5.0, 5.0),
            Bounds::new(5.0, 5.0),
            &ladder,
            true,
            TimeScale::new(Domain::new(5.0, 5.0), 0.0, 100.0),
        );
        assert!(!degenerate.is_zoom_out_possible());
    }

    #[test]
    fn controller_delivers_commits_to_the_callback() {
        let ladder = three_rungs();
        let committed: Rc<RefCell<Vec<(Domain, bool)>>> = Rc::default();
        let sink = committed.clone();
        let mut controller = ZoomController::new(move |domain, animated| {
            sink.borrow_mut().push((domain, animated));
        });

        let s = state(Domain::new(40_000.0, 50_000.0), &ladder, true);
        controller.zoom_in(&s, None);
        assert_eq!(
            *committed.borrow(),
            vec![(Domain::new(44_500.0, 45_500.0), true)]
        );
    }

    #[test]
    fn controller_does_not_call_back_when_gated() {
        let ladder = three_rungs();
        let calls = Rc::new(RefCell::new(0));
        let sink = calls.clone();
        let mut controller = ZoomController::new(move |_, _| *sink.borrow_mut() += 1);

        let s = state(Domain::new(40_000.0, 50_000.0), &ladder, false);
        controller.zoom_in(&s, None);
        controller.zoom_reset(&s);
        controller.zoom_custom(&s, 0.0, 50.0);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn preview_without_consumer_is_a_noop() {
        let ladder = three_rungs();
        let mut controller = ZoomController::new(|_, _| panic!("preview must not commit"));
        let s = state(Domain::new(0.0, 100_000.0), &ladder, true);
        assert_eq!(controller.zoom_custom_in_progress(&s, 10.0, 50.0), None);
    }

    #[test]
    fn preview_reaches_the_cursor_callback() {
        let ladder = three_rungs();
        let reported: Rc<RefCell<Vec<(f64, f64, f64)>>> = Rc::default();
        let sink = reported.clone();
        let mut controller = ZoomController::new(|_, _| panic!("preview must not commit"))
            .with_cursor_move(move |cursor, start, end| {
                sink.borrow_mut().push((cursor, start, end));
            });

        let s = state(Domain::new(0.0, 100_000.0), &ladder, true);
        controller.zoom_custom_in_progress(&s, 10.0, 50.0);
        assert_eq!(*reported.borrow(), vec![(50_000.0, 10_000.0, 50_000.0)]);
    }
}
