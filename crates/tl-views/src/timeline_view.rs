//! The timeline widget

use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};
use tracing::trace;

use tl_core::{TimeMillis, TimeScale, TimelineEvent, ZoomController, ZoomState};
use tl_render::{paint_events, EventRenderer};

use crate::{axis, TimelineContext};

/// Drags shorter than this are treated as clicks, not selections
const DRAG_SELECT_MIN_PX: f32 = 5.0;

/// Timeline widget configuration
#[derive(Debug, Clone)]
pub struct TimelineConfig {
    pub background_color: Color32,
    pub grid_color: Color32,
    pub lane_separator_color: Color32,
    pub axis_text_color: Color32,
    pub cursor_color: Color32,
    pub selection_fill: Color32,
    pub selection_stroke: Stroke,
    /// Height of one event lane
    pub lane_height: f32,
    /// Height of the tick label strip at the top
    pub axis_height: f32,
    /// Minimum pixel spacing between axis ticks
    pub tick_spacing: f32,
    /// Number of event lanes
    pub lanes: usize,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            background_color: Color32::from_rgb(23, 23, 23),
            grid_color: Color32::from_gray(55),
            lane_separator_color: Color32::from_gray(40),
            axis_text_color: Color32::from_gray(170),
            cursor_color: Color32::from_gray(200),
            selection_fill: Color32::from_rgba_unmultiplied(100, 150, 250, 40),
            selection_stroke: Stroke::new(1.0, Color32::from_rgb(100, 150, 250)),
            lane_height: 36.0,
            axis_height: 22.0,
            tick_spacing: 90.0,
            lanes: 4,
        }
    }
}

/// What the widget reported back for one frame
pub struct TimelineResponse {
    pub response: egui::Response,
    /// The mapping used this frame, derived from the domain and the rect
    pub scale: TimeScale,
    /// Time under the pointer while hovering
    pub hovered_time: Option<TimeMillis>,
}

/// The timeline widget
///
/// Wheel scrolling zooms in and out around the time under the cursor,
/// dragging selects a span to zoom into (with a live preview overlay), and
/// a double click resets to the full bounds. All gestures go through the
/// supplied controller; the widget commits nothing itself.
pub struct TimelineView {
    config: TimelineConfig,
    /// Anchor pixel of an in-progress drag-select
    drag_anchor: Option<f32>,
}

impl Default for TimelineView {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineView {
    pub fn new() -> Self {
        Self {
            config: TimelineConfig::default(),
            drag_anchor: None,
        }
    }

    pub fn with_config(mut self, config: TimelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Draw the widget and handle its gestures
    ///
    /// `state.time_scale` is replaced by a mapping derived from this frame's
    /// allocated rect before any command is dispatched.
    pub fn ui(
        &mut self,
        ui: &mut Ui,
        ctx: &TimelineContext,
        state: &ZoomState<'_>,
        events: &[TimelineEvent],
        renderer: &dyn EventRenderer,
        controller: &mut ZoomController,
    ) -> TimelineResponse {
        let lanes = self.config.lanes.max(1);
        let height = self.config.axis_height + self.config.lane_height * lanes as f32;
        let desired = Vec2::new(ui.available_width(), height);
        let (response, painter) = ui.allocate_painter(desired, Sense::click_and_drag());
        let rect = response.rect;

        let scale = TimeScale::new(state.domain, rect.left(), rect.right());
        let state = ZoomState {
            time_scale: scale,
            ..*state
        };

        painter.rect_filled(rect, Rounding::same(2.0), self.config.background_color);
        self.draw_axis(&painter, rect, &scale);
        self.draw_lane_separators(&painter, rect);

        let visible: Vec<TimelineEvent> = events
            .iter()
            .filter(|event| {
                state
                    .domain
                    .intersects(event.start_millis, event.effective_end())
            })
            .cloned()
            .collect();
        let lane_top = rect.top() + self.config.axis_height;
        let lane_height = self.config.lane_height;
        paint_events(&painter, &visible, renderer, &scale, |event| {
            let lane = event.lane.min(lanes - 1);
            lane_top + (lane as f32 + 0.5) * lane_height
        });

        // Hover cursor line and timestamp readout
        let mut hovered_time = None;
        if let Some(pos) = response.hover_pos() {
            let t = scale.to_time(pos.x);
            hovered_time = Some(t);
            painter.line_segment(
                [
                    Pos2::new(pos.x, rect.top()),
                    Pos2::new(pos.x, rect.bottom()),
                ],
                Stroke::new(1.0, self.config.cursor_color),
            );
            painter.text(
                Pos2::new(pos.x + 6.0, rect.bottom() - 4.0),
                Align2::LEFT_BOTTOM,
                axis::format_timestamp(t),
                FontId::proportional(11.0),
                self.config.cursor_color,
            );
        }

        self.handle_gestures(ui, &response, &state, controller, &painter, rect);

        // Publish the live cursor state for side panels.
        {
            let preview = self.drag_anchor.and_then(|anchor| {
                let pos = response.interact_pointer_pos()?;
                if (pos.x - anchor).abs() < DRAG_SELECT_MIN_PX {
                    return None;
                }
                Some((scale.to_time(anchor), scale.to_time(pos.x)))
            });
            let mut cursor = ctx.cursor.write();
            cursor.hovered_time = hovered_time;
            cursor.preview = preview;
        }

        TimelineResponse {
            response,
            scale,
            hovered_time,
        }
    }

    fn handle_gestures(
        &mut self,
        ui: &Ui,
        response: &egui::Response,
        state: &ZoomState<'_>,
        controller: &mut ZoomController,
        painter: &egui::Painter,
        rect: Rect,
    ) {
        // Wheel: zoom around the time under the cursor.
        if response.hovered() {
            let scroll = ui.input(|i| i.scroll_delta.y);
            if scroll != 0.0 {
                let focal = response
                    .hover_pos()
                    .map(|pos| state.time_scale.to_time(pos.x));
                if scroll > 0.0 {
                    controller.zoom_in(state, focal);
                } else {
                    controller.zoom_out(state, focal);
                }
            }
        }

        if response.double_clicked() {
            controller.zoom_reset(state);
        }

        // Drag-select zoom with live preview.
        if response.drag_started() {
            self.drag_anchor = response.interact_pointer_pos().map(|pos| pos.x);
        }
        match (self.drag_anchor, response.interact_pointer_pos()) {
            (Some(anchor), Some(pos)) => {
                let passed_threshold = (pos.x - anchor).abs() >= DRAG_SELECT_MIN_PX;
                if response.dragged() && passed_threshold {
                    controller.zoom_custom_in_progress(state, anchor, pos.x);
                    self.draw_selection(painter, rect, anchor, pos.x);
                }
                if response.drag_released() {
                    if passed_threshold {
                        trace!(anchor_px = anchor, end_px = pos.x, "drag select released");
                        controller.zoom_custom(state, anchor, pos.x);
                    }
                    self.drag_anchor = None;
                }
            }
            (Some(_), None) => {
                // Pointer lost mid-drag; abandon the selection.
                if !response.dragged() {
                    self.drag_anchor = None;
                }
            }
            _ => {}
        }
    }

    fn draw_axis(&self, painter: &egui::Painter, rect: Rect, scale: &TimeScale) {
        let axis_bottom = rect.top() + self.config.axis_height;
        painter.line_segment(
            [
                Pos2::new(rect.left(), axis_bottom),
                Pos2::new(rect.right(), axis_bottom),
            ],
            Stroke::new(1.0, self.config.grid_color),
        );
        for tick in axis::ticks(scale.domain(), rect.width(), self.config.tick_spacing) {
            let x = scale.to_px(tick.time);
            painter.line_segment(
                [Pos2::new(x, axis_bottom), Pos2::new(x, rect.bottom())],
                Stroke::new(1.0, self.config.grid_color),
            );
            painter.text(
                Pos2::new(x + 4.0, rect.top() + 4.0),
                Align2::LEFT_TOP,
                tick.label,
                FontId::proportional(11.0),
                self.config.axis_text_color,
            );
        }
    }

    fn draw_lane_separators(&self, painter: &egui::Painter, rect: Rect) {
        let lane_top = rect.top() + self.config.axis_height;
        for lane in 1..self.config.lanes.max(1) {
            let y = lane_top + lane as f32 * self.config.lane_height;
            painter.line_segment(
                [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
                Stroke::new(1.0, self.config.lane_separator_color),
            );
        }
    }

    fn draw_selection(&self, painter: &egui::Painter, rect: Rect, a: f32, b: f32) {
        let (left, right) = if a <= b { (a, b) } else { (b, a) };
        let selection = Rect::from_min_max(
            Pos2::new(left, rect.top()),
            Pos2::new(right, rect.bottom()),
        );
        painter.rect_filled(selection, Rounding::ZERO, self.config.selection_fill);
        painter.rect_stroke(selection, Rounding::ZERO, self.config.selection_stroke);
    }
}
