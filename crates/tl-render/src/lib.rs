//! Event mark rendering abstraction
//!
//! Hosts customize how events look by implementing [`EventRenderer`]. The
//! factory is invoked twice per visible event: once for the background pass
//! and once for the foreground pass. Background marks are opaque and stop
//! grid lines from shining through; foreground marks may be painted
//! semi-transparently so accumulations of overlapping events stay visible.

use egui::{Color32, Painter, Pos2, Rect, Rounding, Shape, Stroke};
use tl_core::{TimeScale, TimelineEvent};

/// Which of the two paint passes a mark is being produced for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventRole {
    Background,
    Foreground,
}

/// Factory for event marks
///
/// Implementations must derive every horizontal position from `scale` and
/// must not mutate shared state. `y` is the vertical center of the event's
/// lane. Point events (no end time) are drawn as a fixed-size icon centered
/// on the start position; interval events as a bar from start to end.
pub trait EventRenderer {
    fn mark(&self, event: &TimelineEvent, role: EventRole, scale: &TimeScale, y: f32) -> Shape;
}

/// Stock renderer: circular icons for point events, rounded bars for intervals
///
/// Selected events get a grey outline, pinned events a bright one, both
/// only in the foreground pass.
#[derive(Debug, Clone)]
pub struct DefaultEventRenderer {
    /// Opaque fill for the background pass
    pub background: Color32,
    /// Fill for the foreground pass, usually semi-transparent
    pub foreground: Color32,
    pub selected_stroke: Stroke,
    pub pinned_stroke: Stroke,
    /// Icon diameter and bar height in pixels
    pub mark_size: f32,
}

impl Default for DefaultEventRenderer {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(31, 31, 31),
            foreground: Color32::from_rgba_unmultiplied(233, 30, 99, 128),
            selected_stroke: Stroke::new(2.0, Color32::from_gray(160)),
            pinned_stroke: Stroke::new(2.0, Color32::from_gray(230)),
            mark_size: 14.0,
        }
    }
}

impl DefaultEventRenderer {
    fn style_for(&self, event: &TimelineEvent, role: EventRole) -> (Color32, Stroke) {
        match role {
            EventRole::Background => (self.background, Stroke::NONE),
            EventRole::Foreground => {
                let stroke = if event.is_pinned {
                    self.pinned_stroke
                } else if event.is_selected {
                    self.selected_stroke
                } else {
                    Stroke::NONE
                };
                (self.foreground, stroke)
            }
        }
    }
}

impl EventRenderer for DefaultEventRenderer {
    fn mark(&self, event: &TimelineEvent, role: EventRole, scale: &TimeScale, y: f32) -> Shape {
        let (fill, stroke) = self.style_for(event, role);
        let start_x = scale.to_px(event.start_millis);
        match event.end_millis {
            None => {
                let center = Pos2::new(start_x, y);
                let radius = self.mark_size / 2.0;
                let mut shapes = vec![Shape::circle_filled(center, radius, fill)];
                if stroke != Stroke::NONE {
                    shapes.push(Shape::circle_stroke(center, radius, stroke));
                }
                Shape::Vec(shapes)
            }
            Some(end_millis) => {
                let end_x = scale.to_px(end_millis);
                let half = self.mark_size / 2.0;
                let rect = Rect::from_min_max(
                    Pos2::new(start_x.min(end_x), y - half),
                    Pos2::new(start_x.max(end_x), y + half),
                );
                let rounding = Rounding::same(4.0);
                let mut shapes = vec![Shape::rect_filled(rect, rounding, fill)];
                if stroke != Stroke::NONE {
                    shapes.push(Shape::rect_stroke(rect, rounding, stroke));
                }
                Shape::Vec(shapes)
            }
        }
    }
}

/// Paints `events` through `renderer` in two passes
///
/// The full background pass runs before the first foreground mark, so an
/// opaque background mark can never cover a neighbor's foreground mark.
pub fn paint_events<F>(
    painter: &Painter,
    events: &[TimelineEvent],
    renderer: &dyn EventRenderer,
    scale: &TimeScale,
    y_of: F,
) where
    F: Fn(&TimelineEvent) -> f32,
{
    for role in [EventRole::Background, EventRole::Foreground] {
        for event in events {
            painter.add(renderer.mark(event, role, scale, y_of(event)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tl_core::Domain;
    use uuid::Uuid;

    fn scale() -> TimeScale {
        TimeScale::new(Domain::new(0.0, 1_000.0), 0.0, 1_000.0)
    }

    #[test]
    fn point_events_become_icon_marks() {
        let renderer = DefaultEventRenderer::default();
        let event = TimelineEvent::point(Uuid::nil(), 250.0);
        let mark = renderer.mark(&event, EventRole::Foreground, &scale(), 50.0);
        let Shape::Vec(shapes) = mark else {
            panic!("expected a composite shape");
        };
        assert!(matches!(shapes[0], Shape::Circle(ref c) if c.center == Pos2::new(250.0, 50.0)));
    }

    #[test]
    fn interval_events_become_bars_spanning_start_to_end() {
        let renderer = DefaultEventRenderer::default();
        let event = TimelineEvent::interval(Uuid::nil(), 100.0, 400.0);
        let mark = renderer.mark(&event, EventRole::Background, &scale(), 50.0);
        let Shape::Vec(shapes) = mark else {
            panic!("expected a composite shape");
        };
        let Shape::Rect(ref rect) = shapes[0] else {
            panic!("expected a bar");
        };
        assert_eq!(rect.rect.left(), 100.0);
        assert_eq!(rect.rect.right(), 400.0);
    }

    #[test]
    fn background_marks_ignore_selection_styling() {
        let renderer = DefaultEventRenderer::default();
        let event = TimelineEvent::point(Uuid::nil(), 0.0).selected(true);
        let Shape::Vec(shapes) = renderer.mark(&event, EventRole::Background, &scale(), 0.0) else {
            panic!("expected a composite shape");
        };
        // No outline in the background pass, selected or not.
        assert_eq!(shapes.len(), 1);

        let Shape::Vec(shapes) = renderer.mark(&event, EventRole::Foreground, &scale(), 0.0) else {
            panic!("expected a composite shape");
        };
        assert_eq!(shapes.len(), 2);
    }
}
