//! Demo application for the timeline widget

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use eframe::egui::{self, Context};
use parking_lot::RwLock;
use tracing::info;

use tl_core::{Bounds, Domain, TimeScale, TimelineEvent, ZoomController, ZoomLadder, ZoomState};
use tl_render::DefaultEventRenderer;
use tl_ui::{apply_theme, Theme, ZoomControlsPanel};
use tl_views::{format_timestamp, TimelineConfig, TimelineContext, TimelineView};

mod demo;

const TRANSITION_SECONDS: f32 = 0.25;

/// Eased in-flight transition between two domains
///
/// While one is running the app reports the domain-change gate as closed,
/// so a second commit cannot interrupt it.
struct DomainTransition {
    from: Domain,
    to: Domain,
    started: Instant,
}

impl DomainTransition {
    fn progress(&self, now: Instant) -> f32 {
        ((now - self.started).as_secs_f32() / TRANSITION_SECONDS).clamp(0.0, 1.0)
    }

    fn current(&self, now: Instant) -> Domain {
        let t = f64::from(ease_in_out(self.progress(now)));
        Domain::new(
            self.from.start + (self.to.start - self.from.start) * t,
            self.from.end + (self.to.end - self.from.end) * t,
        )
    }

    fn finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Main application state
struct TimelineDemoApp {
    events: Vec<TimelineEvent>,
    bounds: Bounds,
    ladder: ZoomLadder,

    /// The committed domain; only commits from the controller move it
    domain: Domain,
    transition: Option<DomainTransition>,
    /// Commit delivered by the controller's callback, drained each frame
    pending_commit: Arc<RwLock<Option<(Domain, bool)>>>,

    controller: ZoomController,
    timeline: TimelineView,
    controls: ZoomControlsPanel,
    timeline_ctx: TimelineContext,
    renderer: DefaultEventRenderer,
    /// Mapping reported by the widget last frame, reused by the side panel
    last_scale: TimeScale,
}

impl TimelineDemoApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let theme = Theme::default();
        apply_theme(&cc.egui_ctx, &theme);

        let bounds = demo::demo_bounds();
        let ladder = ZoomLadder::standard();
        let domain = bounds.as_domain();

        // The widget and the event marks take their colors from the same
        // palette the chrome was themed with.
        let timeline = TimelineView::new().with_config(TimelineConfig {
            background_color: theme.background,
            grid_color: theme.grid,
            lane_separator_color: theme.grid.gamma_multiply(0.6),
            axis_text_color: theme.muted_text,
            cursor_color: theme.text,
            selection_fill: theme.accent.gamma_multiply(0.18),
            selection_stroke: egui::Stroke::new(1.0, theme.accent),
            ..TimelineConfig::default()
        });
        let renderer = DefaultEventRenderer {
            background: theme.background,
            foreground: theme.event_fill,
            ..DefaultEventRenderer::default()
        };
        let events = demo::demo_events(&bounds, timeline.config().lanes);

        let pending_commit: Arc<RwLock<Option<(Domain, bool)>>> = Arc::default();
        let sink = pending_commit.clone();
        let controller = ZoomController::new(move |domain, animated| {
            *sink.write() = Some((domain, animated));
        });

        info!(events = events.len(), "demo timeline ready");

        Self {
            events,
            bounds,
            ladder,
            domain,
            transition: None,
            pending_commit,
            controller,
            timeline,
            controls: ZoomControlsPanel::new(),
            timeline_ctx: TimelineContext::new(),
            renderer,
            last_scale: TimeScale::new(domain, 0.0, 1.0),
        }
    }
}

impl eframe::App for TimelineDemoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Take over the latest commit. Inverted drag selections are
        // normalized here, on the host side.
        if let Some((target, animated)) = self.pending_commit.write().take() {
            let target = target.normalized();
            if animated {
                self.transition = Some(DomainTransition {
                    from: self.domain,
                    to: target,
                    started: Instant::now(),
                });
            } else {
                self.domain = target;
            }
        }

        // Advance the in-flight transition.
        if let Some(transition) = &self.transition {
            let now = Instant::now();
            self.domain = transition.current(now);
            if transition.finished(now) {
                self.transition = None;
            }
            ctx.request_repaint();
        }

        let change_possible = self.transition.is_none();

        // Keyboard zoom; no cursor position, so steps center on the view.
        let (key_in, key_out, key_reset) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::PlusEquals),
                i.key_pressed(egui::Key::Minus),
                i.key_pressed(egui::Key::Num0),
            )
        });
        if key_in || key_out || key_reset {
            let state = ZoomState::new(
                self.domain,
                self.bounds,
                &self.ladder,
                change_possible,
                self.last_scale,
            );
            if key_in {
                self.controller.zoom_in(&state, None);
            }
            if key_out {
                self.controller.zoom_out(&state, None);
            }
            if key_reset {
                self.controller.zoom_reset(&state);
            }
        }

        egui::SidePanel::left("timeline_controls")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.heading("Timeline");
                ui.separator();

                let state = ZoomState::new(
                    self.domain,
                    self.bounds,
                    &self.ladder,
                    change_possible,
                    self.last_scale,
                );
                self.controls.ui(ui, &state, &mut self.controller);

                ui.separator();
                ui.label(format!("From  {}", format_timestamp(self.domain.start)));
                ui.label(format!("To    {}", format_timestamp(self.domain.end)));
                let cursor = *self.timeline_ctx.cursor.read();
                if let Some(t) = cursor.hovered_time {
                    ui.label(format!("Cursor {}", format_timestamp(t)));
                }
                if let Some((start, end)) = cursor.preview {
                    ui.label(format!(
                        "Select {} .. {}",
                        format_timestamp(start),
                        format_timestamp(end)
                    ));
                }

                ui.separator();
                ui.label(format!("{} events", self.events.len()));

                ui.separator();
                ui.label("Scroll to zoom at the cursor");
                ui.label("Drag to zoom into a span");
                ui.label("Double-click to reset");
                ui.label("Keys: + / - / 0");
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let state = ZoomState::new(
                self.domain,
                self.bounds,
                &self.ladder,
                change_possible,
                self.last_scale,
            );
            let response = self.timeline.ui(
                ui,
                &self.timeline_ctx,
                &state,
                &self.events,
                &self.renderer,
                &mut self.controller,
            );
            self.last_scale = response.scale;
        });

        // A commit landed during this frame; render its first step promptly.
        if self.pending_commit.read().is_some() {
            ctx.request_repaint();
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("starting timeline demo");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 420.0])
            .with_min_inner_size([700.0, 300.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Timeline",
        options,
        Box::new(|cc| Box::new(TimelineDemoApp::new(cc))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run app: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_is_anchored_at_both_ends() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!(ease_in_out(0.5) > 0.49 && ease_in_out(0.5) < 0.51);
    }

    #[test]
    fn transition_interpolates_between_domains() {
        let transition = DomainTransition {
            from: Domain::new(0.0, 100.0),
            to: Domain::new(50.0, 150.0),
            started: Instant::now(),
        };
        let end = transition.started + std::time::Duration::from_secs_f32(TRANSITION_SECONDS);
        assert_eq!(transition.current(transition.started), Domain::new(0.0, 100.0));
        assert_eq!(transition.current(end), Domain::new(50.0, 150.0));
        assert!(transition.finished(end));
    }
}
