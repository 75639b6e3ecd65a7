//! Zoom controls panel
//!
//! Buttons for the ladder zoom steps and reset, enabled from the zoom
//! state's derived flags, plus a readout of the current level and the span
//! one zoom-in step would show.

use egui::{Ui, Vec2};
use std::time::Duration;

use tl_core::{DurationMillis, ZoomController, ZoomState};

/// Zoom controls configuration
#[derive(Debug, Clone)]
pub struct ZoomControlsConfig {
    /// Show the span width of one zoom-in step
    pub show_step_width: bool,
    /// Show the name of the current zoom level
    pub show_level_name: bool,
    pub button_size: Vec2,
}

impl Default for ZoomControlsConfig {
    fn default() -> Self {
        Self {
            show_step_width: true,
            show_level_name: true,
            button_size: Vec2::new(28.0, 28.0),
        }
    }
}

/// Zoom controls panel widget
pub struct ZoomControlsPanel {
    config: ZoomControlsConfig,
}

impl Default for ZoomControlsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoomControlsPanel {
    pub fn new() -> Self {
        Self {
            config: ZoomControlsConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ZoomControlsConfig) -> Self {
        self.config = config;
        self
    }

    /// Show the controls and dispatch clicked operations to the controller
    pub fn ui(&mut self, ui: &mut Ui, state: &ZoomState<'_>, controller: &mut ZoomController) {
        ui.horizontal(|ui| {
            let gate_open = state.change_possible;

            let zoom_in = ui
                .add_enabled(
                    gate_open && state.is_zoom_in_possible(),
                    egui::Button::new("➕").min_size(self.config.button_size),
                )
                .on_hover_text("Zoom in");
            if zoom_in.clicked() {
                controller.zoom_in(state, None);
            }

            let zoom_out = ui
                .add_enabled(
                    gate_open && state.is_zoom_out_possible(),
                    egui::Button::new("➖").min_size(self.config.button_size),
                )
                .on_hover_text("Zoom out");
            if zoom_out.clicked() {
                controller.zoom_out(state, None);
            }

            let reset = ui
                .add_enabled(
                    gate_open && state.is_zoom_out_possible(),
                    egui::Button::new("🔄").min_size(self.config.button_size),
                )
                .on_hover_text("Reset to full range");
            if reset.clicked() {
                controller.zoom_reset(state);
            }

            if self.config.show_level_name {
                ui.separator();
                let name = state
                    .ladder
                    .level(state.neighbors().current)
                    .map(|level| level.name.as_str())
                    .unwrap_or("-");
                ui.label(name);
            }

            if self.config.show_step_width {
                if let Some(width) = state.zoom_width() {
                    ui.separator();
                    ui.label(format!("step: {}", format_span(width)))
                        .on_hover_text("Span shown after one zoom-in step");
                }
            }
        });
    }
}

fn format_span(width: DurationMillis) -> String {
    let millis = width.max(0.0).round() as u64;
    humantime::format_duration(Duration::from_millis(millis)).to_string()
}
