//! Widget theming
//!
//! One palette drives both the egui chrome and the timeline's own colors:
//! hosts build their `TimelineConfig` and event renderer from the same
//! `Theme` value they pass to [`apply_theme`], so the two cannot drift
//! apart.

use egui::{style::WidgetVisuals, Color32, Context, Rounding, Stroke, Visuals};

/// Color palette for the timeline and the chrome around it
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    /// Timeline plotting area background
    pub background: Color32,
    /// Side panel and window fill
    pub panel: Color32,
    /// Interactive widget fill
    pub widget: Color32,
    pub text: Color32,
    pub muted_text: Color32,
    /// Accent for selections and the drag-select overlay
    pub accent: Color32,
    /// Event mark fill for the foreground pass
    pub event_fill: Color32,
    /// Axis grid lines
    pub grid: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Timeline Dark".to_string(),
            background: Color32::from_rgb(18, 20, 24),
            panel: Color32::from_rgb(27, 30, 36),
            widget: Color32::from_rgb(42, 46, 54),
            text: Color32::from_rgb(214, 216, 220),
            muted_text: Color32::from_gray(150),
            accent: Color32::from_rgb(86, 156, 214),
            event_fill: Color32::from_rgba_unmultiplied(233, 30, 99, 128),
            grid: Color32::from_gray(52),
        }
    }
}

impl Theme {
    fn interact(&self, fill: Color32, outline: u8) -> WidgetVisuals {
        WidgetVisuals {
            bg_fill: fill,
            weak_bg_fill: fill,
            bg_stroke: Stroke::new(1.0, Color32::from_gray(outline)),
            rounding: Rounding::same(3.0),
            fg_stroke: Stroke::new(1.0, self.text),
            expansion: 0.0,
        }
    }
}

/// Apply the theme to the egui context
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = theme.panel;
    visuals.panel_fill = theme.panel;
    visuals.extreme_bg_color = theme.background;
    visuals.faint_bg_color = theme.widget;

    // Interaction states are derived from the one widget fill.
    visuals.widgets.noninteractive = theme.interact(theme.panel, 55);
    visuals.widgets.inactive = theme.interact(theme.widget, 65);
    visuals.widgets.open = theme.interact(theme.widget, 65);
    visuals.widgets.hovered = theme.interact(lighten(theme.widget, 12), 80);
    visuals.widgets.active = theme.interact(lighten(theme.widget, 24), 95);

    visuals.selection.bg_fill = theme.accent.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, theme.accent);
    visuals.hyperlink_color = theme.accent;

    ctx.set_visuals(visuals);
}

fn lighten(color: Color32, amount: u8) -> Color32 {
    Color32::from_rgb(
        color.r().saturating_add(amount),
        color.g().saturating_add(amount),
        color.b().saturating_add(amount),
    )
}
