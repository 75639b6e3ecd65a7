//! User interface components for the timeline widget
//!
//! This crate provides the egui-based chrome around the widget: theming
//! and the zoom controls panel.

pub mod controls;
pub mod theme;

pub use controls::{ZoomControlsConfig, ZoomControlsPanel};
pub use theme::{apply_theme, Theme};
