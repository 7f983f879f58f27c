//! Theme Styling Functions
//!
//! This module provides helper functions for applying the dark cinema
//! color scheme consistently across all UI components.

use super::colors;
use eframe::egui::{self, Color32, CornerRadius, Stroke};

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    // Window styling
    style.visuals.window_fill = colors::DIALOG_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);

    // Panel styling
    style.visuals.panel_fill = colors::BG_DARK;

    // Widget styling
    style.visuals.widgets.noninteractive.bg_fill = colors::INPUT_BG;
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.inactive.bg_fill = colors::INPUT_BG;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.hovered.bg_fill = colors::CARD_HOVER;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.active.bg_fill = colors::BUTTON_PRIMARY;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    // Selection color
    style.visuals.selection.bg_fill = colors::ACCENT;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame style for the main content area
pub fn main_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(0))
}

/// Create a frame style for a movie card
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::same(10))
}

/// Create a frame for modal dialogs
pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::DIALOG_BG)
        .stroke(Stroke::new(2.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(egui::Margin::same(20))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(60),
        })
}

/// Create a frame style for the snackbar notification
pub fn snackbar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SNACKBAR_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(egui::Margin::symmetric(16, 10))
}
