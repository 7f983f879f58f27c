use eframe::egui;

use crate::egui_app::state::{AppState, AppView};
use crate::egui_app::theme::{colors, styles};

pub mod movies_view;
pub mod profile_view;
pub mod welcome_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::ACCENT,
                    egui::RichText::new("🎬 FlixDesk").size(18.0).strong(),
                );

                let authenticated = state.session().get().is_some();
                if authenticated {
                    ui.add_space(16.0);
                    if ui.button("Movies").clicked() {
                        state.current_view = AppView::Movies;
                    }
                    if ui.button("Profile").clicked() {
                        state.current_view = AppView::Profile;
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);
                    if authenticated {
                        if ui.button("Logout").clicked() {
                            state.logout();
                        }
                        if let Some(user) = state.session().user() {
                            ui.colored_label(colors::TEXT_LIGHT, format!("@{}", user.username));
                        }
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    state.enforce_session();

    egui::CentralPanel::default()
        .frame(styles::main_frame())
        .show(ctx, |ui| match state.current_view {
            AppView::Welcome => welcome_view::render(ui, state),
            AppView::Movies => movies_view::render(ui, state),
            AppView::Profile => profile_view::render(ui, state),
        });

    render_detail_dialog(ctx, state);
    render_snackbar(ctx, state);
}

/// Modal dialog showing genre, director, or synopsis details
fn render_detail_dialog(ctx: &egui::Context, state: &mut AppState) {
    let Some(dialog) = state.detail_dialog.clone() else {
        return;
    };

    let mut open = true;
    egui::Window::new(egui::RichText::new(dialog.title).color(colors::TEXT_LIGHT))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .frame(styles::modal_frame())
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_max_width(360.0);
            ui.colored_label(colors::TEXT_LIGHT, dialog.content);
        });

    if !open {
        state.detail_dialog = None;
    }
}

/// Transient 2-second notification at the bottom of the window
fn render_snackbar(ctx: &egui::Context, state: &mut AppState) {
    let Some(text) = state.notification().map(|n| n.text.clone()) else {
        return;
    };

    egui::Area::new(egui::Id::new("snackbar"))
        .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -24.0])
        .show(ctx, |ui| {
            styles::snackbar_frame().show(ui, |ui| {
                ui.colored_label(colors::TEXT_LIGHT, text);
            });
        });

    // Keep repainting so the snackbar disappears on time even without
    // input events.
    ctx.request_repaint();
}
