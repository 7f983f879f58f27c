//! egui Native Desktop App - Main Entry Point
//!
//! Implements eframe::App and wires the per-frame loop: poll pending
//! network results, then render the top bar and the current view.

use eframe::egui;
use flixdesk::egui_app::{theme, views, AppState};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "FlixDesk",
        options,
        Box::new(|cc| {
            theme::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(FlixDeskApp::default()))
        }),
    )
}

/// Main application state
struct FlixDeskApp {
    state: AppState,
}

impl Default for FlixDeskApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for FlixDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_results();

        views::render_top_bar(ctx, &mut self.state);

        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint();
    }
}
