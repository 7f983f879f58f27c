use eframe::egui;

use crate::egui_app::state::{AppState, WelcomeDialog};
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let total_height = 260.0;
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(
                egui::RichText::new("🎬 FlixDesk")
                    .size(48.0)
                    .strong()
                    .color(colors::ACCENT),
            );
            ui.add_space(10.0);

            ui.label(
                egui::RichText::new("Your movie catalog, on the desktop")
                    .size(18.0)
                    .color(colors::TEXT_SECONDARY),
            );
            ui.add_space(40.0);

            let signin_btn = egui::Button::new(
                egui::RichText::new("Sign in")
                    .size(20.0)
                    .color(colors::TEXT_LIGHT),
            )
            .min_size(egui::vec2(200.0, 50.0))
            .fill(colors::BUTTON_PRIMARY);

            if ui.add(signin_btn).clicked() {
                state.open_welcome_dialog(WelcomeDialog::SignIn);
            }
            ui.add_space(15.0);

            let signup_btn = egui::Button::new(
                egui::RichText::new("Sign up")
                    .size(20.0)
                    .color(colors::TEXT_LIGHT),
            )
            .min_size(egui::vec2(200.0, 50.0))
            .fill(colors::BUTTON_SECONDARY);

            if ui.add(signup_btn).clicked() {
                state.open_welcome_dialog(WelcomeDialog::Register);
            }
        });
    });

    match state.welcome_dialog {
        WelcomeDialog::SignIn => render_signin_dialog(ui.ctx().clone(), state),
        WelcomeDialog::Register => render_register_dialog(ui.ctx().clone(), state),
        WelcomeDialog::None => {}
    }
}

/// Sign-in modal. On success the state closes it and navigates to the
/// movie list; on failure it stays open with the fixed failure phrase.
fn render_signin_dialog(ctx: egui::Context, state: &mut AppState) {
    let mut open = true;
    egui::Window::new(egui::RichText::new("Sign in").color(colors::TEXT_LIGHT))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .frame(styles::modal_frame())
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(&ctx, |ui| {
            ui.set_width(280.0);

            if let Some(ref error) = state.form_error {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(8.0);
            }

            ui.label(egui::RichText::new("Username").color(colors::TEXT_SECONDARY));
            ui.add_sized(
                [260.0, 28.0],
                egui::TextEdit::singleline(&mut state.signin_form.username)
                    .text_color(colors::TEXT_LIGHT),
            );
            ui.add_space(8.0);

            ui.label(egui::RichText::new("Password").color(colors::TEXT_SECONDARY));
            ui.add_sized(
                [260.0, 28.0],
                egui::TextEdit::singleline(&mut state.signin_form.password)
                    .password(true)
                    .text_color(colors::TEXT_LIGHT),
            );
            ui.add_space(16.0);

            let login_btn = egui::Button::new(
                egui::RichText::new("Log in").color(colors::TEXT_LIGHT),
            )
            .min_size(egui::vec2(260.0, 32.0))
            .fill(colors::BUTTON_PRIMARY);

            if ui.add(login_btn).clicked() {
                state.handle_login();
            }

            if state.loading {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Loading...").color(colors::TEXT_LIGHT));
                    ui.spinner();
                });
            }
        });

    if !open {
        state.welcome_dialog = WelcomeDialog::None;
        state.form_error = None;
    }
}

/// Registration modal. Success closes it with a snackbar; the user then
/// signs in. Failure leaves it open.
fn render_register_dialog(ctx: egui::Context, state: &mut AppState) {
    let mut open = true;
    egui::Window::new(egui::RichText::new("Sign up").color(colors::TEXT_LIGHT))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .frame(styles::modal_frame())
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(&ctx, |ui| {
            ui.set_width(280.0);

            if let Some(ref error) = state.form_error {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(8.0);
            }

            ui.label(egui::RichText::new("Username").color(colors::TEXT_SECONDARY));
            ui.add_sized(
                [260.0, 28.0],
                egui::TextEdit::singleline(&mut state.register_form.username)
                    .text_color(colors::TEXT_LIGHT),
            );
            ui.add_space(8.0);

            ui.label(egui::RichText::new("Password").color(colors::TEXT_SECONDARY));
            ui.add_sized(
                [260.0, 28.0],
                egui::TextEdit::singleline(&mut state.register_form.password)
                    .password(true)
                    .text_color(colors::TEXT_LIGHT),
            );
            ui.add_space(8.0);

            ui.label(egui::RichText::new("Email").color(colors::TEXT_SECONDARY));
            ui.add_sized(
                [260.0, 28.0],
                egui::TextEdit::singleline(&mut state.register_form.email)
                    .text_color(colors::TEXT_LIGHT),
            );
            ui.add_space(8.0);

            ui.label(
                egui::RichText::new("Birthday (YYYY-MM-DD, optional)")
                    .color(colors::TEXT_SECONDARY),
            );
            ui.add_sized(
                [260.0, 28.0],
                egui::TextEdit::singleline(&mut state.register_form.birthday)
                    .text_color(colors::TEXT_LIGHT),
            );
            ui.add_space(16.0);

            let register_btn = egui::Button::new(
                egui::RichText::new("Sign up").color(colors::TEXT_LIGHT),
            )
            .min_size(egui::vec2(260.0, 32.0))
            .fill(colors::BUTTON_PRIMARY);

            if ui.add(register_btn).clicked() {
                state.handle_register();
            }

            if state.loading {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Loading...").color(colors::TEXT_LIGHT));
                    ui.spinner();
                });
            }
        });

    if !open {
        state.welcome_dialog = WelcomeDialog::None;
        state.form_error = None;
    }
}
