use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(user) = state.session().user() else {
        // enforce_session already redirects; nothing to draw this frame
        return;
    };

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(
                egui::RichText::new("Profile")
                    .size(26.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(16.0);

            styles::card_frame().show(ui, |ui| {
                ui.set_width(360.0);

                ui.colored_label(colors::TEXT_LIGHT, format!("@{}", user.username));
                ui.colored_label(colors::TEXT_SECONDARY, &user.email);
                if let Some(birthday) = user.birthday {
                    ui.colored_label(
                        colors::TEXT_SECONDARY,
                        format!("Born {}", birthday.format("%Y-%m-%d")),
                    );
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                if user.favorite_movies.is_empty() {
                    ui.colored_label(colors::TEXT_SECONDARY, "No favorite movies yet");
                } else {
                    ui.colored_label(
                        colors::TEXT_LIGHT,
                        format!("{} favorite movie(s)", user.favorite_movies.len()),
                    );
                    for movie_id in &user.favorite_movies {
                        ui.colored_label(colors::TEXT_SECONDARY, format!("♥ {}", movie_id));
                    }
                }
            });

            ui.add_space(20.0);
            ui.label(
                egui::RichText::new("Edit profile")
                    .size(18.0)
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(8.0);

            if let Some(ref error) = state.form_error {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(8.0);
            }

            ui.label(egui::RichText::new("Username").color(colors::TEXT_SECONDARY));
            ui.add_sized(
                [280.0, 28.0],
                egui::TextEdit::singleline(&mut state.profile_form.username)
                    .text_color(colors::TEXT_LIGHT),
            );
            ui.add_space(8.0);

            ui.label(
                egui::RichText::new("New password (leave empty to keep)")
                    .color(colors::TEXT_SECONDARY),
            );
            ui.add_sized(
                [280.0, 28.0],
                egui::TextEdit::singleline(&mut state.profile_form.password)
                    .password(true)
                    .text_color(colors::TEXT_LIGHT),
            );
            ui.add_space(8.0);

            ui.label(egui::RichText::new("Email").color(colors::TEXT_SECONDARY));
            ui.add_sized(
                [280.0, 28.0],
                egui::TextEdit::singleline(&mut state.profile_form.email)
                    .text_color(colors::TEXT_LIGHT),
            );
            ui.add_space(16.0);

            let save_btn = egui::Button::new(
                egui::RichText::new("Save changes").color(colors::TEXT_LIGHT),
            )
            .min_size(egui::vec2(280.0, 32.0))
            .fill(colors::BUTTON_PRIMARY);

            if ui.add(save_btn).clicked() {
                state.handle_update_profile();
            }

            if state.loading {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Loading...").color(colors::TEXT_LIGHT));
                    ui.spinner();
                });
            }

            ui.add_space(32.0);
            ui.separator();
            ui.add_space(12.0);

            let delete_btn = egui::Button::new(
                egui::RichText::new("Delete account").color(colors::TEXT_LIGHT),
            )
            .min_size(egui::vec2(280.0, 32.0))
            .fill(colors::ERROR);

            if ui.add(delete_btn).clicked() {
                state.handle_delete_account();
            }
            ui.add_space(24.0);
        });
    });
}
