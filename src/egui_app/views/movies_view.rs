use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

/// Actions recorded while iterating the catalog, applied afterwards
enum CardAction {
    ShowGenre(usize),
    ShowDirector(usize),
    ShowSynopsis(usize),
    ToggleFavorite(String),
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    state.load_movies();

    let mut action = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Movies")
                    .size(26.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
        });
        ui.add_space(12.0);

        if state.movies.is_empty() {
            ui.vertical_centered(|ui| {
                if state.movies_loaded {
                    ui.colored_label(colors::TEXT_SECONDARY, "No movies to show");
                } else {
                    ui.colored_label(colors::TEXT_SECONDARY, "Loading movies...");
                    ui.spinner();
                }
            });
            return;
        }

        for (index, movie) in state.movies.iter().enumerate() {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.add_space(24.0);
                styles::card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width() - 48.0);

                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(&movie.title)
                                .size(18.0)
                                .strong()
                                .color(colors::TEXT_LIGHT),
                        );

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                let favorite = state.api.is_favorite(&movie.id);
                                let heart_color = if favorite {
                                    colors::FAVORITE
                                } else {
                                    colors::TEXT_SECONDARY
                                };
                                let heart = egui::Button::new(
                                    egui::RichText::new("♥").size(18.0).color(heart_color),
                                )
                                .fill(colors::CARD_BG);

                                let tooltip = if favorite {
                                    "Remove from favorites"
                                } else {
                                    "Add to favorites"
                                };
                                if ui.add(heart).on_hover_text(tooltip).clicked() {
                                    action =
                                        Some(CardAction::ToggleFavorite(movie.id.clone()));
                                }
                            },
                        );
                    });

                    ui.colored_label(
                        colors::TEXT_SECONDARY,
                        format!("{} — {}", movie.director.name, movie.genre.name),
                    );

                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        if ui.button("Genre").clicked() {
                            action = Some(CardAction::ShowGenre(index));
                        }
                        if ui.button("Director").clicked() {
                            action = Some(CardAction::ShowDirector(index));
                        }
                        if ui.button("Synopsis").clicked() {
                            action = Some(CardAction::ShowSynopsis(index));
                        }
                    });
                });
            });
        }
        ui.add_space(12.0);
    });

    match action {
        Some(CardAction::ShowGenre(index)) => {
            if let Some(movie) = state.movies.get(index) {
                let (title, content) =
                    (movie.genre.name.clone(), movie.genre.description.clone());
                state.open_detail_dialog(title, content);
            }
        }
        Some(CardAction::ShowDirector(index)) => {
            if let Some(movie) = state.movies.get(index) {
                let (title, content) =
                    (movie.director.name.clone(), movie.director.bio.clone());
                state.open_detail_dialog(title, content);
            }
        }
        Some(CardAction::ShowSynopsis(index)) => {
            if let Some(movie) = state.movies.get(index) {
                let content = movie.description.clone();
                state.open_detail_dialog("Description", content);
            }
        }
        Some(CardAction::ToggleFavorite(movie_id)) => {
            state.toggle_favorite(&movie_id);
        }
        None => {}
    }
}
