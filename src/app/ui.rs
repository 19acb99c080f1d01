use super::form::FormController;
use super::router::Route;
use super::LocalisApp;
use super::SubmissionState;
use crate::languages::{Language, SelectionMode};
use crate::upload::FormKind;
use crate::utils::color::ColorExt;
use egui::{Align, Color32, RichText};
use std::path::Path;

fn teal() -> Color32 {
    Color32::from_hex("#0d9488").unwrap_or(Color32::DARK_GREEN)
}

fn indigo() -> Color32 {
    Color32::from_hex("#4f46e5").unwrap_or(Color32::BLUE)
}

fn error_red() -> Color32 {
    Color32::from_rgb(220, 50, 50)
}

/// What the user asked for while the form was being drawn.
#[derive(Default)]
struct FormIntent {
    pick_file: bool,
    submit: bool,
    chosen: Option<Language>,
    toggle_dropdown: bool,
    /// Whether a press landed inside the dropdown, if there was one.
    pointer_pressed: Option<bool>,
    open_folder: bool,
}

impl LocalisApp {
    pub fn render(&mut self, ctx: &egui::Context) {
        self.render_nav_bar(ctx);

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            self.render_footer(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.navigator.current() {
            Route::Landing => self.render_landing(ui),
            Route::TranslateJson | Route::TranslateDocument => self.render_form_page(ctx, ui),
        });
    }

    fn render_nav_bar(&mut self, ctx: &egui::Context) {
        let mut target = None;
        let (mut back, mut forward) = (false, false);

        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                back = ui
                    .add_enabled(self.navigator.can_go_back(), egui::Button::new("⬅"))
                    .on_hover_text("Back (Alt+←)")
                    .clicked();
                forward = ui
                    .add_enabled(self.navigator.can_go_forward(), egui::Button::new("➡"))
                    .on_hover_text("Forward (Alt+→)")
                    .clicked();
                ui.separator();

                if ui
                    .add(
                        egui::Label::new(RichText::new("Localis").strong().color(teal()))
                            .sense(egui::Sense::click()),
                    )
                    .clicked()
                {
                    target = Some(Route::Landing);
                }

                let current = self.navigator.current();
                for (route, label) in [
                    (Route::TranslateJson, "JSON Files"),
                    (Route::TranslateDocument, "Documents"),
                ] {
                    if ui.selectable_label(current == route, label).clicked() {
                        target = Some(route);
                    }
                }
            });
            ui.add_space(4.0);
        });

        if back {
            self.go_back();
        } else if forward {
            self.go_forward();
        } else if let Some(route) = target {
            self.navigate(route);
        }
    }

    fn render_landing(&mut self, ui: &mut egui::Ui) {
        let mut target = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(40.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("Welcome to Localis").size(36.0).strong());
                ui.add_space(8.0);
                ui.label(
                    RichText::new(
                        "Quick and seamless translation services. \
                         Translate JSON files or documents in a matter of clicks.",
                    )
                    .color(ui.visuals().text_color().gamma_multiply(0.7)),
                );
                ui.add_space(20.0);
                let get_started = egui::Button::new(RichText::new("Get Started").color(Color32::WHITE))
                    .fill(teal())
                    .min_size(egui::vec2(160.0, 36.0));
                if ui.add(get_started).clicked() {
                    self.scroll_to_services = true;
                }
            });

            ui.add_space(60.0);

            let services = ui.vertical_centered(|ui| {
                ui.heading("Our Services");
                ui.add_space(16.0);

                ui.group(|ui| {
                    ui.label(RichText::new("Translate JSON Files").size(20.0).strong());
                    ui.label("Localize JSON files for web and mobile applications into several languages at once.");
                    ui.add_space(8.0);
                    let button = egui::Button::new(RichText::new("Translate JSON Now").color(Color32::WHITE))
                        .fill(teal());
                    if ui.add(button).clicked() {
                        target = Some(Route::TranslateJson);
                    }
                });

                ui.add_space(16.0);

                ui.group(|ui| {
                    ui.label(RichText::new("Translate Docs").size(20.0).strong());
                    ui.label("Translate Word documents into the language of your audience.");
                    ui.add_space(8.0);
                    let button =
                        egui::Button::new(RichText::new("Translate Documents Now").color(Color32::WHITE))
                            .fill(indigo());
                    if ui.add(button).clicked() {
                        target = Some(Route::TranslateDocument);
                    }
                });
            });

            if self.scroll_to_services {
                ui.scroll_to_rect(services.response.rect, Some(Align::TOP));
                self.scroll_to_services = false;
            }
            ui.add_space(40.0);
        });

        if let Some(route) = target {
            self.navigate(route);
        }
    }

    fn render_form_page(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let downloads_dir = self.downloads_dir().to_path_buf();
        let Some(form) = self.form.as_mut() else {
            return;
        };

        let intent = render_form(ctx, ui, form);

        if let Some(inside) = intent.pointer_pressed {
            form.dropdown_mut().pointer_pressed(inside);
        }
        if intent.toggle_dropdown {
            form.dropdown_mut().toggle();
        }
        if let Some(language) = intent.chosen {
            form.choose_language(language);
        }
        if intent.submit {
            form.submit();
        }
        if intent.open_folder {
            open_folder(&downloads_dir);
        }
        if intent.pick_file {
            self.pick_file();
        }
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("Backend: {}", self.backend_url))
                    .small()
                    .color(ui.visuals().text_color().gamma_multiply(0.6)),
            );
            ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                if ui
                    .add(
                        egui::Label::new(RichText::new("Downloads folder").small().color(teal()))
                            .sense(egui::Sense::click()),
                    )
                    .clicked()
                {
                    open_folder(self.downloads_dir());
                }
                ui.label(RichText::new("© 2024 Localis").small());
            });
        });
        ui.add_space(4.0);
    }
}

fn open_folder(path: &Path) {
    if let Err(e) = open::that(path) {
        log::error!("Failed to open {}: {}", path.display(), e);
    }
}

fn render_form(ctx: &egui::Context, ui: &mut egui::Ui, form: &FormController) -> FormIntent {
    let mut intent = FormIntent::default();
    let config = form.config();
    let submitting = form.state().is_submitting();
    let accent = match config.kind {
        FormKind::Json => teal(),
        FormKind::Document => indigo(),
    };

    ui.add_space(20.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(config.title).size(28.0).strong().color(accent));
    });
    ui.add_space(20.0);

    ui.label(RichText::new(config.file_label).strong());
    ui.group(|ui| {
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!submitting, egui::Button::new("📁 Choose File"))
                .clicked()
            {
                intent.pick_file = true;
            }
            match form.file() {
                Some(file) => ui.label(format!("{} ({})", file.name, file.display_size())),
                None => ui.label(
                    RichText::new("No file chosen")
                        .color(ui.visuals().text_color().gamma_multiply(0.6)),
                ),
            };
        });
    });

    ui.add_space(16.0);
    ui.label(RichText::new(config.language_label).strong());
    let header_text = form
        .selection()
        .summary()
        .unwrap_or_else(|| config.language_hint.to_string());
    let header = ui.add_enabled(
        !submitting,
        egui::Button::new(format!("{}  ▼", header_text))
            .min_size(egui::vec2(ui.available_width(), 32.0)),
    );

    intent.toggle_dropdown = header.clicked();
    if form.dropdown().is_open() {
        let overlay = egui::Area::new(egui::Id::new(("language-dropdown", config.title)))
            .order(egui::Order::Foreground)
            .fixed_pos(header.rect.left_bottom() + egui::vec2(0.0, 4.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_min_width(header.rect.width() - 12.0);
                    egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                        for language in Language::ALL {
                            let checked = form.selection().contains(language);
                            let clicked = match config.selection_mode {
                                SelectionMode::Multi => {
                                    let mut value = checked;
                                    ui.checkbox(&mut value, language.name()).changed()
                                }
                                SelectionMode::Single => {
                                    ui.radio(checked, language.name()).clicked()
                                }
                            };
                            if clicked {
                                intent.chosen = Some(language);
                            }
                        }
                    });
                });
            });

        // Presses are only watched while the overlay is open.
        let pressed_at = ctx.input(|i| {
            if i.pointer.any_pressed() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });
        intent.pointer_pressed = pressed_at
            .map(|pos| overlay.response.rect.contains(pos) || header.rect.contains(pos));
    }

    ui.add_space(16.0);

    if let Some(error) = form.error_message() {
        ui.vertical_centered(|ui| {
            ui.colored_label(error_red(), error);
        });
        ui.add_space(8.0);
    }

    ui.vertical_centered(|ui| {
        let label = if submitting { "Processing..." } else { "Translate" };
        let button = egui::Button::new(RichText::new(label).color(Color32::WHITE))
            .fill(indigo())
            .min_size(egui::vec2(200.0, 40.0));
        if ui.add_enabled(form.can_submit(), button).clicked() {
            intent.submit = true;
        }
    });

    let finished = form.state() == SubmissionState::Succeeded;
    if form.is_polling() || (config.poll_progress && finished) {
        ui.add_space(16.0);
        ui.group(|ui| {
            let progress = form.progress();
            ui.add(
                egui::ProgressBar::new(progress.fraction())
                    .show_percentage()
                    .animate(submitting)
                    .fill(accent),
            );
            ui.label(progress.get_status_text());
        });
    } else if submitting {
        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.spinner();
        });
    }

    if let (SubmissionState::Succeeded, Some(path)) = (form.state(), form.saved_to()) {
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.colored_label(Color32::from_rgb(0, 180, 0), format!("✅ Saved to {}", path.display()));
            if ui.button("📂 Show in folder").clicked() {
                intent.open_folder = true;
            }
        });
    }

    intent
}
