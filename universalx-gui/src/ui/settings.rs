//! Settings screen: theme, language, and about card.

use eframe::egui::{self, RichText};

use universalx_core::{LanguageCode, ThemeMode};

use crate::app::UniversalApp;
use crate::ui::{card, colors};

/// Render the settings screen.
pub fn render(app: &mut UniversalApp, ui: &mut egui::Ui) {
    let strings = app.strings();
    let muted = colors::muted(ui.visuals());

    ui.add_space(8.0);
    ui.label(RichText::new(strings.settings).size(32.0).strong());
    ui.add_space(16.0);

    card(ui, |ui| {
        // Theme
        ui.label(RichText::new(strings.theme).strong());
        let current_theme = app.prefs.theme();
        let mut selected_theme = current_theme;
        egui::ComboBox::from_id_salt("theme_select")
            .width(ui.available_width())
            .selected_text(strings.theme_name(current_theme))
            .show_ui(ui, |ui| {
                for mode in ThemeMode::all() {
                    ui.selectable_value(&mut selected_theme, *mode, strings.theme_name(*mode));
                }
            });
        if selected_theme != current_theme {
            app.select_theme(selected_theme);
        }

        ui.add_space(8.0);

        // Language
        ui.label(RichText::new(strings.language).strong());
        let current_language = app.prefs.language();
        let mut selected_language = current_language;
        egui::ComboBox::from_id_salt("language_select")
            .width(ui.available_width())
            .selected_text(current_language.native_name())
            .show_ui(ui, |ui| {
                for language in LanguageCode::all() {
                    ui.selectable_value(&mut selected_language, language, language.native_name());
                }
            });
        if selected_language != current_language {
            app.select_language(selected_language);
        }
    });

    ui.add_space(16.0);

    // About
    let about = card(ui, |ui| {
        ui.label(RichText::new("universalX").strong());
        ui.label(
            RichText::new(format!("{} {}", strings.version, universalx_core::VERSION))
                .size(14.0)
                .color(muted),
        );
    })
    .response
    .interact(egui::Sense::click())
    .on_hover_cursor(egui::CursorIcon::PointingHand);

    if about.clicked() {
        app.open_project_link();
    }
}
