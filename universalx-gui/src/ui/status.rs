//! Status bar at the bottom of the window.

use eframe::egui::{self, RichText};

use crate::app::UniversalApp;
use crate::ui::colors;

/// Render the status bar.
pub fn render(app: &UniversalApp, ui: &mut egui::Ui) {
    let muted = colors::muted(ui.visuals());
    let strings = app.strings();

    ui.horizontal(|ui| {
        if let Some((msg, _)) = &app.status_message {
            ui.label(RichText::new(msg).size(11.0).color(muted));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(app.prefs.language().native_name())
                    .size(11.0)
                    .color(muted),
            );
            ui.separator();
            ui.label(
                RichText::new(strings.theme_name(app.prefs.theme()))
                    .size(11.0)
                    .color(muted),
            );
        });
    });
}
