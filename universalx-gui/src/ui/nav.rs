//! Navigation rail on the left edge.

use eframe::egui::{self, RichText, Vec2};

use crate::app::{Destination, UniversalApp};
use crate::ui::colors;

/// Render the navigation rail.
pub fn render(app: &mut UniversalApp, ui: &mut egui::Ui) {
    let strings = app.strings();

    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        for destination in Destination::all() {
            let selected = app.destination == *destination;
            let text = RichText::new(format!("{}\n{}", destination.icon(), destination.label(strings)))
                .size(13.0);
            let text = if selected {
                text.strong().color(colors::ACCENT)
            } else {
                text
            };

            if ui
                .add_sized(Vec2::new(96.0, 52.0), egui::SelectableLabel::new(selected, text))
                .clicked()
            {
                app.destination = *destination;
            }
            ui.add_space(8.0);
        }
    });
}
