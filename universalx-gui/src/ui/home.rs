//! Home screen: kernel status and device information.

use eframe::egui::{self, RichText};

use crate::app::UniversalApp;
use crate::ui::{card, colors};

/// Render the home screen.
pub fn render(app: &UniversalApp, ui: &mut egui::Ui) {
    let strings = app.strings();
    let info = &app.device_info;
    let muted = colors::muted(ui.visuals());

    ui.spacing_mut().item_spacing.y = 16.0;
    ui.add_space(8.0);
    ui.label(RichText::new("universalX").size(28.0).strong());

    // Kernel status badge
    card(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(strings.kernel_status).size(16.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let status = info.kernel_status();
                let fill = match status {
                    universalx_core::KernelStatus::Universal => colors::KERNEL_UNIVERSAL,
                    universalx_core::KernelStatus::Universe => colors::KERNEL_UNIVERSE,
                };
                egui::Frame::none()
                    .fill(fill)
                    .rounding(egui::Rounding::same(12.0))
                    .inner_margin(egui::Margin::symmetric(12.0, 6.0))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(status.label())
                                .size(14.0)
                                .strong()
                                .color(colors::BADGE_TEXT),
                        );
                    });
            });
        });
    });

    // Device information
    card(ui, |ui| {
        ui.spacing_mut().item_spacing.y = 8.0;
        ui.label(RichText::new(strings.device_information).size(20.0).strong());
        ui.add_space(4.0);

        let rows = [
            (strings.device_name, &info.device_name),
            (strings.os_version, &info.os_version),
            (strings.model, &info.model),
            (strings.manufacturer, &info.manufacturer),
            (strings.build_number, &info.build_number),
            (strings.kernel_version, &info.kernel_version),
            (strings.carrier, &info.carrier),
            (strings.fingerprint, &info.fingerprint),
        ];

        for (label, value) in rows {
            let value = value.as_deref().unwrap_or(strings.unknown);
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(label).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(value).color(muted));
                });
            });
        }
    });
}
