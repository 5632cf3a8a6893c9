//! UI components for universalX.

use eframe::egui;

pub mod home;
pub mod nav;
pub mod settings;
pub mod status;

// Theme-aware colors for the UI
pub mod colors {
    use eframe::egui::{Color32, Visuals};

    /// Kernel badge for a universalKernel build
    pub const KERNEL_UNIVERSAL: Color32 = Color32::from_rgb(0x42, 0xA5, 0xF5);

    /// Kernel badge for any other kernel
    pub const KERNEL_UNIVERSE: Color32 = Color32::DARK_GRAY;

    /// Text on a kernel badge
    pub const BADGE_TEXT: Color32 = Color32::WHITE;

    /// Accent for the selected navigation item
    pub const ACCENT: Color32 = Color32::from_rgb(103, 80, 164);

    /// Get card background based on theme
    pub fn card_bg(visuals: &Visuals) -> Color32 {
        if visuals.dark_mode {
            Color32::from_rgb(43, 41, 48)
        } else {
            Color32::from_rgb(243, 237, 247)
        }
    }

    /// Get muted text color based on theme
    pub fn muted(visuals: &Visuals) -> Color32 {
        if visuals.dark_mode {
            Color32::from_rgb(202, 196, 208)
        } else {
            Color32::from_rgb(73, 69, 79)
        }
    }
}

/// Rounded card, as used on both screens.
pub fn card<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    egui::Frame::none()
        .fill(colors::card_bg(ui.visuals()))
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
}
