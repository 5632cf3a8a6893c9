//! universalX GUI Application
//!
//! Shows host device information and lets the user pick a theme and language.

mod app;
mod ui;

use eframe::egui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("universalx=debug".parse().unwrap())
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting universalX v{}", universalx_core::VERSION);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([480.0, 420.0])
            .with_title("universalX"),
        ..Default::default()
    };

    eframe::run_native(
        "universalX",
        options,
        Box::new(|cc| Ok(Box::new(app::UniversalApp::new(cc)))),
    )
}
