//! Main application state and update loop.

use std::rc::Rc;

use eframe::egui;
use tracing::{debug, error, info, warn};

use universalx_core::{
    strings, Database, DeviceInfo, DeviceInfoProvider, LanguageCode, Preferences, Strings,
    SystemInfoProvider, ThemeMode,
};

use crate::ui;

/// Opened when the about card is clicked.
pub const PROJECT_URL: &str = "https://youtu.be/zaUrFJ3y_D8?si=xK4cQjKen8z6nVWN";

/// How long a status message stays in the status bar.
const STATUS_TIMEOUT_SECS: i64 = 5;

// =============================================================================
// Navigation
// =============================================================================

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Destination {
    #[default]
    Home,
    Settings,
}

impl Destination {
    pub fn all() -> &'static [Destination] {
        &[Self::Home, Self::Settings]
    }

    pub fn label(&self, strings: &Strings) -> &'static str {
        match self {
            Self::Home => strings.home,
            Self::Settings => strings.settings,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Home => "🏠",
            Self::Settings => "⚙",
        }
    }
}

/// Map a theme mode onto egui's theme preference.
pub fn theme_preference(mode: ThemeMode) -> egui::ThemePreference {
    match mode {
        ThemeMode::Light => egui::ThemePreference::Light,
        ThemeMode::Dark => egui::ThemePreference::Dark,
        ThemeMode::System => egui::ThemePreference::System,
    }
}

// =============================================================================
// Application State
// =============================================================================

/// Main application state.
pub struct UniversalApp {
    /// Theme and language, persisted to the database.
    pub prefs: Preferences,

    /// Host information shown on the home screen.
    pub device_info: DeviceInfo,

    /// Currently shown screen.
    pub destination: Destination,

    /// Status message.
    pub status_message: Option<(String, chrono::DateTime<chrono::Utc>)>,
}

impl UniversalApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        info!("Initializing UniversalApp");

        let db = open_database();
        let mut prefs = Preferences::new(Rc::new(db));
        debug!(?prefs, "Loaded preferences");

        // Apply theme, then keep it in sync with the preference
        cc.egui_ctx.set_theme(theme_preference(prefs.theme()));
        let ctx = cc.egui_ctx.clone();
        prefs.on_theme_change(move |mode| ctx.set_theme(theme_preference(mode)));

        // Labels are looked up every frame; just make sure one is drawn
        let ctx = cc.egui_ctx.clone();
        prefs.on_language_change(move |language| {
            debug!(%language, "Language changed");
            ctx.request_repaint();
        });

        let mut style = (*cc.egui_ctx.style()).clone();
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        cc.egui_ctx.set_style(style);

        let device_info = SystemInfoProvider::new().device_info();
        debug!(?device_info, "Collected device information");

        Self {
            prefs,
            device_info,
            destination: Destination::default(),
            status_message: None,
        }
    }

    /// Strings for the current language.
    pub fn strings(&self) -> &'static Strings {
        strings(self.prefs.language())
    }

    /// Apply a theme chosen in the UI.
    pub fn select_theme(&mut self, mode: ThemeMode) {
        if mode != self.prefs.theme() {
            self.prefs.set_theme(mode);
        }
    }

    /// Apply a language chosen in the UI.
    pub fn select_language(&mut self, language: LanguageCode) {
        if language != self.prefs.language() {
            self.prefs.set_language(language);
        }
    }

    /// Open the project page in the system browser.
    pub fn open_project_link(&mut self) {
        if let Err(e) = webbrowser::open(PROJECT_URL) {
            warn!(error = %e, "Failed to open browser");
            self.set_status(&format!("Failed to open browser: {}", e));
        }
    }

    /// Set a status message.
    pub fn set_status(&mut self, msg: &str) {
        self.status_message = Some((msg.to_string(), chrono::Utc::now()));
    }

    /// Clear the status message once it has been shown long enough.
    pub fn clear_old_status(&mut self) {
        if let Some((_, time)) = &self.status_message {
            if chrono::Utc::now().signed_duration_since(*time).num_seconds() > STATUS_TIMEOUT_SECS {
                self.status_message = None;
            }
        }
    }
}

/// Open and migrate the on-disk database, falling back to memory.
fn open_database() -> Database {
    let opened = Database::open().and_then(|db| {
        db.migrate()?;
        Ok(db)
    });

    match opened {
        Ok(db) => {
            info!(path = %db.path().display(), "Opened preferences database");
            db
        }
        Err(e) => {
            error!("Failed to open database: {}, preferences will not persist", e);
            let db = Database::open_in_memory().expect("Failed to create in-memory database");
            if let Err(e) = db.migrate() {
                error!("Failed to migrate in-memory database: {}", e);
            }
            db
        }
    }
}

impl eframe::App for UniversalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.clear_old_status();

        egui::SidePanel::left("nav_panel")
            .resizable(false)
            .exact_width(112.0)
            .show(ctx, |ui| {
                ui::nav::render(self, ui);
            });

        egui::TopBottomPanel::bottom("status_panel")
            .max_height(24.0)
            .show(ctx, |ui| {
                ui::status::render(self, ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.destination {
                Destination::Home => ui::home::render(self, ui),
                Destination::Settings => ui::settings::render(self, ui),
            });
        });

        if self.status_message.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_preference_mapping() {
        assert_eq!(theme_preference(ThemeMode::Light), egui::ThemePreference::Light);
        assert_eq!(theme_preference(ThemeMode::Dark), egui::ThemePreference::Dark);
        assert_eq!(theme_preference(ThemeMode::System), egui::ThemePreference::System);
    }

    #[test]
    fn test_destination_labels_follow_language() {
        let en = strings(LanguageCode::ENGLISH);
        let vi = strings(LanguageCode::VIETNAMESE);
        assert_eq!(Destination::Home.label(en), "Home");
        assert_eq!(Destination::Settings.label(vi), "Cài đặt");
        assert_eq!(Destination::default(), Destination::Home);
    }
}
