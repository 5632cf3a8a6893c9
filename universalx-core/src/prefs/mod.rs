//! User preferences: theme mode and display language.
//!
//! [`Preferences`] owns one [`PreferenceCell`] per preference, all sharing a
//! single [`PreferenceStore`]. The GUI holds a `Preferences` and reads the
//! current values every frame; observers registered here let it react to
//! changes without polling.

mod cell;
mod language;
mod store;
mod theme;

use std::rc::Rc;

pub use cell::{Preference, PreferenceCell, SubscriptionId, ValidationError};
pub use language::{Language, LanguageCode, SUPPORTED_LANGUAGES};
pub use store::{MemoryStore, PreferenceKey, PreferenceStore, StoreError};
pub use theme::ThemeMode;

/// The app's preferences.
pub struct Preferences {
    theme: PreferenceCell<ThemeMode>,
    language: PreferenceCell<LanguageCode>,
}

impl Preferences {
    /// Create preferences backed by `store` and load both values.
    pub fn new(store: Rc<dyn PreferenceStore>) -> Self {
        let prefs = Self {
            theme: PreferenceCell::new(store.clone()),
            language: PreferenceCell::new(store),
        };
        tracing::debug!(theme = ?prefs.theme(), language = %prefs.language(), "Loaded preferences");
        prefs
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme.get()
    }

    pub fn language(&self) -> LanguageCode {
        self.language.get()
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.theme.set(theme);
    }

    pub fn set_language(&mut self, language: LanguageCode) {
        self.language.set(language);
    }

    /// Set the theme from its stored form (`"LIGHT"`, `"DARK"`, `"SYSTEM"`).
    pub fn set_theme_value(&mut self, raw: &str) -> Result<ThemeMode, ValidationError> {
        self.theme.set_value(raw)
    }

    /// Set the language from its code (`"en"`, `"vi"`).
    pub fn set_language_value(&mut self, raw: &str) -> Result<LanguageCode, ValidationError> {
        self.language.set_value(raw)
    }

    pub fn on_theme_change(&mut self, observer: impl FnMut(ThemeMode) + 'static) -> SubscriptionId {
        self.theme.subscribe(observer)
    }

    pub fn on_language_change(
        &mut self,
        observer: impl FnMut(LanguageCode) + 'static,
    ) -> SubscriptionId {
        self.language.subscribe(observer)
    }
}

impl std::fmt::Debug for Preferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preferences")
            .field("theme", &self.theme)
            .field("language", &self.language)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_new_loads_both_values() {
        let store = Rc::new(MemoryStore::new());
        store.set(PreferenceKey::Theme, "DARK").unwrap();
        store.set(PreferenceKey::Language, "vi").unwrap();

        let prefs = Preferences::new(store);

        assert_eq!(prefs.theme(), ThemeMode::Dark);
        assert_eq!(prefs.language(), LanguageCode::VIETNAMESE);
    }

    #[test]
    fn test_theme_and_language_are_independent() {
        let store = Rc::new(MemoryStore::new());
        let mut prefs = Preferences::new(store.clone());
        let languages = Rc::new(RefCell::new(Vec::new()));
        let sink = languages.clone();
        prefs.on_language_change(move |lang| sink.borrow_mut().push(lang));

        prefs.set_theme(ThemeMode::Light);

        assert!(languages.borrow().is_empty());
        assert_eq!(prefs.language(), LanguageCode::ENGLISH);
        assert_eq!(
            store.get(PreferenceKey::Language).unwrap(),
            None,
            "language must not be written by a theme change"
        );
    }

    #[test]
    fn test_string_setters_validate() {
        let mut prefs = Preferences::new(Rc::new(MemoryStore::new()));

        assert!(prefs.set_theme_value("NEON").is_err());
        assert!(prefs.set_language_value("de").is_err());
        assert_eq!(prefs.theme(), ThemeMode::System);
        assert_eq!(prefs.language(), LanguageCode::ENGLISH);

        assert_eq!(prefs.set_theme_value("LIGHT").unwrap(), ThemeMode::Light);
        assert_eq!(
            prefs.set_language_value("vi").unwrap(),
            LanguageCode::VIETNAMESE
        );
    }
}
