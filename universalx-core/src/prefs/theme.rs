//! Theme mode preference.

use super::cell::Preference;
use super::store::PreferenceKey;

/// App theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    /// Always light
    Light,
    /// Always dark
    Dark,
    /// Follow the OS appearance
    #[default]
    System,
}

/// Stored form of each variant, format version 1.
///
/// These strings are on disk. Add rows, never edit existing ones.
const STORED_FORMS_V1: &[(ThemeMode, &str)] = &[
    (ThemeMode::Light, "LIGHT"),
    (ThemeMode::Dark, "DARK"),
    (ThemeMode::System, "SYSTEM"),
];

impl ThemeMode {
    /// Get all available theme modes, in display order.
    pub fn all() -> &'static [ThemeMode] {
        &[Self::Light, Self::Dark, Self::System]
    }

    /// Whether this mode renders dark, given the OS appearance.
    pub fn is_dark(&self, system_is_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_is_dark,
        }
    }
}

impl Preference for ThemeMode {
    const KEY: PreferenceKey = PreferenceKey::Theme;

    fn to_stored(self) -> &'static str {
        STORED_FORMS_V1
            .iter()
            .find(|(mode, _)| *mode == self)
            .map(|(_, stored)| *stored)
            .unwrap_or("SYSTEM")
    }

    fn from_stored(raw: &str) -> Option<Self> {
        STORED_FORMS_V1
            .iter()
            .find(|(_, stored)| *stored == raw)
            .map(|(mode, _)| *mode)
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "Light"),
            Self::Dark => write!(f, "Dark"),
            Self::System => write!(f, "System"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_default_is_system() {
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }

    #[test]
    fn test_theme_all() {
        assert_eq!(
            ThemeMode::all(),
            &[ThemeMode::Light, ThemeMode::Dark, ThemeMode::System]
        );
    }

    #[test]
    fn test_every_variant_has_a_stored_form() {
        for mode in ThemeMode::all() {
            let stored = mode.to_stored();
            assert_eq!(ThemeMode::from_stored(stored), Some(*mode));
        }
        assert_eq!(STORED_FORMS_V1.len(), ThemeMode::all().len());
    }

    #[test]
    fn test_stored_forms_are_upper_case_names() {
        assert_eq!(ThemeMode::Light.to_stored(), "LIGHT");
        assert_eq!(ThemeMode::Dark.to_stored(), "DARK");
        assert_eq!(ThemeMode::System.to_stored(), "SYSTEM");
    }

    #[test]
    fn test_from_stored_rejects_unknown() {
        assert_eq!(ThemeMode::from_stored("dark"), None);
        assert_eq!(ThemeMode::from_stored(""), None);
        assert_eq!(ThemeMode::from_stored("SEPIA"), None);
    }

    #[test]
    fn test_is_dark() {
        assert!(!ThemeMode::Light.is_dark(true));
        assert!(ThemeMode::Dark.is_dark(false));
        assert!(ThemeMode::System.is_dark(true));
        assert!(!ThemeMode::System.is_dark(false));
    }
}
