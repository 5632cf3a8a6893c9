//! Display language preference.

use super::cell::Preference;
use super::store::PreferenceKey;

/// A language the UI ships strings for.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Language {
    /// Stored code, e.g. `"en"`.
    pub code: &'static str,
    /// Name shown in the language picker, in the language itself.
    pub native_name: &'static str,
}

const EN: Language = Language {
    code: "en",
    native_name: "English",
};

const VI: Language = Language {
    code: "vi",
    native_name: "Tiếng Việt",
};

/// Supported languages, in picker order.
///
/// Adding a language means one row here plus a strings bundle in `i18n`.
pub const SUPPORTED_LANGUAGES: &[Language] = &[EN, VI];

/// A recognized language code.
///
/// Only codes from [`SUPPORTED_LANGUAGES`] are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageCode(&'static Language);

impl LanguageCode {
    pub const ENGLISH: LanguageCode = LanguageCode(&EN);
    pub const VIETNAMESE: LanguageCode = LanguageCode(&VI);

    /// Look up a supported language by code.
    pub fn parse(code: &str) -> Option<Self> {
        SUPPORTED_LANGUAGES
            .iter()
            .find(|lang| lang.code == code)
            .map(LanguageCode)
    }

    /// All supported languages, in picker order.
    pub fn all() -> impl Iterator<Item = LanguageCode> {
        SUPPORTED_LANGUAGES.iter().map(LanguageCode)
    }

    pub fn code(&self) -> &'static str {
        self.0.code
    }

    pub fn native_name(&self) -> &'static str {
        self.0.native_name
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::ENGLISH
    }
}

impl Preference for LanguageCode {
    const KEY: PreferenceKey = PreferenceKey::Language;

    fn to_stored(self) -> &'static str {
        self.code()
    }

    fn from_stored(raw: &str) -> Option<Self> {
        Self::parse(raw)
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        assert_eq!(LanguageCode::default().code(), "en");
    }

    #[test]
    fn test_parse_known_codes() {
        assert_eq!(LanguageCode::parse("en"), Some(LanguageCode::ENGLISH));
        assert_eq!(LanguageCode::parse("vi"), Some(LanguageCode::VIETNAMESE));
    }

    #[test]
    fn test_parse_rejects_unknown_codes() {
        assert_eq!(LanguageCode::parse("fr"), None);
        assert_eq!(LanguageCode::parse("EN"), None);
        assert_eq!(LanguageCode::parse(""), None);
    }

    #[test]
    fn test_all_follows_supported_table() {
        let codes: Vec<&str> = LanguageCode::all().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["en", "vi"]);
    }

    #[test]
    fn test_native_names() {
        assert_eq!(LanguageCode::ENGLISH.native_name(), "English");
        assert_eq!(LanguageCode::VIETNAMESE.native_name(), "Tiếng Việt");
    }

    #[test]
    fn test_stored_form_is_the_code() {
        for lang in LanguageCode::all() {
            assert_eq!(LanguageCode::from_stored(lang.to_stored()), Some(lang));
        }
    }
}
