//! universalX Core Library
//!
//! Everything the universalX GUI needs that isn't drawing:
//!
//! - Theme and language preferences with write-through persistence
//! - SQLite storage for those preferences
//! - Localized UI strings
//! - Host device information

pub mod db;
pub mod device;
pub mod i18n;
pub mod prefs;

// Re-exports for convenience
pub use db::Database;
pub use device::{DeviceInfo, DeviceInfoProvider, KernelStatus, SystemInfoProvider};
pub use i18n::{strings, Strings};
pub use prefs::{
    LanguageCode, PreferenceCell, PreferenceKey, PreferenceStore, Preferences, StoreError,
    ThemeMode, ValidationError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
