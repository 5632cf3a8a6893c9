//! Compiled UI string bundles, one per supported language.

use crate::prefs::{LanguageCode, ThemeMode};

/// Every user-visible label in the app.
#[derive(Debug)]
pub struct Strings {
    pub home: &'static str,
    pub settings: &'static str,
    pub kernel_status: &'static str,
    pub device_information: &'static str,
    pub device_name: &'static str,
    pub os_version: &'static str,
    pub model: &'static str,
    pub manufacturer: &'static str,
    pub build_number: &'static str,
    pub kernel_version: &'static str,
    pub carrier: &'static str,
    pub fingerprint: &'static str,
    pub theme: &'static str,
    pub language: &'static str,
    pub theme_light: &'static str,
    pub theme_dark: &'static str,
    pub theme_system: &'static str,
    pub unknown: &'static str,
    pub version: &'static str,
}

impl Strings {
    /// Localized name of a theme mode.
    pub fn theme_name(&self, mode: ThemeMode) -> &'static str {
        match mode {
            ThemeMode::Light => self.theme_light,
            ThemeMode::Dark => self.theme_dark,
            ThemeMode::System => self.theme_system,
        }
    }
}

static EN: Strings = Strings {
    home: "Home",
    settings: "Settings",
    kernel_status: "Kernel status",
    device_information: "Device information",
    device_name: "Device name",
    os_version: "OS version",
    model: "Model",
    manufacturer: "Manufacturer",
    build_number: "Build number",
    kernel_version: "Kernel version",
    carrier: "SIM carrier",
    fingerprint: "Fingerprint",
    theme: "Theme",
    language: "Language",
    theme_light: "Light",
    theme_dark: "Dark",
    theme_system: "System default",
    unknown: "Unknown",
    version: "Version",
};

static VI: Strings = Strings {
    home: "Trang chủ",
    settings: "Cài đặt",
    kernel_status: "Trạng thái kernel",
    device_information: "Thông tin thiết bị",
    device_name: "Tên thiết bị",
    os_version: "Phiên bản hệ điều hành",
    model: "Kiểu máy",
    manufacturer: "Nhà sản xuất",
    build_number: "Số bản dựng",
    kernel_version: "Phiên bản kernel",
    carrier: "Nhà mạng SIM",
    fingerprint: "Dấu vân tay bản dựng",
    theme: "Giao diện",
    language: "Ngôn ngữ",
    theme_light: "Sáng",
    theme_dark: "Tối",
    theme_system: "Theo hệ thống",
    unknown: "Không xác định",
    version: "Phiên bản",
};

/// String bundle for a language.
pub fn strings(language: LanguageCode) -> &'static Strings {
    match language.code() {
        "vi" => &VI,
        _ => &EN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_supported_language_has_its_own_bundle() {
        let en = strings(LanguageCode::ENGLISH);
        for lang in LanguageCode::all().filter(|l| *l != LanguageCode::ENGLISH) {
            assert!(
                !std::ptr::eq(strings(lang), en),
                "{lang} falls back to English"
            );
        }
    }

    #[test]
    fn test_theme_names() {
        let en = strings(LanguageCode::ENGLISH);
        assert_eq!(en.theme_name(ThemeMode::Light), "Light");
        assert_eq!(en.theme_name(ThemeMode::System), "System default");

        let vi = strings(LanguageCode::VIETNAMESE);
        assert_eq!(vi.theme_name(ThemeMode::Dark), "Tối");
        assert_eq!(vi.settings, "Cài đặt");
    }
}
