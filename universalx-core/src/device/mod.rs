//! Host device information.
//!
//! Everything here is read-only and best effort: a value the host doesn't
//! expose is `None`, never an error.

use std::collections::HashMap;
use std::path::PathBuf;

/// Marker a custom kernel puts in its release string.
const UNIVERSAL_KERNEL_MARKER: &str = "universalkernel";

/// Snapshot of the host's identifying properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceInfo {
    pub device_name: Option<String>,
    pub os_version: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub build_number: Option<String>,
    pub kernel_version: Option<String>,
    pub carrier: Option<String>,
    pub fingerprint: Option<String>,
}

impl DeviceInfo {
    pub fn kernel_status(&self) -> KernelStatus {
        KernelStatus::from_kernel_version(self.kernel_version.as_deref())
    }
}

/// Source of [`DeviceInfo`].
pub trait DeviceInfoProvider {
    fn device_info(&self) -> DeviceInfo;
}

/// Which kernel the host is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelStatus {
    /// A universalKernel build
    Universal,
    /// Anything else
    Universe,
}

impl KernelStatus {
    pub fn from_kernel_version(version: Option<&str>) -> Self {
        match version {
            Some(v) if v.to_ascii_lowercase().contains(UNIVERSAL_KERNEL_MARKER) => Self::Universal,
            _ => Self::Universe,
        }
    }

    /// Badge text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Universal => "h*",
            Self::Universe => "universe",
        }
    }
}

// =============================================================================
// System provider
// =============================================================================

/// Reads device information from procfs, sysfs and `/etc/os-release`.
///
/// Paths are resolved under `root` so tests can point it at a fixture tree.
/// There is no telephony stack on desktop hosts, so `carrier` is always `None`.
#[derive(Debug, Clone)]
pub struct SystemInfoProvider {
    root: PathBuf,
}

impl Default for SystemInfoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemInfoProvider {
    pub fn new() -> Self {
        Self::with_root("/")
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read(&self, relative: &str) -> Option<String> {
        let path = self.root.join(relative);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let trimmed = content.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Device property unavailable");
                None
            }
        }
    }

    fn os_release(&self) -> HashMap<String, String> {
        self.read("etc/os-release")
            .or_else(|| self.read("usr/lib/os-release"))
            .map(|content| parse_os_release(&content))
            .unwrap_or_default()
    }
}

impl DeviceInfoProvider for SystemInfoProvider {
    fn device_info(&self) -> DeviceInfo {
        let os = self.os_release();

        let os_version = os.get("PRETTY_NAME").cloned().or_else(|| {
            let name = os.get("NAME")?;
            Some(match os.get("VERSION_ID") {
                Some(version) => format!("{name} {version}"),
                None => name.clone(),
            })
        });
        let build_number = os
            .get("BUILD_ID")
            .or_else(|| os.get("VERSION_ID"))
            .cloned();

        let manufacturer = self.read("sys/devices/virtual/dmi/id/sys_vendor");
        let model = self.read("sys/devices/virtual/dmi/id/product_name");
        let kernel_version = self.read("proc/sys/kernel/osrelease");

        let fingerprint = build_fingerprint(
            manufacturer.as_deref(),
            model.as_deref(),
            os.get("ID").map(String::as_str),
            os.get("VERSION_ID").map(String::as_str),
            kernel_version.as_deref(),
        );

        DeviceInfo {
            device_name: self.read("proc/sys/kernel/hostname"),
            os_version: os_version.or_else(|| Some(std::env::consts::OS.to_string())),
            model,
            manufacturer,
            build_number,
            kernel_version,
            carrier: None,
            fingerprint,
        }
    }
}

/// Parse `KEY=value` lines, stripping optional quotes.
fn parse_os_release(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (key, value) = line.split_once('=')?;
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                .unwrap_or(value);
            Some((key.trim().to_string(), value.to_string()))
        })
        .collect()
}

/// `vendor/model/os:version/kernel`, or `None` without an OS id or kernel.
fn build_fingerprint(
    manufacturer: Option<&str>,
    model: Option<&str>,
    os_id: Option<&str>,
    os_version: Option<&str>,
    kernel: Option<&str>,
) -> Option<String> {
    if os_id.is_none() && kernel.is_none() {
        return None;
    }
    let part = |value: Option<&str>| {
        value
            .map(|v| v.replace(char::is_whitespace, "_").to_ascii_lowercase())
            .unwrap_or_else(|| "unknown".to_string())
    };
    Some(format!(
        "{}/{}/{}:{}/{}",
        part(manufacturer),
        part(model),
        part(os_id),
        part(os_version),
        kernel.unwrap_or("unknown"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn fixture() -> TempDir {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        write(root, "proc/sys/kernel/hostname", "workbench\n");
        write(root, "proc/sys/kernel/osrelease", "6.6.30-universalKernel-x1\n");
        write(root, "sys/devices/virtual/dmi/id/sys_vendor", "ACME Corp\n");
        write(root, "sys/devices/virtual/dmi/id/product_name", "Rocket 9\n");
        write(
            root,
            "etc/os-release",
            "# comment\nNAME=\"Fedora Linux\"\nID=fedora\nVERSION_ID=40\nPRETTY_NAME=\"Fedora Linux 40 (Workstation Edition)\"\n",
        );
        tmp
    }

    #[test]
    fn test_reads_fixture_tree() {
        let tmp = fixture();
        let info = SystemInfoProvider::with_root(tmp.path()).device_info();

        assert_eq!(info.device_name.as_deref(), Some("workbench"));
        assert_eq!(
            info.os_version.as_deref(),
            Some("Fedora Linux 40 (Workstation Edition)")
        );
        assert_eq!(info.manufacturer.as_deref(), Some("ACME Corp"));
        assert_eq!(info.model.as_deref(), Some("Rocket 9"));
        assert_eq!(info.build_number.as_deref(), Some("40"));
        assert_eq!(info.kernel_version.as_deref(), Some("6.6.30-universalKernel-x1"));
        assert_eq!(info.carrier, None);
        assert_eq!(
            info.fingerprint.as_deref(),
            Some("acme_corp/rocket_9/fedora:40/6.6.30-universalKernel-x1")
        );
        assert_eq!(info.kernel_status(), KernelStatus::Universal);
    }

    #[test]
    fn test_missing_files_yield_none() {
        let tmp = TempDir::new().unwrap();
        let info = SystemInfoProvider::with_root(tmp.path()).device_info();

        assert_eq!(info.device_name, None);
        assert_eq!(info.kernel_version, None);
        assert_eq!(info.fingerprint, None);
        // Falls back to the compile-time OS name
        assert_eq!(info.os_version.as_deref(), Some(std::env::consts::OS));
        assert_eq!(info.kernel_status(), KernelStatus::Universe);
    }

    #[test]
    fn test_os_version_from_name_and_version() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "etc/os-release", "NAME=Alpine\nVERSION_ID=3.20\nBUILD_ID=rolling\n");
        let info = SystemInfoProvider::with_root(tmp.path()).device_info();

        assert_eq!(info.os_version.as_deref(), Some("Alpine 3.20"));
        assert_eq!(info.build_number.as_deref(), Some("rolling"));
    }

    #[test]
    fn test_parse_os_release_quotes() {
        let parsed = parse_os_release("A=\"quoted value\"\nB='single'\nC=bare\nbroken line\n");
        assert_eq!(parsed["A"], "quoted value");
        assert_eq!(parsed["B"], "single");
        assert_eq!(parsed["C"], "bare");
        assert_eq!(parsed.len(), 3);
    }

    #[test]
    fn test_kernel_status() {
        assert_eq!(
            KernelStatus::from_kernel_version(Some("5.15.0-UNIVERSALKERNEL")),
            KernelStatus::Universal
        );
        assert_eq!(
            KernelStatus::from_kernel_version(Some("6.8.0-45-generic")),
            KernelStatus::Universe
        );
        assert_eq!(KernelStatus::from_kernel_version(None), KernelStatus::Universe);
        assert_eq!(KernelStatus::Universal.label(), "h*");
        assert_eq!(KernelStatus::Universe.label(), "universe");
    }

    #[test]
    fn test_fingerprint_with_partial_data() {
        assert_eq!(
            build_fingerprint(None, None, None, None, Some("6.1.0")),
            Some("unknown/unknown/unknown:unknown/6.1.0".to_string())
        );
        assert_eq!(build_fingerprint(Some("x"), Some("y"), None, None, None), None);
    }
}
