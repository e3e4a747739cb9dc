//! Core package lists and the optional JSON manifest.
//!
//! The bootstrap always installs a built-in, ordered core list: `git`
//! first, then the platform's python/pip package names. A JSON manifest
//! can contribute additional requests (typically per-tool dependency lists
//! from an external catalog); those are appended after the core list in
//! file order.

use crate::error::Result;
use crate::installer::PackageRequest;
use crate::platform::PlatformProfile;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// One package entry in a manifest file.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    /// Primary package name.
    pub name: String,
    /// Alternative names tried in order.
    #[serde(default)]
    pub fallbacks: Vec<String>,
    /// Executable proving presence, when it differs from the name.
    #[serde(default)]
    pub provides: Option<String>,
    /// Optional packages are logged and skipped on failure.
    #[serde(default)]
    pub optional: bool,
}

/// A parsed package manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Ordered package entries.
    #[serde(default)]
    pub packages: Vec<ManifestEntry>,
}

impl Manifest {
    /// Load a manifest from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading manifest {}", path.display()))?;
        let manifest: Manifest = serde_json::from_str(&content)
            .with_context(|| format!("parsing manifest {}", path.display()))?;
        Ok(manifest)
    }

    /// Convert entries into installer requests, preserving order.
    pub fn requests(&self) -> Vec<PackageRequest> {
        self.packages
            .iter()
            .map(|entry| {
                let mut request = if entry.optional {
                    PackageRequest::optional(&entry.name)
                } else {
                    PackageRequest::required(&entry.name)
                };
                request.fallbacks = entry.fallbacks.clone();
                request.provides = entry.provides.clone();
                request
            })
            .collect()
    }
}

/// The built-in core package list for a platform, in install order.
///
/// Empty for `Unknown`: an unsupported host must not reach the installer.
pub fn core_requests(profile: PlatformProfile) -> Vec<PackageRequest> {
    match profile {
        PlatformProfile::Termux => vec![
            PackageRequest::required("git"),
            PackageRequest::required("python"),
            PackageRequest::required("python-pip").provides("pip"),
        ],
        PlatformProfile::DebianLinux
        | PlatformProfile::OtherLinux
        | PlatformProfile::GenericLinux => vec![
            PackageRequest::required("git"),
            PackageRequest::required("python3"),
            PackageRequest::required("python3-pip")
                .with_fallbacks(&["python-pip"])
                .provides("pip3"),
        ],
        PlatformProfile::ArchLinux => vec![
            PackageRequest::required("git"),
            PackageRequest::required("python"),
            PackageRequest::required("python-pip").provides("pip"),
        ],
        PlatformProfile::MacOs => vec![
            PackageRequest::required("git"),
            PackageRequest::required("python").provides("python3"),
        ],
        PlatformProfile::Windows => vec![
            PackageRequest::required("git"),
            PackageRequest::required("python"),
        ],
        PlatformProfile::Unknown => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SUPPORTED: &[PlatformProfile] = &[
        PlatformProfile::Termux,
        PlatformProfile::DebianLinux,
        PlatformProfile::ArchLinux,
        PlatformProfile::OtherLinux,
        PlatformProfile::GenericLinux,
        PlatformProfile::MacOs,
        PlatformProfile::Windows,
    ];

    #[test]
    fn every_supported_profile_has_core_packages() {
        for profile in SUPPORTED {
            let requests = core_requests(*profile);
            assert!(!requests.is_empty(), "{} has no core list", profile);
            assert_eq!(requests[0].name, "git", "{} must install git first", profile);
        }
    }

    #[test]
    fn unknown_profile_has_no_core_packages() {
        assert!(core_requests(PlatformProfile::Unknown).is_empty());
    }

    #[test]
    fn debian_pip_has_fallback_chain() {
        let requests = core_requests(PlatformProfile::DebianLinux);
        let pip = requests.iter().find(|r| r.name == "python3-pip").unwrap();
        assert_eq!(pip.fallbacks, vec!["python-pip".to_string()]);
        assert_eq!(pip.presence_check(), "pip3");
    }

    #[test]
    fn load_parses_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("packages.json");
        std::fs::write(
            &path,
            r#"{
                "packages": [
                    {"name": "nmap"},
                    {"name": "ruby", "optional": true},
                    {"name": "python3-pip", "fallbacks": ["python-pip"], "provides": "pip3"}
                ]
            }"#,
        )
        .unwrap();

        let manifest = Manifest::load(&path).unwrap();
        let requests = manifest.requests();

        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].name, "nmap");
        assert!(requests[0].required);
        assert!(!requests[1].required);
        assert_eq!(requests[2].fallbacks, vec!["python-pip".to_string()]);
        assert_eq!(requests[2].presence_check(), "pip3");
    }

    #[test]
    fn load_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let err = Manifest::load(&temp.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn load_invalid_json_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(Manifest::load(&path).is_err());
    }

    #[test]
    fn empty_manifest_has_no_requests() {
        let manifest = Manifest::default();
        assert!(manifest.requests().is_empty());
    }
}
