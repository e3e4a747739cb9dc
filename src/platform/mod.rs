//! Platform detection.
//!
//! The host platform is identified once per process by evaluating a
//! prioritized table of probes, first match wins. The resulting
//! [`PlatformProfile`] is passed explicitly into strategy selection and the
//! installer loop; nothing downstream re-reads ambient environment state.

pub mod probes;

pub use probes::{HostProbes, Kernel, SystemProbes};

use std::fmt;
use std::path::Path;

/// Identity of the host platform for package-manager purposes.
///
/// Immutable once detected for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformProfile {
    /// Android Termux environment (pkg).
    Termux,
    /// Debian/Ubuntu-based Linux (apt).
    DebianLinux,
    /// Arch-based Linux (pacman).
    ArchLinux,
    /// Linux with an os-release file naming an unrecognized distribution.
    OtherLinux,
    /// Linux without an os-release file.
    GenericLinux,
    /// macOS (Homebrew).
    MacOs,
    /// Windows (Chocolatey).
    Windows,
    /// No probe matched; the bootstrap cannot proceed.
    Unknown,
}

impl PlatformProfile {
    /// Stable lowercase identifier, used in JSON output and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformProfile::Termux => "termux",
            PlatformProfile::DebianLinux => "debian-linux",
            PlatformProfile::ArchLinux => "arch-linux",
            PlatformProfile::OtherLinux => "other-linux",
            PlatformProfile::GenericLinux => "generic-linux",
            PlatformProfile::MacOs => "macos",
            PlatformProfile::Windows => "windows",
            PlatformProfile::Unknown => "unknown",
        }
    }

    /// Human-readable name for terminal output.
    pub fn display_name(&self) -> &'static str {
        match self {
            PlatformProfile::Termux => "Termux",
            PlatformProfile::DebianLinux => "Debian/Ubuntu-based Linux",
            PlatformProfile::ArchLinux => "Arch-based Linux",
            PlatformProfile::OtherLinux => "Other Linux distribution",
            PlatformProfile::GenericLinux => "Generic Linux",
            PlatformProfile::MacOs => "macOS",
            PlatformProfile::Windows => "Windows",
            PlatformProfile::Unknown => "Unknown",
        }
    }

    /// Whether a package-manager strategy can be resolved for this profile.
    pub fn is_supported(&self) -> bool {
        !matches!(self, PlatformProfile::Unknown)
    }
}

impl fmt::Display for PlatformProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Termux keeps its rootfs under this prefix on Android.
const TERMUX_MARKER: &str = "/data/data/com.termux/files";

/// Standard location of the os-release identification file.
const OS_RELEASE: &str = "/etc/os-release";

/// One entry in the prioritized detection table.
type Detector = fn(&dyn HostProbes) -> Option<PlatformProfile>;

/// Detection table, evaluated in order; first match wins.
const DETECTORS: &[(&str, Detector)] = &[
    ("termux-marker", detect_termux),
    ("os-release", detect_os_release),
    ("darwin-kernel", detect_darwin),
    ("linux-kernel", detect_linux_kernel),
    ("windows-shell", detect_windows),
];

/// Detect the host platform from the given probes.
pub fn detect(probes: &dyn HostProbes) -> PlatformProfile {
    for (name, detector) in DETECTORS {
        if let Some(profile) = detector(probes) {
            tracing::debug!(probe = name, profile = profile.as_str(), "platform detected");
            return profile;
        }
    }
    tracing::debug!("no platform probe matched");
    PlatformProfile::Unknown
}

/// Detect the host platform from the real process environment.
pub fn detect_host() -> PlatformProfile {
    detect(&SystemProbes)
}

fn detect_termux(probes: &dyn HostProbes) -> Option<PlatformProfile> {
    if probes.env_var("ANDROID_ROOT").is_some() || probes.dir_exists(Path::new(TERMUX_MARKER)) {
        Some(PlatformProfile::Termux)
    } else {
        None
    }
}

fn detect_os_release(probes: &dyn HostProbes) -> Option<PlatformProfile> {
    let content = probes.read_file(Path::new(OS_RELEASE))?;
    Some(classify_os_release(&content))
}

fn detect_darwin(probes: &dyn HostProbes) -> Option<PlatformProfile> {
    (probes.kernel() == Kernel::Darwin).then_some(PlatformProfile::MacOs)
}

fn detect_linux_kernel(probes: &dyn HostProbes) -> Option<PlatformProfile> {
    // Reached only when no os-release file exists
    (probes.kernel() == Kernel::Linux).then_some(PlatformProfile::GenericLinux)
}

fn detect_windows(probes: &dyn HostProbes) -> Option<PlatformProfile> {
    if probes.kernel() == Kernel::Windows || probes.env_var("COMSPEC").is_some() {
        Some(PlatformProfile::Windows)
    } else {
        None
    }
}

/// Classify an os-release file body into a Linux profile.
///
/// Matches on the `ID=` and `ID_LIKE=` fields. `ID_LIKE` can list several
/// parents ("ubuntu debian"), so each token is checked.
fn classify_os_release(content: &str) -> PlatformProfile {
    let mut ids: Vec<String> = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if let Some(value) = line
            .strip_prefix("ID=")
            .or_else(|| line.strip_prefix("ID_LIKE="))
        {
            let value = value.trim_matches('"');
            ids.extend(value.split_whitespace().map(|s| s.to_lowercase()));
        }
    }

    if ids.iter().any(|id| id == "debian" || id == "ubuntu") {
        PlatformProfile::DebianLinux
    } else if ids.iter().any(|id| id == "arch") {
        PlatformProfile::ArchLinux
    } else {
        PlatformProfile::OtherLinux
    }
}
