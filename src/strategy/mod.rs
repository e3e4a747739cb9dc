//! Package-manager strategy selection.
//!
//! A [`Strategy`] is the set of commands and behaviors for one platform's
//! package manager: the install/update command templates, the binary whose
//! presence is pre-checked, whether commands need a `sudo` prefix, and an
//! optional bootstrap action for managers that can install themselves
//! (Homebrew on macOS).
//!
//! Selection is a pure mapping from [`PlatformProfile`], with one
//! deliberate exception: Other/Generic Linux resolves to apt only when an
//! `apt` executable is actually present. The upstream behavior of silently
//! assuming apt on every unrecognized distribution corrupted non-apt hosts
//! and is not preserved.

pub mod homebrew;

use crate::error::{GroundworkError, Result};
use crate::platform::PlatformProfile;
use crate::shell;

/// Supported package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    /// Termux pkg.
    Pkg,
    /// Debian/Ubuntu apt.
    Apt,
    /// Arch pacman.
    Pacman,
    /// macOS Homebrew.
    Homebrew,
    /// Windows Chocolatey.
    Chocolatey,
}

impl PackageManager {
    /// The executable looked up to confirm the manager is installed.
    pub fn binary(&self) -> &'static str {
        match self {
            PackageManager::Pkg => "pkg",
            PackageManager::Apt => "apt",
            PackageManager::Pacman => "pacman",
            PackageManager::Homebrew => "brew",
            PackageManager::Chocolatey => "choco",
        }
    }
}

/// Bootstrap action for a manager that can install itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapTool {
    /// Fetch and run the official Homebrew installer.
    Homebrew,
}

/// Commands and behaviors for one platform's package manager.
#[derive(Debug, Clone)]
pub struct Strategy {
    manager: PackageManager,
    sudo: bool,
    bootstrap: Option<BootstrapTool>,
}

impl Strategy {
    /// Resolve the strategy for a platform.
    ///
    /// `lookup` answers "is this executable on PATH" and is injected so
    /// selection is testable without touching the host. Fails with
    /// [`GroundworkError::UnsupportedPlatform`] for `Unknown` and
    /// [`GroundworkError::PackageManagerMissing`] where the platform's
    /// manager cannot be confirmed or bootstrapped.
    pub fn select(profile: PlatformProfile, lookup: &dyn Fn(&str) -> bool) -> Result<Self> {
        Self::select_with(profile, lookup, shell::is_elevated())
    }

    /// Resolve the strategy for the real host.
    pub fn select_for_host(profile: PlatformProfile) -> Result<Self> {
        Self::select(profile, &shell::executable_on_path)
    }

    /// Resolve with an explicit elevation flag (tests control sudo prefixing).
    pub fn select_with(
        profile: PlatformProfile,
        lookup: &dyn Fn(&str) -> bool,
        elevated: bool,
    ) -> Result<Self> {
        let strategy = match profile {
            PlatformProfile::Termux => Self {
                manager: PackageManager::Pkg,
                sudo: false,
                bootstrap: None,
            },
            PlatformProfile::DebianLinux => Self {
                manager: PackageManager::Apt,
                sudo: !elevated,
                bootstrap: None,
            },
            PlatformProfile::ArchLinux => Self {
                manager: PackageManager::Pacman,
                sudo: !elevated,
                bootstrap: None,
            },
            PlatformProfile::OtherLinux | PlatformProfile::GenericLinux => {
                if !lookup("apt") {
                    return Err(GroundworkError::PackageManagerMissing {
                        manager: "apt".to_string(),
                        hint: format!(
                            "{} has no recognized package manager; install packages manually",
                            profile.display_name()
                        ),
                    });
                }
                Self {
                    manager: PackageManager::Apt,
                    sudo: !elevated,
                    bootstrap: None,
                }
            }
            PlatformProfile::MacOs => Self {
                manager: PackageManager::Homebrew,
                sudo: false,
                bootstrap: Some(BootstrapTool::Homebrew),
            },
            PlatformProfile::Windows => {
                if !lookup("choco") {
                    return Err(GroundworkError::PackageManagerMissing {
                        manager: "choco".to_string(),
                        hint: "install Chocolatey, or install packages manually with winget"
                            .to_string(),
                    });
                }
                Self {
                    manager: PackageManager::Chocolatey,
                    sudo: false,
                    bootstrap: None,
                }
            }
            PlatformProfile::Unknown => {
                return Err(GroundworkError::UnsupportedPlatform {
                    detail: "no platform probe matched this host".to_string(),
                });
            }
        };
        Ok(strategy)
    }

    /// The package manager this strategy invokes.
    pub fn manager(&self) -> PackageManager {
        self.manager
    }

    /// The bootstrap action, if the manager can install itself.
    pub fn bootstrap_tool(&self) -> Option<BootstrapTool> {
        self.bootstrap
    }

    /// The command refreshing the manager's package index, if it has one.
    pub fn update_command(&self) -> Option<String> {
        let cmd = match self.manager {
            PackageManager::Pkg => "pkg update -y",
            PackageManager::Apt => "apt update -y",
            PackageManager::Pacman => "pacman -Sy --noconfirm",
            PackageManager::Homebrew => "brew update",
            PackageManager::Chocolatey => return None,
        };
        Some(self.prefixed(cmd))
    }

    /// The command installing one package, non-interactively.
    pub fn install_command(&self, package: &str) -> String {
        let cmd = match self.manager {
            PackageManager::Pkg => format!("pkg install -y {}", package),
            PackageManager::Apt => format!("apt install -y {}", package),
            PackageManager::Pacman => format!("pacman -S --noconfirm {}", package),
            PackageManager::Homebrew => format!("brew install {}", package),
            PackageManager::Chocolatey => format!("choco install -y {}", package),
        };
        self.prefixed(&cmd)
    }

    /// Whether the manager's binary is present.
    pub fn manager_available(&self, lookup: &dyn Fn(&str) -> bool) -> bool {
        lookup(self.manager.binary())
    }

    fn prefixed(&self, cmd: &str) -> String {
        if self.sudo {
            format!("sudo {}", cmd)
        } else {
            cmd.to_string()
        }
    }
}
