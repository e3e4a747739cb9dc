//! Executable lookup.
//!
//! Presence checks iterate over PATH entries directly rather than shelling
//! out to `which` — `which` behavior varies across systems and is sometimes
//! a shell builtin with inconsistent error handling.

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Windows executable extensions tried when the name has none.
#[cfg(windows)]
const EXEC_EXTENSIONS: &[&str] = &["exe", "cmd", "bat"];

/// Resolve an executable's path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_executable(name: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(name);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
        #[cfg(windows)]
        if Path::new(name).extension().is_none() {
            for ext in EXEC_EXTENSIONS {
                let candidate = dir.join(format!("{}.{}", name, ext));
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Check whether an executable with this name is on the system PATH.
pub fn executable_on_path(name: &str) -> bool {
    resolve_executable(name, &system_path()).is_some()
}
