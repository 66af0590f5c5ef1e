//! External tool resolution
//!
//! The gate treats its tools as opaque binaries: all it needs up front is
//! whether each one resolves to an executable, so missing tools abort the
//! run before any stage mutates the tree.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{PygateError, Result};

/// Locate a tool on the search path.
///
/// A name containing a path separator is checked directly instead of being
/// searched, so config can point at an absolute or relative binary.
pub fn resolve(name: &str) -> Option<PathBuf> {
    let candidate = Path::new(name);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    let path = std::env::var_os("PATH")?;
    resolve_in(name, &path)
}

/// Locate a bare tool name within an explicit PATH-style value
fn resolve_in(name: &str, path: &OsStr) -> Option<PathBuf> {
    for dir in std::env::split_paths(path) {
        let full = dir.join(name);
        if is_executable(&full) {
            return Some(full);
        }
        #[cfg(windows)]
        {
            let exe = dir.join(format!("{name}.exe"));
            if is_executable(&exe) {
                return Some(exe);
            }
        }
    }
    None
}

/// Resolve a tool or fail with an error naming it
pub fn require(name: &str) -> Result<PathBuf> {
    resolve(name).ok_or_else(|| PygateError::ToolNotFound {
        tool: name.to_string(),
    })
}

/// First line of `<tool> --version`, if the tool answers it
pub fn probe_version(binary: &Path) -> Option<String> {
    let output = Command::new(binary).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn write_stub(dir: &Path, name: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_in_finds_executable() {
        let temp = TempDir::new().unwrap();
        write_stub(temp.path(), "fake-isort");
        let path = std::env::join_paths([temp.path()]).unwrap();
        let found = resolve_in("fake-isort", &path).unwrap();
        assert!(found.ends_with("fake-isort"));
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_in_skips_non_executable() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("not-a-tool"), "plain text").unwrap();
        let path = std::env::join_paths([temp.path()]).unwrap();
        assert!(resolve_in("not-a-tool", &path).is_none());
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_direct_path_bypasses_search() {
        let temp = TempDir::new().unwrap();
        let stub = write_stub(temp.path(), "direct");
        let found = resolve(stub.to_str().unwrap()).unwrap();
        assert_eq!(found, stub);
    }

    #[test]
    fn test_require_missing_tool_names_it() {
        let err = require("definitely-not-a-real-tool-xyz").unwrap_err();
        match err {
            PygateError::ToolNotFound { tool } => {
                assert_eq!(tool, "definitely-not-a-real-tool-xyz");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_probe_version_reads_first_line() {
        use std::os::unix::fs::PermissionsExt;
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("versioned");
        std::fs::write(&path, "#!/bin/sh\necho 'versioned 1.2.3'\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(probe_version(&path).unwrap(), "versioned 1.2.3");
    }
}
