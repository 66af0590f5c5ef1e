//! Git pre-commit hook management
//!
//! The hook is a tiny shell script that runs `pygate check`. A marker line
//! identifies hooks pygate wrote, so install and uninstall never clobber a
//! hook somebody else put there without being told to.

use std::fs;
use std::path::{Path, PathBuf};

use git2::Repository;

use crate::error::{PygateError, Result};

/// Marker line identifying a hook written by pygate
pub const HOOK_MARKER: &str = "# installed by pygate";

const HOOK_SCRIPT: &str = "#!/bin/sh\n# installed by pygate\nexec pygate check\n";

/// What currently occupies the pre-commit hook slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookState {
    /// No pre-commit hook present
    Absent,
    /// A hook pygate wrote
    Ours,
    /// Somebody else's hook
    Foreign,
}

/// Locate the pre-commit hook path for the repository enclosing `root`
pub fn hook_path(root: &Path) -> Result<PathBuf> {
    let repo = Repository::discover(root).map_err(|_| PygateError::NotInGitRepository)?;
    Ok(repo.path().join("hooks").join("pre-commit"))
}

/// Inspect the hook slot for the repository enclosing `root`
pub fn inspect(root: &Path) -> Result<(PathBuf, HookState)> {
    let path = hook_path(root)?;
    let state = if !path.exists() {
        HookState::Absent
    } else {
        let content = fs::read_to_string(&path).map_err(|e| PygateError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        if content.contains(HOOK_MARKER) {
            HookState::Ours
        } else {
            HookState::Foreign
        }
    };
    Ok((path, state))
}

/// Write the pygate hook script, overwriting whatever is there
pub fn write_hook(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| PygateError::FileWriteFailed {
            path: parent.display().to_string(),
            reason: e.to_string(),
        })?;
    }

    fs::write(path, HOOK_SCRIPT).map_err(|e| PygateError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(|e| {
            PygateError::FileWriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;
    }

    Ok(())
}

/// Remove the pygate hook. Fails if no hook is installed or the installed
/// hook is not ours.
pub fn remove_hook(root: &Path) -> Result<PathBuf> {
    let (path, state) = inspect(root)?;
    match state {
        HookState::Absent => Err(PygateError::HookNotInstalled),
        HookState::Foreign => Err(PygateError::HookConflict {
            path: path.display().to_string(),
        }),
        HookState::Ours => {
            fs::remove_file(&path).map_err(|e| PygateError::FileWriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
            Ok(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_repo() -> TempDir {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();
        temp
    }

    #[test]
    fn test_inspect_outside_repo_fails() {
        let temp = TempDir::new().unwrap();
        let err = inspect(temp.path()).unwrap_err();
        assert!(matches!(err, PygateError::NotInGitRepository));
    }

    #[test]
    fn test_inspect_fresh_repo_is_absent() {
        let temp = init_repo();
        let (path, state) = inspect(temp.path()).unwrap();
        assert_eq!(state, HookState::Absent);
        assert!(path.ends_with("pre-commit"));
    }

    #[test]
    fn test_write_then_inspect_is_ours() {
        let temp = init_repo();
        let (path, _) = inspect(temp.path()).unwrap();
        write_hook(&path).unwrap();
        let (_, state) = inspect(temp.path()).unwrap();
        assert_eq!(state, HookState::Ours);
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("pygate check"));
    }

    #[test]
    #[cfg(unix)]
    fn test_written_hook_is_executable() {
        use std::os::unix::fs::PermissionsExt;
        let temp = init_repo();
        let (path, _) = inspect(temp.path()).unwrap();
        write_hook(&path).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_ne!(mode & 0o111, 0);
    }

    #[test]
    fn test_foreign_hook_detected_and_protected() {
        let temp = init_repo();
        let (path, _) = inspect(temp.path()).unwrap();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();

        let (_, state) = inspect(temp.path()).unwrap();
        assert_eq!(state, HookState::Foreign);

        let err = remove_hook(temp.path()).unwrap_err();
        assert!(matches!(err, PygateError::HookConflict { .. }));
    }

    #[test]
    fn test_remove_hook_roundtrip() {
        let temp = init_repo();
        let (path, _) = inspect(temp.path()).unwrap();
        write_hook(&path).unwrap();
        remove_hook(temp.path()).unwrap();
        let (_, state) = inspect(temp.path()).unwrap();
        assert_eq!(state, HookState::Absent);
    }

    #[test]
    fn test_remove_absent_hook_fails() {
        let temp = init_repo();
        let err = remove_hook(temp.path()).unwrap_err();
        assert!(matches!(err, PygateError::HookNotInstalled));
    }
}
