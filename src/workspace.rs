//! Workspace resolution
//!
//! The workspace is the directory tree the gate runs against: either the
//! current directory or the one passed with --workspace.

use std::path::PathBuf;

use crate::config::GateConfig;
use crate::error::{PygateError, Result};

/// A resolved workspace: canonical root plus its gate configuration
#[derive(Debug)]
pub struct Workspace {
    /// Canonical root directory of the tree the gate runs against
    pub root: PathBuf,

    /// Gate configuration (pygate.yaml or defaults)
    pub config: GateConfig,
}

impl Workspace {
    /// Resolve the workspace from an optional directory override
    pub fn resolve(dir: Option<PathBuf>) -> Result<Self> {
        let root = match dir {
            Some(d) => d,
            None => std::env::current_dir().map_err(|e| PygateError::Io {
                reason: format!("cannot determine current directory: {e}"),
            })?,
        };

        if !root.is_dir() {
            return Err(PygateError::WorkspaceNotFound {
                path: root.display().to_string(),
            });
        }

        let root = dunce::canonicalize(&root).map_err(|e| PygateError::WorkspaceNotFound {
            path: format!("{}: {e}", root.display()),
        })?;

        let config = GateConfig::load(&root)?;
        Ok(Self { root, config })
    }
}
