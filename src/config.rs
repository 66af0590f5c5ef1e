//! Gate configuration (pygate.yaml)
//!
//! The exclusion set and the tool binary names are configuration constants.
//! An optional `pygate.yaml` at the workspace root (or the user config
//! directory) overrides them; with no config file the defaults apply.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PygateError, Result};

/// Config filename looked up in the workspace root and user config dir
pub const CONFIG_FILE: &str = "pygate.yaml";

/// Directory names every stage skips when no config overrides them
pub const DEFAULT_EXCLUDES: &[&str] = &[".venv", "venv", "notebooks", "tests", "data"];

/// Gate configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Directory names (or globs) skipped by every stage
    #[serde(default = "default_excludes")]
    pub exclude: Vec<String>,

    /// Tool binary names or paths
    #[serde(default)]
    pub tools: ToolNames,
}

/// Binary names for the three gate stages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolNames {
    /// Import sorter
    #[serde(default = "default_isort")]
    pub isort: String,

    /// Code formatter
    #[serde(default = "default_black")]
    pub black: String,

    /// Linter
    #[serde(default = "default_pylint")]
    pub pylint: String,
}

fn default_excludes() -> Vec<String> {
    DEFAULT_EXCLUDES.iter().map(|s| (*s).to_string()).collect()
}

fn default_isort() -> String {
    "isort".to_string()
}

fn default_black() -> String {
    "black".to_string()
}

fn default_pylint() -> String {
    "pylint".to_string()
}

impl Default for ToolNames {
    fn default() -> Self {
        Self {
            isort: default_isort(),
            black: default_black(),
            pylint: default_pylint(),
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            exclude: default_excludes(),
            tools: ToolNames::default(),
        }
    }
}

impl GateConfig {
    /// Load configuration for a workspace.
    ///
    /// Lookup order: `pygate.yaml` in the workspace root, then the user
    /// config directory, then built-in defaults.
    pub fn load(workspace_root: &Path) -> Result<Self> {
        let workspace_config = workspace_root.join(CONFIG_FILE);
        if workspace_config.is_file() {
            return Self::load_file(&workspace_config);
        }

        if let Some(user_config) = user_config_path() {
            if user_config.is_file() {
                return Self::load_file(&user_config);
            }
        }

        Ok(Self::default())
    }

    fn load_file(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path).map_err(|e| PygateError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_yaml(&yaml, path)
    }

    /// Parse gate configuration from a YAML string
    pub fn from_yaml(yaml: &str, path: &Path) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| PygateError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// User-level config location, e.g. `~/.config/pygate/pygate.yaml`
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pygate").join(CONFIG_FILE))
}
