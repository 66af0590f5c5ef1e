//! Error types and handling for Pygate
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Pygate operations
#[derive(Error, Diagnostic, Debug)]
pub enum PygateError {
    // Tool errors
    #[error("Required tool not installed: {tool}")]
    #[diagnostic(
        code(pygate::tool::not_found),
        help("Install it with 'pip install {tool}' or point pygate.yaml at another binary")
    )]
    ToolNotFound { tool: String },

    // Stage errors
    #[error("Stage '{stage}' failed with exit status {status}")]
    #[diagnostic(
        code(pygate::stage::failed),
        help("The tool itself errored; fix its output above and re-run")
    )]
    StageFailed { stage: &'static str, status: i32 },

    #[error("Stage '{stage}' could not be executed: {reason}")]
    #[diagnostic(code(pygate::stage::spawn_failed))]
    StageSpawnFailed { stage: &'static str, reason: String },

    // Workspace errors
    #[error("Workspace not found at: {path}")]
    #[diagnostic(
        code(pygate::workspace::not_found),
        help("Pass an existing directory with --workspace")
    )]
    WorkspaceNotFound { path: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(pygate::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid exclude pattern '{pattern}': {reason}")]
    #[diagnostic(
        code(pygate::config::invalid_exclude),
        help("Exclude entries are directory names or globs, e.g. '.venv' or '*_cache'")
    )]
    InvalidExcludePattern { pattern: String, reason: String },

    // Git errors
    #[error("Not inside a git repository")]
    #[diagnostic(
        code(pygate::git::no_repository),
        help("Hook and changelog commands need an enclosing git repository")
    )]
    NotInGitRepository,

    #[error("Git operation failed: {message}")]
    #[diagnostic(code(pygate::git::operation_failed))]
    GitOperationFailed { message: String },

    // Hook errors
    #[error("Existing pre-commit hook at {path} was not installed by pygate")]
    #[diagnostic(
        code(pygate::hooks::conflict),
        help("Re-run 'pygate hooks install --yes' to overwrite it")
    )]
    HookConflict { path: String },

    #[error("No pygate pre-commit hook installed")]
    #[diagnostic(code(pygate::hooks::not_installed))]
    HookNotInstalled,

    #[error("Prompt failed: {reason}")]
    #[diagnostic(code(pygate::ui::prompt_failed))]
    PromptFailed { reason: String },

    // Filesystem errors
    #[error("Failed to read {path}: {reason}")]
    #[diagnostic(code(pygate::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write {path}: {reason}")]
    #[diagnostic(code(pygate::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("I/O error: {reason}")]
    #[diagnostic(code(pygate::fs::io))]
    Io { reason: String },
}

impl From<git2::Error> for PygateError {
    fn from(e: git2::Error) -> Self {
        PygateError::GitOperationFailed {
            message: e.message().to_string(),
        }
    }
}

/// Result type alias for Pygate operations
pub type Result<T> = std::result::Result<T, PygateError>;
