//! Pipeline stage definitions
//!
//! Each stage wraps one external tool invocation. The exclusion set is the
//! same for every stage; only the flag syntax differs per tool, so the
//! translation from directory names to tool arguments lives here.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::Result;
use crate::tools;

/// Which of the three gate stages a tool invocation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    /// Import ordering (mutates files, status discarded)
    Sort,
    /// Code formatting (mutates files, status discarded)
    Format,
    /// Linting (read-only, status captured)
    Lint,
}

impl StageKind {
    /// Human-readable stage name used in progress lines and errors
    pub fn label(self) -> &'static str {
        match self {
            StageKind::Sort => "sort imports",
            StageKind::Format => "format",
            StageKind::Lint => "lint",
        }
    }
}

/// A stage bound to a resolved tool binary
#[derive(Debug)]
pub struct Stage {
    pub kind: StageKind,
    pub binary: PathBuf,
}

impl Stage {
    /// Resolve the stage's tool, failing before any file is touched
    pub fn resolve(kind: StageKind, tool: &str) -> Result<Self> {
        let binary = tools::require(tool)?;
        Ok(Self { kind, binary })
    }

    /// Build the tool invocation for this stage.
    ///
    /// The exclusion entries are identical across stages; each tool gets
    /// them in its own syntax: isort takes repeated `--skip`, black takes
    /// one `--extend-exclude` regex, pylint takes a comma-joined `--ignore`.
    pub fn command(&self, root: &Path, excludes: &[String]) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.current_dir(root);
        match self.kind {
            StageKind::Sort => {
                cmd.arg(".");
                for dir in excludes {
                    cmd.args(["--skip", dir]);
                }
            }
            StageKind::Format => {
                cmd.args([".", "--extend-exclude", &exclude_regex(excludes)]);
            }
            StageKind::Lint => {
                cmd.arg("--recursive=y");
                cmd.arg(format!("--ignore={}", excludes.join(",")));
                cmd.arg(".");
            }
        }
        cmd
    }

    /// Rendered command line for verbose output
    pub fn render(&self, root: &Path, excludes: &[String]) -> String {
        let cmd = self.command(root, excludes);
        let mut parts = vec![cmd.get_program().to_string_lossy().into_owned()];
        parts.extend(
            cmd.get_args()
                .map(|a| a.to_string_lossy().into_owned()),
        );
        parts.join(" ")
    }
}

/// Black-style exclusion regex: `/(\.venv|venv|...)/`
fn exclude_regex(excludes: &[String]) -> String {
    let escaped: Vec<String> = excludes.iter().map(|d| regex_escape(d)).collect();
    format!("/({})/", escaped.join("|"))
}

fn regex_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(
            c,
            '.' | '+' | '*' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '|' | '^' | '$' | '\\'
        ) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
