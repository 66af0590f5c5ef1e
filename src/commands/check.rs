//! Check command implementation
//!
//! Runs the gate and exits with the lint stage's status code.

use std::path::PathBuf;

use crate::error::Result;
use crate::workspace::Workspace;
use crate::{pipeline, ui};

/// Run the quality gate; the returned code becomes the process exit code
pub fn run(workspace: Option<PathBuf>, verbose: bool) -> Result<i32> {
    let workspace = Workspace::resolve(workspace)?;
    let report = pipeline::run(&workspace, verbose)?;
    ui::summary(&report);
    Ok(report.lint_status)
}
