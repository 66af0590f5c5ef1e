//! The sequential quality gate
//!
//! Precondition check, then sort imports, then format, then lint. All three
//! tools are resolved before the first stage runs, so a missing tool never
//! leaves the tree half-rewritten. The sort and format stages mutate files
//! in place
//! and abort the pipeline if the tool itself errors; only the lint status
//! is carried through to the report and the process exit code.

use std::path::Path;

use crate::error::{PygateError, Result};
use crate::progress;
use crate::snapshot::{self, ExcludeSet};
use crate::stage::{Stage, StageKind};
use crate::ui;
use crate::workspace::Workspace;

/// Outcome of a full gate run
#[derive(Debug)]
pub struct GateReport {
    /// Python files the gate operated on
    pub files_in_scope: usize,
    /// Files rewritten by the import sorter
    pub sorted_changed: usize,
    /// Files rewritten by the formatter
    pub formatted_changed: usize,
    /// Exit status of the lint stage, which is also the process exit code
    pub lint_status: i32,
}

impl GateReport {
    pub fn lint_clean(&self) -> bool {
        self.lint_status == 0
    }
}

/// Run the gate over a workspace
pub fn run(workspace: &Workspace, verbose: bool) -> Result<GateReport> {
    let cfg = &workspace.config;
    let root = &workspace.root;

    // Preflight: every tool must resolve before any stage mutates the tree.
    let sorter = Stage::resolve(StageKind::Sort, &cfg.tools.isort)?;
    let formatter = Stage::resolve(StageKind::Format, &cfg.tools.black)?;
    let linter = Stage::resolve(StageKind::Lint, &cfg.tools.pylint)?;

    let excludes = ExcludeSet::compile(&cfg.exclude)?;
    let before = snapshot::capture(root, &excludes)?;

    ui::banner(root, before.len());

    run_mutating(&sorter, root, &cfg.exclude, verbose)?;
    let after_sort = snapshot::capture(root, &excludes)?;
    let sorted_changed = before.changed_since(&after_sort);

    run_mutating(&formatter, root, &cfg.exclude, verbose)?;
    let after_format = snapshot::capture(root, &excludes)?;
    let formatted_changed = after_sort.changed_since(&after_format);

    let lint_status = run_lint(&linter, root, &cfg.exclude, verbose)?;

    Ok(GateReport {
        files_in_scope: before.len(),
        sorted_changed,
        formatted_changed,
        lint_status,
    })
}

/// Run a mutating stage (sort or format).
///
/// The tool's own exit status is not reported in the summary, but a nonzero
/// status means the tool errored (a syntax error the formatter cannot parse,
/// for instance) and aborts the pipeline with the stage named.
fn run_mutating(stage: &Stage, root: &Path, excludes: &[String], verbose: bool) -> Result<()> {
    let output = invoke(stage, root, excludes, verbose)?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        eprintln!("{}", stderr.trim());
    }
    Err(PygateError::StageFailed {
        stage: stage.kind.label(),
        status: output.status.code().unwrap_or(-1),
    })
}

/// Run the lint stage and capture its exit status.
///
/// Unlike the mutating stages, any exit status here is a deferred report,
/// not an abort: the findings are printed and the status becomes the
/// process exit code. Only failure to execute the tool at all is fatal.
fn run_lint(stage: &Stage, root: &Path, excludes: &[String], verbose: bool) -> Result<i32> {
    let output = invoke(stage, root, excludes, verbose)?;

    let status = match output.status.code() {
        Some(code) => code,
        // Killed by a signal: the tool crashed rather than reported.
        None => {
            return Err(PygateError::StageFailed {
                stage: stage.kind.label(),
                status: -1,
            });
        }
    };

    if status != 0 {
        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            println!("{}", stdout.trim());
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            eprintln!("{}", stderr.trim());
        }
    }

    Ok(status)
}

fn invoke(
    stage: &Stage,
    root: &Path,
    excludes: &[String],
    verbose: bool,
) -> Result<std::process::Output> {
    if verbose {
        println!("$ {}", stage.render(root, excludes));
    }

    let pb = progress::stage_spinner(stage.kind.label());
    let result = stage.command(root, excludes).output();
    match result {
        Ok(output) => {
            let status = if output.status.success() { "done" } else { "exit nonzero" };
            progress::finish_stage(&pb, stage.kind.label(), status);
            Ok(output)
        }
        Err(e) => {
            pb.abandon();
            Err(PygateError::StageSpawnFailed {
                stage: stage.kind.label(),
                reason: e.to_string(),
            })
        }
    }
}
