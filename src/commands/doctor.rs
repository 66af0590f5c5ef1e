//! Doctor command implementation
//!
//! Probes the whole toolbelt: the three tools the gate requires plus the
//! optional ones the contributor workflow documents. Missing required
//! tools make the command exit 1; optional ones never affect the exit code.

use std::path::PathBuf;

use console::Style;

use crate::error::Result;
use crate::tools;
use crate::workspace::Workspace;

/// Optional tools the contributor docs mention but the gate does not run
const OPTIONAL_TOOLS: &[&str] = &["mypy", "ruff", "pre-commit"];

/// Report tool availability; returns the process exit code
pub fn run(workspace: Option<PathBuf>) -> Result<i32> {
    let workspace = Workspace::resolve(workspace)?;
    let tool_names = &workspace.config.tools;

    println!("{}", Style::new().bold().apply_to("Toolbelt:"));

    let mut missing_required = false;
    for name in [&tool_names.isort, &tool_names.black, &tool_names.pylint] {
        if !report(name, true) {
            missing_required = true;
        }
    }
    for name in OPTIONAL_TOOLS {
        report(name, false);
    }

    println!();
    if missing_required {
        println!(
            "{}",
            Style::new()
                .red()
                .apply_to("Required tools are missing; 'pygate check' will not run.")
        );
        Ok(1)
    } else {
        println!(
            "{}",
            Style::new().green().apply_to("All required tools present.")
        );
        Ok(0)
    }
}

/// Print one tool's line; returns whether it resolved
fn report(name: &str, required: bool) -> bool {
    match tools::resolve(name) {
        Some(binary) => {
            let version = tools::probe_version(&binary)
                .unwrap_or_else(|| "version unknown".to_string());
            println!(
                "  {:<12} {}  {} ({})",
                name,
                Style::new().green().apply_to("ok"),
                version,
                binary.display()
            );
            true
        }
        None => {
            let style = if required {
                Style::new().red().bold()
            } else {
                Style::new().yellow()
            };
            let qualifier = if required { "" } else { " (optional)" };
            println!(
                "  {:<12} {}{}",
                name,
                style.apply_to("missing"),
                qualifier
            );
            false
        }
    }
}
