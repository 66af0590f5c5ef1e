//! Console output for the gate
//!
//! All human-facing styling goes through `console::Style`; there is no
//! machine-readable output.

use std::path::Path;

use console::Style;

use crate::pipeline::GateReport;

/// Opening banner: what tree the gate runs against and how much of it is
/// in scope
pub fn banner(root: &Path, files_in_scope: usize) {
    println!(
        "{}",
        Style::new().bold().apply_to("pygate quality gate")
    );
    println!("  Workspace: {}", root.display());
    println!("  Python files in scope: {}", files_in_scope);
    println!();
}

/// Closing summary block. Sort and format always read "complete"; only the
/// lint line reflects a captured status.
pub fn summary(report: &GateReport) {
    let ok = Style::new().green();
    let bad = Style::new().red().bold();

    println!();
    println!("{}", Style::new().bold().apply_to("Summary:"));
    println!("  checked     {} Python file(s)", report.files_in_scope);
    println!(
        "  imports     {} ({})",
        ok.apply_to("sorted"),
        files_changed(report.sorted_changed)
    );
    println!(
        "  formatting  {} ({})",
        ok.apply_to("complete"),
        files_changed(report.formatted_changed)
    );
    if report.lint_clean() {
        println!("  lint        {}", ok.apply_to("clean"));
    } else {
        println!(
            "  lint        {} (exit {})",
            bad.apply_to("issues found"),
            report.lint_status
        );
    }
}

fn files_changed(n: usize) -> String {
    match n {
        0 => "no files changed".to_string(),
        1 => "1 file changed".to_string(),
        n => format!("{n} files changed"),
    }
}
