//! Hooks command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::{HooksArgs, HooksSubcommand, InstallHookArgs};
use crate::error::{PygateError, Result};
use crate::hooks::{self, HookState};
use crate::workspace::Workspace;

pub fn run(workspace: Option<PathBuf>, args: HooksArgs) -> Result<()> {
    let workspace = Workspace::resolve(workspace)?;
    match args.command {
        HooksSubcommand::Install(install_args) => install(&workspace, &install_args),
        HooksSubcommand::Uninstall => uninstall(&workspace),
        HooksSubcommand::Status => status(&workspace),
    }
}

fn install(workspace: &Workspace, args: &InstallHookArgs) -> Result<()> {
    let (path, state) = hooks::inspect(&workspace.root)?;

    if state == HookState::Foreign && !args.yes {
        let overwrite = inquire::Confirm::new(&format!(
            "An existing pre-commit hook at {} was not installed by pygate. Overwrite it?",
            path.display()
        ))
        .with_default(false)
        .prompt()
        .map_err(|e| PygateError::PromptFailed {
            reason: e.to_string(),
        })?;

        if !overwrite {
            println!("Aborted; existing hook left in place.");
            return Ok(());
        }
    }

    hooks::write_hook(&path)?;
    println!(
        "{} {}",
        Style::new().green().apply_to("Installed pre-commit hook:"),
        path.display()
    );
    Ok(())
}

fn uninstall(workspace: &Workspace) -> Result<()> {
    let path = hooks::remove_hook(&workspace.root)?;
    println!("Removed pre-commit hook: {}", path.display());
    Ok(())
}

fn status(workspace: &Workspace) -> Result<()> {
    let (path, state) = hooks::inspect(&workspace.root)?;
    match state {
        HookState::Ours => println!("pygate hook installed at {}", path.display()),
        HookState::Absent => println!("No pre-commit hook installed."),
        HookState::Foreign => println!(
            "A foreign pre-commit hook is present at {}",
            path.display()
        ),
    }
    Ok(())
}
