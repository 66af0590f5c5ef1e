//! Changelog command implementation

use std::path::PathBuf;

use git2::Repository;

use crate::changelog;
use crate::cli::ChangelogArgs;
use crate::error::{PygateError, Result};
use crate::workspace::Workspace;

pub fn run(workspace: Option<PathBuf>, args: ChangelogArgs) -> Result<()> {
    let workspace = Workspace::resolve(workspace)?;
    let repo =
        Repository::discover(&workspace.root).map_err(|_| PygateError::NotInGitRepository)?;

    let sections = changelog::collect_sections(&repo, args.unreleased)?;
    print!("{}", changelog::render(&sections));
    Ok(())
}
