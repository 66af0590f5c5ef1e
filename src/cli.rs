//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pygate - quality gate runner
///
/// Run a fixed import-sort, format and lint pipeline over a Python tree.
#[derive(Parser, Debug)]
#[command(
    name = "pygate",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Quality gate runner for Python source trees",
    long_about = "Pygate runs a sequential quality gate over a Python source tree: \
                  import sorting, code formatting, then linting. The sort and format \
                  stages rewrite files in place; the lint stage's exit status becomes \
                  the process exit code. Around the gate it manages the contributor \
                  workflow: tool diagnostics, git pre-commit hooks and a \
                  conventional-commit changelog.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  pygate\n    \
                  pygate check\n    \
                  pygate doctor\n    \
                  pygate hooks install\n    \
                  pygate changelog --unreleased\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/pygate/pygate"
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true)]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the quality gate (default)
    Check,

    /// Report availability and versions of the toolbelt
    Doctor,

    /// Manage the git pre-commit hook
    Hooks(HooksArgs),

    /// Generate a changelog from conventional-commit history
    Changelog(ChangelogArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the hooks command
#[derive(Parser, Debug)]
pub struct HooksArgs {
    #[command(subcommand)]
    pub command: HooksSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum HooksSubcommand {
    /// Install a pre-commit hook that runs `pygate check`
    Install(InstallHookArgs),

    /// Remove the pygate pre-commit hook
    Uninstall,

    /// Report whether the pygate pre-commit hook is installed
    Status,
}

/// Arguments for the hooks install subcommand
#[derive(Parser, Debug)]
pub struct InstallHookArgs {
    /// Overwrite an existing foreign hook without confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for the changelog command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Full changelog to stdout:\n    pygate changelog\n\n\
                  Only commits since the last release tag:\n    pygate changelog --unreleased")]
pub struct ChangelogArgs {
    /// Only include commits since the most recent release tag
    #[arg(long)]
    pub unreleased: bool,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
