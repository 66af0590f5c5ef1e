//! Pygate - quality gate runner for Python source trees
//!
//! Runs a fixed import-sort / format / lint pipeline over a Python tree and
//! carries the contributor workflow around it: tool diagnostics, git
//! pre-commit hook management, and conventional-commit changelog generation.

use clap::Parser;

mod changelog;
mod cli;
mod commands;
mod config;
mod error;
mod hooks;
mod pipeline;
mod progress;
mod snapshot;
mod stage;
mod tools;
mod ui;
mod workspace;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let workspace = cli.workspace.clone();
    let verbose = cli.verbose;

    // `check` is the default when no subcommand is given, so a bare `pygate`
    // runs the gate. Its exit code is the lint stage's exit code.
    let outcome = match cli.command {
        None | Some(Commands::Check) => commands::check::run(workspace, verbose),
        Some(Commands::Doctor) => commands::doctor::run(workspace),
        Some(Commands::Hooks(args)) => commands::hooks::run(workspace, args).map(|()| 0),
        Some(Commands::Changelog(args)) => commands::changelog::run(workspace, args).map(|()| 0),
        Some(Commands::Version) => commands::version::run().map(|()| 0),
        Some(Commands::Completions(args)) => commands::completions::run(args).map(|()| 0),
    };

    match outcome {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
