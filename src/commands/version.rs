//! Version command implementation

use crate::config::{DEFAULT_EXCLUDES, ToolNames};
use crate::error::Result;

/// Print version, build info and the gate's built-in defaults
pub fn run() -> Result<()> {
    let tools = ToolNames::default();

    println!("pygate {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!();
    println!("Gate defaults:");
    println!("  Tools: {}, {}, {}", tools.isort, tools.black, tools.pylint);
    println!("  Excluded: {}", DEFAULT_EXCLUDES.join(", "));

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
