//! Common test utilities for Pygate integration tests
//!
//! The gate's tools are opaque subprocesses, so tests stand up a workspace
//! tree plus a bin directory of stub shell scripts and point the binary's
//! PATH at the stubs only. Every stub records its invocation order and
//! arguments using shell builtins, so no real tool (and no system PATH)
//! leaks into a test.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

/// A test workspace: a source tree and a stub-tool bin directory
pub struct TestWorkspace {
    pub temp: TempDir,
    /// Tree the gate runs against
    pub tree: PathBuf,
    /// Directory of stub tools, used as the entire PATH
    pub bin: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let tree = temp.path().join("tree");
        let bin = temp.path().join("bin");
        std::fs::create_dir_all(&tree).expect("Failed to create tree directory");
        std::fs::create_dir_all(&bin).expect("Failed to create bin directory");
        Self { temp, tree, bin }
    }

    /// Write a file in the source tree
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.tree.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the source tree
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.tree.join(path)).expect("Failed to read file")
    }

    /// Create a stub tool script. The standard preamble records invocation
    /// order and arguments with shell builtins only; `body` runs after it.
    #[cfg(unix)]
    pub fn stub_tool(&self, name: &str, body: &str) {
        use std::os::unix::fs::PermissionsExt;
        let script = format!(
            "#!/bin/sh\n\
             here=\"${{0%/*}}\"\n\
             me=\"${{0##*/}}\"\n\
             echo \"$me\" >> \"$here/order.log\"\n\
             printf '%s\\n' \"$*\" > \"$here/$me.args\"\n\
             {body}\n"
        );
        let path = self.bin.join(name);
        std::fs::write(&path, script).expect("Failed to write stub tool");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make stub executable");
    }

    /// Stub that succeeds silently
    #[cfg(unix)]
    pub fn stub_ok(&self, name: &str) {
        self.stub_tool(name, "exit 0");
    }

    /// Stub all three gate tools as silent successes
    #[cfg(unix)]
    pub fn stub_all_ok(&self) {
        for tool in ["isort", "black", "pylint"] {
            self.stub_ok(tool);
        }
    }

    /// Whether a stub tool was ever invoked
    pub fn tool_invoked(&self, name: &str) -> bool {
        self.bin.join(format!("{name}.args")).exists()
    }

    /// Arguments the stub tool was last invoked with
    pub fn tool_args(&self, name: &str) -> String {
        std::fs::read_to_string(self.bin.join(format!("{name}.args")))
            .expect("stub tool was never invoked")
    }

    /// Invocation order of all stub tools
    pub fn invocation_order(&self) -> Vec<String> {
        std::fs::read_to_string(self.bin.join("order.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Command for the real pygate binary, running against the tree with
    /// the stub bin directory as its entire PATH
    // Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
    #[allow(deprecated)]
    pub fn pygate(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("pygate").expect("pygate binary");
        cmd.current_dir(&self.tree);
        cmd.env("PATH", &self.bin);
        cmd
    }
}
