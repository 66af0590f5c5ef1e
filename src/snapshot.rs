//! In-scope tree snapshots
//!
//! The mutating stages rewrite files in place and report nothing useful
//! back, so the runner hashes every in-scope Python file before and after
//! each one to count what actually changed. Snapshots never influence the
//! pipeline's exit code.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use blake3::Hasher;
use walkdir::WalkDir;
use wax::{Glob, Pattern};

use crate::error::{PygateError, Result};

/// Compiled exclusion set shared by the snapshot walker
///
/// Entries are directory names, optionally with glob syntax. The raw
/// entries are what the stages pass to the tools; this compiled form is
/// only used to keep the walker consistent with them.
#[derive(Debug)]
pub struct ExcludeSet {
    globs: Vec<Glob<'static>>,
}

impl ExcludeSet {
    /// Compile exclusion entries into glob matchers
    pub fn compile(entries: &[String]) -> Result<Self> {
        let mut globs = Vec::with_capacity(entries.len());
        for entry in entries {
            let glob = Glob::new(entry)
                .map_err(|e| PygateError::InvalidExcludePattern {
                    pattern: entry.clone(),
                    reason: e.to_string(),
                })?
                .into_owned();
            globs.push(glob);
        }
        Ok(Self { globs })
    }

    /// Whether a directory name is excluded
    pub fn matches(&self, name: &str) -> bool {
        self.globs.iter().any(|g| g.is_match(name))
    }
}

/// Content hashes of every in-scope Python file, keyed by relative path
#[derive(Debug, Default)]
pub struct TreeSnapshot {
    hashes: BTreeMap<PathBuf, String>,
}

impl TreeSnapshot {
    /// Number of files in scope
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    /// Count of files whose content differs in `after`, including files
    /// that appeared or disappeared between the two snapshots
    pub fn changed_since(&self, after: &TreeSnapshot) -> usize {
        let mut changed = 0;
        for (path, hash) in &self.hashes {
            match after.hashes.get(path) {
                Some(other) if other == hash => {}
                _ => changed += 1,
            }
        }
        changed += after
            .hashes
            .keys()
            .filter(|path| !self.hashes.contains_key(*path))
            .count();
        changed
    }
}

/// Capture a snapshot of the in-scope tree.
///
/// Walks the root, pruning excluded directories (and hidden ones, which the
/// wrapped tools skip on their own) and hashing every `.py` file.
pub fn capture(root: &Path, excludes: &ExcludeSet) -> Result<TreeSnapshot> {
    let mut hashes = BTreeMap::new();

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        if !entry.file_type().is_dir() || entry.depth() == 0 {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        !name.starts_with('.') && !excludes.matches(&name)
    });

    for entry in walker {
        let entry = entry.map_err(|e| PygateError::Io {
            reason: e.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "py") {
            continue;
        }
        let relative = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_path_buf();
        hashes.insert(relative, hash_file(path)?);
    }

    Ok(TreeSnapshot { hashes })
}

/// BLAKE3 hash of a file's contents
fn hash_file(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| PygateError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut reader = BufReader::new(file);
    let mut hasher = Hasher::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(|e| PygateError::FileReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        if bytes_read == 0 {
            break;
        }

        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hasher.finalize().to_hex().to_string())
}
