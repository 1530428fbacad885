//! Bulk file transfer into publish directories.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::debug;

/// Whether sources are preserved or removed after the transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMode {
    Copy,
    Move,
}

/// Per-file logging verbosity during a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugLevel {
    None,
    Verbose,
}

/// Transfer `paths` into `destination`, overwriting on name collision.
///
/// Shallow by design: each path is handled as a single entry, directories
/// included. Filesystem failures propagate to the caller.
pub fn transfer(
    paths: &[PathBuf],
    destination: &Path,
    mode: TransferMode,
    debug: DebugLevel,
) -> Result<()> {
    for path in paths {
        let name = path
            .file_name()
            .ok_or_else(|| anyhow!("transfer source {} has no file name", path.display()))?;
        let target = destination.join(name);
        if debug == DebugLevel::Verbose {
            debug!(from = %path.display(), to = %target.display(), "transferring");
        }
        match mode {
            TransferMode::Copy => {
                fs::copy(path, &target).with_context(|| {
                    format!("copy {} to {}", path.display(), target.display())
                })?;
            }
            TransferMode::Move => {
                // rename fails across filesystems; fall back to copy+remove.
                if fs::rename(path, &target).is_err() {
                    fs::copy(path, &target).with_context(|| {
                        format!("copy {} to {}", path.display(), target.display())
                    })?;
                    fs::remove_file(path)
                        .with_context(|| format!("remove {}", path.display()))?;
                }
            }
        }
    }
    Ok(())
}

/// Non-recursive directory listing with glob semantics: a missing
/// directory yields an empty list, other read failures propagate.
pub fn list_dir_shallow(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))? {
        let entry = entry.with_context(|| format!("read entry in {}", dir.display()))?;
        entries.push(entry.path());
    }
    entries.sort();
    Ok(entries)
}
