//! Leftover removal and entry writes for the applications directory.
//!
//! A sync is planned first and applied second so dry runs and real runs share
//! the same decisions.
use crate::entry::{ResolvedEntry, DESKTOP_EXTENSION};
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Mode of written entries; temporary files are created 0600.
#[cfg(unix)]
const ENTRY_MODE: u32 = 0o644;

/// One file to (re)write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedWrite {
    pub path: PathBuf,
    pub content: String,
}

/// Deletions and writes needed to make the directory match the entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    pub leftovers: Vec<PathBuf>,
    pub writes: Vec<PlannedWrite>,
}

/// Compare the entries against the `.desktop` files already in `dir`.
///
/// Only regular files with the desktop extension are considered; anything else
/// in the directory is left alone. A missing directory has no leftovers.
pub fn plan_sync(dir: &Path, entries: &[ResolvedEntry]) -> Result<SyncPlan> {
    let defined: BTreeSet<String> = entries.iter().map(ResolvedEntry::file_name).collect();
    let mut leftovers = Vec::new();
    if dir.is_dir() {
        for entry in fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() || !has_desktop_extension(&path) {
                continue;
            }
            let defined_here = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| defined.contains(name));
            if !defined_here {
                leftovers.push(path);
            }
        }
    }
    leftovers.sort();

    let writes = entries
        .iter()
        .map(|entry| PlannedWrite {
            path: dir.join(entry.file_name()),
            content: entry.render(),
        })
        .collect();
    Ok(SyncPlan { leftovers, writes })
}

/// Delete leftovers, then write every planned entry.
///
/// `dir` always exists afterwards, even with nothing to write. Each entry goes
/// to a temporary file in `dir` and is renamed into place.
pub fn apply_sync(dir: &Path, plan: &SyncPlan) -> Result<()> {
    for path in &plan.leftovers {
        tracing::info!(path = %path.display(), "deleting leftover entry");
        fs::remove_file(path).with_context(|| format!("remove {}", path.display()))?;
    }
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    for write in &plan.writes {
        tracing::info!(path = %write.path.display(), "writing desktop entry");
        write_atomic(dir, &write.path, &write.content)?;
    }
    Ok(())
}

fn write_atomic(dir: &Path, dest: &Path, content: &str) -> Result<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("create temporary file in {}", dir.display()))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(ENTRY_MODE))
            .with_context(|| format!("set permissions for {}", dest.display()))?;
    }
    tmp.write_all(content.as_bytes())
        .with_context(|| format!("write {}", dest.display()))?;
    tmp.persist(dest)
        .with_context(|| format!("publish {}", dest.display()))?;
    Ok(())
}

fn has_desktop_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == DESKTOP_EXTENSION)
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
