//! Change-gated atomic writer.
//!
//! ## `write_if_changed` protocol
//!
//! 0. Follow a symlinked target to the file it points at.
//! 1. Read the current file; identical bytes → `Unchanged`, nothing touched.
//! 2. Refuse targets whose permissions are read-only.
//! 3. Write to `<path>.versync.tmp`, carrying over the original permissions.
//! 4. Rename to the final path (atomic on POSIX).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{io_err, SyncError};

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File was skipped because its content already matches.
    Unchanged { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path } | WriteResult::Unchanged { path } => path,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, WriteResult::Written { .. })
    }
}

// ---------------------------------------------------------------------------
// write_if_changed
// ---------------------------------------------------------------------------

/// Atomically replace `path` with `content` unless it already holds exactly
/// that content.
///
/// A symlink is resolved first, so the file it points at is rewritten and the
/// link itself survives. The returned [`WriteResult`] carries `path` as given.
pub fn write_if_changed(path: &Path, content: &str) -> Result<WriteResult, SyncError> {
    let target = resolve_target(path)?;
    let result = write_if_changed_with_tmp(&target, content, &tmp_path_for(&target))?;
    Ok(match result {
        WriteResult::Written { .. } => WriteResult::Written {
            path: path.to_path_buf(),
        },
        WriteResult::Unchanged { .. } => WriteResult::Unchanged {
            path: path.to_path_buf(),
        },
    })
}

fn resolve_target(path: &Path) -> Result<PathBuf, SyncError> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(path).map_err(|e| io_err(path, e))
        }
        _ => Ok(path.to_path_buf()),
    }
}

/// `<path>.versync.tmp`, next to the target so the rename stays on one filesystem.
pub(crate) fn tmp_path_for(path: &Path) -> PathBuf {
    PathBuf::from(format!("{}.versync.tmp", path.display()))
}

fn write_if_changed_with_tmp(
    path: &Path,
    content: &str,
    tmp: &Path,
) -> Result<WriteResult, SyncError> {
    match fs::read(path) {
        Ok(existing) if existing == content.as_bytes() => {
            tracing::debug!("unchanged: {}", path.display());
            return Ok(WriteResult::Unchanged {
                path: path.to_path_buf(),
            });
        }
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(io_err(path, e)),
    }

    let permissions = match fs::metadata(path) {
        Ok(meta) if meta.permissions().readonly() => {
            return Err(SyncError::ReadOnly {
                path: path.to_path_buf(),
            });
        }
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(io_err(path, e)),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }
    }

    if let Err(e) = fs::write(tmp, content) {
        let _ = fs::remove_file(tmp);
        return Err(io_err(tmp, e));
    }
    if let Some(permissions) = permissions {
        if let Err(e) = fs::set_permissions(tmp, permissions) {
            let _ = fs::remove_file(tmp);
            return Err(io_err(tmp, e));
        }
    }

    if let Err(e) = fs::rename(tmp, path) {
        let _ = fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
