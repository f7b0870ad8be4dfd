//! Sync pipeline: preflight, extract, structured rewrite, pattern rewrite.
//!
//! The steps run strictly in order and stop at the first error. A failure in
//! the pattern rewrite does not undo the structured rewrite before it.

use std::path::Path;

use versync_core::{ManifestPaths, ManifestRole, Version};

use crate::error::SyncError;
use crate::manifest::{self, read_manifest};
use crate::pattern;
use crate::writer::{write_if_changed, WriteResult};

/// Progress event emitted after each completed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStep<'a> {
    /// The version was read from the authoritative manifest.
    Extracted { version: &'a Version, source: &'a Path },
    /// A dependent file now carries the version.
    Updated {
        role: ManifestRole,
        version: &'a Version,
        result: &'a WriteResult,
    },
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub version: Version,
    pub structured: WriteResult,
    pub line_oriented: WriteResult,
}

/// Run the pipeline without observing progress.
pub fn run(paths: &ManifestPaths) -> Result<SyncReport, SyncError> {
    run_with_progress(paths, |_| {})
}

/// Run the pipeline, calling `on_step` after each step completes.
pub fn run_with_progress<F>(paths: &ManifestPaths, mut on_step: F) -> Result<SyncReport, SyncError>
where
    F: FnMut(SyncStep<'_>),
{
    preflight(paths)?;

    let source = read_manifest(ManifestRole::Authoritative, &paths.authoritative)?;
    let version = manifest::extract_version(&paths.authoritative, &source)?;
    tracing::info!("version {version} from {}", paths.authoritative.display());
    on_step(SyncStep::Extracted {
        version: &version,
        source: &paths.authoritative,
    });

    let structured = sync_structured(&paths.structured, &version)?;
    on_step(SyncStep::Updated {
        role: ManifestRole::Structured,
        version: &version,
        result: &structured,
    });

    let line_oriented = sync_line_oriented(&paths.line_oriented, &version)?;
    on_step(SyncStep::Updated {
        role: ManifestRole::LineOriented,
        version: &version,
        result: &line_oriented,
    });

    Ok(SyncReport {
        version,
        structured,
        line_oriented,
    })
}

/// Every file must exist before anything is written.
fn preflight(paths: &ManifestPaths) -> Result<(), SyncError> {
    for (role, path) in paths.iter() {
        if !path.exists() {
            return Err(SyncError::FileNotFound {
                role,
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

fn sync_structured(path: &Path, version: &Version) -> Result<WriteResult, SyncError> {
    let content = read_manifest(ManifestRole::Structured, path)?;
    let rendered = manifest::set_version(path, &content, version)?;
    write_if_changed(path, &rendered)
}

fn sync_line_oriented(path: &Path, version: &Version) -> Result<WriteResult, SyncError> {
    let content = read_manifest(ManifestRole::LineOriented, path)?;
    let rendered = pattern::replace_version_line(path, &content, version)?;
    write_if_changed(path, &rendered)
}
