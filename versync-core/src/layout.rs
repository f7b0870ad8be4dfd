//! Fixed manifest layout of a packaged desktop application.
//!
//! ```text
//! <root>/
//!   package.json                (authoritative manifest)
//!   src-tauri/
//!     tauri.conf.json           (structured dependent)
//!     Cargo.toml                (line-oriented dependent)
//! ```
//!
//! # API pattern
//!
//! - [`ManifestPaths::from_root`]: pure, joins the fixed layout onto a root
//! - [`ManifestPaths::at`]: resolves and validates the root first
//! - [`ManifestPaths::new`]: three explicit paths, for callers with a
//!   non-standard layout and for tests

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::LayoutError;
use crate::types::ManifestRole;

/// Absolute paths of the three files a sync run reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPaths {
    pub authoritative: PathBuf,
    pub structured: PathBuf,
    pub line_oriented: PathBuf,
}

impl ManifestPaths {
    pub fn new(
        authoritative: impl Into<PathBuf>,
        structured: impl Into<PathBuf>,
        line_oriented: impl Into<PathBuf>,
    ) -> Self {
        Self {
            authoritative: authoritative.into(),
            structured: structured.into(),
            line_oriented: line_oriented.into(),
        }
    }

    /// `<root>/<relative_path>` for every role. Pure, no I/O.
    pub fn from_root(root: &Path) -> Self {
        Self::new(
            root.join(ManifestRole::Authoritative.relative_path()),
            root.join(ManifestRole::Structured.relative_path()),
            root.join(ManifestRole::LineOriented.relative_path()),
        )
    }

    /// Resolve `root` with [`resolve_root`] and build the layout under it.
    pub fn at(root: &Path) -> Result<Self, LayoutError> {
        Ok(Self::from_root(&resolve_root(root)?))
    }

    pub fn path(&self, role: ManifestRole) -> &Path {
        match role {
            ManifestRole::Authoritative => &self.authoritative,
            ManifestRole::Structured => &self.structured,
            ManifestRole::LineOriented => &self.line_oriented,
        }
    }

    /// `(role, path)` pairs in pipeline order.
    pub fn iter(&self) -> impl Iterator<Item = (ManifestRole, &Path)> {
        ManifestRole::all().iter().map(move |role| (*role, self.path(*role)))
    }
}

/// Canonicalize `root` and check that it is a directory.
pub fn resolve_root(root: &Path) -> Result<PathBuf, LayoutError> {
    let resolved = match root.canonicalize() {
        Ok(p) => p,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(LayoutError::RootNotFound {
                path: root.to_path_buf(),
            })
        }
        Err(e) => {
            return Err(LayoutError::Io {
                path: root.to_path_buf(),
                source: e,
            })
        }
    };
    if !resolved.is_dir() {
        return Err(LayoutError::RootNotFound { path: resolved });
    }
    Ok(resolved)
}

/// File name of `path` for display, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_root_joins_fixed_layout() {
        let paths = ManifestPaths::from_root(Path::new("/app"));
        assert_eq!(paths.authoritative, PathBuf::from("/app/package.json"));
        assert_eq!(
            paths.structured,
            PathBuf::from("/app/src-tauri/tauri.conf.json")
        );
        assert_eq!(paths.line_oriented, PathBuf::from("/app/src-tauri/Cargo.toml"));
    }

    #[test]
    fn iter_follows_pipeline_order() {
        let paths = ManifestPaths::new("a.json", "b.json", "c.toml");
        let roles: Vec<_> = paths.iter().map(|(role, _)| role).collect();
        assert_eq!(
            roles,
            vec![
                ManifestRole::Authoritative,
                ManifestRole::Structured,
                ManifestRole::LineOriented,
            ]
        );
    }

    #[test]
    fn display_name_uses_file_name() {
        assert_eq!(
            display_name(Path::new("/app/src-tauri/tauri.conf.json")),
            "tauri.conf.json"
        );
    }
}
