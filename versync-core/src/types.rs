//! Domain types shared by the synchronizer and the CLI.

use std::fmt;

// ---------------------------------------------------------------------------
// Version
// ---------------------------------------------------------------------------

/// A version string as read from the authoritative manifest.
///
/// Free-form: never parsed, trimmed or normalised. Two versions are equal only
/// when they are byte-identical.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(pub String);

impl Version {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Version {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// ManifestRole
// ---------------------------------------------------------------------------

/// Which of the three synchronized files a path plays the part of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestRole {
    /// Source of truth for the version (`package.json`).
    Authoritative,
    /// JSON dependent rewritten through a parse/serialize step (`tauri.conf.json`).
    Structured,
    /// Text dependent edited by line substitution (`Cargo.toml`).
    LineOriented,
}

impl ManifestRole {
    /// All roles in pipeline order.
    pub fn all() -> &'static [ManifestRole] {
        &[
            ManifestRole::Authoritative,
            ManifestRole::Structured,
            ManifestRole::LineOriented,
        ]
    }

    /// Path of the file for this role, relative to the project root.
    pub fn relative_path(self) -> &'static str {
        match self {
            ManifestRole::Authoritative => "package.json",
            ManifestRole::Structured => "src-tauri/tauri.conf.json",
            ManifestRole::LineOriented => "src-tauri/Cargo.toml",
        }
    }
}

impl fmt::Display for ManifestRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ManifestRole::Authoritative => "authoritative manifest",
            ManifestRole::Structured => "structured dependent",
            ManifestRole::LineOriented => "line-oriented dependent",
        };
        f.write_str(s)
    }
}
