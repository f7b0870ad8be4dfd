//! Line-pattern rewrite of the line-oriented dependent.
//!
//! Only the first line starting with `version = "` is touched. Comments,
//! spacing, other sections and line endings stay byte-for-byte identical.

use std::path::Path;
use std::sync::OnceLock;

use regex::{NoExpand, Regex};

use versync_core::Version;

use crate::error::SyncError;

/// Line-anchored pattern for the package version line.
///
/// The value stops at the first closing quote, so anything after it on the
/// line (a trailing comment, even one with quotes) is left alone.
pub const VERSION_LINE_PATTERN: &str = r#"(?m)^version = "[^"\n]*""#;

fn version_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VERSION_LINE_PATTERN).expect("version line pattern is valid"))
}

/// Replace the first `version = "..."` line of `content` with `version`.
///
/// Fails with [`SyncError::PatternNotFound`] when no line matches.
pub fn replace_version_line(
    path: &Path,
    content: &str,
    version: &Version,
) -> Result<String, SyncError> {
    let re = version_line();
    if !re.is_match(content) {
        return Err(SyncError::PatternNotFound {
            path: path.to_path_buf(),
            pattern: VERSION_LINE_PATTERN.to_string(),
        });
    }
    let replacement = format!("version = \"{version}\"");
    Ok(re
        .replacen(content, 1, NoExpand(&replacement))
        .into_owned())
}
