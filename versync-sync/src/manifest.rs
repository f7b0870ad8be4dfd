//! JSON manifest handling: version extraction and structured rewrite.

use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

use versync_core::{ManifestRole, Version};

use crate::error::{io_err, SyncError};

/// Top-level key holding the version in every JSON manifest.
pub const VERSION_FIELD: &str = "version";

/// Read one of the synchronized files as UTF-8 text.
///
/// A missing file is reported as [`SyncError::FileNotFound`] for `role`.
pub fn read_manifest(role: ManifestRole, path: &Path) -> Result<String, SyncError> {
    tracing::debug!("reading {role}: {}", path.display());
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SyncError::FileNotFound {
            role,
            path: path.to_path_buf(),
        },
        _ => io_err(path, e),
    })
}

fn parse(role: ManifestRole, path: &Path, content: &str) -> Result<Value, SyncError> {
    serde_json::from_str(content).map_err(|source| SyncError::Parse {
        role,
        path: path.to_path_buf(),
        source,
    })
}

/// Extract the top-level `version` string from the authoritative manifest.
///
/// `path` is only used for error context.
pub fn extract_version(path: &Path, content: &str) -> Result<Version, SyncError> {
    let doc = parse(ManifestRole::Authoritative, path, content)?;
    match doc.get(VERSION_FIELD) {
        None | Some(Value::Null) => Err(SyncError::MissingField {
            path: path.to_path_buf(),
            field: VERSION_FIELD,
        }),
        Some(Value::String(s)) => Ok(Version::from(s.as_str())),
        Some(other) => Err(SyncError::InvalidField {
            path: path.to_path_buf(),
            field: VERSION_FIELD,
            found: kind_of(other),
        }),
    }
}

/// Set the top-level `version` of a structured dependent and re-render it.
///
/// Key order is preserved; a missing `version` key is appended. Output uses
/// two-space indentation and ends with a newline.
pub fn set_version(path: &Path, content: &str, version: &Version) -> Result<String, SyncError> {
    let mut doc = parse(ManifestRole::Structured, path, content)?;
    let Some(obj) = doc.as_object_mut() else {
        return Err(SyncError::NotAnObject {
            role: ManifestRole::Structured,
            path: path.to_path_buf(),
        });
    };
    obj.insert(
        VERSION_FIELD.to_string(),
        Value::String(version.as_str().to_owned()),
    );

    let mut rendered = serde_json::to_string_pretty(&doc)?;
    rendered.push('\n');
    Ok(rendered)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> &'static Path {
        Path::new("/app/package.json")
    }

    #[test]
    fn extracts_version_verbatim() {
        let v = extract_version(path(), r#"{"name":"app","version":" 1.2.3-rc.1 "}"#).unwrap();
        assert_eq!(v, Version::from(" 1.2.3-rc.1 "));
    }

    #[test]
    fn missing_version_is_missing_field() {
        let err = extract_version(path(), r#"{"name":"app"}"#).unwrap_err();
        assert!(matches!(err, SyncError::MissingField { field: "version", .. }));
    }

    #[test]
    fn null_version_is_missing_field() {
        let err = extract_version(path(), r#"{"version":null}"#).unwrap_err();
        assert!(matches!(err, SyncError::MissingField { .. }));
    }

    #[test]
    fn array_root_has_no_version_field() {
        let err = extract_version(path(), r#"["1.2.3"]"#).unwrap_err();
        assert!(matches!(err, SyncError::MissingField { .. }));
    }

    #[test]
    fn numeric_version_is_invalid_field() {
        let err = extract_version(path(), r#"{"version":1.2}"#).unwrap_err();
        match err {
            SyncError::InvalidField { found, .. } => assert_eq!(found, "a number"),
            other => panic!("expected InvalidField, got {other:?}"),
        }
    }

    #[test]
    fn nested_version_is_not_used() {
        let err = extract_version(path(), r#"{"package":{"version":"1.0.0"}}"#).unwrap_err();
        assert!(matches!(err, SyncError::MissingField { .. }));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let err = extract_version(path(), "{ not json").unwrap_err();
        assert!(matches!(
            err,
            SyncError::Parse {
                role: ManifestRole::Authoritative,
                ..
            }
        ));
    }

    #[test]
    fn set_version_keeps_key_order_and_formatting() {
        let input = r#"{"productName":"app","version":"0.1.0","build":{"devUrl":"http://localhost:1420"}}"#;
        let out = set_version(Path::new("tauri.conf.json"), input, &"1.2.3".into()).unwrap();
        assert_eq!(
            out,
            "{\n  \"productName\": \"app\",\n  \"version\": \"1.2.3\",\n  \"build\": {\n    \"devUrl\": \"http://localhost:1420\"\n  }\n}\n"
        );
    }

    #[test]
    fn set_version_appends_missing_field() {
        let out = set_version(Path::new("tauri.conf.json"), r#"{"a":1}"#, &"2.0.0".into()).unwrap();
        assert_eq!(out, "{\n  \"a\": 1,\n  \"version\": \"2.0.0\"\n}\n");
    }

    #[test]
    fn set_version_rejects_non_object_root() {
        let err = set_version(Path::new("tauri.conf.json"), "[]", &"1.0.0".into()).unwrap_err();
        assert!(matches!(err, SyncError::NotAnObject { .. }));
    }

    #[test]
    fn set_version_reports_structured_parse_error() {
        let err = set_version(Path::new("tauri.conf.json"), "", &"1.0.0".into()).unwrap_err();
        assert!(matches!(
            err,
            SyncError::Parse {
                role: ManifestRole::Structured,
                ..
            }
        ));
    }
}
