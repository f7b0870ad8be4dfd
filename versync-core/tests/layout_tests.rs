//! Project-root resolution against real directories.

use std::fs;

use rstest::rstest;
use tempfile::TempDir;
use versync_core::{layout::resolve_root, LayoutError, ManifestPaths, ManifestRole, Version};

#[test]
fn at_canonicalizes_relative_segments() {
    let tmp = TempDir::new().expect("tmp");
    let nested = tmp.path().join("scripts").join("versync");
    fs::create_dir_all(&nested).expect("mkdir");

    let paths = ManifestPaths::at(&nested.join("..").join("..")).expect("resolve");
    let root = tmp.path().canonicalize().expect("canonical tmp");
    assert_eq!(paths, ManifestPaths::from_root(&root));
}

#[test]
fn missing_root_is_root_not_found() {
    let tmp = TempDir::new().expect("tmp");
    let missing = tmp.path().join("nope");

    let err = resolve_root(&missing).expect_err("missing root must fail");
    match err {
        LayoutError::RootNotFound { path } => assert_eq!(path, missing),
        other => panic!("expected RootNotFound, got {other:?}"),
    }
}

#[test]
fn file_as_root_is_root_not_found() {
    let tmp = TempDir::new().expect("tmp");
    let file = tmp.path().join("package.json");
    fs::write(&file, "{}").expect("write");

    let err = resolve_root(&file).expect_err("file root must fail");
    assert!(matches!(err, LayoutError::RootNotFound { .. }));
}

#[rstest]
#[case(ManifestRole::Authoritative, "package.json")]
#[case(ManifestRole::Structured, "tauri.conf.json")]
#[case(ManifestRole::LineOriented, "Cargo.toml")]
fn role_paths_end_in_expected_file(#[case] role: ManifestRole, #[case] file: &str) {
    let paths = ManifestPaths::from_root(std::path::Path::new("/app"));
    assert!(paths.path(role).ends_with(file));
}

#[rstest]
#[case("1.2.3")]
#[case("2.0.0-beta.1+build.7")]
#[case("v10")]
#[case("ünïcode-版本")]
fn version_displays_verbatim(#[case] raw: &str) {
    let version = Version::from(raw);
    assert_eq!(version.to_string(), raw);
    assert_eq!(version.as_str(), raw);
}
