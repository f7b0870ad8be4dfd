//! `sync-version` — propagate the authoritative version to both dependents.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use versync_core::{layout::display_name, ManifestPaths};
use versync_sync::{pipeline, SyncError, SyncStep, WriteResult};

/// Arguments for `sync-version`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Project root holding `package.json` and `src-tauri/`. Defaults to the
    /// directory two levels above this tool's crate.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        let root = self.root.unwrap_or_else(default_root);
        let paths = ManifestPaths::at(&root)
            .map_err(SyncError::from)
            .with_context(|| format!("cannot resolve project root '{}'", root.display()))?;
        tracing::debug!("project root: {}", root.display());

        pipeline::run_with_progress(&paths, print_step).context("version sync failed")?;
        Ok(())
    }
}

/// The tool lives in `<root>/scripts/<crate>/`, so the caller's working
/// directory never matters.
fn default_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

fn print_step(step: SyncStep<'_>) {
    match step {
        SyncStep::Extracted { version, .. } => println!("Syncing version: {version}"),
        SyncStep::Updated {
            version, result, ..
        } => {
            let name = display_name(result.path());
            match result {
                WriteResult::Written { .. } => println!("Updated {name} to {version}"),
                WriteResult::Unchanged { .. } => println!("{name} already at {version}"),
            }
        }
    }
}
