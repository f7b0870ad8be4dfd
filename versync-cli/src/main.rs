//! sync-version — copy the app version from `package.json` into the Tauri
//! manifests.
//!
//! # Usage
//!
//! ```text
//! sync-version               # project root two levels above this crate
//! sync-version --root <dir>  # explicit project root
//! ```
//!
//! Exit codes: 0 success, 1 I/O, 2 missing file or root, 3 invalid JSON,
//! 4 missing/invalid `version`, 5 no `version = "..."` line, 6 read-only target.

mod commands;

use std::process::ExitCode;

use clap::Parser;

use commands::sync::SyncArgs;
use versync_sync::SyncError;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "sync-version",
    version,
    about = "Sync the version in package.json into tauri.conf.json and Cargo.toml",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    sync: SyncArgs,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match cli.sync.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}

/// Diagnostics go to stderr; stdout carries only the progress lines.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<SyncError>())
        .map(SyncError::exit_code)
        .unwrap_or(1)
}
