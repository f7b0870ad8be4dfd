//! # versync-sync
//!
//! Version synchronizer: copies the `version` of the authoritative manifest
//! into the structured and line-oriented dependent files.
//!
//! Call [`pipeline::run`] (or [`pipeline::run_with_progress`] to observe each
//! step) with a [`versync_core::ManifestPaths`].

pub mod error;
pub mod manifest;
pub mod pattern;
pub mod pipeline;
pub mod writer;

pub use error::SyncError;
pub use pipeline::{run, run_with_progress, SyncReport, SyncStep};
pub use writer::{write_if_changed, WriteResult};
