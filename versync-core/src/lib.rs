//! versync core library — domain types, manifest layout, errors.
//!
//! Public API surface:
//! - [`types`] — [`Version`] newtype and [`ManifestRole`]
//! - [`layout`] — [`ManifestPaths`] and project-root resolution
//! - [`error`] — [`LayoutError`]

pub mod error;
pub mod layout;
pub mod types;

pub use error::LayoutError;
pub use layout::ManifestPaths;
pub use types::{ManifestRole, Version};
