//! Shared types and wire format for javelin.
//!
//! This crate models the version-metadata documents consumed by the
//! launch pipeline: the upstream version manifest, per-version metadata
//! (libraries, argument templates, asset index), and the mod-loader
//! overlay documents layered on top of them. Everything here is plain
//! data — parsing happens once at the edge, and every value is
//! immutable after construction.

pub mod coordinate;
pub mod loader;
pub mod platform;
pub mod rule;
pub mod version;

// Re-exports
pub use coordinate::{Coordinate, CoordinateError, Identity};
pub use loader::{EntryPoint, LoaderLibrary, LoaderMeta, select_loader};
pub use platform::Platform;
pub use rule::{OsPredicate, Rule, RuleAction, rules_allow};
pub use version::{
    ArgumentTemplate, Arguments, ArtifactRef, AssetIndex, AssetIndexRef, AssetObject, Library,
    LibraryDownloads, VersionManifest, VersionMetadata, VersionSummary,
};

/// Typed lookup misses, distinct from structural parse errors.
///
/// A missing version or loader/version combination means the requested
/// thing does not exist in otherwise well-formed metadata; callers
/// should surface it as "not found" rather than "malformed".
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The requested version id is absent from the version manifest.
    #[error("version '{0}' not found in manifest")]
    VersionNotFound(String),

    /// No loader document matched the requested loader version.
    #[error("loader version '{0}' not found")]
    LoaderNotFound(String),
}
