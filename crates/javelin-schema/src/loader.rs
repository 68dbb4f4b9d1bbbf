//! Mod-loader overlay metadata.
//!
//! A loader (e.g. Fabric) publishes its own metadata per game version:
//! an entry-point override and a set of libraries that take precedence
//! over the base version's on identity match. The loader endpoint
//! returns an array of these documents, one per loader version; the
//! caller selects one with [`select_loader`].

use crate::LookupError;
use serde::{Deserialize, Serialize};

/// The loader's own identity within an overlay document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderInfo {
    /// Coordinate of the loader artifact itself; injected into the
    /// merged library list.
    pub maven: String,
    /// Loader version string.
    pub version: String,
    /// Whether upstream marks this loader build stable.
    #[serde(default)]
    pub stable: bool,
}

/// Entry-point override: either one class name for every execution
/// mode, or distinct names per mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryPoint {
    /// One main class used for both client and server launches.
    Unified(String),
    /// Distinct main classes per execution mode.
    PerMode {
        /// Main class for client launches.
        client: String,
        /// Main class for server launches.
        server: String,
    },
}

impl EntryPoint {
    /// The main class used for a client launch.
    pub fn client(&self) -> &str {
        match self {
            Self::Unified(class) => class,
            Self::PerMode { client, .. } => client,
        }
    }

    /// The main class used for a server launch.
    pub fn server(&self) -> &str {
        match self {
            Self::Unified(class) => class,
            Self::PerMode { server, .. } => server,
        }
    }
}

/// One overlay library entry. Loader libraries carry no rule gating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderLibrary {
    /// Coordinate string.
    pub name: String,
    /// Maven repository root the artifact is served from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// SHA-1 content hash, when upstream provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
    /// Size in bytes, when upstream provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// Overlay libraries grouped by usage category. The grouping is an
/// upstream artifact; merging pools all categories.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoaderLibraries {
    /// Libraries needed by every execution mode.
    #[serde(default)]
    pub common: Vec<LoaderLibrary>,
    /// Client-only libraries.
    #[serde(default)]
    pub client: Vec<LoaderLibrary>,
    /// Server-only libraries.
    #[serde(default)]
    pub server: Vec<LoaderLibrary>,
}

impl LoaderLibraries {
    /// All entries across every category, in category order
    /// (common, client, server). Later entries sharing an identity
    /// overwrite earlier ones during merging.
    pub fn pooled(&self) -> impl Iterator<Item = &LoaderLibrary> {
        self.common
            .iter()
            .chain(self.client.iter())
            .chain(self.server.iter())
    }
}

/// The loader-facing half of an overlay document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauncherMeta {
    /// Entry-point override.
    #[serde(rename = "mainClass")]
    pub main_class: EntryPoint,
    /// Overlay library sets.
    #[serde(default)]
    pub libraries: LoaderLibraries,
}

/// One overlay document: loader identity plus launcher metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderMeta {
    /// The loader build this document describes.
    pub loader: LoaderInfo,
    /// Entry point and libraries to overlay onto the base version.
    #[serde(rename = "launcherMeta")]
    pub launcher_meta: LauncherMeta,
}

/// Select the overlay document for a specific loader version.
///
/// # Errors
///
/// Returns [`LookupError::LoaderNotFound`] when no document matches.
/// This is a lookup miss, not malformed data.
pub fn select_loader<'a>(
    candidates: &'a [LoaderMeta],
    loader_version: &str,
) -> Result<&'a LoaderMeta, LookupError> {
    candidates
        .iter()
        .find(|meta| meta.loader.version == loader_version)
        .ok_or_else(|| LookupError::LoaderNotFound(loader_version.to_string()))
}
