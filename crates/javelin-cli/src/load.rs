//! Loading metadata documents from disk.
//!
//! Fetching and verifying these documents is a separate collaborator's
//! job; this module only reads what is already on disk.

use anyhow::{Context, Result};
use javelin_core::paths;
use javelin_schema::{LoaderMeta, Platform, VersionMetadata};
use std::path::Path;
use std::str::FromStr;
use tokio::fs;

/// Load `versions/<id>/<id>.json` from the base directory.
pub async fn load_version(base_dir: &Path, id: &str) -> Result<VersionMetadata> {
    let path = paths::version_json(base_dir, id);
    let content = fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read version metadata at {}", path.display()))?;

    let meta: VersionMetadata = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse version metadata at {}", path.display()))?;

    Ok(meta)
}

/// Load a JSON array of loader overlay documents from an explicit path.
pub async fn load_loaders(path: &Path) -> Result<Vec<LoaderMeta>> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read loader metadata at {}", path.display()))?;

    let loaders: Vec<LoaderMeta> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse loader metadata at {}", path.display()))?;

    Ok(loaders)
}

/// Resolve the target platform from an optional flag value, falling
/// back to the host platform.
pub fn resolve_platform(flag: Option<&str>) -> Result<Platform> {
    match flag {
        Some(name) => Platform::from_str(name).map_err(|e| anyhow::anyhow!(e)),
        None => Ok(Platform::current()),
    }
}
