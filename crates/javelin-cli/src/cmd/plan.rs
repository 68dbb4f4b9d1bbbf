//! Plan subcommand: print what a download collaborator would fetch.

use crate::load;
use anyhow::Result;
use javelin_core::fetch_plan;
use std::path::Path;

/// Print the fetch plan for a version as `url -> dest` lines.
pub async fn plan(base_dir: &Path, version: &str, platform: Option<&str>) -> Result<()> {
    let platform = load::resolve_platform(platform)?;
    let meta = load::load_version(base_dir, version).await?;

    let plan = fetch_plan(&meta, base_dir, platform);
    for name in &plan.skipped {
        tracing::warn!("Skipping library with invalid coordinate: {name}");
    }

    for item in &plan.items {
        println!("{} -> {}", item.url, item.dest.display());
    }
    println!("{} artifacts for {} on {platform}", plan.items.len(), meta.id);

    Ok(())
}
