//! Command subcommand: print the launch argument vector.

use crate::load;
use anyhow::Result;
use javelin_core::{LaunchContext, build_launch_command, merge};
use javelin_schema::select_loader;
use std::path::Path;

/// Build and print the launch command for a version, one token per
/// line, ready to be handed to a Java executable.
#[allow(clippy::too_many_arguments)]
pub async fn command(
    base_dir: &Path,
    version: &str,
    context: LaunchContext,
    memory_mb: u32,
    platform: Option<&str>,
    loader_json: Option<&Path>,
    loader_version: Option<&str>,
) -> Result<()> {
    let platform = load::resolve_platform(platform)?;
    let mut meta = load::load_version(base_dir, version).await?;

    if let (Some(path), Some(loader_version)) = (loader_json, loader_version) {
        let loaders = load::load_loaders(path).await?;
        let loader = select_loader(&loaders, loader_version)?;

        let merged = merge(&meta, loader);
        for name in &merged.skipped {
            tracing::warn!("Skipping overlay library with invalid coordinate: {name}");
        }
        meta = merged.metadata;
    }

    let vars = context.variables(&meta, base_dir);
    let plan = build_launch_command(&meta, base_dir, vars, memory_mb, platform);

    for name in &plan.skipped {
        tracing::warn!("Excluded library with invalid coordinate from classpath: {name}");
    }
    tracing::debug!(
        "Built launch command for {} ({} tokens, Java {})",
        meta.id,
        plan.argv.len(),
        javelin_core::required_java_major(&meta.id),
    );

    for token in &plan.argv {
        println!("{token}");
    }

    Ok(())
}
