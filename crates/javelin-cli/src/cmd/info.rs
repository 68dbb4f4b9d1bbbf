//! Info subcommand: summarize an installed version.

use crate::load;
use anyhow::Result;
use javelin_core::required_java_major;
use std::path::Path;

/// Print a short summary of a version's metadata.
pub async fn info(base_dir: &Path, version: &str) -> Result<()> {
    let meta = load::load_version(base_dir, version).await?;

    let lw = 14;
    println!();
    println!("  {}", meta.id);
    println!();
    println!("  {:<lw$}{}", "main class", meta.main_class);
    println!("  {:<lw$}{}", "asset index", meta.asset_index.id);
    println!("  {:<lw$}{}", "libraries", meta.libraries.len());
    if meta.uses_legacy_arguments() {
        println!("  {:<lw$}{}", "arguments", "legacy string");
    } else {
        println!(
            "  {:<lw$}{} jvm, {} game",
            "arguments",
            meta.arguments.jvm.len(),
            meta.arguments.game.len()
        );
    }
    println!("  {:<lw$}{}", "java", required_java_major(&meta.id));

    Ok(())
}
