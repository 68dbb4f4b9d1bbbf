//! javelin - launch-command CLI

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use javelin_cli::cmd;
use javelin_cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let base_dir = match cli.base_dir {
        Some(dir) => dir,
        None => javelin_core::paths::try_javelin_home()
            .context("Could not determine home directory. Set JAVELIN_HOME to override.")?,
    };

    match cli.command {
        Commands::Command {
            version,
            memory,
            username,
            uuid,
            access_token,
            user_type,
            client_id,
            version_type,
            platform,
            loader_json,
            loader_version,
        } => {
            let context = javelin_core::LaunchContext {
                username,
                uuid,
                access_token,
                user_type,
                client_id,
                version_type,
            };
            cmd::command::command(
                &base_dir,
                &version,
                context,
                memory,
                platform.as_deref(),
                loader_json.as_deref(),
                loader_version.as_deref(),
            )
            .await
        }
        Commands::Plan { version, platform } => {
            cmd::plan::plan(&base_dir, &version, platform.as_deref()).await
        }
        Commands::Info { version } => cmd::info::info(&base_dir, &version).await,
    }
}
