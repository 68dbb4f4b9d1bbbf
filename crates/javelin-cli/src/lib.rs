//! javelin - launch-command CLI
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
//!
//! Thin command-line front end over `javelin-core`. It loads
//! already-downloaded metadata JSON from the base directory, runs the
//! pure launch pipeline, and prints the result. It never fetches,
//! verifies, or spawns anything itself.
//!
//! # Directory Layout
//!
//! ```text
//! ~/.javelin/
//! ├── versions/<id>/<id>.json   # version metadata (+ merged variants)
//! ├── versions/<id>/<id>.jar    # client jar
//! ├── libraries/                # artifacts by coordinate path
//! ├── natives/<id>/             # extracted natives
//! └── assets/                   # index + object store
//! ```

pub mod cmd;
pub mod load;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Re-exports from other crates for convenience
pub use javelin_core::paths;

/// Compute launch commands for Java-based game versions.
#[derive(Debug, Parser)]
#[command(name = "javelin", version, about)]
pub struct Cli {
    /// Base directory; defaults to $JAVELIN_HOME or ~/.javelin.
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the launch command for an installed version.
    Command {
        /// Version id (the name of the versions/<id> directory).
        version: String,

        /// Maximum JVM heap size in megabytes.
        #[arg(long, default_value_t = 2048)]
        memory: u32,

        /// Player display name.
        #[arg(long, default_value = "Player")]
        username: String,

        /// Player UUID.
        #[arg(long, default_value = "")]
        uuid: String,

        /// Session access token.
        #[arg(long, default_value = "")]
        access_token: String,

        /// Account type tag.
        #[arg(long, default_value = "legacy")]
        user_type: String,

        /// Client identifier.
        #[arg(long, default_value = "")]
        client_id: String,

        /// Version-type label.
        #[arg(long, default_value = "release")]
        version_type: String,

        /// Target platform (windows, linux, osx); defaults to the host.
        #[arg(long)]
        platform: Option<String>,

        /// Path to a JSON array of loader overlay documents.
        #[arg(long, requires = "loader_version")]
        loader_json: Option<PathBuf>,

        /// Loader version to select from the overlay documents.
        #[arg(long)]
        loader_version: Option<String>,
    },

    /// Print the fetch plan for an installed version.
    Plan {
        /// Version id.
        version: String,

        /// Target platform (windows, linux, osx); defaults to the host.
        #[arg(long)]
        platform: Option<String>,
    },

    /// Print a summary of an installed version.
    Info {
        /// Version id.
        version: String,
    },
}
