//! CLI subcommand implementations.

pub mod command;
pub mod info;
pub mod plan;
