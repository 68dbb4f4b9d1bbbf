//! Core library for javelin.
//!
//! Turns a declarative version-metadata document (optionally overlaid
//! by a mod-loader document) into a concrete, ordered launch command.
//! Every operation here is a pure function over already-parsed values:
//! no network, no filesystem access, no logging, no process spawning.
//! Those concerns live behind the CLI and its collaborators.
//!
//! The pipeline, leaf to root:
//!
//! - [`merge`] — overlay a loader document onto base metadata with
//!   override-by-identity semantics.
//! - [`expand`] — expand rule-gated argument templates into literal
//!   tokens, substituting `${name}` placeholders.
//! - [`command`] — assemble the classpath and final argument vector.
//! - [`plan`] — compute what a download collaborator would need to
//!   fetch, without fetching anything.
//!
//! Given identical inputs, every function returns identical output, so
//! results can be cached or built in parallel by callers.

pub mod command;
pub mod expand;
pub mod java;
pub mod merge;
pub mod paths;
pub mod plan;
pub mod vars;

pub use command::{LaunchPlan, build_launch_command};
pub use expand::ArgumentExpander;
pub use java::required_java_major;
pub use merge::{Merged, merge};
pub use plan::{FetchItem, FetchPlan, asset_items, fetch_plan};
pub use vars::{LaunchContext, VariableTable};
