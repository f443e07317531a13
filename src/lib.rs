//! Odeploy - deploy command registry and runner
//!
//! Odeploy holds a static registry mapping deploy command names to their
//! legal targets, and a CLI entry point that echoes the command and target
//! it received. The actual deploy mechanics (database sync, file transfer,
//! excel import) are extension points, not part of this crate.
//!
//! The registry is consumed by an editor extension that presents each
//! command as a clickable item; `odeploy --list` exposes the same data on
//! the command line.

pub mod cli;
pub mod error;
pub mod models;
pub mod registry;

// Re-exports for convenience
pub use cli::Cli;
pub use error::{DeployError, DeployResult};
pub use models::{Target, TargetSpec};
pub use registry::{CommandEntry, Registry};
