//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - The default invocation takes two positionals: `odeploy <COMMAND> <TARGET>`
//! - `--list` replaces the positionals and enumerates the built-in registry
//! - Neither positional is validated against the registry; the deploy runner
//!   accepts any strings and echoes them back

use clap::Parser;

/// Odeploy - deploy command registry and runner
#[derive(Parser, Debug)]
#[command(name = "odeploy")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'odeploy --list' to see the built-in deploy commands.")]
pub struct Cli {
    /// Deploy command name (a registry key, e.g. "excel-to-staging")
    #[arg(value_name = "COMMAND", required_unless_present = "list")]
    pub command: Option<String>,

    /// Target environment or source-target pair (e.g. "acc" or "main-acc")
    #[arg(value_name = "TARGET", required_unless_present = "list")]
    pub target: Option<String>,

    /// List the built-in deploy commands and their targets
    #[arg(long, conflicts_with_all = ["command", "target"])]
    pub list: bool,

    /// Output format for tooling (JSON event lines)
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
