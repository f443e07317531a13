//! The built-in deploy command registry
//!
//! A read-only, ordered mapping from command name to the targets that
//! command may deploy to. Defined once at startup and never mutated; the
//! editor extension reads the same table to populate its command view.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{DeployError, DeployResult};
use crate::models::Target;

/// One named deploy command and its legal targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandEntry {
    /// Unique, human-readable command name (e.g. "excel-to-staging")
    pub name: String,
    /// Ordered, non-empty list of legal targets
    pub targets: Vec<Target>,
}

impl CommandEntry {
    /// Create a new command entry
    pub fn new(name: impl Into<String>, targets: Vec<Target>) -> Self {
        Self {
            name: name.into(),
            targets,
        }
    }
}

/// Ordered, read-only collection of deploy commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<CommandEntry>,
}

impl Registry {
    /// Build a registry, enforcing unique names and non-empty target lists
    pub fn from_entries(entries: Vec<CommandEntry>) -> DeployResult<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(DeployError::DuplicateCommand {
                    name: entry.name.clone(),
                });
            }
            if entry.targets.is_empty() {
                return Err(DeployError::EmptyTargets {
                    name: entry.name.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// The built-in command table.
    ///
    /// Names are unique and every command has at least one target, so this
    /// cannot hit the `from_entries` error paths.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                CommandEntry::new(
                    "excel-to-staging",
                    vec![Target::single("acc"), Target::single("acc2")],
                ),
                CommandEntry::new("excel-to-main", vec![Target::single("prod")]),
                CommandEntry::new(
                    "main-to-other",
                    vec![
                        Target::transfer("main", "acc"),
                        Target::transfer("main", "acc2"),
                        Target::transfer("main", "local"),
                    ],
                ),
                CommandEntry::new(
                    "staging-to-local",
                    vec![
                        Target::transfer("acc", "local"),
                        Target::transfer("acc2", "local"),
                    ],
                ),
                CommandEntry::new("create-reference-db", vec![Target::single("local")]),
                CommandEntry::new("restore-reference-db", vec![Target::single("local")]),
            ],
        }
    }

    /// Look up the targets for a command name
    pub fn get(&self, name: &str) -> Option<&[Target]> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.targets.as_slice())
    }

    /// Iterate entries in definition order
    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the registry holds no commands
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
