//! Core data models for Odeploy
//!
//! Defines the fundamental data structures used throughout Odeploy:
//! - `Target`: a legal destination for a deploy command
//! - `TargetSpec`: the parse of the target string passed on the command line

use serde::{Deserialize, Serialize};

/// A legal target for a deploy command.
///
/// On the wire this keeps the shape the editor extension expects: a bare
/// string for a single environment, a two-element array for a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Target {
    /// One destination environment
    Single(String),
    /// An ordered (source, destination) pair
    Transfer(String, String),
}

impl Target {
    /// Shorthand for a single-environment target
    pub fn single(env: impl Into<String>) -> Self {
        Target::Single(env.into())
    }

    /// Shorthand for a source-to-destination transfer target
    pub fn transfer(source: impl Into<String>, dest: impl Into<String>) -> Self {
        Target::Transfer(source.into(), dest.into())
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Single(env) => write!(f, "{}", env),
            Target::Transfer(source, dest) => write!(f, "{} → {}", source, dest),
        }
    }
}

/// The parse of the `target` CLI argument.
///
/// A target string with a `-` is split on the FIRST occurrence into a
/// (source, target) pair; everything after that hyphen, further hyphens
/// included, is the target. Environment names are opaque strings, so a
/// single environment that itself contains a hyphen is indistinguishable
/// from a pair. That ambiguity is inherited from the original deploy
/// script and left as-is rather than guessed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSpec {
    /// The whole string is one target environment
    Single(String),
    /// A source-to-target pair, split on the first hyphen
    Pair { source: String, target: String },
}

impl TargetSpec {
    /// Parse a raw target string. Never fails: any string is a valid target.
    pub fn parse(raw: &str) -> TargetSpec {
        match raw.split_once('-') {
            Some((source, target)) => TargetSpec::Pair {
                source: source.to_string(),
                target: target.to_string(),
            },
            None => TargetSpec::Single(raw.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_serialize_single() {
        let json = serde_json::to_string(&Target::single("acc")).unwrap();
        assert_eq!(json, "\"acc\"");
    }

    #[test]
    fn test_target_serialize_transfer() {
        let json = serde_json::to_string(&Target::transfer("main", "acc")).unwrap();
        assert_eq!(json, "[\"main\",\"acc\"]");
    }

    #[test]
    fn test_target_deserialize_single() {
        let target: Target = serde_json::from_str("\"prod\"").unwrap();
        assert_eq!(target, Target::single("prod"));
    }

    #[test]
    fn test_target_deserialize_transfer() {
        let target: Target = serde_json::from_str("[\"acc\",\"local\"]").unwrap();
        assert_eq!(target, Target::transfer("acc", "local"));
    }

    #[test]
    fn test_target_display() {
        assert_eq!(Target::single("local").to_string(), "local");
        assert_eq!(Target::transfer("main", "acc2").to_string(), "main → acc2");
    }

    #[test]
    fn test_target_spec_parse_single() {
        assert_eq!(TargetSpec::parse("local"), TargetSpec::Single("local".to_string()));
    }

    #[test]
    fn test_target_spec_parse_pair() {
        assert_eq!(
            TargetSpec::parse("acc-local"),
            TargetSpec::Pair {
                source: "acc".to_string(),
                target: "local".to_string(),
            }
        );
    }

    #[test]
    fn test_target_spec_parse_splits_on_first_hyphen_only() {
        // "acc-local-2" is (acc, local-2), not an error and not (acc-local, 2)
        assert_eq!(
            TargetSpec::parse("acc-local-2"),
            TargetSpec::Pair {
                source: "acc".to_string(),
                target: "local-2".to_string(),
            }
        );
    }

    #[test]
    fn test_target_spec_parse_trailing_hyphen() {
        assert_eq!(
            TargetSpec::parse("acc-"),
            TargetSpec::Pair {
                source: "acc".to_string(),
                target: String::new(),
            }
        );
    }

    #[test]
    fn test_target_spec_parse_empty() {
        assert_eq!(TargetSpec::parse(""), TargetSpec::Single(String::new()));
    }
}
