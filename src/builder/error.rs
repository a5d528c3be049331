//! Build errors for state machines.

use crate::core::TableError;
use std::fmt;
use thiserror::Error;

/// Which namespace a duplicate name was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    State,
    Event,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::State => f.write_str("state"),
            Self::Event => f.write_str("event"),
        }
    }
}

/// A single problem found while validating a complete machine configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Default state '{state}' is not registered")]
    DefaultStateNotRegistered { state: String },

    #[error("State name '{name}' is registered more than once")]
    DuplicateStateName { name: String },

    #[error("Event name '{name}' is registered more than once")]
    DuplicateEventName { name: String },

    #[error("Event '{event}' references unknown state '{state}'")]
    UnknownState { event: String, state: String },
}

/// Errors that can occur when building state machines.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Duplicate {kind} name '{name}'")]
    DuplicateName { kind: NameKind, name: String },

    #[error("Invalid transition table for event '{event}': {source}")]
    InvalidTransitionTable {
        event: String,
        #[source]
        source: TableError,
    },

    #[error("Invalid state machine configuration: {}", describe(.0))]
    InvalidConfiguration(Vec<ConfigViolation>),
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_lists_every_violation() {
        let err = BuildError::InvalidConfiguration(vec![
            ConfigViolation::DefaultStateNotRegistered {
                state: "Closed".to_string(),
            },
            ConfigViolation::DuplicateEventName {
                name: "Open".to_string(),
            },
        ]);

        assert_eq!(
            err.to_string(),
            "Invalid state machine configuration: Default state 'Closed' is not registered; \
             Event name 'Open' is registered more than once"
        );
    }

    #[test]
    fn duplicate_name_mentions_kind() {
        let err = BuildError::DuplicateName {
            kind: NameKind::Event,
            name: "Close".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate event name 'Close'");
    }
}
