//! Events and their transition tables.

use super::state::State;
use std::fmt::Debug;
use thiserror::Error;

/// Trait for state machine events.
///
/// An event is a named stimulus. Its behavior is the [`TransitionTable`]
/// registered for it when the machine is built.
pub trait Event: Clone + PartialEq + Debug + Send + Sync {
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

/// Problems found in a single transition table.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableError {
    #[error("transition table references unknown state '{state}'")]
    UnknownState { state: String },

    #[error("transition table lists state '{state}' as a source more than once")]
    DuplicateFromState { state: String },
}

/// Ordered set of `from -> to` pairs for one event.
///
/// Each source state appears at most once, so a lookup from the current
/// state is unambiguous.
///
/// # Example
///
/// ```rust
/// use actuate::core::TransitionTable;
/// use actuate::state_enum;
///
/// state_enum! {
///     enum Valve {
///         Shut,
///         Open,
///     }
/// }
///
/// let table = TransitionTable::new(vec![
///     (Valve::Shut, Valve::Open),
///     (Valve::Open, Valve::Open),
/// ])
/// .unwrap();
///
/// assert_eq!(table.target(&Valve::Shut), Some(&Valve::Open));
/// let twice = vec![(Valve::Shut, Valve::Open), (Valve::Shut, Valve::Shut)];
/// assert!(TransitionTable::new(twice).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionTable<S: State> {
    entries: Vec<(S, S)>,
}

impl<S: State> TransitionTable<S> {
    /// Build a table, rejecting a source state listed twice.
    pub fn new(entries: Vec<(S, S)>) -> Result<Self, TableError> {
        for (i, (from, _)) in entries.iter().enumerate() {
            if entries[..i].iter().any(|(earlier, _)| earlier == from) {
                return Err(TableError::DuplicateFromState {
                    state: from.name().to_string(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Target state for `from`, if the table has an entry for it.
    pub fn target(&self, from: &S) -> Option<&S> {
        self.entries
            .iter()
            .find(|(source, _)| source == from)
            .map(|(_, to)| to)
    }

    /// All entries in registration order.
    pub fn entries(&self) -> &[(S, S)] {
        &self.entries
    }

    /// Every state the table mentions, sources and targets alike.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.entries.iter().flat_map(|(from, to)| [from, to])
    }

    /// First state not contained in `known`, if any.
    pub fn first_unknown<'a>(&'a self, known: &[S]) -> Option<&'a S> {
        self.states().find(|state| !known.contains(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Closed,
        Opening,
        Opened,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Closed => "Closed",
                Self::Opening => "Opening",
                Self::Opened => "Opened",
            }
        }
    }

    #[test]
    fn target_finds_entry_for_source() {
        let table = TransitionTable::new(vec![
            (TestState::Closed, TestState::Opening),
            (TestState::Opening, TestState::Opened),
        ])
        .unwrap();

        assert_eq!(table.target(&TestState::Closed), Some(&TestState::Opening));
        assert_eq!(table.target(&TestState::Opening), Some(&TestState::Opened));
        assert_eq!(table.target(&TestState::Opened), None);
    }

    #[test]
    fn self_loops_are_allowed() {
        let table = TransitionTable::new(vec![(TestState::Opened, TestState::Opened)]).unwrap();
        assert_eq!(table.target(&TestState::Opened), Some(&TestState::Opened));
    }

    #[test]
    fn duplicate_source_is_rejected() {
        let result = TransitionTable::new(vec![
            (TestState::Closed, TestState::Opening),
            (TestState::Closed, TestState::Opened),
        ]);

        assert_eq!(
            result,
            Err(TableError::DuplicateFromState {
                state: "Closed".to_string()
            })
        );
    }

    #[test]
    fn first_unknown_reports_missing_state() {
        let table = TransitionTable::new(vec![(TestState::Closed, TestState::Opened)]).unwrap();

        assert_eq!(
            table.first_unknown(&[TestState::Closed]),
            Some(&TestState::Opened)
        );
        assert_eq!(
            table.first_unknown(&[TestState::Closed, TestState::Opened]),
            None
        );
    }
}
