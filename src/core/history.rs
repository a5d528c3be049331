//! State transition history tracking.
//!
//! Provides bounded, immutable tracking of the transitions a state
//! machine has applied.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Number of transitions kept when no explicit limit is given.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use actuate::core::{State, StateTransition};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Gate {
///     Down,
///     Up,
/// }
///
/// impl State for Gate {
///     fn name(&self) -> &str {
///         match self {
///             Self::Down => "Down",
///             Self::Up => "Up",
///         }
///     }
/// }
///
/// let transition = StateTransition {
///     from: Gate::Down,
///     to: Gate::Up,
///     event: Some("Raise".to_string()),
///     timestamp: Utc::now(),
/// };
/// assert!(!transition.is_chained());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Name of the event that caused the transition; `None` when an entry
    /// action requested it
    pub event: Option<String>,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Whether an entry action, rather than an event, caused this transition.
    pub fn is_chained(&self) -> bool {
        self.event.is_none()
    }
}

/// Ordered history of state transitions.
///
/// History is immutable - `record` returns a new history with the
/// transition added. Once `limit` entries are held the oldest is dropped.
///
/// # Example
///
/// ```rust
/// use actuate::core::{StateHistory, StateTransition};
/// use actuate::state_enum;
/// use chrono::Utc;
///
/// state_enum! {
///     enum Phase {
///         One,
///         Two,
///         Three,
///     }
/// }
///
/// let step = |from: Phase, to: Phase| StateTransition {
///     from,
///     to,
///     event: None,
///     timestamp: Utc::now(),
/// };
///
/// let history = StateHistory::with_limit(2)
///     .record(step(Phase::One, Phase::Two))
///     .record(step(Phase::Two, Phase::Three))
///     .record(step(Phase::Three, Phase::One));
///
/// assert_eq!(history.transitions().len(), 2);
/// assert_eq!(history.get_path(), vec![&Phase::Two, &Phase::Three, &Phase::One]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
    limit: usize,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history holding at most [`DEFAULT_HISTORY_LIMIT`] entries.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create a new empty history holding at most `limit` entries.
    ///
    /// A limit of zero is treated as one.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let skip = (self.transitions.len() + 1).saturating_sub(self.limit);
        let mut transitions: Vec<_> = self.transitions.iter().skip(skip).cloned().collect();
        transitions.push(transition);
        Self {
            transitions,
            limit: self.limit,
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the `from` state of the
    /// oldest retained transition, then the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last retained transition.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all retained transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Most recent transition.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// Maximum number of retained transitions.
    pub fn limit(&self) -> usize {
        self.limit
    }
}
