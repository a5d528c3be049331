//! Builder for constructing state machines.

use crate::builder::error::{BuildError, NameKind};
use crate::core::{Event, State, TableError, TransitionTable};
use crate::effects::{EntryAction, EventEntry, Payload, StateChange, StateEntry, StateMachine};
use std::sync::Arc;

/// Builder for constructing state machines with a fluent API.
///
/// States are registered before the events that reference them. Each
/// registration is validated immediately, so a bad name or table is
/// reported at the call that introduced it.
pub struct StateMachineBuilder<S: State, E: Event, C> {
    states: Vec<StateEntry<S, C>>,
    events: Vec<EventEntry<S, E>>,
}

impl<S: State, E: Event, C> StateMachineBuilder<S, E, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Register a state and its entry action.
    /// Returns an error if a state with the same name is already registered.
    pub fn state<F>(self, state: S, action: F) -> Result<Self, BuildError>
    where
        F: Fn(&mut C, Payload<'_>) -> StateChange<S> + Send + Sync + 'static,
    {
        self.state_entry(StateEntry {
            state,
            action: Arc::new(action) as EntryAction<S, C>,
        })
    }

    /// Register a pre-built state entry.
    pub fn state_entry(mut self, entry: StateEntry<S, C>) -> Result<Self, BuildError> {
        let name = entry.state.name();
        if self.states.iter().any(|known| known.state.name() == name) {
            return Err(BuildError::DuplicateName {
                kind: NameKind::State,
                name: name.to_string(),
            });
        }
        self.states.push(entry);
        Ok(self)
    }

    /// Register an event with its transition table.
    ///
    /// Fails with `DuplicateName` if the event name is taken, and with
    /// `InvalidTransitionTable` if the table lists a source state twice or
    /// mentions a state not registered yet.
    pub fn event(mut self, event: E, transitions: Vec<(S, S)>) -> Result<Self, BuildError> {
        let name = event.name().to_string();
        if self.events.iter().any(|known| known.event.name() == name) {
            return Err(BuildError::DuplicateName {
                kind: NameKind::Event,
                name,
            });
        }

        let table = TransitionTable::new(transitions).map_err(|source| {
            BuildError::InvalidTransitionTable {
                event: name.clone(),
                source,
            }
        })?;

        let known: Vec<S> = self.states.iter().map(|entry| entry.state.clone()).collect();
        if let Some(unknown) = table.first_unknown(&known) {
            return Err(BuildError::InvalidTransitionTable {
                event: name,
                source: TableError::UnknownState {
                    state: unknown.name().to_string(),
                },
            });
        }

        self.events.push(EventEntry { event, table });
        Ok(self)
    }

    /// Build the state machine, starting in `default`.
    pub fn build(
        self,
        name: impl Into<String>,
        default: S,
    ) -> Result<StateMachine<S, E, C>, BuildError> {
        StateMachine::new(name, default, self.states, self.events)
    }
}

impl<S: State, E: Event, C> Default for StateMachineBuilder<S, E, C> {
    fn default() -> Self {
        Self::new()
    }
}
