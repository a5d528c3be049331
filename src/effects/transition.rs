//! Entry actions and the errors raised while firing events.

use crate::core::State;
use std::any::Any;
use std::sync::Arc;

/// Upper bound on transitions requested by entry actions during one firing.
pub const MAX_CHAINED_TRANSITIONS: usize = 16;

/// What an entry action asks the machine to do next.
#[derive(Clone, Debug, PartialEq)]
pub enum StateChange<S: State> {
    /// Stay in the state that was just entered
    NoChange,

    /// Move on to another registered state and run its entry action
    TransitionTo(S),
}

/// Opaque value handed to entry actions by `fire_event_with`.
pub type Payload<'a> = Option<&'a (dyn Any + Send + Sync)>;

/// Function run every time its state becomes current.
///
/// The owner of the machine passes its own context `C` to every firing, so
/// actions reach the controller explicitly rather than through a captured
/// back-reference.
pub type EntryAction<S, C> = Arc<dyn Fn(&mut C, Payload<'_>) -> StateChange<S> + Send + Sync>;

/// Wrap a closure as an [`EntryAction`].
pub fn entry_action<S, C, F>(action: F) -> EntryAction<S, C>
where
    S: State,
    F: Fn(&mut C, Payload<'_>) -> StateChange<S> + Send + Sync + 'static,
{
    Arc::new(action)
}

/// Errors that can occur while firing an event
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MachineError {
    #[error("Event '{event}' is not registered with this machine")]
    UnknownEvent { event: String },

    #[error("Event '{event}' has no transition from state '{from}'")]
    NoTransition { event: String, from: String },

    #[error("Entry action requested unregistered state '{state}'")]
    UnknownState { state: String },

    #[error("More than {limit} chained transitions in one firing")]
    TransitionLoopDetected { limit: usize },

    #[error("State machine is disabled: {reason}")]
    Disabled { reason: String },
}
