//! A state machine slot that can be permanently disabled.

use crate::builder::BuildError;
use crate::core::{Event, State};
use crate::effects::machine::StateMachine;
use crate::effects::transition::MachineError;
use tracing::error;

/// Either a working state machine or the reason there isn't one.
///
/// Controllers hold an `Engine` instead of an optional machine so that
/// "broken" is a state they can match on. Once disabled, an engine never
/// becomes active again.
pub enum Engine<S: State, E: Event, C> {
    Active(StateMachine<S, E, C>),
    Disabled { reason: String },
}

impl<S: State, E: Event, C> Engine<S, E, C> {
    /// Wrap the outcome of building a machine, disabling on failure.
    pub fn from_build(result: Result<StateMachine<S, E, C>, BuildError>) -> Self {
        match result {
            Ok(machine) => Self::Active(machine),
            Err(err) => {
                error!(error = %err, "state machine failed to build");
                Self::Disabled {
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Fire `event` on the active machine.
    ///
    /// A disabled engine fails with [`MachineError::Disabled`] without
    /// running anything.
    pub fn fire(&mut self, event: &E, ctx: &mut C) -> Result<S, MachineError> {
        match self {
            Self::Active(machine) => machine.fire_event(event, ctx),
            Self::Disabled { reason } => Err(MachineError::Disabled {
                reason: reason.clone(),
            }),
        }
    }

    /// Discard the machine for good.
    pub fn disable(&mut self, reason: impl Into<String>) {
        *self = Self::Disabled {
            reason: reason.into(),
        };
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled { .. })
    }

    pub fn machine(&self) -> Option<&StateMachine<S, E, C>> {
        match self {
            Self::Active(machine) => Some(machine),
            Self::Disabled { .. } => None,
        }
    }

    pub fn current_state(&self) -> Option<&S> {
        self.machine().map(StateMachine::current_state)
    }

    pub fn disabled_reason(&self) -> Option<&str> {
        match self {
            Self::Active(_) => None,
            Self::Disabled { reason } => Some(reason),
        }
    }
}
