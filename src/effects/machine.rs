//! State machine that fires events and runs entry actions.

use crate::builder::{BuildError, ConfigViolation};
use crate::core::{Event, State, StateHistory, StateTransition, TransitionTable};
use crate::effects::transition::{
    EntryAction, MachineError, Payload, StateChange, MAX_CHAINED_TRANSITIONS,
};
use chrono::Utc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// A registered state together with its entry action.
pub struct StateEntry<S: State, C> {
    pub state: S,
    pub action: EntryAction<S, C>,
}

impl<S: State, C> Clone for StateEntry<S, C> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            action: self.action.clone(),
        }
    }
}

/// A registered event together with its transition table.
#[derive(Clone, Debug)]
pub struct EventEntry<S: State, E: Event> {
    pub event: E,
    pub table: TransitionTable<S>,
}

/// State machine over states `S` and events `E` whose entry actions act on
/// a caller-owned context `C`.
///
/// Firing is synchronous: the entry action of the new state has run by the
/// time [`StateMachine::fire_event`] returns.
pub struct StateMachine<S: State, E: Event, C> {
    name: String,
    default: S,
    current: S,
    states: Vec<StateEntry<S, C>>,
    events: Vec<EventEntry<S, E>>,
    history: StateHistory<S>,
}

impl<S: State, E: Event, C> StateMachine<S, E, C> {
    /// Create a machine in its default state.
    ///
    /// Every problem with the configuration is collected before failing, so
    /// the returned [`BuildError::InvalidConfiguration`] lists them all.
    /// The default state's entry action is not run.
    pub fn new(
        name: impl Into<String>,
        default: S,
        states: Vec<StateEntry<S, C>>,
        events: Vec<EventEntry<S, E>>,
    ) -> Result<Self, BuildError> {
        match validate(&default, &states, &events) {
            Validation::Success(_) => Ok(Self {
                name: name.into(),
                current: default.clone(),
                default,
                states,
                events,
                history: StateHistory::new(),
            }),
            Validation::Failure(violations) => Err(BuildError::InvalidConfiguration(
                violations.iter().cloned().collect(),
            )),
        }
    }

    /// Machine name, for diagnostics only
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// State the machine started in (pure)
    pub fn default_state(&self) -> &S {
        &self.default
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Whether firing `event` now would find a transition (pure)
    pub fn can_fire(&self, event: &E) -> bool {
        self.event_entry(event)
            .is_some_and(|entry| entry.table.target(&self.current).is_some())
    }

    /// Fire `event` without a payload.
    pub fn fire_event(&mut self, event: &E, ctx: &mut C) -> Result<S, MachineError> {
        self.fire_event_with(event, None, ctx)
    }

    /// Fire `event`, handing `payload` to every entry action run as a result.
    ///
    /// Looks up the transition from the current state, moves there, and runs
    /// the new state's entry action. Transitions requested by entry actions
    /// are applied in turn, up to [`MAX_CHAINED_TRANSITIONS`]. On
    /// `NoTransition` the current state is unchanged. Returns the state the
    /// machine settles in.
    pub fn fire_event_with(
        &mut self,
        event: &E,
        payload: Payload<'_>,
        ctx: &mut C,
    ) -> Result<S, MachineError> {
        let entry = self
            .event_entry(event)
            .ok_or_else(|| MachineError::UnknownEvent {
                event: event.name().to_string(),
            })?;

        let target = entry
            .table
            .target(&self.current)
            .cloned()
            .ok_or_else(|| MachineError::NoTransition {
                event: event.name().to_string(),
                from: self.current.name().to_string(),
            })?;

        let mut next = target;
        let mut cause = Some(event.name().to_string());
        let mut chained = 0;

        loop {
            let action = self.action_for(&next)?;
            self.apply(next, cause.take());

            match action(ctx, payload) {
                StateChange::NoChange => return Ok(self.current.clone()),
                StateChange::TransitionTo(requested) => {
                    chained += 1;
                    if chained > MAX_CHAINED_TRANSITIONS {
                        return Err(MachineError::TransitionLoopDetected {
                            limit: MAX_CHAINED_TRANSITIONS,
                        });
                    }
                    next = requested;
                }
            }
        }
    }

    fn event_entry(&self, event: &E) -> Option<&EventEntry<S, E>> {
        self.events.iter().find(|entry| entry.event == *event)
    }

    fn action_for(&self, state: &S) -> Result<EntryAction<S, C>, MachineError> {
        self.states
            .iter()
            .find(|entry| entry.state == *state)
            .map(|entry| entry.action.clone())
            .ok_or_else(|| MachineError::UnknownState {
                state: state.name().to_string(),
            })
    }

    fn apply(&mut self, to: S, event: Option<String>) {
        debug!(
            machine = %self.name,
            event = event.as_deref().unwrap_or("<chained>"),
            from = self.current.name(),
            to = to.name(),
            "state transition"
        );
        let from = std::mem::replace(&mut self.current, to.clone());
        self.history = self.history.record(StateTransition {
            from,
            to,
            event,
            timestamp: Utc::now(),
        });
    }
}

fn validate<S: State, E: Event, C>(
    default: &S,
    states: &[StateEntry<S, C>],
    events: &[EventEntry<S, E>],
) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

    let known: Vec<S> = states.iter().map(|entry| entry.state.clone()).collect();

    if !known.contains(default) {
        checks.push(Validation::fail(ConfigViolation::DefaultStateNotRegistered {
            state: default.name().to_string(),
        }));
    }

    for (i, entry) in states.iter().enumerate() {
        let name = entry.state.name();
        if states[..i].iter().any(|earlier| earlier.state.name() == name) {
            checks.push(Validation::fail(ConfigViolation::DuplicateStateName {
                name: name.to_string(),
            }));
        }
    }

    for (i, entry) in events.iter().enumerate() {
        let name = entry.event.name();
        if events[..i].iter().any(|earlier| earlier.event.name() == name) {
            checks.push(Validation::fail(ConfigViolation::DuplicateEventName {
                name: name.to_string(),
            }));
        }

        for state in entry.table.states() {
            if !known.contains(state) {
                checks.push(Validation::fail(ConfigViolation::UnknownState {
                    event: name.to_string(),
                    state: state.name().to_string(),
                }));
            }
        }
    }

    if checks.is_empty() {
        return Validation::success(());
    }
    Validation::all_vec(checks).map(|_| ())
}
