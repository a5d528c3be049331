//! Simple door: open and close commands with self-loop idempotence.

use super::mechanism::DoorMechanism;
use super::status::StatusSink;
use crate::builder::{BuildError, StateMachineBuilder};
use crate::config::DoorConfig;
use crate::core::{Event, StateHistory};
use crate::effects::{Engine, Payload, StateChange, StateMachine};
use crate::motion::{Actuator, Direction, TickOutcome};
use crate::{event_enum, state_enum};
use std::time::Duration;
use tracing::warn;

state_enum! {
    /// Phases of the simple door.
    pub enum DoorState {
        Closed,
        Opened,
        Closing,
        Opening,
    }
}

event_enum! {
    /// Stimuli accepted by the simple door.
    pub enum DoorEvent {
        Open,
        Close,
        SensorOpened,
        SensorClosed,
    }
}

/// Commands a driver can send to a [`Door`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorCommand {
    Open,
    Close,
}

type DoorMachine = StateMachine<DoorState, DoorEvent, DoorMechanism>;

/// A door that opens and closes on command.
///
/// Repeating a command is harmless: `open()` while opening or opened, and
/// `close()` while closing or closed, re-enter the current state. If the
/// state machine cannot be built the door is broken for good.
pub struct Door {
    engine: Engine<DoorState, DoorEvent, DoorMechanism>,
    mechanism: DoorMechanism,
}

impl Door {
    pub fn new(sink: impl StatusSink + 'static) -> Self {
        Self::with_config(DoorConfig::door(), sink)
    }

    /// Create a door with explicit timing.
    ///
    /// The tick period comes from [`DoorConfig::tick_period`], so it is never
    /// shorter than one millisecond.
    pub fn with_config(config: DoorConfig, sink: impl StatusSink + 'static) -> Self {
        Self::with_engine(Engine::from_build(build_machine()), config, sink)
    }

    fn with_engine(
        engine: Engine<DoorState, DoorEvent, DoorMechanism>,
        config: DoorConfig,
        sink: impl StatusSink + 'static,
    ) -> Self {
        Self {
            engine,
            mechanism: DoorMechanism::new(config.tick_period(), Box::new(sink)),
        }
    }

    pub fn is_broken(&self) -> bool {
        self.engine.is_disabled()
    }

    pub fn open(&mut self) -> bool {
        self.fire(DoorEvent::Open)
    }

    pub fn close(&mut self) -> bool {
        self.fire(DoorEvent::Close)
    }

    /// Current state, or `None` when broken.
    pub fn state(&self) -> Option<&DoorState> {
        self.engine.current_state()
    }

    pub fn history(&self) -> Option<&StateHistory<DoorState>> {
        self.engine.machine().map(StateMachine::history)
    }

    pub fn percent(&self) -> u8 {
        self.mechanism.percent()
    }

    pub fn is_moving(&self) -> bool {
        self.mechanism.is_moving()
    }

    /// One firing of the motion timer.
    ///
    /// Reports each step; on reaching fully opened or closed, fires the
    /// matching sensor event.
    pub fn tick(&mut self) {
        match self.mechanism.tick() {
            TickOutcome::Idle => {}
            TickOutcome::Moved { direction, .. } => {
                self.mechanism.report(moving_label(direction));
            }
            TickOutcome::Arrived {
                direction, moved, ..
            } => {
                if moved {
                    self.mechanism.report(moving_label(direction));
                }
                self.fire(sensor_for(direction));
            }
        }
    }

    /// Run every tick that falls due in `elapsed`.
    ///
    /// Stops early once motion completes; leftover time is discarded.
    pub fn advance(&mut self, elapsed: Duration) {
        let due = self.mechanism.due_ticks(elapsed);
        for _ in 0..due {
            if !self.mechanism.is_moving() {
                break;
            }
            self.tick();
        }
    }

    fn fire(&mut self, event: DoorEvent) -> bool {
        match self.engine.fire(&event, &mut self.mechanism) {
            Ok(_) => true,
            Err(err) => {
                warn!(event = event.name(), error = %err, "door rejected event");
                false
            }
        }
    }
}

impl Actuator for Door {
    type Command = DoorCommand;

    fn execute(&mut self, command: DoorCommand) -> bool {
        match command {
            DoorCommand::Open => self.open(),
            DoorCommand::Close => self.close(),
        }
    }

    fn tick(&mut self) {
        Door::tick(self);
    }

    fn is_moving(&self) -> bool {
        Door::is_moving(self)
    }

    fn tick_period(&self) -> Duration {
        self.mechanism.tick_period()
    }
}

fn moving_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Opening => "Opening",
        Direction::Closing => "Closing",
    }
}

fn sensor_for(direction: Direction) -> DoorEvent {
    match direction {
        Direction::Opening => DoorEvent::SensorOpened,
        Direction::Closing => DoorEvent::SensorClosed,
    }
}

fn settled(
    label: &'static str,
) -> impl Fn(&mut DoorMechanism, Payload<'_>) -> StateChange<DoorState> + Send + Sync {
    move |mechanism: &mut DoorMechanism, _: Payload<'_>| {
        mechanism.report(label);
        StateChange::NoChange
    }
}

fn moving(
    direction: Direction,
) -> impl Fn(&mut DoorMechanism, Payload<'_>) -> StateChange<DoorState> + Send + Sync {
    move |mechanism: &mut DoorMechanism, _: Payload<'_>| {
        mechanism.report(moving_label(direction));
        mechanism.start(direction);
        StateChange::NoChange
    }
}

fn build_machine() -> Result<DoorMachine, BuildError> {
    use DoorState::*;

    StateMachineBuilder::new()
        .state(Closed, settled("Closed"))?
        .state(Opened, settled("Opened"))?
        .state(Closing, moving(Direction::Closing))?
        .state(Opening, moving(Direction::Opening))?
        .event(
            DoorEvent::Close,
            vec![
                (Opened, Closing),
                (Opening, Closing),
                (Closed, Closed),
                (Closing, Closing),
            ],
        )?
        .event(
            DoorEvent::Open,
            vec![
                (Closed, Opening),
                (Closing, Opening),
                (Opened, Opened),
                (Opening, Opening),
            ],
        )?
        .event(DoorEvent::SensorClosed, vec![(Closing, Closed)])?
        .event(DoorEvent::SensorOpened, vec![(Opening, Opened)])?
        .build("DoorControl", Closed)
}
