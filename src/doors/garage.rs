//! Garage door: a single button cycling through move and stop states.

use super::mechanism::DoorMechanism;
use super::status::StatusSink;
use crate::builder::{BuildError, StateMachineBuilder};
use crate::config::DoorConfig;
use crate::core::{Event, StateHistory};
use crate::effects::{Engine, MachineError, Payload, StateChange, StateMachine};
use crate::motion::{Actuator, Direction, TickOutcome};
use crate::{event_enum, state_enum};
use std::time::Duration;
use tracing::{error, warn};

/// Reported once when the garage door latches broken.
pub const DOOR_BROKEN: &str = "Door Broken";

const DOOR_CLOSED: &str = "Door Closed";
const DOOR_OPENED: &str = "Door Opened";
const DOOR_CLOSING: &str = "Door Closing";
const DOOR_OPENING: &str = "Door Opening";
const STOPPED: &str = "Stopped";

state_enum! {
    /// Phases of the garage door.
    pub enum GarageState {
        Closed,
        Closing,
        ClosingStopped,
        Opened,
        Opening,
        OpeningStopped,
    }
}

event_enum! {
    /// Stimuli accepted by the garage door.
    pub enum GarageEvent {
        ButtonPushed,
        SensorClosed,
        SensorOpened,
    }
}

/// Commands a driver can send to a [`GarageDoor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GarageCommand {
    ButtonPushed,
}

type GarageMachine = StateMachine<GarageState, GarageEvent, DoorMechanism>;

/// A garage door operated by one button.
///
/// Each push moves around the ring
/// `Closed -> Opening -> OpeningStopped -> Closing -> ClosingStopped -> Opening`,
/// with `Opened -> Closing` once fully open. Stopping keeps the door where it
/// is and the next move resumes from there.
///
/// Any failed transition breaks the door permanently: it reports
/// `"Door Broken"` once and rejects every later push.
pub struct GarageDoor {
    engine: Engine<GarageState, GarageEvent, DoorMechanism>,
    mechanism: DoorMechanism,
}

impl GarageDoor {
    pub fn new(sink: impl StatusSink + 'static) -> Self {
        Self::with_config(DoorConfig::garage(), sink)
    }

    /// Create a garage door with explicit timing; the period is never
    /// shorter than one millisecond.
    pub fn with_config(config: DoorConfig, sink: impl StatusSink + 'static) -> Self {
        Self {
            engine: Engine::from_build(build_machine()),
            mechanism: DoorMechanism::new(config.tick_period(), Box::new(sink)),
        }
    }

    /// Push the button. Returns `false` if the door is, or just became, broken.
    pub fn button_pushed(&mut self) -> bool {
        if self.engine.is_disabled() {
            warn!("garage door is broken; ignoring button push");
            return false;
        }
        self.fire(GarageEvent::ButtonPushed)
    }

    pub fn is_broken(&self) -> bool {
        self.engine.is_disabled()
    }

    /// Current state, or `None` when broken.
    pub fn state(&self) -> Option<&GarageState> {
        self.engine.current_state()
    }

    pub fn history(&self) -> Option<&StateHistory<GarageState>> {
        self.engine.machine().map(StateMachine::history)
    }

    pub fn percent(&self) -> u8 {
        self.mechanism.percent()
    }

    pub fn is_moving(&self) -> bool {
        self.mechanism.is_moving()
    }

    /// One firing of the motion timer.
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
    pub fn advance(&mut self, elapsed: Duration) {
        let due = self.mechanism.due_ticks(elapsed);
        for _ in 0..due {
            if !self.mechanism.is_moving() {
                break;
            }
            self.tick();
        }
    }

    pub(crate) fn fire(&mut self, event: GarageEvent) -> bool {
        match self.engine.fire(&event, &mut self.mechanism) {
            Ok(_) => true,
            Err(err) => {
                self.break_door(event, err);
                false
            }
        }
    }

    fn break_door(&mut self, event: GarageEvent, err: MachineError) {
        error!(event = event.name(), error = %err, "garage door broken");
        self.mechanism.stop();
        self.engine.disable(err.to_string());
        self.mechanism.report(DOOR_BROKEN);
    }
}

impl Actuator for GarageDoor {
    type Command = GarageCommand;

    fn execute(&mut self, command: GarageCommand) -> bool {
        match command {
            GarageCommand::ButtonPushed => self.button_pushed(),
        }
    }

    fn tick(&mut self) {
        GarageDoor::tick(self);
    }

    fn is_moving(&self) -> bool {
        GarageDoor::is_moving(self)
    }

    fn tick_period(&self) -> Duration {
        self.mechanism.tick_period()
    }
}

fn moving_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Opening => DOOR_OPENING,
        Direction::Closing => DOOR_CLOSING,
    }
}

fn sensor_for(direction: Direction) -> GarageEvent {
    match direction {
        Direction::Opening => GarageEvent::SensorOpened,
        Direction::Closing => GarageEvent::SensorClosed,
    }
}

fn build_machine() -> Result<GarageMachine, BuildError> {
    use GarageState::*;

    StateMachineBuilder::new()
        .state(Closed, |door: &mut DoorMechanism, _: Payload<'_>| {
            door.report(DOOR_CLOSED);
            StateChange::NoChange
        })?
        .state(Closing, |door: &mut DoorMechanism, _: Payload<'_>| {
            door.report(DOOR_CLOSING);
            door.start(Direction::Closing);
            StateChange::NoChange
        })?
        .state(ClosingStopped, |door: &mut DoorMechanism, _: Payload<'_>| {
            door.stop();
            door.report(STOPPED);
            StateChange::NoChange
        })?
        .state(Opened, |door: &mut DoorMechanism, _: Payload<'_>| {
            door.report(DOOR_OPENED);
            StateChange::NoChange
        })?
        .state(Opening, |door: &mut DoorMechanism, _: Payload<'_>| {
            door.report(DOOR_OPENING);
            door.start(Direction::Opening);
            StateChange::NoChange
        })?
        .state(OpeningStopped, |door: &mut DoorMechanism, _: Payload<'_>| {
            door.stop();
            door.report(STOPPED);
            StateChange::NoChange
        })?
        .event(
            GarageEvent::ButtonPushed,
            vec![
                (Closed, Opening),
                (Opening, OpeningStopped),
                (OpeningStopped, Closing),
                (Opened, Closing),
                (Closing, ClosingStopped),
                (ClosingStopped, Opening),
            ],
        )?
        .event(GarageEvent::SensorClosed, vec![(Closing, Closed)])?
        .event(GarageEvent::SensorOpened, vec![(Opening, Opened)])?
        .build("GarageDoorStateMachine", Closed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doors::{StatusLog, StatusReport};

    fn garage() -> (GarageDoor, StatusLog) {
        let log = StatusLog::new();
        (GarageDoor::new(log.clone()), log)
    }

    #[test]
    fn push_from_closed_starts_opening() {
        let (mut door, log) = garage();

        assert!(door.button_pushed());
        assert_eq!(door.state(), Some(&GarageState::Opening));
        assert!(door.is_moving());
        assert_eq!(log.reports(), vec![StatusReport::new("Door Opening", 0)]);
    }

    #[test]
    fn stop_state_halts_motion_and_reports() {
        let (mut door, log) = garage();
        door.button_pushed();
        for _ in 0..10 {
            door.tick();
        }
        log.drain();

        assert!(door.button_pushed());
        assert_eq!(door.state(), Some(&GarageState::OpeningStopped));
        assert!(!door.is_moving());
        assert_eq!(log.reports(), vec![StatusReport::new("Stopped", 10)]);

        door.tick();
        assert_eq!(door.percent(), 10);
    }

    #[test]
    fn opened_door_closes_on_push() {
        let (mut door, log) = garage();
        door.button_pushed();
        door.advance(Duration::from_secs(3));
        assert_eq!(door.state(), Some(&GarageState::Opened));
        assert_eq!(log.last(), Some(StatusReport::new("Door Opened", 100)));

        assert!(door.button_pushed());
        assert_eq!(door.state(), Some(&GarageState::Closing));
        assert_eq!(log.last(), Some(StatusReport::new("Door Closing", 100)));
    }

    #[test]
    fn failed_transition_latches_broken() {
        let (mut door, log) = garage();
        log.drain();

        assert!(!door.fire(GarageEvent::SensorOpened));
        assert!(door.is_broken());
        assert_eq!(door.state(), None);
        assert_eq!(log.reports(), vec![StatusReport::new(DOOR_BROKEN, 0)]);

        assert!(!door.button_pushed());
        assert!(!door.button_pushed());
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn breaking_mid_motion_stops_the_door() {
        let (mut door, log) = garage();
        door.button_pushed();
        for _ in 0..5 {
            door.tick();
        }

        door.fire(GarageEvent::SensorClosed);
        let reports = log.len();
        for _ in 0..10 {
            door.tick();
        }

        assert!(!door.is_moving());
        assert_eq!(door.percent(), 5);
        assert_eq!(log.len(), reports);
    }

    #[test]
    fn machine_builds() {
        assert!(build_machine().is_ok());
    }
}
