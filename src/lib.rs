//! Actuate: a finite state machine engine driving simulated door actuators
//!
//! States are named phases with entry actions; events carry transition
//! tables. Firing an event looks up the transition from the current state,
//! moves there and runs the new state's entry action, all before returning.
//! Door controllers pair a machine with a timer-driven motion simulator
//! whose completion feeds sensor events back into the machine.
//!
//! # Core Concepts
//!
//! - **State / Event**: Named identities, declared with `state_enum!` / `event_enum!`
//! - **Builder**: Validates names and transition tables before a machine exists
//! - **Engine**: A machine slot that can latch permanently disabled
//! - **Motion**: One-percent steps on a periodic timer, with a controllable clock
//!
//! # Example
//!
//! ```rust
//! use actuate::{GarageDoor, GarageState, StatusLog};
//! use std::time::Duration;
//!
//! let log = StatusLog::new();
//! let mut door = GarageDoor::new(log.clone());
//!
//! assert!(door.button_pushed());
//! door.advance(Duration::from_millis(30 * 40));
//! assert_eq!(door.percent(), 40);
//!
//! assert!(door.button_pushed());
//! assert_eq!(door.state(), Some(&GarageState::OpeningStopped));
//! assert_eq!(log.last().unwrap().status, "Stopped");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod doors;
pub mod effects;
pub mod motion;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use config::{ConfigError, DoorConfig};
pub use core::{Event, State, StateHistory, StateTransition, TransitionTable};
pub use doors::{
    Door, DoorCommand, DoorEvent, DoorState, GarageCommand, GarageDoor, GarageEvent, GarageState,
    StatusLog, StatusReport, StatusSink,
};
pub use effects::{Engine, MachineError, StateChange, StateMachine};
pub use motion::{ActuatorDriver, Direction, MotionSimulator};
