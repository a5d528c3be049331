//! Door controllers built on the state machine engine.
//!
//! Each controller owns a state machine and a [`DoorMechanism`]. Commands
//! fire events; entry actions start or stop motion and report status;
//! motion completion fires a sensor event back into the machine.

mod door;
mod garage;
mod mechanism;
mod status;

pub use door::{Door, DoorCommand, DoorEvent, DoorState};
pub use garage::{GarageCommand, GarageDoor, GarageEvent, GarageState, DOOR_BROKEN};
pub use mechanism::DoorMechanism;
pub use status::{StatusLog, StatusReport, StatusSink};
