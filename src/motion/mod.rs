//! Timer-driven motion simulation.
//!
//! - **MotionSimulator**: Steps an opened percent toward 0 or 100, one unit per tick
//! - **Ticker**: Controllable clock that turns elapsed time into due ticks
//! - **ActuatorDriver**: Runs a controller on a tokio task with a real interval timer

mod driver;
mod simulator;
mod ticker;

pub use driver::{Actuator, ActuatorDriver, ActuatorHandle, DriverError};
pub use simulator::{
    Direction, MotionSimulator, MotionStart, TickOutcome, FULLY_CLOSED, FULLY_OPENED,
};
pub use ticker::Ticker;
