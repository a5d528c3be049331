//! The physical side of a door: motion plus status reporting.

use super::status::StatusSink;
use crate::motion::{Direction, MotionSimulator, MotionStart, TickOutcome};
use std::fmt;
use std::time::Duration;

/// Context handed to every door entry action.
///
/// Owns the motion simulator and the status sink; the state machine that
/// drives it is held alongside it by the controller.
pub struct DoorMechanism {
    motion: MotionSimulator,
    sink: Box<dyn StatusSink>,
}

impl DoorMechanism {
    pub fn new(tick_period: Duration, sink: Box<dyn StatusSink>) -> Self {
        Self {
            motion: MotionSimulator::new(tick_period),
            sink,
        }
    }

    /// Report `status` with the current percent.
    pub fn report(&mut self, status: &str) {
        let percent = self.motion.percent();
        self.sink.status_updated(status, percent);
    }

    pub fn start(&mut self, direction: Direction) -> MotionStart {
        self.motion.start(direction)
    }

    pub fn stop(&mut self) -> Option<Direction> {
        self.motion.stop()
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.motion.tick()
    }

    pub fn due_ticks(&mut self, elapsed: Duration) -> u32 {
        self.motion.due_ticks(elapsed)
    }

    pub fn percent(&self) -> u8 {
        self.motion.percent()
    }

    pub fn direction(&self) -> Option<Direction> {
        self.motion.direction()
    }

    pub fn is_moving(&self) -> bool {
        self.motion.is_moving()
    }

    pub fn tick_period(&self) -> Duration {
        self.motion.period()
    }
}

impl fmt::Debug for DoorMechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoorMechanism")
            .field("motion", &self.motion)
            .finish_non_exhaustive()
    }
}
