//! Percent-stepping motion simulator.

use super::ticker::Ticker;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::trace;

/// Fully opened, in percent.
pub const FULLY_OPENED: u8 = 100;

/// Fully closed, in percent.
pub const FULLY_CLOSED: u8 = 0;

/// Which way the actuator is travelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Opening,
    Closing,
}

impl Direction {
    /// Percent at which motion in this direction completes.
    pub fn boundary(self) -> u8 {
        match self {
            Self::Opening => FULLY_OPENED,
            Self::Closing => FULLY_CLOSED,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Opening => Self::Closing,
            Self::Closing => Self::Opening,
        }
    }
}

/// What `start` did with the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionStart {
    /// No timer was running; one is now
    Started,
    /// A timer was already running in that direction
    AlreadyRunning,
    /// The running timer now travels the other way
    Reversed,
}

/// Result of one timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No timer is running
    Idle,
    /// Percent moved one step and motion continues
    Moved { direction: Direction, percent: u8 },
    /// The boundary was reached and the timer stopped. `moved` tells
    /// whether this tick also stepped the percent.
    Arrived {
        direction: Direction,
        percent: u8,
        moved: bool,
    },
}

/// Simulates continuous travel as one-percent steps on a periodic timer.
///
/// At most one timer is active at a time. The opened percent only ever
/// changes inside [`MotionSimulator::tick`].
#[derive(Debug, Clone)]
pub struct MotionSimulator {
    percent: u8,
    active: Option<Direction>,
    ticker: Ticker,
}

impl MotionSimulator {
    /// Create a stopped simulator at fully closed.
    pub fn new(period: Duration) -> Self {
        Self {
            percent: FULLY_CLOSED,
            active: None,
            ticker: Ticker::new(period),
        }
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Direction of the running timer, if any.
    pub fn direction(&self) -> Option<Direction> {
        self.active
    }

    pub fn is_moving(&self) -> bool {
        self.active.is_some()
    }

    pub fn period(&self) -> Duration {
        self.ticker.period()
    }

    /// Start travelling in `direction` from the current percent.
    ///
    /// Never creates a second timer: a start in the running direction does
    /// nothing, and a start in the opposite direction turns the running
    /// timer around.
    pub fn start(&mut self, direction: Direction) -> MotionStart {
        match self.active {
            None => {
                self.ticker.reset();
                self.active = Some(direction);
                trace!(?direction, percent = self.percent, "motion started");
                MotionStart::Started
            }
            Some(running) if running == direction => MotionStart::AlreadyRunning,
            Some(_) => {
                self.active = Some(direction);
                trace!(?direction, percent = self.percent, "motion reversed");
                MotionStart::Reversed
            }
        }
    }

    /// Halt the timer, leaving the percent where it is.
    ///
    /// Returns the direction that was running.
    pub fn stop(&mut self) -> Option<Direction> {
        self.ticker.reset();
        self.active.take()
    }

    /// Advance one tick.
    pub fn tick(&mut self) -> TickOutcome {
        let Some(direction) = self.active else {
            return TickOutcome::Idle;
        };

        let moved = match direction {
            Direction::Opening if self.percent < FULLY_OPENED => {
                self.percent += 1;
                true
            }
            Direction::Closing if self.percent > FULLY_CLOSED => {
                self.percent -= 1;
                true
            }
            _ => false,
        };

        if self.percent == direction.boundary() {
            self.stop();
            trace!(?direction, percent = self.percent, "motion complete");
            TickOutcome::Arrived {
                direction,
                percent: self.percent,
                moved,
            }
        } else {
            trace!(?direction, percent = self.percent, "motion step");
            TickOutcome::Moved {
                direction,
                percent: self.percent,
            }
        }
    }

    /// Number of ticks that fell due in `elapsed`; zero when stopped.
    pub fn due_ticks(&mut self, elapsed: Duration) -> u32 {
        if self.is_moving() {
            self.ticker.advance(elapsed)
        } else {
            0
        }
    }
}
