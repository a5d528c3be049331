//! Converts elapsed time into whole timer ticks.

use std::time::Duration;

/// Controllable clock for a periodic timer.
///
/// Instead of sleeping, callers report how much time has passed and get back
/// the number of ticks that fell due. The fraction of a period left over is
/// carried into the next call.
///
/// # Example
///
/// ```rust
/// use actuate::motion::Ticker;
/// use std::time::Duration;
///
/// let mut ticker = Ticker::new(Duration::from_millis(30));
/// assert_eq!(ticker.advance(Duration::from_millis(70)), 2);
/// assert_eq!(ticker.advance(Duration::from_millis(20)), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
    period: Duration,
    carry: Duration,
}

impl Ticker {
    /// Create a ticker. A zero period is raised to one nanosecond.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_nanos(1)),
            carry: Duration::ZERO,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time accumulated towards the next tick.
    pub fn carry(&self) -> Duration {
        self.carry
    }

    /// Account for `elapsed` time and return how many ticks fell due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let total = self.carry.as_nanos() + elapsed.as_nanos();
        let period = self.period.as_nanos();
        // period is at least 1ns, and the remainder is below it
        self.carry = Duration::from_nanos(u64::try_from(total % period).unwrap_or(u64::MAX));
        u32::try_from(total / period).unwrap_or(u32::MAX)
    }

    /// Drop any partial period, as when a timer is restarted.
    pub fn reset(&mut self) {
        self.carry = Duration::ZERO;
    }
}
