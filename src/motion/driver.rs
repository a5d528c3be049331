//! Real-time driver that runs an actuator on its own task.
//!
//! The driver owns the actuator outright. Commands reach it over a channel
//! and motion ticks come from an interval that only runs while the actuator
//! is moving, so every transition happens on one task and never overlaps
//! another.
//!
//! ```text
//! ActuatorHandle ──► Request::Execute ──► driver task ──► Actuator::execute
//!                                              │
//!                                    interval (tick period) ──► Actuator::tick
//! ```

use std::fmt::Debug;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace};

/// A controller that can be driven by [`ActuatorDriver`].
pub trait Actuator: Send + 'static {
    type Command: Debug + Send + 'static;

    /// Apply an external command; `false` means it was rejected.
    fn execute(&mut self, command: Self::Command) -> bool;

    /// One firing of the motion timer.
    fn tick(&mut self);

    /// Whether the motion timer is running.
    fn is_moving(&self) -> bool;

    /// Period of the motion timer.
    fn tick_period(&self) -> Duration;
}

/// Errors returned by [`ActuatorHandle`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DriverError {
    #[error("actuator driver has stopped")]
    Stopped,
}

enum Request<C> {
    Execute {
        command: C,
        reply: oneshot::Sender<bool>,
    },
}

/// Handle for sending commands to a driven actuator.
///
/// The driver stops once every handle is dropped.
pub struct ActuatorHandle<C> {
    tx: mpsc::UnboundedSender<Request<C>>,
}

impl<C> Clone for ActuatorHandle<C> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<C: Debug + Send + 'static> ActuatorHandle<C> {
    /// Send a command and wait for the actuator's answer.
    pub async fn execute(&self, command: C) -> Result<bool, DriverError> {
        let (reply, answer) = oneshot::channel();
        self.tx
            .send(Request::Execute { command, reply })
            .map_err(|_| DriverError::Stopped)?;
        answer.await.map_err(|_| DriverError::Stopped)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Spawns actuators onto tokio tasks.
pub struct ActuatorDriver;

impl ActuatorDriver {
    /// Move `actuator` onto a new task.
    ///
    /// The join handle yields the actuator back once all handles are dropped.
    pub fn spawn<A: Actuator>(actuator: A) -> (ActuatorHandle<A::Command>, JoinHandle<A>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run(actuator, rx));
        (ActuatorHandle { tx }, task)
    }
}

async fn run<A: Actuator>(
    mut actuator: A,
    mut rx: mpsc::UnboundedReceiver<Request<A::Command>>,
) -> A {
    let mut motor = tokio::time::interval(actuator.tick_period());
    motor.set_missed_tick_behavior(MissedTickBehavior::Delay);
    motor.reset();

    loop {
        tokio::select! {
            request = rx.recv() => {
                match request {
                    Some(Request::Execute { command, reply }) => {
                        let was_moving = actuator.is_moving();
                        trace!(?command, "executing actuator command");
                        let accepted = actuator.execute(command);
                        if !was_moving && actuator.is_moving() {
                            motor.reset();
                        }
                        let _ = reply.send(accepted);
                    }
                    None => {
                        debug!("actuator driver shutting down");
                        return actuator;
                    }
                }
            }

            _ = motor.tick(), if actuator.is_moving() => {
                actuator.tick();
            }
        }
    }
}
