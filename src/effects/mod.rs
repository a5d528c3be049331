//! Side-effecting state machine operations.
//!
//! This module is the "imperative shell" around the pure core: firing
//! events, running entry actions, and tracking history.
//!
//! # Key Concepts
//!
//! - **Entry actions**: Run on the caller's context every time their state is entered
//! - **State Machine**: Looks up transitions and applies them synchronously
//! - **Engine**: A machine slot that latches into a disabled state

mod engine;
mod machine;
mod transition;

pub use engine::Engine;
pub use machine::{EventEntry, StateEntry, StateMachine};
pub use transition::{
    entry_action, EntryAction, MachineError, Payload, StateChange, MAX_CHAINED_TRANSITIONS,
};
