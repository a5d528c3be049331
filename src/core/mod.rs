//! Core state machine types.
//!
//! This module contains the pure part of the engine:
//! - State identities via the `State` trait
//! - Event identities via the `Event` trait, with validated transition tables
//! - Bounded, immutable history tracking
//!
//! Nothing in this module performs side effects; entry actions live in
//! [`crate::effects`].

mod event;
mod history;
mod state;

pub use event::{Event, TableError, TransitionTable};
pub use history::{StateHistory, StateTransition, DEFAULT_HISTORY_LIMIT};
pub use state::State;
