//! Builder API for validated state machine construction.
//!
//! This module provides a fluent builder and macros for declaring states,
//! events and transition tables, rejecting bad configurations before a
//! machine exists.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::{BuildError, ConfigViolation, NameKind};
pub use machine::StateMachineBuilder;
