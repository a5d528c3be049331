//! State identity trait for state machine states.
//!
//! A state is only an identity here. What happens when the machine enters
//! it is an entry action registered alongside it, see
//! [`crate::effects::EntryAction`].

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: States are copied into the transition history
/// - `PartialEq`: Transition lookup compares the current state to table entries
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: History is serializable
///
/// # Example
///
/// ```rust
/// use actuate::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum LockState {
///     Locked,
///     Unlocked,
/// }
///
/// impl State for LockState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Locked => "Locked",
///             Self::Unlocked => "Unlocked",
///         }
///     }
/// }
///
/// assert_eq!(LockState::Locked.name(), "Locked");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    ///
    /// Names must be unique within one state machine; the builder rejects
    /// a second state reporting the same name.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Closed,
        Opening,
        Opened,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Closed => "Closed",
                Self::Opening => "Opening",
                Self::Opened => "Opened",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Closed.name(), "Closed");
        assert_eq!(TestState::Opening.name(), "Opening");
        assert_eq!(TestState::Opened.name(), "Opened");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Opening;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_comparable() {
        assert_eq!(TestState::Closed, TestState::Closed.clone());
        assert_ne!(TestState::Closed, TestState::Opened);
    }
}
