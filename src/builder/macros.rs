//! Macros for ergonomic state machine construction.

/// Generate a `State` implementation for a simple enum.
///
/// # Example
///
/// ```
/// use actuate::state_enum;
/// use actuate::core::State;
///
/// state_enum! {
///     pub enum HatchState {
///         Sealed,
///         Venting,
///     }
/// }
///
/// assert_eq!(HatchState::Venting.name(), "Venting");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate an `Event` implementation for a simple enum.
///
/// # Example
///
/// ```
/// use actuate::event_enum;
/// use actuate::core::Event;
///
/// event_enum! {
///     pub enum HatchEvent {
///         Seal,
///         Vent,
///     }
/// }
///
/// assert_eq!(HatchEvent::Seal.name(), "Seal");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
