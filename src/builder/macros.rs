//! Macros for declaring phase enums.

/// Declare a fieldless enum together with its `State` implementation.
///
/// The enum derives `Clone`, `PartialEq`, `Debug` and serde's
/// `Serialize`/`Deserialize`; extra derives can be added as attributes.
/// The optional `final:` and `error:` lists mark terminal and error variants.
///
/// # Example
///
/// ```
/// use tallyho::state_enum;
/// use tallyho::core::State;
///
/// state_enum! {
///     #[derive(Copy)]
///     pub enum Keypad {
///         Idle,
///         Typing,
///         Jammed,
///     }
///     error: [Jammed]
/// }
///
/// assert_eq!(Keypad::Typing.name(), "Typing");
/// assert!(Keypad::Jammed.is_error());
/// assert!(!Keypad::Jammed.is_final());
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

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
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

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
