//! Keyword sets for the primitive value types.

use std::fmt::Debug;

use crate::property::PropertyKind;

/// A closed set of keywords a value type accepts.
pub trait Keyword: PropertyKind + Copy + Eq + Debug + 'static {
    fn as_str(self) -> &'static str;
    fn from_keyword(text: &str) -> Option<Self>;
}

/// Declare a keyword enum together with its text forms.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Text forms accepted by the parser.
            pub const NAMES: &'static [&'static str] = &[$($text),+];
        }

        impl $crate::keyword::Keyword for $name {
            fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            fn from_keyword(text: &str) -> Option<Self> {
                match text {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

pub(crate) use keyword_enum;
