//! Value parsing and primitive value types for boxkit.
//!
//! Raw inputs (numbers or CSS-like strings) are parsed into typed values by
//! [`parser::parse_value`]. The primitive types in [`size`], [`spacing`],
//! [`aspect`] and [`frame`] store the result with unit tracking and apply
//! their sign policy. [`lenient`] holds non-failing counterparts for batch
//! callers.

pub mod aspect;
pub mod frame;
pub mod keyword;
pub mod length;
pub mod lenient;
pub mod parser;
pub mod property;
pub mod size;
pub mod spacing;

pub use aspect::{AspectKeyword, AspectRatio};
pub use frame::{Edge, Frame};
pub use length::{LengthValue, Value};
pub use lenient::{parse_length, parse_length_in, parse_ratio};
pub use parser::{ParsedValue, ParserConfig, RawValue, parse_value};
pub use property::{Property, PropertyKind};
pub use size::{ConstraintKeyword, Size, SizeConstraint, SizeKeyword};
pub use spacing::{MarginKind, Spacing, SpacingKeyword};
