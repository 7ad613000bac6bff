//! Foundation types for boxkit.
//!
//! This crate holds the types shared by the value and layout crates:
//! rectangles, length units, the unit resolution context and the error
//! taxonomy.

pub mod error;
pub mod geometry;
pub mod units;

pub use error::{BoxkitError, Result};
pub use geometry::Rect;
pub use units::{LengthUnit, Unit, UnitContext};
