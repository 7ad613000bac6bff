//! Box tree, dimension resolution and flex axis distribution.
//!
//! - [`dimensions`] turns declared sizes, bounds and aspect ratios into
//!   concrete pixel dimensions.
//! - [`axis`] distributes items along the main and cross axis of a flex
//!   line.
//! - [`tree`] owns boxes in an arena and resolves their unit contexts.
//! - [`flex`] ties the three together for a single flex line.

pub mod axis;
pub mod config;
pub mod dimensions;
pub mod flex;
pub mod tree;

pub use axis::{AxisItem, AxisPlacement, CrossAxis, MainAxis, cross_axis, main_axis};
pub use config::{FlexDirection, FlexParams};
pub use dimensions::{AxisResolution, Dimensions, SizingInputs, SizingProps, resolve_axis};
pub use tree::{Axis, BoxId, BoxTree, LayoutBox};
