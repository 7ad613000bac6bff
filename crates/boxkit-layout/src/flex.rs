//! Single-line flex layout over the box tree.
//!
//! Packages each child's computed size into axis items, runs the main and
//! cross distributions and writes the placements back into the children's
//! rects. Wrapping into multiple lines is the caller's business.

use boxkit_types::Result;

use crate::axis::{AxisItem, AxisPlacement, cross_axis, main_axis};
use crate::config::{FlexDirection, FlexParams};
use crate::tree::{Axis, BoxId, BoxTree};

/// Tolerance for overflow detection.
const EPSILON: f64 = 1e-6;

fn axis_item(size: Option<f64>, margin: f64) -> AxisItem {
    size.map_or(AxisItem::Auto, |s| AxisItem::Fixed(s + 2.0 * margin))
}

/// Shrink a margin-box placement to the border box.
fn without_margin(placement: AxisPlacement, margin: f64) -> AxisPlacement {
    AxisPlacement {
        offset: placement.offset + margin,
        size: (placement.size - 2.0 * margin).max(0.0),
    }
}

impl BoxTree {
    /// Lay out the children of `container` as one flex line.
    ///
    /// Each child's dimensions are recomputed against the container's
    /// content box first. The box is inset by `params.padding` when set and
    /// by the container's own padding otherwise. Children with a computed
    /// main size are fixed items (margin included); the rest are auto.
    /// Resulting rects are in the same coordinate space as the container's
    /// rect, shifted by each child's offset frame.
    pub fn layout_flex_line(&mut self, container: BoxId, params: &FlexParams) -> Result<()> {
        let padding = match params.padding {
            Some(padding) => padding,
            None => self.padding_px(container)?,
        };
        let ctx = self.inset_context(container, padding)?;
        let node = self.node(container)?;
        let rect = node.rect();
        let children = node.children().to_vec();

        let (main_kind, cross_kind) = match params.direction {
            FlexDirection::Row => (Axis::Horizontal, Axis::Vertical),
            FlexDirection::Column => (Axis::Vertical, Axis::Horizontal),
        };
        let (main_size, cross_size, main_origin, cross_origin) = match params.direction {
            FlexDirection::Row => (rect.width, rect.height, rect.x, rect.y),
            FlexDirection::Column => (rect.height, rect.width, rect.y, rect.x),
        };

        let mut main_items = Vec::with_capacity(children.len());
        let mut cross_items = Vec::with_capacity(children.len());
        let mut margins = Vec::with_capacity(children.len());
        for &child in &children {
            let dims = *self.compute_in(child, &ctx)?;
            let margin = self.margin_in(child, &ctx)?;
            let (main, cross) = match params.direction {
                FlexDirection::Row => (dims.width(), dims.height()),
                FlexDirection::Column => (dims.height(), dims.width()),
            };
            main_items.push(axis_item(main, margin));
            cross_items.push(axis_item(cross, margin));
            margins.push(margin);
        }

        let main = main_axis(&params.main_axis(main_size, padding), &main_items);
        let cross = cross_axis(&params.cross_axis(cross_size, padding), &cross_items);

        if let (Some(first), Some(last)) = (main.first(), main.last()) {
            let start = first.offset;
            let end = last.offset + last.size;
            if start < padding - EPSILON || end > main_size - padding + EPSILON {
                log::warn!(
                    "flex line #{} overflows: items span {start:.1}..{end:.1} in {main_size:.1}",
                    container.index()
                );
            }
        }
        log::debug!(
            "flex line #{}: {} items, {:?}, main {main_size:.1}, cross {cross_size:.1}",
            container.index(),
            children.len(),
            params.direction
        );

        for (((&child, on_main), on_cross), margin) in
            children.iter().zip(&main).zip(&cross).zip(&margins)
        {
            self.place(child, main_kind, main_origin, without_margin(*on_main, *margin))?;
            self.place(child, cross_kind, cross_origin, without_margin(*on_cross, *margin))?;
            let node = self.node(child)?;
            let offset = *node.offset();
            let mut placed = node.rect();
            placed.x += offset.left();
            placed.y += offset.top();
            self.set_rect(child, placed)?;
        }
        Ok(())
    }
}
