//! Arena-backed box tree.
//!
//! Boxes live in a single `Vec` and refer to each other by [`BoxId`]. A
//! parent owns the ordered list of its children; the child's parent link
//! is only used to walk upward (unit contexts, `inherit`).

use boxkit_types::{BoxkitError, Rect, Result, UnitContext};
use boxkit_values::{Frame, Spacing, SpacingKeyword};

use crate::axis::AxisPlacement;
use crate::dimensions::{Dimensions, SizingInputs, SizingProps};

/// Handle to a box in a [`BoxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxId(usize);

impl BoxId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Which rect axis an [`AxisPlacement`] applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A node in the box tree.
#[derive(Debug, Clone)]
pub struct LayoutBox {
    parent: Option<BoxId>,
    children: Vec<BoxId>,
    sizing: SizingProps,
    padding: Spacing,
    margin: Spacing,
    offset: Frame,
    dimensions: Dimensions,
    rect: Rect,
}

impl LayoutBox {
    fn new(parent: Option<BoxId>, rect: Rect) -> Self {
        Self {
            parent,
            children: Vec::new(),
            sizing: SizingProps::default(),
            padding: Spacing::padding(0.0),
            margin: Spacing::margin(0.0),
            offset: Frame::default(),
            dimensions: Dimensions::default(),
            rect,
        }
    }

    pub fn parent(&self) -> Option<BoxId> {
        self.parent
    }

    pub fn children(&self) -> &[BoxId] {
        &self.children
    }

    pub fn sizing(&self) -> &SizingProps {
        &self.sizing
    }

    /// Mutable sizing properties. Call [`BoxTree::compute`] afterwards.
    pub fn sizing_mut(&mut self) -> &mut SizingProps {
        &mut self.sizing
    }

    pub fn padding(&self) -> &Spacing {
        &self.padding
    }

    pub fn padding_mut(&mut self) -> &mut Spacing {
        &mut self.padding
    }

    pub fn margin(&self) -> &Spacing {
        &self.margin
    }

    pub fn margin_mut(&mut self) -> &mut Spacing {
        &mut self.margin
    }

    /// Relative position offset applied after flex placement.
    pub fn offset(&self) -> &Frame {
        &self.offset
    }

    pub fn offset_mut(&mut self) -> &mut Frame {
        &mut self.offset
    }

    /// Dimensions as of the last compute.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

/// Selects the padding or the margin of a box.
type SpacingField = fn(&LayoutBox) -> &Spacing;

/// An arena of [`LayoutBox`]es.
#[derive(Debug, Clone, Default)]
pub struct BoxTree {
    nodes: Vec<Option<LayoutBox>>,
    viewport: UnitContext,
}

impl BoxTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tree whose root boxes resolve units against a `width x height`
    /// viewport.
    pub fn with_viewport(width: f64, height: f64) -> Self {
        Self {
            nodes: Vec::new(),
            viewport: UnitContext::uniform(width, height),
        }
    }

    pub fn viewport(&self) -> &UnitContext {
        &self.viewport
    }

    /// Add a box under `parent` (or as a root) with an initial rect.
    pub fn insert(&mut self, parent: Option<BoxId>, rect: Rect) -> Result<BoxId> {
        let id = BoxId(self.nodes.len());
        if let Some(parent) = parent {
            self.node_mut(parent)?.children.push(id);
        }
        self.nodes.push(Some(LayoutBox::new(parent, rect)));
        Ok(id)
    }

    /// Remove a box and its whole subtree.
    ///
    /// Ids of removed boxes are never reused.
    pub fn remove(&mut self, id: BoxId) -> Result<()> {
        let parent = self.node(id)?.parent;
        if let Some(parent) = parent {
            self.node_mut(parent)?.children.retain(|child| *child != id);
        }
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(current.0).and_then(Option::take) {
                stack.extend(node.children);
            }
        }
        Ok(())
    }

    pub fn get(&self, id: BoxId) -> Option<&LayoutBox> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: BoxId) -> Option<&mut LayoutBox> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    pub(crate) fn node(&self, id: BoxId) -> Result<&LayoutBox> {
        self.get(id).ok_or(BoxkitError::UnknownBox(id.0))
    }

    pub(crate) fn node_mut(&mut self, id: BoxId) -> Result<&mut LayoutBox> {
        self.get_mut(id).ok_or(BoxkitError::UnknownBox(id.0))
    }

    /// Number of live boxes.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Boxes without a parent, in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = BoxId> + '_ {
        self.nodes.iter().enumerate().filter_map(|(i, node)| {
            node.as_ref()
                .filter(|n| n.parent.is_none())
                .map(|_| BoxId(i))
        })
    }

    /// Unit context for resolving `id`'s own properties.
    ///
    /// The container is the parent's content box (rect minus padding), or
    /// the viewport for roots.
    pub fn unit_context(&self, id: BoxId) -> Result<UnitContext> {
        match self.node(id)?.parent {
            Some(parent) => self.content_context(parent),
            None => Ok(self.viewport),
        }
    }

    /// Unit context whose container is `id`'s content box.
    pub(crate) fn content_context(&self, id: BoxId) -> Result<UnitContext> {
        let padding = self.padding_px(id)?;
        self.inset_context(id, padding)
    }

    /// Unit context whose container is `id`'s rect inset by `padding`.
    pub(crate) fn inset_context(&self, id: BoxId, padding: f64) -> Result<UnitContext> {
        let content = self.node(id)?.rect.inset(padding, padding, padding, padding);
        Ok(self.viewport.with_container(content.width, content.height))
    }

    /// Padding of `id` in pixels.
    ///
    /// Percentages resolve against the container width. `inherit` takes the
    /// parent's resolved padding, or zero at a root.
    pub fn padding_px(&self, id: BoxId) -> Result<f64> {
        let ctx = self.unit_context(id)?;
        self.spacing_in(id, &ctx, LayoutBox::padding)
    }

    /// Margin of `id` in pixels, resolved like [`padding_px`](Self::padding_px).
    pub fn margin_px(&self, id: BoxId) -> Result<f64> {
        let ctx = self.unit_context(id)?;
        self.spacing_in(id, &ctx, LayoutBox::margin)
    }

    /// Margin of `id` with percentages resolved in `ctx`.
    pub(crate) fn margin_in(&self, id: BoxId, ctx: &UnitContext) -> Result<f64> {
        self.spacing_in(id, ctx, LayoutBox::margin)
    }

    fn spacing_in(&self, id: BoxId, ctx: &UnitContext, field: SpacingField) -> Result<f64> {
        let node = self.node(id)?;
        let spacing = field(node);
        match spacing.as_keyword() {
            Some(SpacingKeyword::Inherit) => match node.parent {
                Some(parent) => {
                    let outer = self.unit_context(parent)?;
                    self.spacing_in(parent, &outer, field)
                },
                None => Ok(0.0),
            },
            None => Ok(spacing.to_pixels(ctx.container_width, ctx).unwrap_or(0.0)),
        }
    }

    /// Recompute `id`'s dimensions from its current properties.
    ///
    /// `inherit` reads the parent's dimensions as last computed.
    pub fn compute(&mut self, id: BoxId) -> Result<&Dimensions> {
        let ctx = self.unit_context(id)?;
        self.compute_in(id, &ctx)
    }

    /// Recompute `id`'s dimensions with units resolved in `ctx`.
    pub(crate) fn compute_in(&mut self, id: BoxId, ctx: &UnitContext) -> Result<&Dimensions> {
        let node = self.node(id)?;
        let parent = node.parent.and_then(|p| self.get(p)).map(|p| &p.dimensions);
        let inputs = SizingInputs::resolve(&node.sizing, ctx, parent);
        let node = self.node_mut(id)?;
        node.dimensions.compute(&inputs);
        Ok(&node.dimensions)
    }

    /// Recompute `id` and all of its descendants, parents first.
    pub fn compute_subtree(&mut self, id: BoxId) -> Result<()> {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            self.compute(current)?;
            let children = self.node(current)?.children.clone();
            stack.extend(children.into_iter().rev());
        }
        Ok(())
    }

    /// Replace a box's rect.
    pub fn set_rect(&mut self, id: BoxId, rect: Rect) -> Result<()> {
        self.node_mut(id)?.rect = rect;
        Ok(())
    }

    /// Write one axis of a placement into a box's rect.
    ///
    /// `origin` is added to the placement offset.
    pub fn place(
        &mut self,
        id: BoxId,
        axis: Axis,
        origin: f64,
        placement: AxisPlacement,
    ) -> Result<()> {
        let rect = &mut self.node_mut(id)?.rect;
        match axis {
            Axis::Horizontal => {
                rect.x = origin + placement.offset;
                rect.width = placement.size;
            },
            Axis::Vertical => {
                rect.y = origin + placement.offset;
                rect.height = placement.size;
            },
        }
        Ok(())
    }
}
